//! Command-line interface for ev-seed
//!
//! Seeds the demo MongoDB database with the literal datasets under
//! `datasets/`. Each invocation runs one fixed seeding job: load a JSON
//! dataset, optionally clear the target collection, then insert the records
//! one by one in dataset order.
//!
//! # Usage Examples
//!
//! ```bash
//! # City charging stations (clears the collection first)
//! ev-seed stations --dataset datasets/city-stations.json
//!
//! # Highway charging stations, appended to whatever is already there
//! ev-seed stations --dataset datasets/highway-stations.json --keep-existing
//!
//! # Vehicle specification records
//! ev-seed vehicles --dataset datasets/vehicles.json
//! ```
//!
//! The connection string and database name come from
//! `MONGODB_CONNECTION_STRING` / `MONGODB_DATABASE` or the matching flags.
//! The process exits 0 on full success and 1 on any failure.

use anyhow::Context;
use clap::{Parser, Subcommand};
use seed_core::{dataset, ChargingStation, Seeder, Vehicle};
use seed_mongodb::{MongoOpts, MongoStore};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "ev-seed")]
#[command(about = "Seed EV charging-station and vehicle demo data into MongoDB")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed a charging-station dataset
    Stations {
        /// MongoDB connection options
        #[command(flatten)]
        mongo: MongoOpts,

        /// Path to a JSON dataset of charging stations
        #[arg(long, short = 'd')]
        dataset: PathBuf,

        /// Target collection name
        #[arg(long, default_value = "charging_stations")]
        collection: String,

        /// Keep existing documents instead of clearing the collection first
        #[arg(long)]
        keep_existing: bool,
    },

    /// Seed a vehicle-specification dataset
    Vehicles {
        /// MongoDB connection options
        #[command(flatten)]
        mongo: MongoOpts,

        /// Path to a JSON dataset of vehicles
        #[arg(long, short = 'd')]
        dataset: PathBuf,

        /// Target collection name
        #[arg(long, default_value = "vehicles")]
        collection: String,

        /// Keep existing documents instead of clearing the collection first
        #[arg(long)]
        keep_existing: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Progress lines are the point of this tool, so default to info when
    // RUST_LOG is unset.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Stations {
            mongo,
            dataset: path,
            collection,
            keep_existing,
        } => {
            let stations: Vec<ChargingStation> = dataset::load_records(&path)
                .with_context(|| format!("Failed to load station dataset from {path:?}"))?;
            let store = MongoStore::connect(&mongo).await?;
            let report = Seeder::new(&store)
                .reseed(&collection, &stations, !keep_existing)
                .await?;
            info!(
                "Done: {} stations added ({} existing removed)",
                report.inserted, report.deleted
            );
        }
        Commands::Vehicles {
            mongo,
            dataset: path,
            collection,
            keep_existing,
        } => {
            let vehicles: Vec<Vehicle> = dataset::load_records(&path)
                .with_context(|| format!("Failed to load vehicle dataset from {path:?}"))?;
            let store = MongoStore::connect(&mongo).await?;
            let report = Seeder::new(&store)
                .reseed(&collection, &vehicles, !keep_existing)
                .await?;
            info!(
                "Done: {} vehicles added ({} existing removed)",
                report.inserted, report.deleted
            );
        }
    }

    Ok(())
}
