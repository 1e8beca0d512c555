//! Core types for the ev-seed tool.
//!
//! This crate provides the foundational pieces shared by every seeding job:
//!
//! - [`ChargingStation`] / [`Vehicle`] - the record shapes being seeded
//! - [`dataset`] - loading literal seed datasets from JSON files
//! - [`DocumentStore`] - capability trait over the target document store
//! - [`Seeder`] - the clear-then-insert reseed engine
//! - [`MemoryStore`] - in-memory store used by tests
//!
//! # Architecture
//!
//! ```text
//! seed-core (this crate)
//!    │
//!    └─── seed-mongodb   (implements DocumentStore for MongoDB)
//! ```
//!
//! # Example
//!
//! ```ignore
//! let stations: Vec<ChargingStation> = dataset::load_records(&path)?;
//! let report = Seeder::new(&store)
//!     .reseed("charging_stations", &stations, true)
//!     .await?;
//! println!("inserted {}", report.inserted);
//! ```

pub mod dataset;
pub mod memory;
pub mod records;
pub mod seeder;
pub mod store;

// Re-exports for convenience
pub use dataset::{load_records, DatasetError};
pub use memory::MemoryStore;
pub use records::{ChargerType, ChargingSpeed, ChargingStation, GeoPoint, SeedRecord, Vehicle};
pub use seeder::{ReseedReport, Seeder};
pub use store::{DocumentId, DocumentStore};
