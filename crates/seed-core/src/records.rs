//! Record shapes for the seed datasets.
//!
//! Field names serialize in camelCase so the stored documents match the
//! shapes the demo application reads. Records are opaque values: no identity
//! beyond the id the store assigns on insert, and no validation beyond what
//! the storage layer enforces.

use serde::{Deserialize, Serialize};

/// A geographic coordinate stored as a latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Charger hardware class offered at a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChargerType {
    #[serde(rename = "AC Charge")]
    AcCharge,
    #[serde(rename = "DC Fast")]
    DcFast,
}

/// A charging-station listing.
///
/// `distance`, `estimated_time` and `energy_required` are precomputed by the
/// upstream routing tooling, not derived here. `reachable` reflects an
/// external range constraint this tool does not evaluate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingStation {
    pub name: String,
    pub location: GeoPoint,
    pub address: String,
    pub available_chargers: u32,
    pub total_chargers: u32,
    pub charger_type: ChargerType,
    pub price_per_kwh: f64,
    pub operator: String,
    pub amenities: Vec<String>,
    /// Distance from the reference position, in km.
    pub distance: f64,
    /// Estimated travel time, in minutes.
    pub estimated_time: u32,
    pub reachable: bool,
    /// Energy needed to reach the station, in kWh.
    pub energy_required: f64,
}

/// AC and DC charging power ratings, in kW.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChargingSpeed {
    pub ac: f64,
    pub dc: f64,
}

/// An electric-vehicle specification record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub model: String,
    pub manufacturer: String,
    /// Battery capacity in kWh.
    pub battery_capacity: f64,
    /// WLTP range in km.
    pub range: f64,
    /// Consumption in kWh/100km.
    pub efficiency: f64,
    pub charging_speed: ChargingSpeed,
    /// 0-100 km/h time in seconds.
    pub acceleration: f64,
    /// Top speed in km/h.
    pub top_speed: f64,
    pub image_url: String,
    pub year: i32,
}

/// A record that can be seeded, with the log lines shown per insert.
pub trait SeedRecord: Serialize {
    /// Headline for the per-record confirmation line.
    fn label(&self) -> String;

    /// Salient fields logged under the confirmation line.
    fn detail_lines(&self) -> Vec<String>;
}

impl SeedRecord for ChargingStation {
    fn label(&self) -> String {
        self.name.clone()
    }

    fn detail_lines(&self) -> Vec<String> {
        vec![
            format!(
                "Location: {}, {}",
                self.location.latitude, self.location.longitude
            ),
            format!("Distance: {} km", self.distance),
        ]
    }
}

impl SeedRecord for Vehicle {
    fn label(&self) -> String {
        format!("{} {}", self.manufacturer, self.model)
    }

    fn detail_lines(&self) -> Vec<String> {
        vec![
            format!("Battery: {} kWh", self.battery_capacity),
            format!("Range: {} km", self.range),
            format!("Efficiency: {} kWh/100km", self.efficiency),
        ]
    }
}
