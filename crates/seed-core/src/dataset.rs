//! Loading literal seed datasets from JSON files.
//!
//! Seed data is configuration, not code: each dataset is a JSON array of
//! records kept next to the binary (see the `datasets/` directory), so the
//! same seeding engine runs any dataset of a known shape.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Error type for dataset operations.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Error reading the dataset file
    #[error("Failed to read dataset file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error parsing the JSON array
    #[error("Failed to parse dataset file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load a JSON array of records from a file.
///
/// The element type is whatever the caller asks for; the station and vehicle
/// jobs use the same loader with different record types.
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DatasetError> {
    let contents = fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| DatasetError::Json {
        path: path.display().to_string(),
        source,
    })
}
