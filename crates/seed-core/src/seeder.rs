//! The clear-then-insert reseed engine.
//!
//! A reseed run has two phases. The optional clear phase lists every
//! document in the target collection and issues all deletions concurrently,
//! completing only once each has resolved (first failure aborts the phase).
//! The insert phase then writes the records one at a time in input order, so
//! confirmation log lines come out in dataset order and at most one insert
//! is outstanding. There is no retry and no rollback: the first unrecovered
//! error ends the run.

use crate::records::SeedRecord;
use crate::store::DocumentStore;
use anyhow::{Context, Result};
use futures::future;
use tracing::info;

/// Counts from a completed reseed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReseedReport {
    /// Documents deleted by the clear phase (0 when skipped).
    pub deleted: u64,
    /// Records inserted.
    pub inserted: u64,
}

/// Seeds a document collection from a literal record set.
pub struct Seeder<'a, S: DocumentStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: DocumentStore + ?Sized> Seeder<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Replace (or extend) the contents of `collection` with `records`.
    ///
    /// With `clear_first`, the collection ends up containing exactly the
    /// given records, modulo store-assigned ids. Without it, the records are
    /// appended to whatever is already there.
    pub async fn reseed<R: SeedRecord>(
        &self,
        collection: &str,
        records: &[R],
        clear_first: bool,
    ) -> Result<ReseedReport> {
        let mut report = ReseedReport::default();

        if clear_first {
            report.deleted = self.clear(collection).await?;
        }

        info!(
            "Seeding {} records into '{}'...",
            records.len(),
            collection
        );
        info!("===========================================");

        for record in records {
            let value = serde_json::to_value(record)
                .with_context(|| format!("Failed to encode record '{}'", record.label()))?;
            let id = self
                .store
                .insert(collection, &value)
                .await
                .with_context(|| {
                    format!(
                        "Failed to insert '{}' into '{}'",
                        record.label(),
                        collection
                    )
                })?;

            info!("Added: {}", record.label());
            info!("  ID: {id}");
            for line in record.detail_lines() {
                info!("  {line}");
            }
            info!("-------------------------------------------");
            report.inserted += 1;
        }

        info!("===========================================");
        info!(
            "Seeding completed: {} records added to '{}'",
            report.inserted, collection
        );
        Ok(report)
    }

    /// Delete every document in the collection, returning the count removed.
    async fn clear(&self, collection: &str) -> Result<u64> {
        info!("Clearing existing documents from '{collection}'...");
        let ids = self
            .store
            .list_ids(collection)
            .await
            .with_context(|| format!("Failed to list documents in '{collection}'"))?;

        // All deletes in flight at once; no ordering among them.
        future::try_join_all(ids.iter().map(|id| self.store.delete(collection, id)))
            .await
            .with_context(|| format!("Failed to clear '{collection}'"))?;

        info!("Deleted {} existing documents", ids.len());
        info!("===========================================");
        Ok(ids.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::records::{ChargerType, ChargingStation, GeoPoint};

    fn station(name: &str) -> ChargingStation {
        ChargingStation {
            name: name.to_string(),
            location: GeoPoint {
                latitude: 3.1390,
                longitude: 101.6869,
            },
            address: "Jalan Test".to_string(),
            available_chargers: 2,
            total_chargers: 4,
            charger_type: ChargerType::DcFast,
            price_per_kwh: 1.20,
            operator: "ChargEV".to_string(),
            amenities: vec!["Restroom".to_string()],
            distance: 24.5,
            estimated_time: 18,
            reachable: true,
            energy_required: 15.0,
        }
    }

    fn stations(n: usize) -> Vec<ChargingStation> {
        (0..n).map(|i| station(&format!("Station {i}"))).collect()
    }

    #[tokio::test]
    async fn test_clear_first_leaves_exactly_the_dataset() {
        let store = MemoryStore::new();
        let seeder = Seeder::new(&store);

        let report = seeder
            .reseed("charging_stations", &stations(4), true)
            .await
            .unwrap();
        assert_eq!(report.deleted, 0);
        assert_eq!(report.inserted, 4);
        assert_eq!(store.count("charging_stations"), 4);
    }

    #[tokio::test]
    async fn test_reseed_twice_is_idempotent() {
        let store = MemoryStore::new();
        let seeder = Seeder::new(&store);
        let records = stations(4);

        seeder
            .reseed("charging_stations", &records, true)
            .await
            .unwrap();
        let report = seeder
            .reseed("charging_stations", &records, true)
            .await
            .unwrap();

        assert_eq!(report.deleted, 4);
        assert_eq!(report.inserted, 4);
        assert_eq!(store.count("charging_stations"), 4);

        // Same contents modulo the generated ids.
        let names: Vec<String> = store
            .documents("charging_stations")
            .iter()
            .map(|(_, doc)| doc["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["Station 0", "Station 1", "Station 2", "Station 3"]);
    }

    #[tokio::test]
    async fn test_keep_existing_appends() {
        let store = MemoryStore::new();
        let seeder = Seeder::new(&store);

        seeder
            .reseed("charging_stations", &stations(4), true)
            .await
            .unwrap();
        let report = seeder
            .reseed("charging_stations", &stations(3), false)
            .await
            .unwrap();

        assert_eq!(report.deleted, 0);
        assert_eq!(report.inserted, 3);
        assert_eq!(store.count("charging_stations"), 7);
    }

    #[tokio::test]
    async fn test_inserts_preserve_input_order() {
        let store = MemoryStore::new();
        let seeder = Seeder::new(&store);
        let records = stations(5);

        seeder
            .reseed("charging_stations", &records, true)
            .await
            .unwrap();

        let stored: Vec<String> = store
            .documents("charging_stations")
            .iter()
            .map(|(_, doc)| doc["name"].as_str().unwrap().to_string())
            .collect();
        let expected: Vec<String> = records.iter().map(|s| s.name.clone()).collect();
        assert_eq!(stored, expected);
    }

    #[tokio::test]
    async fn test_nth_insert_failure_keeps_earlier_records() {
        let store = MemoryStore::new().with_insert_failure_at(2);
        let seeder = Seeder::new(&store);

        let err = seeder
            .reseed("charging_stations", &stations(5), true)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Station 2"));

        // Records before the failing one are present, the rest absent.
        assert_eq!(store.count("charging_stations"), 2);
    }

    #[tokio::test]
    async fn test_delete_failure_aborts_before_inserting() {
        let store = MemoryStore::new();
        let seeder = Seeder::new(&store);
        seeder
            .reseed("charging_stations", &stations(2), true)
            .await
            .unwrap();

        let store = store.with_delete_failures();
        let seeder = Seeder::new(&store);
        let err = seeder
            .reseed("charging_stations", &stations(3), true)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to clear"));

        // Nothing from the new dataset was inserted.
        let names: Vec<String> = store
            .documents("charging_stations")
            .iter()
            .map(|(_, doc)| doc["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names.len(), 2);
    }
}
