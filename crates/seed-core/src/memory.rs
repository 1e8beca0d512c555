//! In-memory [`DocumentStore`] used by tests.
//!
//! Keeps documents in insertion order per collection and assigns monotonic
//! ids, so tests can assert on ordering and counts without a live database.
//! Failures can be injected to exercise abort paths.

use crate::store::{DocumentId, DocumentStore};
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<String, Vec<(DocumentId, serde_json::Value)>>>,
    next_id: AtomicU64,
    inserts_seen: AtomicU64,
    fail_insert_at: Option<u64>,
    fail_deletes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the insert with zero-based sequence number `n`.
    pub fn with_insert_failure_at(mut self, n: u64) -> Self {
        self.fail_insert_at = Some(n);
        self
    }

    /// Fail every delete.
    pub fn with_delete_failures(mut self) -> Self {
        self.fail_deletes = true;
        self
    }

    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .map_or(0, Vec::len)
    }

    /// Snapshot of a collection's documents in insertion order.
    pub fn documents(&self, collection: &str) -> Vec<(DocumentId, serde_json::Value)> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryStore {
    async fn list_ids(&self, collection: &str) -> Result<Vec<DocumentId>> {
        Ok(self
            .documents(collection)
            .into_iter()
            .map(|(id, _)| id)
            .collect())
    }

    async fn delete(&self, collection: &str, id: &DocumentId) -> Result<()> {
        if self.fail_deletes {
            return Err(anyhow!("injected delete failure for {id}"));
        }
        let mut collections = self.collections.lock().unwrap();
        if let Some(docs) = collections.get_mut(collection) {
            docs.retain(|(doc_id, _)| doc_id != id);
        }
        Ok(())
    }

    async fn insert(&self, collection: &str, record: &serde_json::Value) -> Result<DocumentId> {
        let seen = self.inserts_seen.fetch_add(1, Ordering::SeqCst);
        if self.fail_insert_at == Some(seen) {
            return Err(anyhow!("injected insert failure at sequence {seen}"));
        }
        let id = DocumentId::new(format!("mem-{:08}", self.next_id.fetch_add(1, Ordering::SeqCst)));
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push((id.clone(), record.clone()));
        Ok(id)
    }
}
