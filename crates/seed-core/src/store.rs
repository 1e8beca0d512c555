//! Capability trait over the target document store.

use anyhow::Result;
use std::fmt;

/// Opaque store-assigned document identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Trait for the document-collection store being seeded.
///
/// This is the full surface the seeder needs: enumerate existing documents,
/// delete one, insert one. Anything the backing product offers beyond that
/// (queries, updates, transactions) is out of scope.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// List the ids of every document currently in the collection.
    async fn list_ids(&self, collection: &str) -> Result<Vec<DocumentId>>;

    /// Delete one document by id.
    async fn delete(&self, collection: &str, id: &DocumentId) -> Result<()>;

    /// Insert a record as a new document, returning the generated id.
    async fn insert(&self, collection: &str, record: &serde_json::Value) -> Result<DocumentId>;
}
