//! MongoDB implementation of the seed-core document store.

use anyhow::{Context, Result};
use bson::{doc, oid::ObjectId, Bson, Document};
use futures::TryStreamExt;
use mongodb::{Client, Database};
use seed_core::{DocumentId, DocumentStore};
use tracing::debug;

use crate::opts::MongoOpts;

/// A document store backed by a MongoDB database.
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connect and verify the credential before any seeding work starts.
    pub async fn connect(opts: &MongoOpts) -> Result<Self> {
        let client = Client::with_uri_str(&opts.mongodb_connection_string)
            .await
            .context("Failed to initialize MongoDB client from connection string")?;
        let database = client.database(&opts.mongodb_database);

        // Probe the connection so credential problems surface here, not
        // halfway through a clear phase.
        database
            .list_collection_names()
            .await
            .with_context(|| {
                format!(
                    "Failed to authenticate against database '{}'",
                    opts.mongodb_database
                )
            })?;

        Ok(Self { database })
    }

    /// Wrap an existing database handle (used by tests against a live server).
    pub fn with_database(database: Database) -> Self {
        Self { database }
    }

    fn collection(&self, name: &str) -> mongodb::Collection<Document> {
        self.database.collection(name)
    }
}

#[async_trait::async_trait]
impl DocumentStore for MongoStore {
    async fn list_ids(&self, collection: &str) -> Result<Vec<DocumentId>> {
        let mut cursor = self
            .collection(collection)
            .find(doc! {})
            .projection(doc! { "_id": 1 })
            .await
            .with_context(|| format!("Failed to list documents in '{collection}'"))?;

        let mut ids = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            if let Some(id) = document.get("_id") {
                ids.push(DocumentId::new(bson_id_to_string(id)));
            }
        }
        debug!("Listed {} documents in '{collection}'", ids.len());
        Ok(ids)
    }

    async fn delete(&self, collection: &str, id: &DocumentId) -> Result<()> {
        self.collection(collection)
            .delete_one(doc! { "_id": id_filter(id) })
            .await
            .with_context(|| format!("Failed to delete document {id} from '{collection}'"))?;
        Ok(())
    }

    async fn insert(&self, collection: &str, record: &serde_json::Value) -> Result<DocumentId> {
        let document = record_to_document(record)?;
        let result = self
            .collection(collection)
            .insert_one(document)
            .await
            .with_context(|| format!("Failed to insert document into '{collection}'"))?;
        Ok(DocumentId::new(bson_id_to_string(&result.inserted_id)))
    }
}

/// Convert a JSON record into a BSON document for insertion.
fn record_to_document(record: &serde_json::Value) -> Result<Document> {
    bson::to_document(record).context("Failed to convert record to BSON document")
}

/// Render a BSON `_id` as the opaque string the seeder logs and round-trips.
fn bson_id_to_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Rebuild the `_id` filter value from a listed id.
fn id_filter(id: &DocumentId) -> Bson {
    match ObjectId::parse_str(id.as_str()) {
        Ok(oid) => Bson::ObjectId(oid),
        Err(_) => Bson::String(id.as_str().to_string()),
    }
}
