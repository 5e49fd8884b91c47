//! In-process [`DocumentStore`] backend.
//!
//! Used by the test suite and for local development without a remote
//! store. Documents are held per collection in insertion order, which
//! doubles as the backend's stable storage order.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::document::{Fields, Filter, RawDocument, CREATED_AT_FIELD};
use crate::error::{Result, StoreError};
use crate::gateway::DocumentStore;

/// Backend holding every collection in memory.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<RawDocument>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list(&self, collection: &str, filter: Option<&Filter>) -> Result<Vec<RawDocument>> {
        let guard = self.collections.read().await;
        let docs = guard.get(collection).map(Vec::as_slice).unwrap_or(&[]);

        Ok(docs
            .iter()
            .filter(|doc| filter.map_or(true, |f| f.matches(&doc.fields)))
            .cloned()
            .collect())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<RawDocument> {
        let guard = self.collections.read().await;
        guard
            .get(collection)
            .and_then(|docs| docs.iter().find(|doc| doc.id == id))
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, collection: &str, mut fields: Fields) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        fields.insert(
            CREATED_AT_FIELD.to_string(),
            Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        );

        let mut guard = self.collections.write().await;
        guard
            .entry(collection.to_string())
            .or_default()
            .push(RawDocument {
                id: id.clone(),
                fields,
            });

        tracing::debug!(collection, id = %id, "document created");
        Ok(id)
    }

    async fn update(&self, collection: &str, id: &str, mut fields: Fields) -> Result<()> {
        let mut guard = self.collections.write().await;
        let doc = guard
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.id == id))
            .ok_or(StoreError::NotFound)?;

        // The stored creation stamp always wins.
        fields.remove(CREATED_AT_FIELD);
        if let Some(created) = doc.fields.get(CREATED_AT_FIELD).cloned() {
            fields.insert(CREATED_AT_FIELD.to_string(), created);
        }
        doc.fields = fields;

        tracing::debug!(collection, id, "document updated");
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let mut guard = self.collections.write().await;
        let docs = guard.get_mut(collection).ok_or(StoreError::NotFound)?;

        let before = docs.len();
        docs.retain(|doc| doc.id != id);
        if docs.len() == before {
            return Err(StoreError::NotFound);
        }

        tracing::debug!(collection, id, "document deleted");
        Ok(())
    }
}
