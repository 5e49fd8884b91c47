//! Typed access to one document collection.
//!
//! [`Collection`] binds an entity type to its collection name and a
//! shared [`DocumentStore`] backend, so every screen talks to the
//! store through the same five operations instead of re-implementing
//! per-entity fetch/submit glue.

use std::marker::PhantomData;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::document::{Filter, RawDocument};
use crate::error::{Result, StoreError};
use crate::gateway::DocumentStore;

/// A domain model stored as one document per value.
pub trait Entity: DeserializeOwned + Send + Sync + 'static {
    /// Name of the backing collection.
    const COLLECTION: &'static str;

    /// Store-assigned id (empty until first persisted).
    fn id(&self) -> &str;

    /// Attach the id carried outside the document's field map.
    fn set_id(&mut self, id: String);

    /// Server-assigned creation stamp, when the document has one.
    fn created_at(&self) -> Option<DateTime<Utc>>;
}

/// Typed handle to one collection on a shared backend.
pub struct Collection<T: Entity> {
    store: Arc<dyn DocumentStore>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity> Collection<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    /// List every document in the collection, in storage order.
    pub async fn list(&self) -> Result<Vec<T>> {
        let docs = self.store.list(T::COLLECTION, None).await?;
        docs.into_iter().map(decode).collect()
    }

    /// List documents whose `field` equals `value`.
    pub async fn list_where(&self, field: &str, value: &str) -> Result<Vec<T>> {
        let filter = Filter::equals(field, value);
        let docs = self.store.list(T::COLLECTION, Some(&filter)).await?;
        docs.into_iter().map(decode).collect()
    }

    /// Fetch one document by id.
    pub async fn get(&self, id: &str) -> Result<T> {
        decode(self.store.get(T::COLLECTION, id).await?)
    }

    /// Create a document from a draft's fields; returns the new id.
    pub async fn create<D: Serialize + Sync>(&self, draft: &D) -> Result<String> {
        self.store.create(T::COLLECTION, encode(draft)?).await
    }

    /// Replace an existing document's editable fields with a draft's.
    pub async fn update<D: Serialize + Sync>(&self, id: &str, draft: &D) -> Result<()> {
        self.store.update(T::COLLECTION, id, encode(draft)?).await
    }

    /// Delete one document by id.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.store.delete(T::COLLECTION, id).await
    }
}

fn decode<T: Entity>(doc: RawDocument) -> Result<T> {
    let mut entity: T = serde_json::from_value(Value::Object(doc.fields))?;
    entity.set_id(doc.id);
    Ok(entity)
}

fn encode<D: Serialize>(draft: &D) -> Result<crate::document::Fields> {
    match serde_json::to_value(draft)? {
        Value::Object(fields) => Ok(fields),
        _ => Err(StoreError::Serialization(serde::ser::Error::custom(
            "draft must serialize to a JSON object",
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use crate::models::Brand;
    use serde_json::json;

    fn brands() -> Collection<Brand> {
        Collection::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn create_then_get_round_trips_with_id_attached() {
        let brands = brands();
        let id = brands
            .create(&json!({
                "name": "Versa",
                "description": "Premium frames",
                "imageUrl": "versa.png",
            }))
            .await
            .unwrap();

        let brand = brands.get(&id).await.unwrap();
        assert_eq!(brand.id, id);
        assert_eq!(brand.name, "Versa");
        assert!(brand.created_at.is_some());
    }

    #[tokio::test]
    async fn list_decodes_every_document() {
        let brands = brands();
        for name in ["A", "B"] {
            brands
                .create(&json!({
                    "name": name,
                    "description": "",
                    "imageUrl": "x.png",
                }))
                .await
                .unwrap();
        }

        let all = brands.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|b| !b.id.is_empty()));
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        assert!(matches!(
            brands().get("missing").await,
            Err(StoreError::NotFound)
        ));
    }
}
