//! The abstraction boundary over the document store's CRUD surface.

use async_trait::async_trait;

use crate::document::{Fields, Filter, RawDocument};
use crate::error::Result;

/// Asynchronous CRUD access to named collections of documents.
///
/// All operations are single-shot: no retries, no batching, no
/// transaction spanning more than one document. Callers catch
/// failures at the call site, log them, and leave their state as it
/// was.
///
/// Backends must uphold the creation-timestamp contract: `create`
/// stamps `createdAt` server-side exactly once, and `update` replaces
/// the editable fields while preserving the stored `createdAt`.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// List a collection's documents, optionally filtered.
    ///
    /// The relative order of returned documents is the backend's
    /// stable storage order; callers that need a display order sort
    /// on top of it.
    async fn list(&self, collection: &str, filter: Option<&Filter>) -> Result<Vec<RawDocument>>;

    /// Fetch one document by id. `StoreError::NotFound` when absent.
    async fn get(&self, collection: &str, id: &str) -> Result<RawDocument>;

    /// Create a document and return its assigned id.
    ///
    /// Any `createdAt` in `fields` is overwritten with the store's
    /// own stamp.
    async fn create(&self, collection: &str, fields: Fields) -> Result<String>;

    /// Replace the editable fields of an existing document.
    ///
    /// `StoreError::NotFound` when absent. The stored `createdAt`
    /// survives regardless of what `fields` contains.
    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<()>;

    /// Delete a document. `StoreError::NotFound` when absent.
    async fn delete(&self, collection: &str, id: &str) -> Result<()>;
}
