//! Raw document shapes exchanged with a [`DocumentStore`] backend.
//!
//! [`DocumentStore`]: crate::gateway::DocumentStore

use serde_json::Value;

/// Field map of one document, minus its id.
pub type Fields = serde_json::Map<String, Value>;

/// Name of the server-assigned creation timestamp field.
///
/// Part of the wire contract: stamped exactly once at create, never
/// replaced on update.
pub const CREATED_AT_FIELD: &str = "createdAt";

/// One document as returned by a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    /// Opaque store-assigned identifier.
    pub id: String,
    /// The document's fields, `createdAt` included.
    pub fields: Fields,
}

/// A single field-equals predicate, the only query shape the site
/// needs (bikes of one brand).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub field: String,
    pub equals: String,
}

impl Filter {
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            equals: value.into(),
        }
    }

    /// Whether `fields` satisfies this predicate.
    pub fn matches(&self, fields: &Fields) -> bool {
        matches!(fields.get(&self.field), Some(Value::String(s)) if *s == self.equals)
    }
}
