//! REST [`DocumentStore`] backend.
//!
//! Talks to a hosted document API with one route per collection:
//!
//! - `GET    {base}/{collection}` (filter as a query pair)
//! - `POST   {base}/{collection}`, responding `{ "id": ... }`
//! - `GET    {base}/{collection}/{id}`
//! - `PUT    {base}/{collection}/{id}`
//! - `DELETE {base}/{collection}/{id}`
//!
//! Documents travel as JSON objects with the `id` alongside the
//! fields. The server owns the `createdAt` stamp.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::document::{Fields, Filter, RawDocument};
use crate::error::{Result, StoreError};
use crate::gateway::DocumentStore;

/// Backend bound to one document API base URL.
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Deserialize)]
struct CreateResponse {
    id: String,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self, collection: &str) -> String {
        format!("{}/{}", self.base_url, collection)
    }

    fn document_url(&self, collection: &str, id: &str) -> String {
        format!("{}/{}/{}", self.base_url, collection, id)
    }
}

/// Map a non-success status to a [`StoreError`].
fn status_error(status: StatusCode) -> StoreError {
    if status == StatusCode::NOT_FOUND {
        StoreError::NotFound
    } else {
        StoreError::Transport(format!("Unexpected status: {status}"))
    }
}

/// Split a wire object into a [`RawDocument`].
fn into_document(value: Value) -> Result<RawDocument> {
    let Value::Object(mut fields) = value else {
        return Err(StoreError::Transport(
            "Expected a JSON object document".to_string(),
        ));
    };

    let id = match fields.remove("id") {
        Some(Value::String(id)) => id,
        _ => {
            return Err(StoreError::Transport(
                "Document is missing its id".to_string(),
            ))
        }
    };

    Ok(RawDocument { id, fields })
}

#[async_trait]
impl DocumentStore for HttpStore {
    async fn list(&self, collection: &str, filter: Option<&Filter>) -> Result<Vec<RawDocument>> {
        let mut request = self.client.get(self.collection_url(collection));
        if let Some(f) = filter {
            request = request.query(&[(f.field.as_str(), f.equals.as_str())]);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(status_error(response.status()));
        }

        let values: Vec<Value> = response.json().await?;
        values.into_iter().map(into_document).collect()
    }

    async fn get(&self, collection: &str, id: &str) -> Result<RawDocument> {
        let response = self
            .client
            .get(self.document_url(collection, id))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(status_error(response.status()));
        }

        into_document(response.json().await?)
    }

    async fn create(&self, collection: &str, fields: Fields) -> Result<String> {
        let response = self
            .client
            .post(self.collection_url(collection))
            .json(&fields)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(status_error(response.status()));
        }

        let created: CreateResponse = response.json().await?;
        tracing::debug!(collection, id = %created.id, "document created");
        Ok(created.id)
    }

    async fn update(&self, collection: &str, id: &str, fields: Fields) -> Result<()> {
        let response = self
            .client
            .put(self.document_url(collection, id))
            .json(&fields)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(status_error(response.status()));
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.document_url(collection, id))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(status_error(response.status()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn urls_are_joined_without_double_slashes() {
        let store = HttpStore::new("https://api.example.com/v1/");
        assert_eq!(
            store.collection_url("bikes"),
            "https://api.example.com/v1/bikes"
        );
        assert_eq!(
            store.document_url("bikes", "abc"),
            "https://api.example.com/v1/bikes/abc"
        );
    }

    #[test]
    fn wire_objects_split_into_id_and_fields() {
        let doc = into_document(json!({ "id": "x1", "name": "Versa" })).unwrap();
        assert_eq!(doc.id, "x1");
        assert_eq!(doc.fields["name"], "Versa");
        assert!(!doc.fields.contains_key("id"));
    }

    #[test]
    fn malformed_wire_objects_are_transport_errors() {
        assert!(matches!(
            into_document(json!([1, 2])),
            Err(StoreError::Transport(_))
        ));
        assert!(matches!(
            into_document(json!({ "name": "no id" })),
            Err(StoreError::Transport(_))
        ));
    }

    #[test]
    fn missing_documents_map_to_not_found() {
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND),
            StoreError::NotFound
        ));
        assert!(matches!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR),
            StoreError::Transport(_)
        ));
    }
}
