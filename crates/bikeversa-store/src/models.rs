//! Domain models persisted in the remote document store.
//!
//! Field names are part of the wire contract (camelCase, `type` on
//! bikes), so every struct pins them with serde renames. Ids are
//! opaque store-assigned strings carried outside the field map and
//! re-attached by the typed [`Collection`] layer.
//!
//! [`Collection`]: crate::collection::Collection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bikeversa_core::constants::{COLLECTION_BIKES, COLLECTION_BLOGS, COLLECTION_BRANDS};

use crate::collection::Entity;

// ---------------------------------------------------------------------------
// Bike
// ---------------------------------------------------------------------------

/// One catalog bike.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Bike {
    /// Store-assigned document id.
    #[serde(skip)]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Ordered gallery image URLs. Persisted bikes carry at least one.
    #[serde(default)]
    pub images: Vec<String>,
    /// Single-image field written by older revisions of the site.
    /// Still accepted on read; new writes use `images`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Category, e.g. "Mountain", "Road", "Electric".
    #[serde(rename = "type")]
    pub bike_type: String,
    /// Display price. Free-form text, no arithmetic is ever done on it.
    pub price: String,
    /// Rich-text description (HTML-bearing, visible length ≤ 620).
    pub description: String,
    /// Id of the brand this bike belongs to.
    pub brand_id: String,
    /// Server-assigned creation stamp. Absent on some legacy documents.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Bike {
    /// Gallery images with the legacy single-image fallback applied.
    pub fn gallery_images(&self) -> Vec<String> {
        if !self.images.is_empty() {
            self.images.clone()
        } else if let Some(url) = &self.image_url {
            vec![url.clone()]
        } else {
            Vec::new()
        }
    }
}

impl Entity for Bike {
    const COLLECTION: &'static str = COLLECTION_BIKES;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

// ---------------------------------------------------------------------------
// Brand
// ---------------------------------------------------------------------------

/// A bike brand. Bikes join to brands through `brand_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Store-assigned document id.
    #[serde(skip)]
    pub id: String,
    /// Display name.
    pub name: String,
    /// Description text (rich or plain depending on revision).
    pub description: String,
    /// Logo / hero image URL.
    pub image_url: String,
    /// Server-assigned creation stamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for Brand {
    const COLLECTION: &'static str = COLLECTION_BRANDS;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

// ---------------------------------------------------------------------------
// Blog post
// ---------------------------------------------------------------------------

/// One blog article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    /// Store-assigned document id.
    #[serde(skip)]
    pub id: String,
    /// Article title.
    pub title: String,
    /// Header image URL.
    pub image_url: String,
    /// Category label shown on the card.
    pub category: String,
    /// Plain-text body.
    pub description: String,
    /// Server-assigned creation stamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Entity for BlogPost {
    const COLLECTION: &'static str = COLLECTION_BLOGS;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}
