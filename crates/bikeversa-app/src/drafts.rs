//! Per-entity draft types.
//!
//! A draft is the serializable field set a form session edits: the
//! entity's editable fields minus `id` and `createdAt` (both owned by
//! the store). Serde renames pin the wire field names, so a submitted
//! draft writes documents older revisions of the site can read.

use serde::Serialize;

use bikeversa_core::richtext::clamp_description;
use bikeversa_store::{Bike, BlogPost, Brand};

use crate::forms::{Draft, ValidationError};

// ---------------------------------------------------------------------------
// Bike draft
// ---------------------------------------------------------------------------

/// Form state for one bike.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BikeDraft {
    pub name: String,
    /// Image slots. There is always at least one; only the first is
    /// required to be filled at submit time.
    pub images: Vec<String>,
    #[serde(rename = "type")]
    pub bike_type: String,
    pub price: String,
    pub description: String,
    pub brand_id: String,
}

impl Default for BikeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            images: vec![String::new()],
            bike_type: String::new(),
            price: String::new(),
            description: String::new(),
            brand_id: String::new(),
        }
    }
}

impl BikeDraft {
    /// Append an empty image slot.
    pub fn add_image_slot(&mut self) {
        self.images.push(String::new());
    }

    /// Remove the slot at `index`. No-op when it is the last
    /// remaining slot or `index` is out of bounds.
    pub fn remove_image_slot(&mut self, index: usize) {
        if self.images.len() > 1 && index < self.images.len() {
            self.images.remove(index);
        }
    }

    /// Replace the URL in slot `index`. No-op out of bounds.
    pub fn set_image(&mut self, index: usize, url: impl Into<String>) {
        if let Some(slot) = self.images.get_mut(index) {
            *slot = url.into();
        }
    }

    /// Set the rich-text description, clamped to the visible-length
    /// ceiling.
    pub fn set_description(&mut self, value: &str) {
        self.description = clamp_description(value);
    }
}

impl Draft for BikeDraft {
    type Entity = Bike;

    fn from_entity(bike: &Bike) -> Self {
        // Legacy documents carry a single `imageUrl`; seed the slot
        // list from it so editing migrates them to `images`.
        let mut images = bike.gallery_images();
        if images.is_empty() {
            images.push(String::new());
        }

        Self {
            name: bike.name.clone(),
            images,
            bike_type: bike.bike_type.clone(),
            price: bike.price.clone(),
            description: bike.description.clone(),
            brand_id: bike.brand_id.clone(),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.images.first().map_or(true, |url| url.trim().is_empty()) {
            return Err(ValidationError::MissingField("images"));
        }
        if self.bike_type.trim().is_empty() {
            return Err(ValidationError::MissingField("type"));
        }
        if self.price.trim().is_empty() {
            return Err(ValidationError::MissingField("price"));
        }
        if self.brand_id.trim().is_empty() {
            return Err(ValidationError::MissingField("brandId"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Brand draft
// ---------------------------------------------------------------------------

/// Form state for one brand.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BrandDraft {
    pub name: String,
    pub description: String,
    pub image_url: String,
}

impl Draft for BrandDraft {
    type Entity = Brand;

    fn from_entity(brand: &Brand) -> Self {
        Self {
            name: brand.name.clone(),
            description: brand.description.clone(),
            image_url: brand.image_url.clone(),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingField("description"));
        }
        if self.image_url.trim().is_empty() {
            return Err(ValidationError::MissingField("imageUrl"));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Blog post draft
// ---------------------------------------------------------------------------

/// Form state for one blog post.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogDraft {
    pub title: String,
    pub image_url: String,
    pub category: String,
    pub description: String,
}

impl Draft for BlogDraft {
    type Entity = BlogPost;

    fn from_entity(post: &BlogPost) -> Self {
        Self {
            title: post.title.clone(),
            image_url: post.image_url.clone(),
            category: post.category.clone(),
            description: post.description.clone(),
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title"));
        }
        if self.image_url.trim().is_empty() {
            return Err(ValidationError::MissingField("imageUrl"));
        }
        if self.category.trim().is_empty() {
            return Err(ValidationError::MissingField("category"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingField("description"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bike(images: Vec<&str>, legacy: Option<&str>) -> Bike {
        Bike {
            id: "bike-1".into(),
            name: "Trail 9".into(),
            images: images.into_iter().map(String::from).collect(),
            image_url: legacy.map(String::from),
            bike_type: "Mountain".into(),
            price: "$1,299".into(),
            description: "<p>fast</p>".into(),
            brand_id: "b1".into(),
            created_at: None,
        }
    }

    #[test]
    fn legacy_image_url_seeds_the_slot_list() {
        let draft = BikeDraft::from_entity(&bike(vec![], Some("a.png")));
        assert_eq!(draft.images, vec!["a.png"]);
    }

    #[test]
    fn multi_image_documents_seed_unchanged() {
        let draft = BikeDraft::from_entity(&bike(vec!["a.png", "b.png"], Some("ignored.png")));
        assert_eq!(draft.images, vec!["a.png", "b.png"]);
    }

    #[test]
    fn entity_without_any_image_gets_one_empty_slot() {
        let draft = BikeDraft::from_entity(&bike(vec![], None));
        assert_eq!(draft.images, vec![""]);
    }

    #[test]
    fn last_image_slot_cannot_be_removed() {
        let mut draft = BikeDraft::default();
        draft.set_image(0, "a.png");
        draft.add_image_slot();
        assert_eq!(draft.images.len(), 2);

        draft.remove_image_slot(1);
        assert_eq!(draft.images, vec!["a.png"]);

        // Removing the last slot is a no-op, repeatedly.
        draft.remove_image_slot(0);
        draft.remove_image_slot(0);
        assert_eq!(draft.images, vec!["a.png"]);
    }

    #[test]
    fn out_of_bounds_slot_edits_are_ignored() {
        let mut draft = BikeDraft::default();
        draft.set_image(5, "x.png");
        assert_eq!(draft.images, vec![""]);
        draft.remove_image_slot(5);
        assert_eq!(draft.images.len(), 1);
    }

    #[test]
    fn description_setter_applies_the_ceiling() {
        let mut draft = BikeDraft::default();
        draft.set_description(&"x".repeat(1000));
        assert_eq!(draft.description.chars().count(), 620);

        let clamped = draft.description.clone();
        draft.set_description(&clamped);
        assert_eq!(draft.description, clamped);
    }

    #[test]
    fn bike_draft_requires_first_image_and_brand() {
        let mut draft = BikeDraft {
            name: "Trail 9".into(),
            bike_type: "Mountain".into(),
            price: "$1,299".into(),
            brand_id: "b1".into(),
            ..BikeDraft::default()
        };
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("images"))
        );

        draft.set_image(0, "a.png");
        assert_eq!(draft.validate(), Ok(()));

        draft.brand_id.clear();
        assert_eq!(
            draft.validate(),
            Err(ValidationError::MissingField("brandId"))
        );
    }

    #[test]
    fn bike_draft_serializes_with_wire_names() {
        let mut draft = BikeDraft::default();
        draft.name = "Trail 9".into();
        draft.set_image(0, "a.png");
        draft.bike_type = "Mountain".into();
        draft.price = "$1,299".into();
        draft.brand_id = "b1".into();

        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Trail 9",
                "images": ["a.png"],
                "type": "Mountain",
                "price": "$1,299",
                "description": "",
                "brandId": "b1",
            })
        );
    }
}
