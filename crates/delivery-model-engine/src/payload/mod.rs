//! # Payloads
//!
//! Typed representation of the JSON the delivery API returns. Everything in
//! here is plain data: it is deserialized once and then only read by the
//! binding and resolution steps.
//!
//! ## Modules
//!
//! - **`elements`**: `ElementPayload` tagged by element kind, plus the DTOs it
//!   carries (taxonomy terms, choice options, assets)
//! - **`response`**: the single item and listing envelopes that supply the
//!   linked items index alongside the items themselves

pub mod elements;
pub mod response;

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use elements::{Asset, ChoiceOption, ElementPayload, TaxonomyTerm};
pub use response::{ItemListingResponse, ItemResponse, Pagination};

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("Malformed payload JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The `system` section shared by every content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemAttributes {
    pub id: String,
    pub name: String,
    pub codename: String,
    /// Type discriminator used to pick the target model type.
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub sitemap_location: Vec<String>,
    #[serde(default)]
    pub last_modified: Option<DateTime<Utc>>,
}

/// One content item as received from the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItemPayload {
    pub system: SystemAttributes,
    #[serde(default)]
    pub elements: BTreeMap<String, ElementPayload>,
}

impl ContentItemPayload {
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn codename(&self) -> &str {
        &self.system.codename
    }

    pub fn content_type(&self) -> &str {
        &self.system.content_type
    }
}

/// Linked ("modular") content supplied next to the requested items, keyed by
/// codename.
///
/// Read-only for the lifetime of a resolution call; the whole call tree
/// borrows the same index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkedItemsIndex {
    items: HashMap<String, ContentItemPayload>,
}

impl LinkedItemsIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn get(&self, codename: &str) -> Option<&ContentItemPayload> {
        self.items.get(codename)
    }

    pub fn contains(&self, codename: &str) -> bool {
        self.items.contains_key(codename)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn codenames(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }
}

impl FromIterator<ContentItemPayload> for LinkedItemsIndex {
    /// Indexes payloads by their own codename. A later payload with the same
    /// codename replaces the earlier one.
    fn from_iter<I: IntoIterator<Item = ContentItemPayload>>(iter: I) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|payload| (payload.system.codename.clone(), payload))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const ARTICLE: &str = r#"{
        "system": {
            "id": "9dc3ca3a-22e0-4414-a56d-7a504e9f1eb2",
            "name": "On Roasts",
            "codename": "on_roasts",
            "type": "article",
            "sitemap_location": [],
            "last_modified": "2017-06-01T11:43:33Z"
        },
        "elements": {
            "title": { "type": "text", "name": "Title", "value": "On Roasts" }
        }
    }"#;

    #[test]
    fn parses_system_attributes() {
        let payload = ContentItemPayload::from_json(ARTICLE).unwrap();

        assert_eq!(payload.codename(), "on_roasts");
        assert_eq!(payload.content_type(), "article");
        assert_eq!(payload.system.language, None);
        assert_eq!(
            payload.system.last_modified.unwrap().to_rfc3339(),
            "2017-06-01T11:43:33+00:00"
        );
        assert_eq!(payload.elements.len(), 1);
    }

    #[test]
    fn missing_elements_section_is_empty() {
        let payload = ContentItemPayload::from_json(
            r#"{ "system": { "id": "1", "name": "N", "codename": "n", "type": "t" } }"#,
        )
        .unwrap();

        assert!(payload.elements.is_empty());
        assert!(payload.system.sitemap_location.is_empty());
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = ContentItemPayload::from_json("{ \"system\": ").unwrap_err();
        assert!(err.to_string().starts_with("Malformed payload JSON"));
    }

    #[test]
    fn linked_items_index_is_keyed_by_codename() {
        let index = LinkedItemsIndex::from_json(&format!(r#"{{ "on_roasts": {ARTICLE} }}"#)).unwrap();

        assert_eq!(index.len(), 1);
        assert!(index.contains("on_roasts"));
        assert!(index.get("missing").is_none());
    }

    #[test]
    fn index_from_payloads_uses_their_codenames() {
        let payload = ContentItemPayload::from_json(ARTICLE).unwrap();
        let index: LinkedItemsIndex = vec![payload].into_iter().collect();

        assert_eq!(index.codenames().collect::<Vec<_>>(), vec!["on_roasts"]);
    }
}
