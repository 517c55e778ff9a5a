use serde::{Deserialize, Serialize};

use super::{ContentItemPayload, LinkedItemsIndex, PayloadError};

/// Response carrying a single content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemResponse {
    pub item: ContentItemPayload,
    #[serde(default)]
    pub modular_content: LinkedItemsIndex,
}

impl ItemResponse {
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub skip: u32,
    pub limit: u32,
    pub count: u32,
    /// URL of the next page, empty on the last page.
    #[serde(default)]
    pub next_page: String,
}

impl Pagination {
    pub fn has_next_page(&self) -> bool {
        !self.next_page.is_empty()
    }
}

/// Response carrying a page of content items. All items share one linked
/// items index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemListingResponse {
    pub items: Vec<ContentItemPayload>,
    #[serde(default)]
    pub modular_content: LinkedItemsIndex,
    #[serde(default)]
    pub pagination: Pagination,
}

impl ItemListingResponse {
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(json)?)
    }
}
