use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A taxonomy term assigned to a taxonomy element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyTerm {
    pub name: String,
    pub codename: String,
}

/// A selected option of a multiple choice element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub name: String,
    pub codename: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// MIME type.
    #[serde(rename = "type")]
    pub mime_type: String,
    pub size: u64,
    pub url: String,
}

/// One element of a content item, tagged by its `type` in the JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementPayload {
    Text {
        name: String,
        #[serde(default)]
        value: String,
    },
    Number {
        name: String,
        value: Option<f64>,
    },
    DateTime {
        name: String,
        value: Option<DateTime<Utc>>,
    },
    /// Raw markup whose inline content item objects are expanded during
    /// binding.
    RichText {
        name: String,
        #[serde(default)]
        value: String,
        /// Codenames that may appear as inline objects inside `value`.
        #[serde(default)]
        modular_content: Vec<String>,
    },
    MultipleChoice {
        name: String,
        #[serde(default)]
        value: Vec<ChoiceOption>,
    },
    Taxonomy {
        name: String,
        #[serde(default)]
        taxonomy_group: Option<String>,
        #[serde(default)]
        value: Vec<TaxonomyTerm>,
    },
    Asset {
        name: String,
        #[serde(default)]
        value: Vec<Asset>,
    },
    /// A plain list of linked item codenames.
    ModularContent {
        name: String,
        #[serde(default)]
        value: Vec<String>,
    },
    UrlSlug {
        name: String,
        #[serde(default)]
        value: String,
    },
    /// Element kinds this crate does not know about. Never bound.
    #[serde(other)]
    Unknown,
}

impl ElementPayload {
    /// Display name of the element, empty for unknown kinds.
    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. }
            | Self::Number { name, .. }
            | Self::DateTime { name, .. }
            | Self::RichText { name, .. }
            | Self::MultipleChoice { name, .. }
            | Self::Taxonomy { name, .. }
            | Self::Asset { name, .. }
            | Self::ModularContent { name, .. }
            | Self::UrlSlug { name, .. } => name,
            Self::Unknown => "",
        }
    }

    /// Codenames of content items this element refers to.
    pub fn linked_codenames(&self) -> &[String] {
        match self {
            Self::RichText {
                modular_content, ..
            } => modular_content,
            Self::ModularContent { value, .. } => value,
            _ => &[],
        }
    }
}
