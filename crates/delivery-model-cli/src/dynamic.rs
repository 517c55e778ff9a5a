use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

use delivery_model_config::Config;
use delivery_model_engine::{
    ContentLink, ContentModel, ElementValue, ModelProvider, ModelType, ResolvedContentItemData,
    SystemAttributes, TypeRegistry,
};

use crate::render::{fill_template, render_inline_item};

/// A model for any configured content type: every bound element kept as text.
#[derive(Debug, Default)]
pub struct DynamicItem {
    pub codename: String,
    pub content_type: String,
    elements: Vec<String>,
    pub values: BTreeMap<String, String>,
}

impl DynamicItem {
    pub fn new(elements: Vec<String>) -> Self {
        Self {
            elements,
            ..Self::default()
        }
    }
}

impl ContentModel for DynamicItem {
    fn properties(&self) -> Vec<Cow<'static, str>> {
        self.elements.iter().cloned().map(Cow::Owned).collect()
    }

    fn bind(&mut self, property: &str, value: ElementValue) {
        self.values.insert(property.to_string(), display_value(value));
    }

    fn bind_system(&mut self, system: &SystemAttributes) {
        self.codename = system.codename.clone();
        self.content_type = system.content_type.clone();
    }
}

fn display_value(value: ElementValue) -> String {
    match value {
        ElementValue::Text(s) | ElementValue::RichText(s) => s,
        ElementValue::Number(n) => n.map(|n| n.to_string()).unwrap_or_default(),
        ElementValue::DateTime(d) => d.map(|d| d.to_rfc3339()).unwrap_or_default(),
        ElementValue::MultipleChoice(options) => options.join(", "),
        ElementValue::Taxonomy(terms) => terms
            .iter()
            .map(|term| term.name.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        ElementValue::Assets(assets) => assets
            .iter()
            .map(|asset| asset.url.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        ElementValue::LinkedItems(items) => items
            .iter()
            .filter_map(|item| item.downcast_ref::<DynamicItem>())
            .map(|item| item.codename.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        ElementValue::UrlSlug { slug, url } => url.unwrap_or(slug),
    }
}

/// Builds a provider that binds every configured content type into a
/// [`DynamicItem`] and renders inline items with their type's template.
pub fn provider_from_config(config: &Config) -> ModelProvider {
    let mut registry = TypeRegistry::new();
    let mut templates = BTreeMap::new();
    for (content_type, type_config) in &config.types {
        let elements = type_config.elements.clone();
        registry.register(
            content_type.clone(),
            ModelType::with_factory(move || DynamicItem::new(elements.clone())),
        );
        if let Some(template) = &type_config.template {
            templates.insert(content_type.clone(), template.clone());
        }
    }

    let templates = Arc::new(templates);
    let mut builder = ModelProvider::builder(registry).inline_resolver::<DynamicItem>(
        move |data: &ResolvedContentItemData<'_, DynamicItem>| render_inline_item(&templates, data),
    );

    if let Some(pattern) = config.url_pattern.clone() {
        builder = builder.link_url_resolver(move |link: &ContentLink<'_>| {
            let values = BTreeMap::from([
                ("type", link.content_type),
                ("codename", link.codename),
                ("url_slug", link.url_slug),
            ]);
            Some(fill_template(&pattern, |name| {
                values.get(name).map(|value| value.to_string())
            }))
        });
    }

    builder.build()
}
