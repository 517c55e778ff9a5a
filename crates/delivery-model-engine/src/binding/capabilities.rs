use std::collections::HashMap;

use super::model::{ContentModel, ModelType};

/// Maps a payload type discriminator to the model type it binds into.
pub trait TypeProvider: Send + Sync {
    /// `None` for content types without a model; binding such a payload
    /// yields no model.
    fn model_type(&self, content_type: &str) -> Option<ModelType>;
}

/// A `TypeProvider` backed by an explicit discriminator table.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: HashMap<String, ModelType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` for `content_type`, replacing any earlier registration.
    pub fn with_type<T: ContentModel + Default>(mut self, content_type: impl Into<String>) -> Self {
        self.register(content_type, ModelType::of::<T>());
        self
    }

    pub fn register(&mut self, content_type: impl Into<String>, model_type: ModelType) {
        self.types.insert(content_type.into(), model_type);
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeProvider for TypeRegistry {
    fn model_type(&self, content_type: &str) -> Option<ModelType> {
        self.types.get(content_type).cloned()
    }
}

/// Decides whether a model property binds to a payload element.
pub trait PropertyMapper: Send + Sync {
    fn is_match(&self, property: &str, element_key: &str, element_name: &str) -> bool;
}

impl<F> PropertyMapper for F
where
    F: Fn(&str, &str, &str) -> bool + Send + Sync,
{
    fn is_match(&self, property: &str, element_key: &str, element_name: &str) -> bool {
        self(property, element_key, element_name)
    }
}

/// Matches when the property equals the element key or the element display
/// name, ignoring case and `_`, `-` and space separators.
///
/// `release_date` therefore matches the key `release_date`, the key
/// `releasedate` and the display name `Release Date`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NamingConventionMapper;

impl NamingConventionMapper {
    fn normalize(s: &str) -> String {
        s.chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect()
    }
}

impl PropertyMapper for NamingConventionMapper {
    fn is_match(&self, property: &str, element_key: &str, element_name: &str) -> bool {
        let property = Self::normalize(property);
        if property.is_empty() {
            return false;
        }
        property == Self::normalize(element_key) || property == Self::normalize(element_name)
    }
}

/// The item a url slug element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLink<'a> {
    pub id: &'a str,
    pub codename: &'a str,
    pub content_type: &'a str,
    pub url_slug: &'a str,
}

/// Produces the URL for a url slug element.
pub trait LinkUrlResolver: Send + Sync {
    fn resolve_link_url(&self, link: &ContentLink<'_>) -> Option<String>;
}

impl<F> LinkUrlResolver for F
where
    F: Fn(&ContentLink<'_>) -> Option<String> + Send + Sync,
{
    fn resolve_link_url(&self, link: &ContentLink<'_>) -> Option<String> {
        self(link)
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::binding::ElementValue;
    use rstest::rstest;

    #[derive(Debug, Default)]
    struct Tweet;

    impl ContentModel for Tweet {
        fn properties(&self) -> Vec<Cow<'static, str>> {
            vec!["tweet_link".into()]
        }

        fn bind(&mut self, _property: &str, _value: ElementValue) {}
    }

    #[test]
    fn registry_maps_known_discriminators() {
        let registry = TypeRegistry::new().with_type::<Tweet>("tweet");

        assert_eq!(registry.len(), 1);
        assert!(registry.model_type("tweet").is_some());
        assert!(registry.model_type("newType").is_none());
    }

    #[rstest]
    #[case("release_date", "release_date", "Release date", true)]
    #[case("release_date", "releasedate", "", true)]
    #[case("release_date", "x", "Release Date", true)]
    #[case("body_copy", "body-copy", "", true)]
    #[case("rt", "rt", "RT", true)]
    #[case("title", "summary", "Summary", false)]
    #[case("", "", "", false)]
    fn naming_convention(
        #[case] property: &str,
        #[case] key: &str,
        #[case] name: &str,
        #[case] expected: bool,
    ) {
        assert_eq!(NamingConventionMapper.is_match(property, key, name), expected);
    }

    #[test]
    fn closures_are_mappers() {
        let always = |_: &str, _: &str, _: &str| true;
        assert!(always.is_match("anything", "else", ""));
    }

    #[test]
    fn closures_are_link_resolvers() {
        let resolver = |link: &ContentLink<'_>| Some(format!("/{}/{}", link.content_type, link.url_slug));
        let link = ContentLink {
            id: "1",
            codename: "on_roasts",
            content_type: "article",
            url_slug: "on-roasts",
        };

        assert_eq!(
            resolver.resolve_link_url(&link).as_deref(),
            Some("/article/on-roasts")
        );
    }
}
