use std::any::TypeId;
use std::collections::HashMap;
use std::fmt;

use crate::binding::ContentModel;

/// A bound inline content item handed to its resolver.
#[derive(Debug)]
pub struct ResolvedContentItemData<'a, T> {
    pub item: &'a T,
    pub codename: &'a str,
}

type ResolveFn = Box<dyn Fn(&dyn ContentModel, &str) -> Option<String> + Send + Sync>;

struct RegisteredResolver {
    type_name: &'static str,
    resolve: ResolveFn,
}

/// Renderers for inline content items, keyed by model type.
#[derive(Default)]
pub struct ResolverRegistry {
    resolvers: HashMap<TypeId, RegisteredResolver>,
}

impl ResolverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the renderer for models of type `T`. A later registration for
    /// the same type replaces the earlier one.
    pub fn register<T: ContentModel>(
        &mut self,
        resolver: impl Fn(&ResolvedContentItemData<'_, T>) -> String + Send + Sync + 'static,
    ) {
        let type_name = std::any::type_name::<T>();
        let resolve: ResolveFn = Box::new(move |model: &dyn ContentModel, codename: &str| {
            model
                .downcast_ref::<T>()
                .map(|item| resolver(&ResolvedContentItemData { item, codename }))
        });

        let previous = self
            .resolvers
            .insert(TypeId::of::<T>(), RegisteredResolver { type_name, resolve });
        if previous.is_some() {
            log::debug!("Replacing inline content item resolver for {type_name}");
        }
    }

    pub fn contains<T: ContentModel>(&self) -> bool {
        self.resolvers.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Renders `model` with the resolver registered for its concrete type.
    /// `None` when no resolver is registered.
    pub fn resolve(&self, model: &dyn ContentModel, codename: &str) -> Option<String> {
        let registered = self.resolvers.get(&model.model_type_id())?;
        (registered.resolve)(model, codename)
    }
}

impl fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.resolvers.values().map(|r| r.type_name))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::binding::ElementValue;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Default)]
    struct Tweet {
        link: String,
    }

    impl ContentModel for Tweet {
        fn properties(&self) -> Vec<Cow<'static, str>> {
            vec!["tweet_link".into()]
        }

        fn bind(&mut self, _property: &str, value: ElementValue) {
            if let Some(link) = value.into_string() {
                self.link = link;
            }
        }
    }

    #[derive(Debug, Default)]
    struct Hosted;

    impl ContentModel for Hosted {
        fn properties(&self) -> Vec<Cow<'static, str>> {
            vec![]
        }

        fn bind(&mut self, _property: &str, _value: ElementValue) {}
    }

    fn tweet(link: &str) -> Tweet {
        Tweet { link: link.into() }
    }

    #[test]
    fn resolves_with_item_and_codename() {
        let mut registry = ResolverRegistry::new();
        registry.register::<Tweet>(|data| format!("<a id=\"{}\">{}</a>", data.codename, data.item.link));

        let rendered = registry.resolve(&tweet("https://x/1"), "tweet_1");

        assert_eq!(rendered.as_deref(), Some("<a id=\"tweet_1\">https://x/1</a>"));
    }

    #[test]
    fn last_registration_wins() {
        let mut registry = ResolverRegistry::new();
        registry.register::<Tweet>(|_| "first".into());
        registry.register::<Tweet>(|_| "second".into());

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.resolve(&tweet(""), "t").as_deref(), Some("second"));
    }

    #[test]
    fn unregistered_type_has_no_rendering() {
        let mut registry = ResolverRegistry::new();
        registry.register::<Tweet>(|_| "tweet".into());

        assert!(registry.contains::<Tweet>());
        assert!(!registry.contains::<Hosted>());
        assert_eq!(registry.resolve(&Hosted, "video"), None);
    }
}
