use crate::binding::{
    ContentLink, ContentModel, ElementValue, LinkUrlResolver, NamingConventionMapper,
    PropertyMapper, TypeProvider,
};
use crate::payload::{
    ContentItemPayload, ElementPayload, ItemListingResponse, ItemResponse, LinkedItemsIndex,
};
use crate::resolving::{
    ContentItemBinder, InlineContentItemsProcessor, ResolutionContext, ResolvedContentItemData,
};

/// How modular-content list elements are bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListBinding {
    Expand,
    /// Back-references bind with empty lists so cyclic lists terminate.
    Empty,
}

/// Turns content item payloads into bound models.
///
/// Every top-level call gets its own [`ResolutionContext`], so one provider
/// can serve concurrent calls from several threads.
pub struct ModelProvider {
    type_provider: Box<dyn TypeProvider>,
    property_mapper: Box<dyn PropertyMapper>,
    link_url_resolver: Option<Box<dyn LinkUrlResolver>>,
    processor: InlineContentItemsProcessor,
}

impl ModelProvider {
    pub fn builder(type_provider: impl TypeProvider + 'static) -> ModelProviderBuilder {
        ModelProviderBuilder {
            type_provider: Box::new(type_provider),
            property_mapper: Box::new(NamingConventionMapper),
            link_url_resolver: None,
            processor: InlineContentItemsProcessor::default(),
        }
    }

    pub fn register_type_resolver<T: ContentModel>(
        &mut self,
        resolver: impl Fn(&ResolvedContentItemData<'_, T>) -> String + Send + Sync + 'static,
    ) {
        self.processor.register_type_resolver(resolver);
    }

    pub fn processor(&self) -> &InlineContentItemsProcessor {
        &self.processor
    }

    /// Binds `payload` with inline content items resolved against
    /// `linked_items`.
    ///
    /// `None` when the payload's content type has no model type.
    pub fn get_model(
        &self,
        payload: &ContentItemPayload,
        linked_items: &LinkedItemsIndex,
    ) -> Option<Box<dyn ContentModel>> {
        let ctx = ResolutionContext::new(linked_items);
        self.bind_item(payload, &ctx)
    }

    /// Like [`Self::get_model`], also `None` when the bound model is not a `T`.
    pub fn get_content_item_model<T: ContentModel>(
        &self,
        payload: &ContentItemPayload,
        linked_items: &LinkedItemsIndex,
    ) -> Option<T> {
        let model = self.get_model(payload, linked_items)?;
        let type_name = model.type_name();
        match model.downcast::<T>() {
            Some(model) => Some(*model),
            None => {
                log::debug!(
                    "Item '{}' bound to {type_name}, not the requested {}",
                    payload.codename(),
                    std::any::type_name::<T>()
                );
                None
            }
        }
    }

    pub fn item_model<T: ContentModel>(&self, response: &ItemResponse) -> Option<T> {
        self.get_content_item_model(&response.item, &response.modular_content)
    }

    /// Models of every listed item, in listing order. Items of unknown type
    /// are skipped.
    pub fn listing(&self, response: &ItemListingResponse) -> Vec<Box<dyn ContentModel>> {
        response
            .items
            .iter()
            .filter_map(|item| self.get_model(item, &response.modular_content))
            .collect()
    }

    /// Typed models of the listed items. Items of unknown type, or bound to a
    /// type other than `T`, are skipped.
    pub fn listing_models<T: ContentModel>(&self, response: &ItemListingResponse) -> Vec<T> {
        response
            .items
            .iter()
            .filter_map(|item| self.get_content_item_model(item, &response.modular_content))
            .collect()
    }

    fn bind_into(
        &self,
        model: &mut dyn ContentModel,
        payload: &ContentItemPayload,
        ctx: &ResolutionContext<'_>,
        lists: ListBinding,
    ) {
        model.bind_system(&payload.system);

        for property in model.properties() {
            let matched = payload
                .elements
                .iter()
                .filter(|(_, element)| !matches!(element, ElementPayload::Unknown))
                .find(|(key, element)| self.property_mapper.is_match(&property, key, element.name()));
            let Some((_, element)) = matched else {
                continue;
            };
            if let Some(value) = self.convert(payload, element, ctx, lists) {
                model.bind(&property, value);
            }
        }
    }

    fn convert(
        &self,
        payload: &ContentItemPayload,
        element: &ElementPayload,
        ctx: &ResolutionContext<'_>,
        lists: ListBinding,
    ) -> Option<ElementValue> {
        let value = match element {
            ElementPayload::Text { value, .. } => ElementValue::Text(value.clone()),
            ElementPayload::Number { value, .. } => ElementValue::Number(*value),
            ElementPayload::DateTime { value, .. } => ElementValue::DateTime(*value),
            ElementPayload::RichText { value, .. } => {
                ElementValue::RichText(self.processor.expand(value, ctx, self))
            }
            ElementPayload::MultipleChoice { value, .. } => ElementValue::MultipleChoice(
                value.iter().map(|option| option.codename.clone()).collect(),
            ),
            ElementPayload::Taxonomy { value, .. } => ElementValue::Taxonomy(value.clone()),
            ElementPayload::Asset { value, .. } => ElementValue::Assets(value.clone()),
            ElementPayload::ModularContent { value, .. } => match lists {
                ListBinding::Expand => ElementValue::LinkedItems(self.bind_linked_items(value, ctx)),
                ListBinding::Empty => ElementValue::LinkedItems(Vec::new()),
            },
            ElementPayload::UrlSlug { value, .. } => ElementValue::UrlSlug {
                slug: value.clone(),
                url: self.resolve_url(payload, value),
            },
            ElementPayload::Unknown => return None,
        };
        Some(value)
    }

    /// Binds a plain list of linked items, keeping list order. Codenames
    /// missing from the index are left out. An item already being resolved in
    /// this branch is bound once more with its inline content items stripped
    /// and its own lists empty.
    fn bind_linked_items(
        &self,
        codenames: &[String],
        ctx: &ResolutionContext<'_>,
    ) -> Vec<Box<dyn ContentModel>> {
        codenames
            .iter()
            .filter_map(|codename| {
                let Some(payload) = ctx.linked_items().get(codename) else {
                    log::debug!("Skipping linked item '{codename}': not in linked items");
                    return None;
                };
                if ctx.is_ancestor(codename) {
                    log::debug!(
                        "Linked item '{codename}' refers back to an item being resolved; \
                         binding it without its linked items"
                    );
                    return self.bind_payload(payload, &ctx.suppressed(), ListBinding::Empty);
                }
                ctx.with_ancestor(codename, |child| self.bind_item(payload, child))
            })
            .collect()
    }

    fn resolve_url(&self, payload: &ContentItemPayload, url_slug: &str) -> Option<String> {
        let resolver = self.link_url_resolver.as_ref()?;
        resolver.resolve_link_url(&ContentLink {
            id: &payload.system.id,
            codename: payload.codename(),
            content_type: payload.content_type(),
            url_slug,
        })
    }
}

impl ModelProvider {
    fn bind_payload(
        &self,
        payload: &ContentItemPayload,
        ctx: &ResolutionContext<'_>,
        lists: ListBinding,
    ) -> Option<Box<dyn ContentModel>> {
        let Some(model_type) = self.type_provider.model_type(payload.content_type()) else {
            log::debug!(
                "No model type for content type '{}' of item '{}'",
                payload.content_type(),
                payload.codename()
            );
            return None;
        };

        let mut model = model_type.create();
        // The item's own inline references must see it on the chain.
        if ctx.is_ancestor(payload.codename()) {
            self.bind_into(&mut *model, payload, ctx, lists);
        } else {
            ctx.with_ancestor(payload.codename(), |child| {
                self.bind_into(&mut *model, payload, child, lists)
            });
        }
        Some(model)
    }
}

impl ContentItemBinder for ModelProvider {
    fn bind_item(
        &self,
        payload: &ContentItemPayload,
        ctx: &ResolutionContext<'_>,
    ) -> Option<Box<dyn ContentModel>> {
        self.bind_payload(payload, ctx, ListBinding::Expand)
    }
}

pub struct ModelProviderBuilder {
    type_provider: Box<dyn TypeProvider>,
    property_mapper: Box<dyn PropertyMapper>,
    link_url_resolver: Option<Box<dyn LinkUrlResolver>>,
    processor: InlineContentItemsProcessor,
}

impl ModelProviderBuilder {
    /// Defaults to [`NamingConventionMapper`].
    pub fn property_mapper(mut self, mapper: impl PropertyMapper + 'static) -> Self {
        self.property_mapper = Box::new(mapper);
        self
    }

    /// Without a resolver, url slug elements bind with no url.
    pub fn link_url_resolver(mut self, resolver: impl LinkUrlResolver + 'static) -> Self {
        self.link_url_resolver = Some(Box::new(resolver));
        self
    }

    pub fn inline_resolver<T: ContentModel>(
        mut self,
        resolver: impl Fn(&ResolvedContentItemData<'_, T>) -> String + Send + Sync + 'static,
    ) -> Self {
        self.processor.register_type_resolver(resolver);
        self
    }

    pub fn build(self) -> ModelProvider {
        ModelProvider {
            type_provider: self.type_provider,
            property_mapper: self.property_mapper,
            link_url_resolver: self.link_url_resolver,
            processor: self.processor,
        }
    }
}
