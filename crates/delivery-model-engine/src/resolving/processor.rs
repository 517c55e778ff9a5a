use crate::binding::ContentModel;
use crate::inline::{RichTextSegment, parse_rich_text};
use crate::payload::ContentItemPayload;

use super::context::ResolutionContext;
use super::registry::{ResolvedContentItemData, ResolverRegistry};

/// Binds a linked item payload into its model within a given context.
///
/// Implemented by the model provider; the processor only needs this one
/// operation to recurse.
pub trait ContentItemBinder {
    fn bind_item(
        &self,
        payload: &ContentItemPayload,
        ctx: &ResolutionContext<'_>,
    ) -> Option<Box<dyn ContentModel>>;
}

/// Expands inline content items in rich-text values.
#[derive(Debug, Default)]
pub struct InlineContentItemsProcessor {
    registry: ResolverRegistry,
}

impl InlineContentItemsProcessor {
    pub fn new(registry: ResolverRegistry) -> Self {
        Self { registry }
    }

    pub fn register_type_resolver<T: ContentModel>(
        &mut self,
        resolver: impl Fn(&ResolvedContentItemData<'_, T>) -> String + Send + Sync + 'static,
    ) {
        self.registry.register(resolver);
    }

    pub fn registry(&self) -> &ResolverRegistry {
        &self.registry
    }

    /// Replaces every inline content item in `value` with the rendering of the
    /// item it references, keeping literal runs in place.
    ///
    /// Items missing from the linked items index, and items whose model type
    /// has no resolver, contribute nothing. Inside a suppressed branch no item
    /// is expanded at all and only the literal runs remain.
    pub fn expand(
        &self,
        value: &str,
        ctx: &ResolutionContext<'_>,
        binder: &dyn ContentItemBinder,
    ) -> String {
        if ctx.is_suppressed() {
            return Self::strip(value);
        }

        let mut out = String::with_capacity(value.len());
        for segment in parse_rich_text(value) {
            match segment {
                RichTextSegment::Text(span) => out.push_str(span.slice(value)),
                RichTextSegment::ContentItem { codename, .. } => {
                    if let Some(fragment) = self.expand_item(&codename, ctx, binder) {
                        out.push_str(&fragment);
                    }
                }
            }
        }
        out
    }

    /// Literal runs of `value` with every inline content item removed.
    pub fn strip(value: &str) -> String {
        parse_rich_text(value)
            .into_iter()
            .filter_map(|segment| match segment {
                RichTextSegment::Text(span) => Some(span.slice(value)),
                RichTextSegment::ContentItem { .. } => None,
            })
            .collect()
    }

    fn expand_item(
        &self,
        codename: &str,
        ctx: &ResolutionContext<'_>,
        binder: &dyn ContentItemBinder,
    ) -> Option<String> {
        let Some(payload) = ctx.linked_items().get(codename) else {
            log::debug!("Dropping inline content item '{codename}': not in linked items");
            return None;
        };

        let model = if ctx.is_ancestor(codename) {
            log::debug!(
                "Inline content item '{codename}' refers back to an item being resolved; \
                 expanding it without its inline content items"
            );
            binder.bind_item(payload, &ctx.suppressed())?
        } else {
            ctx.with_ancestor(codename, |child| binder.bind_item(payload, child))?
        };

        let rendered = self.registry.resolve(&*model, codename);
        if rendered.is_none() {
            log::debug!(
                "Dropping inline content item '{codename}': no resolver for {}",
                model.type_name()
            );
        }
        rendered
    }
}
