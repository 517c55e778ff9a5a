pub mod binding;
pub mod inline;
pub mod payload;
pub mod provider;
pub mod resolving;

// Re-export key types for easier usage
pub use binding::{
    ContentLink, ContentModel, ElementValue, LinkUrlResolver, ModelType, NamingConventionMapper,
    PropertyMapper, TypeProvider, TypeRegistry,
};
pub use payload::{
    ContentItemPayload, ElementPayload, ItemListingResponse, ItemResponse, LinkedItemsIndex,
    PayloadError, SystemAttributes, TaxonomyTerm,
};
pub use provider::{ModelProvider, ModelProviderBuilder};
pub use resolving::{
    InlineContentItemsProcessor, ResolutionContext, ResolvedContentItemData, ResolverRegistry,
};
