use std::any::{Any, TypeId};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::payload::{Asset, SystemAttributes, TaxonomyTerm};

/// Upcasting helpers so `dyn ContentModel` can be downcast to its concrete type.
/// Implemented for every `'static` type.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
    fn model_type_name(&self) -> &'static str;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }

    fn model_type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}

/// A strongly-typed model that payload elements are bound into.
///
/// Binding asks the model for its bindable properties, finds the matching
/// element for each one and hands over the converted value. Properties
/// without a matching element keep their default.
pub trait ContentModel: AsAny + fmt::Debug + Send + 'static {
    /// Bindable property names, in binding order.
    fn properties(&self) -> Vec<Cow<'static, str>>;

    /// Assigns a converted element value to `property`.
    fn bind(&mut self, property: &str, value: ElementValue);

    /// Receives the `system` section of the payload before elements are bound.
    fn bind_system(&mut self, _system: &SystemAttributes) {}
}

impl dyn ContentModel {
    pub fn model_type_id(&self) -> TypeId {
        AsAny::as_any(self).type_id()
    }

    /// Name of the concrete model type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        AsAny::model_type_name(self)
    }

    pub fn is<T: ContentModel>(&self) -> bool {
        AsAny::as_any(self).is::<T>()
    }

    pub fn downcast_ref<T: ContentModel>(&self) -> Option<&T> {
        AsAny::as_any(self).downcast_ref::<T>()
    }

    pub fn downcast<T: ContentModel>(self: Box<Self>) -> Option<Box<T>> {
        AsAny::into_any(self).downcast::<T>().ok()
    }
}

/// An element converted for binding.
#[derive(Debug)]
pub enum ElementValue {
    Text(String),
    Number(Option<f64>),
    DateTime(Option<DateTime<Utc>>),
    /// Rich text with its inline content items already expanded (or stripped
    /// inside a suppressed branch).
    RichText(String),
    /// Codenames of the selected options.
    MultipleChoice(Vec<String>),
    Taxonomy(Vec<TaxonomyTerm>),
    Assets(Vec<Asset>),
    /// Bound models of the linked items, in list order.
    LinkedItems(Vec<Box<dyn ContentModel>>),
    UrlSlug {
        slug: String,
        /// URL produced by the link url resolver, if any.
        url: Option<String>,
    },
}

impl ElementValue {
    /// Element kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Number(_) => "number",
            Self::DateTime(_) => "date_time",
            Self::RichText(_) => "rich_text",
            Self::MultipleChoice(_) => "multiple_choice",
            Self::Taxonomy(_) => "taxonomy",
            Self::Assets(_) => "asset",
            Self::LinkedItems(_) => "modular_content",
            Self::UrlSlug { .. } => "url_slug",
        }
    }

    /// The string form of textual kinds. A url slug yields its resolved url
    /// when there is one, otherwise the raw slug.
    pub fn into_string(self) -> Option<String> {
        match self {
            Self::Text(s) | Self::RichText(s) => Some(s),
            Self::UrlSlug { slug, url } => Some(url.unwrap_or(slug)),
            _ => None,
        }
    }
}

/// Runtime identity of a model type plus a factory for default instances.
#[derive(Clone)]
pub struct ModelType {
    type_id: TypeId,
    type_name: &'static str,
    factory: Arc<dyn Fn() -> Box<dyn ContentModel> + Send + Sync>,
}

impl ModelType {
    pub fn of<T: ContentModel + Default>() -> Self {
        Self::with_factory(T::default)
    }

    /// For models that need construction parameters, such as a model shared
    /// by several content types.
    pub fn with_factory<T: ContentModel>(factory: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            factory: Arc::new(move || -> Box<dyn ContentModel> { Box::new(factory()) }),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn create(&self) -> Box<dyn ContentModel> {
        (self.factory)()
    }
}

impl fmt::Debug for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelType")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}
