//! # Binding
//!
//! The seams between payloads and strongly-typed models.
//!
//! Rust has no runtime reflection, so the model side describes itself through
//! [`ContentModel`] and the lookups that would otherwise be reflective are
//! injected capabilities:
//!
//! - **`TypeProvider`**: type discriminator → [`ModelType`]
//! - **`PropertyMapper`**: does a model property bind to a given element
//! - **`LinkUrlResolver`**: URL for a url slug element
//!
//! Each capability has a default implementation (`TypeRegistry`,
//! `NamingConventionMapper`) and closures implement the latter two.

pub mod capabilities;
pub mod model;

pub use capabilities::{
    ContentLink, LinkUrlResolver, NamingConventionMapper, PropertyMapper, TypeProvider,
    TypeRegistry,
};
pub use model::{AsAny, ContentModel, ElementValue, ModelType};
