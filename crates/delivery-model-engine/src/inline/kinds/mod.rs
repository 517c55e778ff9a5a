//! # Inline Kinds
//!
//! Types that own the delimiters and attribute names of inline constructs.
//! The parser reads these constants; it never hardcodes `<object` or
//! attribute names itself.

pub mod inline_object;

pub use inline_object::InlineObject;
