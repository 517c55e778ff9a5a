//! # Rich-Text Parsing
//!
//! Cursor-based parsing of rich-text element values into literal runs and
//! inline content item objects.
//!
//! ## Modules
//!
//! - **`types`**: `RichTextSegment` enum (Text, ContentItem)
//! - **`kinds`**: `InlineObject`, owner of the object delimiters and attribute names
//! - **`cursor`**: `Cursor` for byte-by-byte parsing with save/restore
//! - **`span`**: `Span` byte ranges into the parsed value
//! - **`parser`**: `parse_rich_text()` main entry point
//!
//! ## Tolerance
//!
//! A single malformed object never fails the parse. Whatever can be read of
//! its codename is used and the rest of the value keeps parsing as usual.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod span;
pub mod types;

pub use parser::{inline_codenames, parse_rich_text};
pub use span::Span;
pub use types::RichTextSegment;
