use super::span::Span;

/// A piece of a parsed rich-text value.
///
/// Segments cover the whole value in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RichTextSegment {
    /// Literal markup that is emitted unchanged.
    Text(Span),
    /// An inline content item object.
    ContentItem {
        /// Full span of the object, closing tag included when present.
        full: Span,
        /// Codename of the referenced item, entities decoded.
        codename: String,
    },
}

impl RichTextSegment {
    pub fn span(&self) -> Span {
        match self {
            Self::Text(span) => *span,
            Self::ContentItem { full, .. } => *full,
        }
    }
}
