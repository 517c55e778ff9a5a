/// A byte range `[start, end)` into a rich-text value.
///
/// Segments store spans rather than copied text so the literal runs of a value
/// can be sliced out without allocating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns the text this span covers in `s`.
    ///
    /// Spans produced by the parser always fall on char boundaries of the
    /// string they were parsed from.
    pub fn slice(self, s: &str) -> &str {
        &s[self.start..self.end]
    }
}
