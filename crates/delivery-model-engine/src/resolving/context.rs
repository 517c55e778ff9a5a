use crate::payload::LinkedItemsIndex;

/// One frame of the ancestor chain. Frames live on the call stack of the
/// resolution that pushed them, so the chain shrinks back automatically as
/// calls return.
#[derive(Debug)]
struct Ancestor<'a> {
    codename: &'a str,
    parent: Option<&'a Ancestor<'a>>,
}

/// State threaded through one top-level resolution call.
///
/// Holds the shared linked items index, the chain of codenames currently
/// being resolved and whether inline content item expansion is suppressed in
/// this branch. A context is never mutated: descending derives a child
/// context, and siblings never see each other's children.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionContext<'a> {
    linked_items: &'a LinkedItemsIndex,
    chain: Option<&'a Ancestor<'a>>,
    suppressed: bool,
}

impl<'a> ResolutionContext<'a> {
    /// Root context: empty chain, expansion enabled.
    pub fn new(linked_items: &'a LinkedItemsIndex) -> Self {
        Self {
            linked_items,
            chain: None,
            suppressed: false,
        }
    }

    pub fn linked_items(&self) -> &'a LinkedItemsIndex {
        self.linked_items
    }

    /// Whether inline content items are stripped instead of expanded.
    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    /// Codenames on the chain, innermost first.
    pub fn ancestors(&self) -> impl Iterator<Item = &'a str> {
        std::iter::successors(self.chain, |frame| frame.parent).map(|frame| frame.codename)
    }

    pub fn is_ancestor(&self, codename: &str) -> bool {
        self.ancestors().any(|ancestor| ancestor == codename)
    }

    pub fn depth(&self) -> usize {
        self.ancestors().count()
    }

    /// Child context for a branch re-entering an ancestor. The chain is kept
    /// as is; suppression is inherited by everything resolved below.
    #[must_use]
    pub fn suppressed(&self) -> Self {
        Self {
            suppressed: true,
            ..*self
        }
    }

    /// Runs `f` with `codename` pushed onto the chain. The frame is popped
    /// when `f` returns, whichever way it returns.
    pub fn with_ancestor<R>(
        &self,
        codename: &str,
        f: impl FnOnce(&ResolutionContext<'_>) -> R,
    ) -> R {
        let frame = Ancestor {
            codename,
            parent: self.chain,
        };
        let child = ResolutionContext {
            linked_items: self.linked_items,
            chain: Some(&frame),
            suppressed: self.suppressed,
        };
        log::trace!("Descending into '{codename}' at depth {}", child.depth());
        f(&child)
    }
}
