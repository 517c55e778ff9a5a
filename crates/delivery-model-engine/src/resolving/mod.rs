//! # Resolution
//!
//! Cycle-safe expansion of inline content items.
//!
//! Expansion is a depth-first walk. Every codename being resolved sits on the
//! ancestor chain of the [`ResolutionContext`]; meeting one of them again
//! means a cycle. The cyclic item is still bound and rendered once more, but
//! in a suppressed branch where rich text keeps only its literal runs, so the
//! walk always terminates.
//!
//! - **`context`**: `ResolutionContext`, the linked items index plus the
//!   ancestor chain and suppression flag
//! - **`registry`**: `ResolverRegistry`, model type → renderer
//! - **`processor`**: `InlineContentItemsProcessor`, the expansion itself

pub mod context;
pub mod processor;
pub mod registry;

pub use context::ResolutionContext;
pub use processor::{ContentItemBinder, InlineContentItemsProcessor};
pub use registry::{ResolvedContentItemData, ResolverRegistry};
