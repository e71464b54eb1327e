//! Core merge engine.
//!
//! Merging runs in two passes over two documents:
//!
//! 1. **Index**: scan the reference document and build a [`SourceIndex`]
//!    (exact and whitespace-relaxed lookups keyed by context and source text).
//! 2. **Merge**: scan a target document, look every message up in the index,
//!    and rewrite the matched translation spans right to left.
//!
//! Both passes share the same [`scanner`], so a message is recognized the
//! same way in either document.

pub mod index;
pub mod merge;
pub mod normalize;
pub mod rewrite;
pub mod scanner;

pub use index::{Lookup, SourceIndex, TranslationIndex, index_file};
pub use merge::{MergeReport, MergeStats, RelaxedMatch, merge_document};
pub use normalize::normalize;
pub use rewrite::{Replacement, apply_replacements};
pub use scanner::{Extractor, MessageRecord, SkipCounts, Span, TranslationSlot, extract};
