//! Filter implementations for narrowing document selections.

use std::sync::Arc;

use crate::document::Document;
use crate::error::Result;

/// Trait for filters that narrow a document's selection.
///
/// A filter is a pure transform: the returned document carries the same token
/// sequence, and its selection is a subset of the input's selection. Every
/// filter in this crate derives its kept set from the input's selected
/// indices, which makes the subset contract hold by construction.
pub trait Filter: Send + Sync {
    /// Apply this filter to a document, producing a narrowed copy.
    fn apply(&self, doc: &Document) -> Result<Document>;

    /// Get the name of this filter (for debugging and pipeline display).
    fn name(&self) -> &'static str;
}

impl<F: Filter + ?Sized> Filter for Arc<F> {
    fn apply(&self, doc: &Document) -> Result<Document> {
        (**self).apply(doc)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

// Individual filter modules
pub mod frequency;
pub mod group_length;
pub mod negate;
pub mod predicate;
pub mod property;

// Re-export all filters for convenient access
pub use frequency::FrequencyFilterBuilder;
pub use group_length::GroupLengthFilter;
pub use negate::{NegateFilter, negated};
pub use predicate::PredicateFilter;
pub use property::PropertyFilter;
