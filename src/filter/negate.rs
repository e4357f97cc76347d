//! Filter negation.
//!
//! [`negated`] inverts what a filter keeps. The complement is taken against
//! the selection the inner filter was invoked with, not against the full
//! token range: tokens removed by earlier pipeline stages stay removed. A
//! complement against all tokens would silently resurrect them.
//!
//! # Examples
//!
//! ```
//! use furui::document::Document;
//! use furui::filter::{Filter, PredicateFilter, negated};
//!
//! let is_digit = |doc: &Document| -> Vec<bool> {
//!     doc.tokens()
//!         .iter()
//!         .map(|t| t.chars().all(|c| c.is_ascii_digit()))
//!         .collect()
//! };
//!
//! let doc = Document::new(["version", "2", "of", "3"]);
//! let without_digits = negated(PredicateFilter::new(is_digit));
//! assert_eq!(without_digits.apply(&doc).unwrap().to_string(), "version of");
//! ```

use crate::document::Document;
use crate::error::Result;
use crate::filter::Filter;

/// Filter that keeps exactly the selected tokens its inner filter drops.
#[derive(Debug, Clone)]
pub struct NegateFilter<F> {
    inner: F,
}

impl<F: Filter> NegateFilter<F> {
    /// Wrap `inner`, inverting its kept set.
    pub fn new(inner: F) -> NegateFilter<F> {
        NegateFilter { inner }
    }

    /// The wrapped filter.
    pub fn inner(&self) -> &F {
        &self.inner
    }
}

impl<F: Filter> Filter for NegateFilter<F> {
    fn apply(&self, doc: &Document) -> Result<Document> {
        let filtered = self.inner.apply(doc)?;
        let keep = doc
            .selected()
            .difference(filtered.selected())
            .copied();
        Ok(doc.sub_doc(keep))
    }

    fn name(&self) -> &'static str {
        "negate"
    }
}

/// Convenience constructor for [`NegateFilter`].
pub fn negated<F: Filter>(filter: F) -> NegateFilter<F> {
    NegateFilter::new(filter)
}
