//! Boolean predicate filter.
//!
//! # Examples
//!
//! ```
//! use furui::document::Document;
//! use furui::filter::{Filter, PredicateFilter};
//!
//! let alphabetic = |doc: &Document| -> Vec<bool> {
//!     doc.tokens()
//!         .iter()
//!         .map(|t| t.chars().all(char::is_alphabetic))
//!         .collect()
//! };
//! let filter = PredicateFilter::new(alphabetic);
//!
//! let doc = Document::new(["born", "in", "1984", "?"]);
//! assert_eq!(filter.apply(&doc).unwrap().to_string(), "born in");
//! ```

use std::fmt;
use std::sync::Arc;

use crate::document::Document;
use crate::error::Result;
use crate::filter::Filter;
use crate::function::{PropertyFunction, compute_aligned};

/// Filter that keeps the tokens a boolean property function marks as `true`.
///
/// Equivalent to a [`PropertyFilter`](crate::filter::PropertyFilter) over
/// `{true}`, without building a set for two possible values.
#[derive(Clone)]
pub struct PredicateFilter {
    function: Arc<dyn PropertyFunction<bool>>,
}

impl PredicateFilter {
    /// Create a filter from a boolean property function.
    pub fn new<F>(function: F) -> PredicateFilter
    where
        F: PropertyFunction<bool> + 'static,
    {
        PredicateFilter {
            function: Arc::new(function),
        }
    }
}

impl fmt::Debug for PredicateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateFilter").finish()
    }
}

impl Filter for PredicateFilter {
    fn apply(&self, doc: &Document) -> Result<Document> {
        let flags = compute_aligned(self.function.as_ref(), doc)?;
        let keep = doc.selected().iter().copied().filter(|&index| flags[index]);
        Ok(doc.sub_doc(keep))
    }

    fn name(&self) -> &'static str {
        "predicate"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn longer_than_two(doc: &Document) -> Vec<bool> {
        doc.tokens().iter().map(|t| t.len() > 2).collect()
    }

    #[test]
    fn test_keeps_true_positions() {
        let filter = PredicateFilter::new(longer_than_two);
        let doc = Document::new(["an", "older", "map"]);

        let result = filter.apply(&doc).unwrap();
        assert_eq!(result.to_string(), "older map");
        assert_eq!(result.tokens(), doc.tokens());
    }

    #[test]
    fn test_respects_prior_narrowing() {
        let filter = PredicateFilter::new(longer_than_two);
        let doc = Document::new(["long", "words", "only"]).sub_doc([0]);

        let result = filter.apply(&doc).unwrap();
        assert_eq!(result.selected_len(), 1);
        assert!(result.is_selected(0));
        assert!(!result.is_selected(1));
    }

    #[test]
    fn test_all_false_drops_everything() {
        let filter = PredicateFilter::new(|_doc: &Document| vec![false, false]);
        let doc = Document::new(["a", "b"]);
        assert_eq!(filter.apply(&doc).unwrap().selected_len(), 0);
    }

    #[test]
    fn test_misaligned_function_is_fatal() {
        let filter = PredicateFilter::new(|_doc: &Document| vec![true]);
        let doc = Document::new(["a", "b"]);
        assert!(filter.apply(&doc).is_err());
    }

    #[test]
    fn test_name() {
        assert_eq!(PredicateFilter::new(longer_than_two).name(), "predicate");
    }
}
