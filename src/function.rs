//! Collaborator functions supplied by the calling application.
//!
//! The pipeline core never inspects token text on its own. Everything it
//! knows about a document comes through three small traits: [`Tokenizer`]
//! turns raw text into tokens, [`PropertyFunction`] annotates every token of
//! a document with one property value, and [`SplitFunction`] partitions a
//! document's token range into groups. All three are implemented for plain
//! closures, so most callers never write an impl block.
//!
//! # Examples
//!
//! ```
//! use furui::document::Document;
//! use furui::function::{PropertyFunction, Tokenizer};
//!
//! // Closures over the full token sequence act as property functions.
//! let lengths = |doc: &Document| -> Vec<usize> {
//!     doc.tokens().iter().map(|t| t.chars().count()).collect()
//! };
//!
//! let doc = Document::new(["so", "long"]);
//! assert_eq!(lengths.compute(&doc).unwrap(), vec![2, 4]);
//!
//! let whitespace = |text: &str| -> Vec<String> {
//!     text.split_whitespace().map(str::to_string).collect()
//! };
//! assert_eq!(whitespace.tokenize("a b").unwrap(), vec!["a", "b"]);
//! ```

use crate::document::Document;
use crate::error::{FuruiError, Result};

/// Turns raw text into the token sequence of a new document.
///
/// Wrappers around external NLP models should implement this trait directly
/// so they can surface model failures as errors; pure functions can be passed
/// as closures.
pub trait Tokenizer: Send + Sync {
    /// Tokenize `text` into the full, ordered token sequence.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(self(text))
    }
}

/// Computes one property value per token of a document.
///
/// The output must be aligned with [`Document::tokens`]: exactly one value
/// for every token of the full sequence, selected or not. Filters and the
/// frequency analysis check this alignment and treat a mismatch as a fatal
/// [`FuruiError::Property`].
pub trait PropertyFunction<P>: Send + Sync {
    /// Compute the token-aligned property vector for `doc`.
    fn compute(&self, doc: &Document) -> Result<Vec<P>>;
}

impl<P, F> PropertyFunction<P> for F
where
    F: Fn(&Document) -> Vec<P> + Send + Sync,
{
    fn compute(&self, doc: &Document) -> Result<Vec<P>> {
        Ok(self(doc))
    }
}

/// Splits a document's token range into groups, e.g. sentences or
/// paragraphs.
///
/// The groups must cover every index in `0..doc.len()` exactly once. The
/// group-length filter validates this and reports violations as a fatal
/// [`FuruiError::Split`].
pub trait SplitFunction: Send + Sync {
    /// Partition the token indices of `doc` into groups.
    fn split(&self, doc: &Document) -> Result<Vec<Vec<usize>>>;
}

impl<F> SplitFunction for F
where
    F: Fn(&Document) -> Vec<Vec<usize>> + Send + Sync,
{
    fn split(&self, doc: &Document) -> Result<Vec<Vec<usize>>> {
        Ok(self(doc))
    }
}

/// Compute a property vector and verify it is aligned with the full token
/// sequence.
pub(crate) fn compute_aligned<P, F>(function: &F, doc: &Document) -> Result<Vec<P>>
where
    F: PropertyFunction<P> + ?Sized,
{
    let properties = function.compute(doc)?;
    if properties.len() != doc.len() {
        return Err(FuruiError::misaligned_property(
            doc.len(),
            properties.len(),
        ));
    }
    Ok(properties)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Marks every token with whether it is longer than three characters.
    struct LongTokenTagger;

    impl PropertyFunction<bool> for LongTokenTagger {
        fn compute(&self, doc: &Document) -> Result<Vec<bool>> {
            Ok(doc.tokens().iter().map(|t| t.len() > 3).collect())
        }
    }

    /// Always fails, standing in for an unavailable external model.
    struct BrokenTagger;

    impl PropertyFunction<String> for BrokenTagger {
        fn compute(&self, _doc: &Document) -> Result<Vec<String>> {
            Err(FuruiError::filter("tagger offline"))
        }
    }

    #[test]
    fn test_closure_as_tokenizer() {
        let tokenizer = |text: &str| -> Vec<String> {
            text.split_whitespace().map(str::to_string).collect()
        };
        let tokens = tokenizer.tokenize("split me up").unwrap();
        assert_eq!(tokens, ["split", "me", "up"]);
    }

    #[test]
    fn test_closure_as_property_function() {
        let first_chars = |doc: &Document| -> Vec<Option<char>> {
            doc.tokens().iter().map(|t| t.chars().next()).collect()
        };
        let doc = Document::new(["ab", "cd"]);
        let props = first_chars.compute(&doc).unwrap();
        assert_eq!(props, [Some('a'), Some('c')]);
    }

    #[test]
    fn test_closure_as_split_function() {
        let halves = |doc: &Document| -> Vec<Vec<usize>> {
            let mid = doc.len() / 2;
            vec![(0..mid).collect(), (mid..doc.len()).collect()]
        };
        let doc = Document::new(["a", "b", "c", "d"]);
        let groups = halves.split(&doc).unwrap();
        assert_eq!(groups, [vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_manual_impl_as_property_function() {
        let doc = Document::new(["tiny", "big", "gigantic"]);
        let props = LongTokenTagger.compute(&doc).unwrap();
        assert_eq!(props, [true, false, true]);
    }

    #[test]
    fn test_compute_aligned_accepts_matching_length() {
        let doc = Document::new(["a", "b"]);
        let props = compute_aligned(&LongTokenTagger, &doc).unwrap();
        assert_eq!(props.len(), doc.len());
    }

    #[test]
    fn test_compute_aligned_rejects_short_output() {
        let truncated = |_doc: &Document| -> Vec<usize> { vec![1] };
        let doc = Document::new(["a", "b", "c"]);
        let err = compute_aligned(&truncated, &doc).unwrap_err();
        assert!(matches!(err, FuruiError::Property(_)));
    }

    #[test]
    fn test_failing_function_propagates_error() {
        let doc = Document::new(["a"]);
        let err = compute_aligned(&BrokenTagger, &doc).unwrap_err();
        assert!(matches!(err, FuruiError::Filter(_)));
    }
}
