//! Property membership filter.
//!
//! This is the workhorse filter: a property function annotates every token,
//! and only tokens whose property value belongs to a required set stay
//! selected. Part-of-speech filtering, lemma vocabularies and the output of
//! the document frequency analysis all reduce to this one mechanism.
//!
//! # Examples
//!
//! ```
//! use furui::document::Document;
//! use furui::filter::{Filter, PropertyFilter};
//!
//! // Keep tokens that are not flagged as stop words.
//! let is_stop = |doc: &Document| -> Vec<bool> {
//!     doc.tokens().iter().map(|t| t == "the" || t == "on").collect()
//! };
//! let content_words = PropertyFilter::new(is_stop, [false]);
//!
//! let doc = Document::new(["the", "boat", "on", "the", "river"]);
//! let kept = content_words.apply(&doc).unwrap();
//! assert_eq!(kept.to_string(), "boat river");
//! ```

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use ahash::AHashSet;

use crate::document::Document;
use crate::error::Result;
use crate::filter::Filter;
use crate::function::{PropertyFunction, compute_aligned};

/// Filter that keeps tokens whose property value is in a required set.
pub struct PropertyFilter<P: 'static> {
    /// Computes one property value per token.
    function: Arc<dyn PropertyFunction<P>>,
    /// Property values that keep a token selected.
    values: Arc<AHashSet<P>>,
}

impl<P> PropertyFilter<P>
where
    P: Eq + Hash + 'static,
{
    /// Create a filter from a property function and the values to keep.
    ///
    /// # Examples
    ///
    /// ```
    /// use furui::document::Document;
    /// use furui::filter::PropertyFilter;
    ///
    /// let upos = |doc: &Document| -> Vec<String> {
    ///     doc.tokens().iter().map(|_| "NOUN".to_string()).collect()
    /// };
    /// let nouns_only = PropertyFilter::new(upos, ["NOUN", "PROPN"]);
    /// assert_eq!(nouns_only.len(), 2);
    /// ```
    pub fn new<F, I, V>(function: F, values: I) -> PropertyFilter<P>
    where
        F: PropertyFunction<P> + 'static,
        I: IntoIterator<Item = V>,
        V: Into<P>,
    {
        PropertyFilter {
            function: Arc::new(function),
            values: Arc::new(values.into_iter().map(Into::into).collect()),
        }
    }

    /// Create a filter from a shared property function and a prepared set.
    ///
    /// Used by the frequency filter builder, which has already computed the
    /// qualifying values with the same function.
    pub fn from_set(
        function: Arc<dyn PropertyFunction<P>>,
        values: AHashSet<P>,
    ) -> PropertyFilter<P> {
        PropertyFilter {
            function,
            values: Arc::new(values),
        }
    }

    /// Returns `true` if `value` keeps a token selected.
    pub fn contains(&self, value: &P) -> bool {
        self.values.contains(value)
    }

    /// Number of required property values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if no property value qualifies (the filter then drops
    /// every token).
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<P: 'static> Clone for PropertyFilter<P> {
    fn clone(&self) -> Self {
        PropertyFilter {
            function: Arc::clone(&self.function),
            values: Arc::clone(&self.values),
        }
    }
}

impl<P: 'static> fmt::Debug for PropertyFilter<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyFilter")
            .field("distinct_values", &self.values.len())
            .finish()
    }
}

impl<P> Filter for PropertyFilter<P>
where
    P: Eq + Hash + Send + Sync + 'static,
{
    fn apply(&self, doc: &Document) -> Result<Document> {
        let properties = compute_aligned(self.function.as_ref(), doc)?;
        let keep = doc
            .selected()
            .iter()
            .copied()
            .filter(|&index| self.values.contains(&properties[index]));
        Ok(doc.sub_doc(keep))
    }

    fn name(&self) -> &'static str {
        "property"
    }
}
