//! Documents as tokenized text with a progressively narrowed selection.
//!
//! A [`Document`] owns an immutable, ordered token sequence together with a
//! sorted set of selected indices into that sequence. Narrowing a document
//! never rewrites the tokens; it only shrinks the selection, so every
//! intermediate stage of a pipeline can still report positions against the
//! original text.
//!
//! # Examples
//!
//! ```
//! use furui::document::Document;
//!
//! let doc = Document::new(["the", "crisp", "morning", "air"]);
//! assert_eq!(doc.len(), 4);
//! assert_eq!(doc.selected_len(), 4);
//!
//! // Keep only the content words. Iteration reports original positions.
//! let narrowed = doc.sub_doc([1, 2, 3]);
//! assert_eq!(narrowed.to_string(), "crisp morning air");
//! assert_eq!(narrowed.tokens(), doc.tokens());
//!
//! let pairs: Vec<(usize, &str)> = narrowed.selected_tokens().collect();
//! assert_eq!(pairs, [(1, "crisp"), (2, "morning"), (3, "air")]);
//! ```

use std::collections::BTreeSet;
use std::collections::btree_set;
use std::fmt;
use std::sync::Arc;

/// Sorted set of token indices a document currently keeps.
pub type Selection = BTreeSet<usize>;

/// A tokenized document with a selection of kept token indices.
///
/// The token sequence is shared behind an [`Arc`], so deriving sub-documents
/// is cheap: only the selection is rebuilt. Two documents compare equal when
/// both their tokens and their selections match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Document {
    /// The full token sequence, fixed at construction.
    tokens: Arc<[String]>,
    /// Indices into `tokens` that are still kept.
    selected: Selection,
}

impl Document {
    /// Create a document from a token sequence with every token selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use furui::document::Document;
    ///
    /// let doc = Document::new(["at", "0.3", "meters"]);
    /// assert!(doc.is_selected(2));
    /// ```
    pub fn new<I, S>(tokens: I) -> Document
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Arc<[String]> = tokens.into_iter().map(Into::into).collect();
        let selected = (0..tokens.len()).collect();
        Document { tokens, selected }
    }

    /// Derive a document over the same tokens with `keep` as its selection.
    ///
    /// The caller is responsible for passing indices that are in range and,
    /// when narrowing, a subset of the current selection. Filters built on
    /// top of this method always derive `keep` from [`Document::selected`],
    /// which guarantees both.
    ///
    /// # Examples
    ///
    /// ```
    /// use furui::document::Document;
    ///
    /// let doc = Document::new(["a", "b", "c"]);
    /// let sub = doc.sub_doc([0, 2]);
    /// assert_eq!(sub.selected_tokens().collect::<Vec<_>>(), [(0, "a"), (2, "c")]);
    /// ```
    pub fn sub_doc<I>(&self, keep: I) -> Document
    where
        I: IntoIterator<Item = usize>,
    {
        let selected: Selection = keep.into_iter().collect();
        debug_assert!(
            selected.last().is_none_or(|&max| max < self.tokens.len()),
            "selection index out of range"
        );
        Document {
            tokens: Arc::clone(&self.tokens),
            selected,
        }
    }

    /// All tokens of the document, selected or not.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The token at `index`, selected or not.
    pub fn token(&self, index: usize) -> Option<&str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Number of tokens in the full sequence.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the document has no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The currently selected indices, in ascending order.
    pub fn selected(&self) -> &Selection {
        &self.selected
    }

    /// Number of currently selected tokens.
    pub fn selected_len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if `index` is currently selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Iterate over `(index, token)` pairs for the selected tokens, in
    /// original text order.
    ///
    /// Excluded tokens never show up, but their removal stays visible through
    /// the reported indices.
    pub fn selected_tokens(&self) -> SelectedTokens<'_> {
        SelectedTokens {
            tokens: &self.tokens,
            indices: self.selected.iter(),
        }
    }
}

/// Iterator over a document's selected `(index, token)` pairs, in ascending
/// index order.
pub struct SelectedTokens<'a> {
    tokens: &'a [String],
    indices: btree_set::Iter<'a, usize>,
}

impl<'a> Iterator for SelectedTokens<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.indices.next().map(|&i| (i, self.tokens[i].as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl ExactSizeIterator for SelectedTokens<'_> {}

impl<'a> IntoIterator for &'a Document {
    type Item = (usize, &'a str);
    type IntoIter = SelectedTokens<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.selected_tokens()
    }
}

impl fmt::Display for Document {
    /// Joins the selected tokens with single spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (_, token) in self.selected_tokens() {
            if first {
                first = false;
            } else {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}
