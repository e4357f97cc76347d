//! Pipelines that chain filters over documents.
//!
//! A [`Pipeline`] is an ordered sequence of shared filters. Applying it folds
//! the document through every filter in order, so each stage sees the
//! selection its predecessors left behind. Order is significant whenever a
//! filter's kept set depends on the incoming selection, negation being the
//! usual example.
//!
//! Per-document filtering shares no mutable state, which makes the document
//! stream embarrassingly parallel; [`Pipeline::par_apply_documents`] fans it
//! out across the rayon thread pool and collects results in input order.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use furui::document::Document;
//! use furui::error::Result;
//! use furui::filter::{PredicateFilter, negated};
//! use furui::pipeline::{Pipeline, tokenize_documents};
//!
//! let whitespace = |text: &str| -> Vec<String> {
//!     text.split_whitespace().map(str::to_string).collect()
//! };
//! let docs: Vec<Document> = tokenize_documents(["the old port", "a new ship"], &whitespace)
//!     .collect::<Result<Vec<_>>>()
//!     .unwrap();
//!
//! let is_article = |doc: &Document| -> Vec<bool> {
//!     doc.tokens().iter().map(|t| t == "the" || t == "a").collect()
//! };
//! let pipeline = Pipeline::new()
//!     .add_filter(Arc::new(negated(PredicateFilter::new(is_article))))
//!     .with_name("drop_articles");
//!
//! let filtered: Vec<Document> = pipeline
//!     .apply_documents(&docs)
//!     .collect::<Result<Vec<_>>>()
//!     .unwrap();
//!
//! assert_eq!(filtered[0].to_string(), "old port");
//! assert_eq!(filtered[1].to_string(), "new ship");
//! ```

use std::sync::Arc;

use log::{debug, trace};
use rayon::prelude::*;

use crate::document::Document;
use crate::error::Result;
use crate::filter::Filter;
use crate::function::{PropertyFunction, Tokenizer, compute_aligned};

/// An ordered chain of filters applied document by document.
///
/// Pipelines implement [`Filter`] themselves, so they can be nested inside
/// other pipelines or negated as a unit.
#[derive(Clone)]
pub struct Pipeline {
    filters: Vec<Arc<dyn Filter>>,
    name: String,
}

impl Pipeline {
    /// Create an empty pipeline, which behaves as the identity.
    pub fn new() -> Pipeline {
        Pipeline {
            filters: Vec::new(),
            name: "pipeline".to_string(),
        }
    }

    /// Append a filter to the end of the chain.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this pipeline.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// The pipeline's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the filters in application order.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Number of filters in the chain.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns `true` if the pipeline contains no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Run the document through every filter in order.
    pub fn apply(&self, doc: &Document) -> Result<Document> {
        let mut current = doc.clone();
        for filter in &self.filters {
            current = filter.apply(&current)?;
        }
        trace!(
            "pipeline {} narrowed {} selected tokens to {}",
            self.name,
            doc.selected_len(),
            current.selected_len()
        );
        Ok(current)
    }

    /// Apply the pipeline lazily to a stream of documents.
    pub fn apply_documents<'a, I>(
        &'a self,
        documents: I,
    ) -> impl Iterator<Item = Result<Document>> + 'a
    where
        I: IntoIterator<Item = &'a Document>,
        I::IntoIter: 'a,
    {
        documents.into_iter().map(move |doc| self.apply(doc))
    }

    /// Apply the pipeline to all documents in parallel.
    ///
    /// Results come back in input order. The first filter error aborts the
    /// whole batch.
    pub fn par_apply_documents(&self, documents: &[Document]) -> Result<Vec<Document>> {
        debug!(
            "pipeline {} filtering {} documents in parallel",
            self.name,
            documents.len()
        );
        documents
            .par_iter()
            .map(|doc| self.apply(doc))
            .collect::<Result<Vec<_>>>()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Pipeline::new()
    }
}

impl Filter for Pipeline {
    fn apply(&self, doc: &Document) -> Result<Document> {
        Pipeline::apply(self, doc)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("name", &self.name)
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Tokenize raw texts into documents with every token selected.
///
/// Lazy like [`Pipeline::apply_documents`]: each text is tokenized when the
/// iterator reaches it, and a tokenizer failure surfaces as that item.
pub fn tokenize_documents<'a, T, I, S>(
    texts: I,
    tokenizer: &'a T,
) -> impl Iterator<Item = Result<Document>> + 'a
where
    T: Tokenizer + ?Sized,
    I: IntoIterator<Item = S>,
    I::IntoIter: 'a,
    S: AsRef<str>,
{
    texts
        .into_iter()
        .map(move |text| Ok(Document::new(tokenizer.tokenize(text.as_ref())?)))
}

/// Compute a property for every document and keep only the values at
/// selected positions, in index order.
///
/// This is the export step after a pipeline has run: it projects per-token
/// annotations, e.g. lemmas, onto whatever the pipeline kept.
pub fn selected_properties<'a, P, F, I>(
    documents: I,
    function: &'a F,
) -> impl Iterator<Item = Result<Vec<P>>> + 'a
where
    F: PropertyFunction<P> + ?Sized,
    I: IntoIterator<Item = &'a Document>,
    I::IntoIter: 'a,
{
    documents.into_iter().map(move |doc| {
        let properties = compute_aligned(function, doc)?;
        let mut kept = Vec::with_capacity(doc.selected_len());
        for (index, property) in properties.into_iter().enumerate() {
            if doc.is_selected(index) {
                kept.push(property);
            }
        }
        Ok(kept)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{PropertyFilter, negated};

    fn token_text(doc: &Document) -> Vec<String> {
        doc.tokens().to_vec()
    }

    fn keep(values: &[&str]) -> Arc<dyn Filter> {
        Arc::new(PropertyFilter::new(token_text, values.to_vec()))
    }

    /// Keeps only the first `n` currently selected tokens. Used to exercise
    /// ordering, since its kept set depends on the incoming selection.
    struct KeepFirst(usize);

    impl Filter for KeepFirst {
        fn apply(&self, doc: &Document) -> Result<Document> {
            let keep: Vec<usize> = doc.selected().iter().copied().take(self.0).collect();
            Ok(doc.sub_doc(keep))
        }

        fn name(&self) -> &'static str {
            "keep_first"
        }
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let pipeline = Pipeline::new();
        let doc = Document::new(["a", "b"]).sub_doc([1]);

        assert!(pipeline.is_empty());
        assert_eq!(pipeline.apply(&doc).unwrap(), doc);
    }

    #[test]
    fn test_filters_apply_in_order() {
        let doc = Document::new(["a", "b"]);

        let first_then_negate = Pipeline::new()
            .add_filter(Arc::new(KeepFirst(1)))
            .add_filter(Arc::new(negated(PropertyFilter::new(token_text, ["a"]))));
        let negate_then_first = Pipeline::new()
            .add_filter(Arc::new(negated(PropertyFilter::new(token_text, ["a"]))))
            .add_filter(Arc::new(KeepFirst(1)));

        // KeepFirst(1) leaves {a}, negation then drops it.
        assert_eq!(first_then_negate.apply(&doc).unwrap().selected_len(), 0);
        // Negation leaves {b}, which KeepFirst(1) keeps.
        assert_eq!(negate_then_first.apply(&doc).unwrap().to_string(), "b");
    }

    #[test]
    fn test_each_stage_sees_the_previous_selection() {
        let doc = Document::new(["a", "b", "c"]);
        let pipeline = Pipeline::new()
            .add_filter(keep(&["a", "b"]))
            .add_filter(Arc::new(negated(PropertyFilter::new(token_text, ["a"]))));

        // The complement is taken within {a, b}; "c" must not reappear.
        let result = pipeline.apply(&doc).unwrap();
        assert_eq!(result.to_string(), "b");
    }

    #[test]
    fn test_apply_documents_is_lazy_and_ordered() {
        let docs = vec![
            Document::new(["a", "x"]),
            Document::new(["y", "a"]),
            Document::new(["z"]),
        ];
        let pipeline = Pipeline::new().add_filter(keep(&["a"]));

        let mut stream = pipeline.apply_documents(&docs);
        assert_eq!(stream.next().unwrap().unwrap().to_string(), "a");
        assert_eq!(stream.next().unwrap().unwrap().to_string(), "a");
        assert_eq!(stream.next().unwrap().unwrap().to_string(), "");
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_par_apply_matches_sequential_results() {
        let docs: Vec<Document> = (0..64)
            .map(|i| Document::new([format!("t{}", i % 7), "a".to_string()]))
            .collect();
        let pipeline = Pipeline::new()
            .add_filter(keep(&["a", "t0", "t3"]))
            .add_filter(Arc::new(negated(PropertyFilter::new(token_text, ["t3"]))));

        let sequential: Vec<Document> = pipeline
            .apply_documents(&docs)
            .collect::<Result<Vec<_>>>()
            .unwrap();
        let parallel = pipeline.par_apply_documents(&docs).unwrap();

        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_error_aborts_the_batch() {
        let misaligned = |_doc: &Document| -> Vec<String> { Vec::new() };
        let pipeline =
            Pipeline::new().add_filter(Arc::new(PropertyFilter::new(misaligned, ["a"])));
        let docs = vec![Document::new(["a"])];

        assert!(pipeline.apply(&docs[0]).is_err());
        assert!(pipeline.par_apply_documents(&docs).is_err());
    }

    #[test]
    fn test_pipelines_nest_as_filters() {
        let inner = Pipeline::new()
            .add_filter(keep(&["a", "b"]))
            .with_name("inner");
        let outer = Pipeline::new()
            .add_filter(Arc::new(inner))
            .add_filter(Arc::new(negated(PropertyFilter::new(token_text, ["b"]))));

        let doc = Document::new(["a", "b", "c"]);
        assert_eq!(outer.apply(&doc).unwrap().to_string(), "a");
    }

    #[test]
    fn test_tokenize_documents_selects_everything() {
        let whitespace = |text: &str| -> Vec<String> {
            text.split_whitespace().map(str::to_string).collect()
        };
        let docs: Vec<Document> = tokenize_documents(["one two", ""], &whitespace)
            .collect::<Result<Vec<_>>>()
            .unwrap();

        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].selected_len(), 2);
        assert!(docs[1].is_empty());
    }

    #[test]
    fn test_tokenize_documents_is_lazy() {
        struct CountingTokenizer(std::sync::atomic::AtomicUsize);

        impl Tokenizer for CountingTokenizer {
            fn tokenize(&self, text: &str) -> Result<Vec<String>> {
                self.0.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
                Ok(text.split_whitespace().map(str::to_string).collect())
            }
        }

        let tokenizer = CountingTokenizer(std::sync::atomic::AtomicUsize::new(0));
        let mut stream = tokenize_documents(["a", "b", "c"], &tokenizer);

        assert!(stream.next().is_some());
        assert_eq!(tokenizer.0.load(std::sync::atomic::Ordering::Relaxed), 1);
        drop(stream);
    }

    #[test]
    fn test_selected_properties_projects_onto_the_selection() {
        use crate::filter::PredicateFilter;

        let doc = Document::new(["a", "b", "c", "d", "e", "f"]);
        let even_index = |doc: &Document| -> Vec<bool> {
            (0..doc.len()).map(|i| i % 2 == 0).collect()
        };
        let narrowed = PredicateFilter::new(even_index).apply(&doc).unwrap();

        let uppercase = |doc: &Document| -> Vec<String> {
            doc.tokens().iter().map(|t| t.to_uppercase()).collect()
        };

        let projected: Vec<Vec<String>> = selected_properties(&[narrowed], &uppercase)
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(projected, [["A", "C", "E"]]);
    }

    #[test]
    fn test_selected_properties_misalignment_is_fatal() {
        let truncated = |_doc: &Document| -> Vec<usize> { vec![0] };
        let docs = vec![Document::new(["a", "b"])];

        let mut stream = selected_properties(&docs, &truncated);
        assert!(stream.next().unwrap().is_err());
    }

    #[test]
    fn test_pipeline_naming_and_debug() {
        let pipeline = Pipeline::new()
            .add_filter(keep(&["a"]))
            .with_name("cleanup");

        assert_eq!(pipeline.name(), "cleanup");
        assert_eq!(pipeline.len(), 1);

        let rendered = format!("{pipeline:?}");
        assert!(rendered.contains("cleanup"));
        assert!(rendered.contains("property"));
    }
}
