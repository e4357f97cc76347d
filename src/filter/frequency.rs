//! Frequency-based filter construction.
//!
//! This is the one filter that cannot be built from a single document: it
//! needs document frequencies over a whole corpus first. The builder runs the
//! collection pass of [`DocumentFrequencies`], selects the property values
//! whose frequency falls within the configured thresholds, and hands the
//! qualifying set to a [`PropertyFilter`] over the same property function.
//!
//! # Examples
//!
//! ```
//! use furui::document::Document;
//! use furui::filter::{Filter, FrequencyFilterBuilder};
//!
//! let corpus = vec![
//!     Document::new(["a", "b"]),
//!     Document::new(["a"]),
//!     Document::new(["a"]),
//!     Document::new(["c"]),
//! ];
//!
//! // "a" occurs in three documents, "b" and "c" in one each.
//! let text = |doc: &Document| -> Vec<String> { doc.tokens().to_vec() };
//! let filter = FrequencyFilterBuilder::new(text)
//!     .min_count(2)
//!     .max_count(3)
//!     .build(&corpus)
//!     .unwrap();
//!
//! let kept = filter.apply(&corpus[0]).unwrap();
//! assert_eq!(kept.to_string(), "a");
//! ```

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use log::debug;

use crate::document::Document;
use crate::error::Result;
use crate::filter::PropertyFilter;
use crate::frequency::{DocumentFrequencies, FrequencyThresholds};
use crate::function::PropertyFunction;

/// Builder for filters keyed on corpus-wide document frequency.
///
/// The builder itself is corpus-independent: one configured builder can be
/// applied to several corpora, or to several frequency tables via
/// [`FrequencyFilterBuilder::build_from_table`].
pub struct FrequencyFilterBuilder<P: 'static> {
    function: Arc<dyn PropertyFunction<P>>,
    thresholds: FrequencyThresholds,
    count_only_selected: bool,
}

impl<P> FrequencyFilterBuilder<P>
where
    P: Eq + Hash + Clone + 'static,
{
    /// Start a builder around the property function the frequencies and the
    /// final membership test are both based on.
    pub fn new<F>(function: F) -> FrequencyFilterBuilder<P>
    where
        F: PropertyFunction<P> + 'static,
    {
        FrequencyFilterBuilder {
            function: Arc::new(function),
            thresholds: FrequencyThresholds::default(),
            count_only_selected: false,
        }
    }

    /// Replace the whole threshold configuration.
    pub fn thresholds(mut self, thresholds: FrequencyThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Keep properties occurring in at least `count` documents.
    pub fn min_count(mut self, count: usize) -> Self {
        self.thresholds.min_count = Some(count);
        self
    }

    /// Keep properties occurring in at most `count` documents.
    pub fn max_count(mut self, count: usize) -> Self {
        self.thresholds.max_count = Some(count);
        self
    }

    /// Lower bound as a fraction of the corpus size; overrides `min_count`.
    pub fn min_rate(mut self, rate: f64) -> Self {
        self.thresholds.min_rate = Some(rate);
        self
    }

    /// Upper bound as a fraction of the corpus size; overrides `max_count`.
    pub fn max_rate(mut self, rate: f64) -> Self {
        self.thresholds.max_rate = Some(rate);
        self
    }

    /// Use strict comparisons on both bounds.
    pub fn open(mut self, open: bool) -> Self {
        self.thresholds.open = open;
        self
    }

    /// Count frequencies over selected token positions only.
    pub fn count_only_selected(mut self, only_selected: bool) -> Self {
        self.count_only_selected = only_selected;
        self
    }

    /// Scan `corpus` and build the filter.
    ///
    /// The corpus must be fully materialized: the frequency table has to be
    /// complete before the membership set, and with it the filter, exists.
    pub fn build(&self, corpus: &[Document]) -> Result<PropertyFilter<P>> {
        let table = if self.count_only_selected {
            DocumentFrequencies::analyze_selected(corpus, self.function.as_ref())?
        } else {
            DocumentFrequencies::analyze(corpus, self.function.as_ref())?
        };
        Ok(self.build_from_table(&table))
    }

    /// Build the filter from an already collected frequency table.
    ///
    /// Lets callers reuse one table with several threshold configurations
    /// instead of re-scanning the corpus. The table must come from the same
    /// property function for the membership test to be meaningful.
    pub fn build_from_table(&self, table: &DocumentFrequencies<P>) -> PropertyFilter<P> {
        let qualifying = table.select(&self.thresholds);
        debug!(
            "frequency filter keeps {} of {} distinct properties",
            qualifying.len(),
            table.len()
        );
        PropertyFilter::from_set(Arc::clone(&self.function), qualifying)
    }
}

impl<P: 'static> Clone for FrequencyFilterBuilder<P> {
    fn clone(&self) -> Self {
        FrequencyFilterBuilder {
            function: Arc::clone(&self.function),
            thresholds: self.thresholds,
            count_only_selected: self.count_only_selected,
        }
    }
}

impl<P: 'static> fmt::Debug for FrequencyFilterBuilder<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FrequencyFilterBuilder")
            .field("thresholds", &self.thresholds)
            .field("count_only_selected", &self.count_only_selected)
            .finish()
    }
}
