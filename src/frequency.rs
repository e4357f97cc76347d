//! Corpus-wide document frequency analysis.
//!
//! Frequency-based filtering is a two-pass affair. The collection pass scans
//! the whole corpus once and records, for every distinct property value, the
//! number of documents it occurs in (repeats inside one document count once).
//! The threshold pass turns a [`FrequencyThresholds`] configuration into an
//! [`Interval`] over those counts and returns the qualifying property values.
//! Keeping the two passes apart lets callers reuse one frequency table with
//! several threshold configurations without re-scanning the corpus.
//!
//! # Examples
//!
//! ```
//! use furui::document::Document;
//! use furui::frequency::{DocumentFrequencies, FrequencyThresholds};
//!
//! let corpus = vec![
//!     Document::new(["rust", "ship"]),
//!     Document::new(["rust", "rust"]),
//!     Document::new(["sail"]),
//! ];
//!
//! // Document frequency of the token text itself.
//! let text = |doc: &Document| -> Vec<String> { doc.tokens().to_vec() };
//! let table = DocumentFrequencies::analyze(&corpus, &text).unwrap();
//! assert_eq!(table.count(&"rust".to_string()), 2);
//! assert_eq!(table.count(&"ship".to_string()), 1);
//!
//! let thresholds = FrequencyThresholds {
//!     min_count: Some(2),
//!     ..Default::default()
//! };
//! let qualifying = table.select(&thresholds);
//! assert!(qualifying.contains("rust"));
//! assert!(!qualifying.contains("sail"));
//! ```

use std::hash::Hash;

use ahash::{AHashMap, AHashSet};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::Result;
use crate::function::{PropertyFunction, compute_aligned};
use crate::interval::Interval;

/// Threshold configuration for selecting property values by document
/// frequency.
///
/// Counts are absolute numbers of documents; rates are fractions of the
/// corpus size and take precedence over the corresponding count when both
/// are given. Bounds left at `None` are unbounded. With `open` set, values
/// sitting exactly on a bound are excluded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrequencyThresholds {
    /// Keep properties occurring in at least this many documents.
    pub min_count: Option<usize>,
    /// Keep properties occurring in at most this many documents.
    pub max_count: Option<usize>,
    /// Lower bound as a fraction of the corpus size; overrides `min_count`.
    pub min_rate: Option<f64>,
    /// Upper bound as a fraction of the corpus size; overrides `max_count`.
    pub max_rate: Option<f64>,
    /// Use strict comparisons on both bounds.
    pub open: bool,
}

impl FrequencyThresholds {
    /// Resolve the configuration against a corpus size into a concrete
    /// interval over document-frequency counts.
    pub fn resolve(&self, corpus_size: usize) -> Interval {
        let lower = match self.min_rate {
            Some(rate) => Some(corpus_size as f64 * rate),
            None => self.min_count.map(|count| count as f64),
        };
        let upper = match self.max_rate {
            Some(rate) => Some(corpus_size as f64 * rate),
            None => self.max_count.map(|count| count as f64),
        };
        Interval::new(lower, upper, self.open)
    }
}

/// Document frequencies of property values across one corpus.
///
/// The table remembers the corpus size so rate-based thresholds can be
/// resolved later without the corpus at hand.
#[derive(Debug, Clone)]
pub struct DocumentFrequencies<P> {
    counts: AHashMap<P, usize>,
    corpus_size: usize,
}

impl<P> DocumentFrequencies<P>
where
    P: Eq + Hash,
{
    /// Count document frequencies over every token position.
    ///
    /// Each distinct property value contributes at most one count per
    /// document, regardless of how many tokens carry it.
    pub fn analyze<F>(corpus: &[Document], function: &F) -> Result<DocumentFrequencies<P>>
    where
        F: PropertyFunction<P> + ?Sized,
    {
        Self::build(corpus, function, false)
    }

    /// Count document frequencies over selected token positions only.
    ///
    /// Property values that occur exclusively at already-excluded positions
    /// of a document do not count for that document.
    pub fn analyze_selected<F>(corpus: &[Document], function: &F) -> Result<DocumentFrequencies<P>>
    where
        F: PropertyFunction<P> + ?Sized,
    {
        Self::build(corpus, function, true)
    }

    fn build<F>(
        corpus: &[Document],
        function: &F,
        only_selected: bool,
    ) -> Result<DocumentFrequencies<P>>
    where
        F: PropertyFunction<P> + ?Sized,
    {
        let mut counts = AHashMap::new();
        for doc in corpus {
            let properties = compute_aligned(function, doc)?;
            let mut distinct = AHashSet::new();
            for (index, property) in properties.into_iter().enumerate() {
                if !only_selected || doc.is_selected(index) {
                    distinct.insert(property);
                }
            }
            for property in distinct {
                *counts.entry(property).or_insert(0) += 1;
            }
        }

        debug!(
            "collected document frequencies: {} documents, {} distinct properties",
            corpus.len(),
            counts.len()
        );

        Ok(DocumentFrequencies {
            counts,
            corpus_size: corpus.len(),
        })
    }

    /// The document frequency of `property`, or 0 if it never occurred.
    pub fn count(&self, property: &P) -> usize {
        self.counts.get(property).copied().unwrap_or(0)
    }

    /// Number of documents the table was collected from.
    pub fn corpus_size(&self) -> usize {
        self.corpus_size
    }

    /// Number of distinct property values in the table.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no property value was observed.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over all `(property, document frequency)` pairs.
    pub fn counts(&self) -> impl Iterator<Item = (&P, usize)> {
        self.counts.iter().map(|(property, &count)| (property, count))
    }
}

impl<P> DocumentFrequencies<P>
where
    P: Eq + Hash + Clone,
{
    /// Return the property values whose document frequency falls within the
    /// resolved threshold interval.
    pub fn select(&self, thresholds: &FrequencyThresholds) -> AHashSet<P> {
        let interval = thresholds.resolve(self.corpus_size);
        let qualifying: AHashSet<P> = self
            .counts
            .iter()
            .filter(|&(_, &count)| interval.contains(count as f64))
            .map(|(property, _)| property.clone())
            .collect();

        debug!(
            "{} of {} properties qualify under {:?}",
            qualifying.len(),
            self.counts.len(),
            thresholds
        );

        qualifying
    }
}
