//! Structural filter over group lengths.
//!
//! A split function partitions a document's token range into groups, e.g.
//! sentences or named entity spans. Each token's structural "length" is the
//! size of the group containing it, and tokens are kept while that length
//! lies within an interval. Groups do not have to be contiguous, but they
//! must cover every token index exactly once.
//!
//! # Examples
//!
//! ```
//! use furui::document::Document;
//! use furui::filter::{Filter, GroupLengthFilter};
//! use furui::interval::Interval;
//!
//! // Three sentences of sizes 2, 3 and 1.
//! let sentences = |_doc: &Document| -> Vec<Vec<usize>> {
//!     vec![vec![0, 1], vec![2, 3, 4], vec![5]]
//! };
//! let filter = GroupLengthFilter::new(sentences, Interval::at_least(2.0));
//!
//! let doc = Document::new(["go", ".", "we", "all", "went", "gone"]);
//! let kept = filter.apply(&doc).unwrap();
//! assert!(!kept.is_selected(5));
//! assert_eq!(kept.selected_len(), 5);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::document::Document;
use crate::error::{FuruiError, Result};
use crate::filter::Filter;
use crate::function::SplitFunction;
use crate::interval::Interval;

/// Filter that keeps tokens by the size of the group containing them.
#[derive(Clone)]
pub struct GroupLengthFilter {
    split: Arc<dyn SplitFunction>,
    interval: Interval,
}

impl GroupLengthFilter {
    /// Create a filter from a split function and the admissible length range.
    pub fn new<F>(split: F, interval: Interval) -> GroupLengthFilter
    where
        F: SplitFunction + 'static,
    {
        GroupLengthFilter {
            split: Arc::new(split),
            interval,
        }
    }

    /// The admissible group length range.
    pub fn interval(&self) -> Interval {
        self.interval
    }
}

impl fmt::Debug for GroupLengthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroupLengthFilter")
            .field("interval", &self.interval)
            .finish()
    }
}

impl Filter for GroupLengthFilter {
    fn apply(&self, doc: &Document) -> Result<Document> {
        let groups = self.split.split(doc)?;
        let length_by_index = group_lengths(&groups, doc.len())?;
        let keep = doc
            .selected()
            .iter()
            .copied()
            .filter(|&index| self.interval.contains(length_by_index[index] as f64));
        Ok(doc.sub_doc(keep))
    }

    fn name(&self) -> &'static str {
        "group_length"
    }
}

/// Map every token index to the size of its group, verifying that the groups
/// cover each index in `0..token_count` exactly once.
fn group_lengths(groups: &[Vec<usize>], token_count: usize) -> Result<Vec<usize>> {
    let mut lengths: Vec<Option<usize>> = vec![None; token_count];
    for group in groups {
        for &index in group {
            if index >= token_count {
                return Err(FuruiError::invalid_partition(format!(
                    "index {index} is out of range for {token_count} tokens"
                )));
            }
            if lengths[index].replace(group.len()).is_some() {
                return Err(FuruiError::invalid_partition(format!(
                    "index {index} appears in more than one group"
                )));
            }
        }
    }

    lengths
        .into_iter()
        .enumerate()
        .map(|(index, length)| {
            length.ok_or_else(|| {
                FuruiError::invalid_partition(format!("index {index} is not covered by any group"))
            })
        })
        .collect()
}
