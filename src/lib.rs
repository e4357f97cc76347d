//! # Furui
//!
//! A property-driven token filtering pipeline for tokenized documents.
//!
//! ## Features
//!
//! - Immutable documents with index-set selections
//! - Pure, composable narrowing filters with negation
//! - Filter factories over arbitrary token properties
//! - Corpus-wide document frequency analysis
//! - Structural filtering by group length
//! - Parallel pipeline application

pub mod document;
pub mod error;
pub mod filter;
pub mod frequency;
pub mod function;
pub mod interval;
pub mod pipeline;

pub mod prelude {
    //! Convenient re-exports of the most used types.

    pub use crate::document::{Document, Selection};
    pub use crate::error::{FuruiError, Result};
    pub use crate::filter::{
        Filter, FrequencyFilterBuilder, GroupLengthFilter, NegateFilter, PredicateFilter,
        PropertyFilter, negated,
    };
    pub use crate::frequency::{DocumentFrequencies, FrequencyThresholds};
    pub use crate::function::{PropertyFunction, SplitFunction, Tokenizer};
    pub use crate::interval::Interval;
    pub use crate::pipeline::{Pipeline, selected_properties, tokenize_documents};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
