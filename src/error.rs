//! Error types for the Furui library.
//!
//! All failures are represented by the [`FuruiError`] enum. The only fatal
//! conditions the core raises on its own are contract violations by external
//! collaborator functions: a property function whose output is not aligned
//! with the token sequence, or a split function whose groups do not partition
//! the token range. Ordinary outcomes such as an empty corpus or a filter
//! that matched nothing are plain values, never errors.
//!
//! # Examples
//!
//! ```
//! use furui::error::{FuruiError, Result};
//!
//! fn check_alignment(expected: usize, actual: usize) -> Result<()> {
//!     if expected != actual {
//!         return Err(FuruiError::misaligned_property(expected, actual));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_alignment(4, 3).is_err());
//! ```

use anyhow;
use thiserror::Error;

/// The main error type for Furui operations.
///
/// This enum represents all possible errors that can occur in the Furui library.
/// It uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for creating specific error types.
#[derive(Error, Debug)]
pub enum FuruiError {
    /// A property function broke its alignment contract (fatal, not retried).
    #[error("Property error: {0}")]
    Property(String),

    /// A split function broke its partition contract (fatal, not retried).
    #[error("Split error: {0}")]
    Split(String),

    /// Filter-level errors that are not contract violations.
    #[error("Filter error: {0}")]
    Filter(String),

    /// Arbitrary errors surfaced by external collaborator functions.
    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with FuruiError.
pub type Result<T> = std::result::Result<T, FuruiError>;

impl FuruiError {
    /// Create a new property error.
    pub fn property<S: Into<String>>(msg: S) -> Self {
        FuruiError::Property(msg.into())
    }

    /// Create a new split error.
    pub fn split<S: Into<String>>(msg: S) -> Self {
        FuruiError::Split(msg.into())
    }

    /// Create a new filter error.
    pub fn filter<S: Into<String>>(msg: S) -> Self {
        FuruiError::Filter(msg.into())
    }

    /// Create a property error for an output that is not aligned with the
    /// document's token sequence.
    pub fn misaligned_property(expected: usize, actual: usize) -> Self {
        FuruiError::Property(format!(
            "property function returned {actual} values for a document of {expected} tokens"
        ))
    }

    /// Create a split error for groups that do not partition the token range.
    pub fn invalid_partition<S: Into<String>>(msg: S) -> Self {
        FuruiError::Split(format!(
            "groups do not partition the token range: {}",
            msg.into()
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = FuruiError::property("Test property error");
        assert_eq!(error.to_string(), "Property error: Test property error");

        let error = FuruiError::split("Test split error");
        assert_eq!(error.to_string(), "Split error: Test split error");

        let error = FuruiError::filter("Test filter error");
        assert_eq!(error.to_string(), "Filter error: Test filter error");
    }

    #[test]
    fn test_misaligned_property_message() {
        let error = FuruiError::misaligned_property(4, 3);
        assert_eq!(
            error.to_string(),
            "Property error: property function returned 3 values for a document of 4 tokens"
        );
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let external = anyhow::anyhow!("model unavailable");
        let error = FuruiError::from(external);

        match error {
            FuruiError::External(_) => {} // Expected
            _ => panic!("Expected external error variant"),
        }
    }
}
