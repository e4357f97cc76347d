//! Numeric intervals with optional bounds.
//!
//! # Examples
//!
//! ```
//! use furui::interval::Interval;
//!
//! let at_least_two = Interval::at_least(2.0);
//! assert!(at_least_two.contains(2.0));
//! assert!(!at_least_two.open().contains(2.0));
//! ```

use serde::{Deserialize, Serialize};

/// An interval over `f64` with optional lower and upper bounds.
///
/// A missing bound behaves like the corresponding infinity. When `open` is
/// set both comparisons are strict, otherwise both endpoints are included.
/// `NaN` is never contained.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Interval {
    lower: Option<f64>,
    upper: Option<f64>,
    open: bool,
}

impl Interval {
    /// Create an interval from explicit parts.
    pub fn new(lower: Option<f64>, upper: Option<f64>, open: bool) -> Interval {
        Interval { lower, upper, open }
    }

    /// The interval containing every number.
    pub fn unbounded() -> Interval {
        Interval::default()
    }

    /// The closed interval `[lower, upper]`.
    pub fn between(lower: f64, upper: f64) -> Interval {
        Interval {
            lower: Some(lower),
            upper: Some(upper),
            open: false,
        }
    }

    /// The interval `[lower, +inf)`.
    pub fn at_least(lower: f64) -> Interval {
        Interval {
            lower: Some(lower),
            upper: None,
            open: false,
        }
    }

    /// The interval `(-inf, upper]`.
    pub fn at_most(upper: f64) -> Interval {
        Interval {
            lower: None,
            upper: Some(upper),
            open: false,
        }
    }

    /// Make both endpoint comparisons strict.
    pub fn open(mut self) -> Interval {
        self.open = true;
        self
    }

    /// The lower bound, if any.
    pub fn lower(&self) -> Option<f64> {
        self.lower
    }

    /// The upper bound, if any.
    pub fn upper(&self) -> Option<f64> {
        self.upper
    }

    /// Whether endpoint comparisons are strict.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns `true` if `value` lies within the interval.
    pub fn contains(&self, value: f64) -> bool {
        let lower = self.lower.unwrap_or(f64::NEG_INFINITY);
        let upper = self.upper.unwrap_or(f64::INFINITY);
        if self.open {
            lower < value && value < upper
        } else {
            lower <= value && value <= upper
        }
    }
}
