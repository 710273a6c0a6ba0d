//! # Parameters
//!
//! The three scalars that steer the fold.
//!
//! None of them has a meaningful default, so there is no `Default` impl:
//! every caller states all three.

use serde::{Deserialize, Serialize};

/// Scalar inputs to the fold
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoldParams {
    /// Starting accumulator value, returned unchanged for empty input
    pub init_value: i32,

    /// Added to an odd accumulator at or above the threshold
    pub sum_value: i32,

    /// Comparison bound for the rescale stage
    pub threshold: i32,
}

impl FoldParams {
    /// Create parameters from all three scalars
    ///
    /// # Example
    /// ```
    /// use accufold::FoldParams;
    /// let params = FoldParams::new(0, 1, 100);
    /// assert_eq!(params.threshold, 100);
    /// ```
    pub fn new(init_value: i32, sum_value: i32, threshold: i32) -> Self {
        Self {
            init_value,
            sum_value,
            threshold,
        }
    }

    /// Set the starting accumulator value
    pub fn with_init_value(mut self, init_value: i32) -> Self {
        self.init_value = init_value;
        self
    }

    /// Set the additive adjustment
    pub fn with_sum_value(mut self, sum_value: i32) -> Self {
        self.sum_value = sum_value;
        self
    }

    /// Set the threshold
    pub fn with_threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }
}
