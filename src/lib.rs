//! # accufold
//!
//! Order-dependent integer accumulation over a sequence.
//!
//! ## Overview
//!
//! One accumulator, seeded with `init_value`, is carried across the
//! sequence. For every element three stages run in order:
//!
//! - **adjust**: add (or, for negatives, subtract) the element times 2 or 3
//!   depending on its parity
//! - **rescale**: below `threshold` negate (even) or halve (odd); otherwise
//!   double (even) or add `sum_value` (odd)
//! - **correct**: +10 at index 0, else -1 at index 20, else -5 at the last index
//!
//! Arithmetic wraps at 32 bits. Asking for more elements than the slice
//! holds is an error, never an out-of-bounds read.
//!
//! ## Rust Usage
//!
//! ```rust
//! use accufold::{fold, fold_all, FoldParams};
//!
//! assert_eq!(fold(&[4], 1, 0, 0, 100), Ok(2));
//!
//! let params = FoldParams::new(0, 0, 100);
//! assert_eq!(fold_all(&[-3], &params), 14);
//! ```

pub mod core;
pub mod ports;
pub mod adapters;

// Re-exports for convenience
pub use self::core::{fold, fold_all, fold_with, trace, FoldError, FoldParams, FoldResult, StepRecord};
pub use ports::{ParamError, ParamSource};
pub use adapters::JsonParamFile;
