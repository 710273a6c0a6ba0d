//! # Core Domain
//!
//! Pure integer arithmetic, no I/O.
//!
//! This module contains the fold and its building blocks:
//! - `step` - the three per-element stages
//! - `fold` - the pass over the sequence, plus a step trace
//! - `FoldParams` - the scalars steering the fold
//! - `FoldError` - bounds violations
//!
//! ## Design Principles
//!
//! - All functions are pure (deterministic, no side effects)
//! - 32-bit wrapping arithmetic throughout
//! - No logging, no allocation in `fold`

mod error;
mod params;
pub mod fold;
pub mod step;

// Re-exports
pub use error::{FoldError, FoldResult};
pub use fold::{fold, fold_all, fold_with, trace, StepRecord};
pub use params::FoldParams;
pub use step::{Parity, Position};
