//! # Ports
//!
//! Trait definitions for adapters. Contracts only, no implementations.
//!
//! - Ports define WHAT the caller needs (a parameter set)
//! - Adapters define HOW it is obtained (inline flags, a JSON file)
//!
//! The CORE doesn't know about adapters.

mod params;

pub use params::{ParamError, ParamResult, ParamSource};
