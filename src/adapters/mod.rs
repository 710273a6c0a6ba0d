//! Adapters - Swappable implementations of port interfaces

pub mod json;

pub use json::JsonParamFile;
