//! # Params Port
//!
//! Trait for obtaining the fold's scalar parameters.
//!
//! `ParamSource: fn() -> FoldParams` - where do the scalars come from?
//!
//! Implemented by inline values (`FoldParams` itself) and by file adapters.

use std::path::PathBuf;

use crate::core::FoldParams;

/// Result type for parameter loading
pub type ParamResult<T> = Result<T, ParamError>;

/// Errors that can occur while loading parameters
#[derive(Debug, thiserror::Error)]
pub enum ParamError {
    /// The parameter file does not exist
    #[error("Parameter file not found: {0:?}")]
    NotFound(PathBuf),

    /// Reading the source failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source is not a valid parameter set
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Trait for sources of fold parameters
pub trait ParamSource {
    /// Load a complete parameter set
    fn load(&self) -> ParamResult<FoldParams>;

    /// Name of this source (for logging)
    fn name(&self) -> &'static str;
}

impl ParamSource for FoldParams {
    fn load(&self) -> ParamResult<FoldParams> {
        Ok(*self)
    }

    fn name(&self) -> &'static str {
        "inline"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_source() {
        let params = FoldParams::new(1, 2, 3);
        assert_eq!(params.load().unwrap(), params);
        assert_eq!(params.name(), "inline");
    }

    #[test]
    fn test_error_display() {
        let err = ParamError::NotFound(PathBuf::from("missing.json"));
        assert_eq!(err.to_string(), "Parameter file not found: \"missing.json\"");

        let err = ParamError::Parse("missing field `threshold`".into());
        assert_eq!(err.to_string(), "Parse error: missing field `threshold`");
    }
}
