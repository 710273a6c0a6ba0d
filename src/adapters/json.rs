//! JSON parameter file
//!
//! Reads a parameter set from a file of the form:
//!
//! ```json
//! { "init_value": 0, "sum_value": 5, "threshold": 100 }
//! ```
//!
//! All three keys are required. Paths starting with `~/` are resolved
//! against the user's home directory.
//!
//! # Example
//! ```rust,ignore
//! let params = JsonParamFile::new("~/.accufold/params.json").load()?;
//! let result = accufold::fold_all(&[1, 2, 3], &params);
//! ```

use std::path::{Path, PathBuf};

use crate::core::FoldParams;
use crate::ports::{ParamError, ParamResult, ParamSource};

/// Parameter source backed by a JSON file
#[derive(Clone, Debug)]
pub struct JsonParamFile {
    path: PathBuf,
}

impl JsonParamFile {
    /// Create a source for `path`, expanding a leading `~/`
    pub fn new(path: impl AsRef<str>) -> Self {
        Self {
            path: expand_path(path.as_ref()),
        }
    }

    /// Resolved path of the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse a parameter set from JSON text
    pub fn parse(text: &str) -> ParamResult<FoldParams> {
        serde_json::from_str(text).map_err(|e| ParamError::Parse(e.to_string()))
    }
}

impl ParamSource for JsonParamFile {
    fn load(&self) -> ParamResult<FoldParams> {
        if !self.path.exists() {
            return Err(ParamError::NotFound(self.path.clone()));
        }

        log::debug!("Loading parameters from {:?}", self.path);
        let text = std::fs::read_to_string(&self.path)?;
        let params = Self::parse(&text)?;
        log::info!(
            "Loaded parameters: init={} sum={} threshold={}",
            params.init_value,
            params.sum_value,
            params.threshold
        );

        Ok(params)
    }

    fn name(&self) -> &'static str {
        "json"
    }
}

/// Expand a leading `~/` to the home directory
pub fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
