//! Query parameter parser (verb module)
//!
//! Loads QueryParameters from YAML (or JSON) files.

use std::path::Path;
use tracing::debug;
use crate::error::ParseError;
use crate::query::QueryParameters;

/// Parse query parameters from a YAML file
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<QueryParameters, ParseError> {
    let path_str = path.as_ref().display().to_string();
    let contents = std::fs::read_to_string(&path).map_err(|e| ParseError::Io {
        path: path_str.clone(),
        source: e,
    })?;
    debug!(path = %path_str, "loaded query parameters file");
    parse_str(&contents)
}

/// Parse query parameters from a YAML string
pub fn parse_str(yaml: &str) -> Result<QueryParameters, ParseError> {
    serde_yaml::from_str(yaml).map_err(ParseError::from)
}
