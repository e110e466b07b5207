//! Configuration file loading.
//!
//! There is no discovery: either the caller names a file, or the built-in
//! table is used as-is.

use crate::config::schema::CheckConfig;
use crate::error::{HostCheckError, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Load a single config file and parse it into [`CheckConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<CheckConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            HostCheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            HostCheckError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into [`CheckConfig`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<CheckConfig> {
    // An empty file is a valid "change nothing" config.
    if content.trim().is_empty() {
        return Ok(CheckConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| HostCheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load config with optional path override.
///
/// Without an override, returns the built-in table.
pub fn load_config(config_override: Option<&Path>) -> Result<CheckConfig> {
    match config_override {
        Some(path) => {
            debug!(path = %path.display(), "Loading config file");
            load_config_file(path)
        }
        None => Ok(CheckConfig::default()),
    }
}
