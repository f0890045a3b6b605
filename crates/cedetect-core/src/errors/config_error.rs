//! Configuration errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while loading or validating the detect
/// configuration, including module name discovery from go.mod.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Cannot read {path}: {source}")]
    ModuleFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No module declaration found in {path}")]
    ModuleMissing { path: PathBuf },

    #[error("Invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
