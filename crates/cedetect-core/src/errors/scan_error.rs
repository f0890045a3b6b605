//! File discovery errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while enumerating or reading candidate files.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Invalid file pattern {pattern}: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        error_code::SCAN_ERROR
    }
}
