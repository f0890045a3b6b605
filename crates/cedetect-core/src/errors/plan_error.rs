//! Build plan errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while serializing or writing the build plan.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("Failed to serialize build plan: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Failed to write build plan {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ErrorCode for PlanError {
    fn error_code(&self) -> &'static str {
        error_code::PLAN_ERROR
    }
}
