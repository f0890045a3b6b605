//! Top-level error for a detect run.

use super::error_code::ErrorCode;
use super::{ConfigError, ParseError, PlanError, ScanError};

/// Exit code the buildpack lifecycle reads as "detection failed".
pub const DETECT_FAILED_EXIT_CODE: u8 = 100;

/// Any failure that aborts a detect run.
#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Plan(#[from] PlanError),
}

impl DetectError {
    /// Buildpack detect contract: every failure exits with code 100.
    pub fn exit_code(&self) -> u8 {
        DETECT_FAILED_EXIT_CODE
    }
}

impl ErrorCode for DetectError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.error_code(),
            Self::Scan(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Plan(e) => e.error_code(),
        }
    }
}
