//! Parser errors.

use std::path::PathBuf;

use super::error_code::{self, ErrorCode};

/// Errors that can occur while parsing a Go source file.
///
/// Malformed source is surfaced as an error, never as a partial result;
/// the caller decides whether one bad file aborts the whole run.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to load Go grammar: {message}")]
    GrammarLoad { message: String },

    #[error("Syntax error in {path}: {message}")]
    Syntax { path: PathBuf, message: String },
}

impl ErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        error_code::PARSE_ERROR
    }
}
