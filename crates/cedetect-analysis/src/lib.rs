//! cedetect-analysis: the signature-matching engine.
//!
//! Parses Go sources with tree-sitter, resolves qualified type references
//! through each file's import table, and matches exported top-level
//! functions against the fixed catalog of accepted CloudEvents shapes.
//! Pure CPU-bound transformation: no file IO happens here, callers hand in
//! already-loaded source text.

pub mod catalog;
pub mod detector;
pub mod matcher;
pub mod parser;
pub mod resolver;
pub mod signature;

pub use catalog::accepted_signatures;
pub use detector::Detector;
pub use parser::{GoFile, GoParser};
