//! cedetect-core: shared value types, errors, config, and tracing for the
//! CloudEvents Go function detector.

pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;
