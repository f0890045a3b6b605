//! Configuration for a detect run.

pub mod detect_config;

pub use detect_config::DetectConfig;
