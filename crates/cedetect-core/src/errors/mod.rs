//! Error handling for cedetect.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod detect_error;
pub mod error_code;
pub mod parse_error;
pub mod plan_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use detect_error::DetectError;
pub use error_code::ErrorCode;
pub use parse_error::ParseError;
pub use plan_error::PlanError;
pub use scan_error::ScanError;
