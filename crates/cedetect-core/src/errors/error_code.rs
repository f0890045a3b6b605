//! ErrorCode trait for stable diagnostic codes in detect logs.

/// Trait for tagging errors with a stable diagnostic code.
/// Every error enum implements this so log lines can be grepped by code.
pub trait ErrorCode {
    /// Returns the diagnostic code string (e.g., "PARSE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted log string: `[ERROR_CODE] message`.
    fn log_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Diagnostic code constants.
pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const PLAN_ERROR: &str = "PLAN_ERROR";
