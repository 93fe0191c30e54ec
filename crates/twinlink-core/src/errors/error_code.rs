//! TwinlinkErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this so that failures recorded by the study
/// driver carry a stable code alongside the human-readable message.
pub trait TwinlinkErrorCode {
    /// Returns the error code string (e.g., "INVALID_PARAMETER").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_PARAMETER: &str = "INVALID_PARAMETER";
pub const STRUCTURAL_MISMATCH: &str = "STRUCTURAL_MISMATCH";
pub const UNKNOWN_VARIABLE: &str = "UNKNOWN_VARIABLE";
pub const CYCLE_DETECTED: &str = "CYCLE_DETECTED";
pub const INVALID_QUERY: &str = "INVALID_QUERY";
pub const DATA_ERROR: &str = "DATA_ERROR";
pub const EMPTY_SAMPLE: &str = "EMPTY_SAMPLE";
pub const EMPTY_ARM: &str = "EMPTY_ARM";
pub const SINGULAR_DESIGN: &str = "SINGULAR_DESIGN";
pub const NOT_CONVERGED: &str = "NOT_CONVERGED";
pub const DEGENERATE_ESTIMATE: &str = "DEGENERATE_ESTIMATE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
pub const THREAD_POOL_ERROR: &str = "THREAD_POOL_ERROR";
