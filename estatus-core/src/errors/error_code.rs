//! Stable error codes for reporting.

/// Every error enum maps to a code string so failures can be grepped and
/// matched without parsing messages.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "BACKEND_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the report string: `[ERROR_CODE] message`.
    fn report_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
pub const BACKEND_ERROR: &str = "BACKEND_ERROR";
pub const DECODE_ERROR: &str = "DECODE_ERROR";
pub const AUTH_ERROR: &str = "AUTH_ERROR";
pub const PAGE_LIMIT: &str = "PAGE_LIMIT";
pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
