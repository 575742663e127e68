//! Stable machine-readable codes for every error enum.

/// Implemented by every OneMFin error enum so the CLI can print
/// `error [CODE]: message` and pick an exit status without string matching.
pub trait ErrorCode {
    /// Returns the code string (e.g. "STORE_AUTH_REJECTED").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted diagnostic line: `[ERROR_CODE] message`.
    fn diagnostic(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const STORE_NETWORK: &str = "STORE_NETWORK";
pub const STORE_AUTH_REJECTED: &str = "STORE_AUTH_REJECTED";
pub const STORE_CONSTRAINT: &str = "STORE_CONSTRAINT";
pub const STORE_REQUEST_FAILED: &str = "STORE_REQUEST_FAILED";
pub const STORE_MALFORMED_RESPONSE: &str = "STORE_MALFORMED_RESPONSE";
pub const STORE_NOT_FOUND: &str = "STORE_NOT_FOUND";
pub const SEED_FAILURE: &str = "SEED_FAILURE";
pub const VERIFY_FAILURE: &str = "VERIFY_FAILURE";
