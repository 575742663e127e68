//! Configuration errors.

use super::error_code::{self, ErrorCode};

/// Errors raised while loading or validating configuration.
/// Always fatal, and always raised before the first store call.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required setting {field} (set {env_hint})")]
    Missing { field: String, env_hint: String },

    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    #[error("cannot read config file {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
