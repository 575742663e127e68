//! Hosted-store adapter errors.

use super::error_code::{self, ErrorCode};

/// Errors returned by any [`crate::traits::IRecordStore`] call.
/// Fatal for the current run; callers never retry.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("network error talking to {url}: {reason}")]
    Network { url: String, reason: String },

    #[error("store rejected credentials (HTTP {status})")]
    AuthRejected { status: u16 },

    #[error("constraint violation on {table}: {message}")]
    ConstraintViolation { table: String, message: String },

    #[error("request to {table} failed with HTTP {status}: {body}")]
    RequestFailed {
        table: String,
        status: u16,
        body: String,
    },

    #[error("malformed response from {table}: {reason}")]
    MalformedResponse { table: String, reason: String },

    #[error("no {table} row with id {id}")]
    NotFound { table: String, id: String },
}

impl ErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Network { .. } => error_code::STORE_NETWORK,
            Self::AuthRejected { .. } => error_code::STORE_AUTH_REJECTED,
            Self::ConstraintViolation { .. } => error_code::STORE_CONSTRAINT,
            Self::RequestFailed { .. } => error_code::STORE_REQUEST_FAILED,
            Self::MalformedResponse { .. } => error_code::STORE_MALFORMED_RESPONSE,
            Self::NotFound { .. } => error_code::STORE_NOT_FOUND,
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
