//! Notification seeder probe errors.

use super::error_code::{self, ErrorCode};
use super::StoreError;

/// Outcome of a failed seed-and-verify probe.
///
/// `SeedFailure` means the write never landed; `VerifyFailure` means it landed
/// but could not be read back.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("could not seed notification for user {user_id}: {source}")]
    SeedFailure {
        user_id: String,
        #[source]
        source: StoreError,
    },

    #[error("notification {notification_id} for user {user_id} not readable after insert: {reason}")]
    VerifyFailure {
        user_id: String,
        notification_id: String,
        reason: String,
    },
}

impl ErrorCode for ProbeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SeedFailure { .. } => error_code::SEED_FAILURE,
            Self::VerifyFailure { .. } => error_code::VERIFY_FAILURE,
        }
    }
}
