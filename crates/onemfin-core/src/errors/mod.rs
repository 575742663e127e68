//! Error handling for OneMFin.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod probe_error;
pub mod store_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use probe_error::ProbeError;
pub use store_error::{StoreError, StoreResult};

/// Top-level error for a verifier, seeder, or link-issuer run.
/// Aggregates the per-concern errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum OnemfinError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("probe error: {0}")]
    Probe(#[from] ProbeError),
}

impl ErrorCode for OnemfinError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
            Self::Probe(e) => e.error_code(),
        }
    }
}

pub type OnemfinResult<T> = Result<T, OnemfinError>;
