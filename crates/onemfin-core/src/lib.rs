//! # onemfin-core
//!
//! Foundation crate for the OneMFin consistency verifier.
//! Defines the store records, the record-store trait, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::OnemfinConfig;
pub use errors::{OnemfinError, OnemfinResult, StoreError, StoreResult};
pub use models::{AssessmentForm, AssessmentSubmission, NewNotification, Notification, User};
pub use traits::IRecordStore;
