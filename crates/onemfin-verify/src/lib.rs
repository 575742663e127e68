//! # onemfin-verify
//!
//! Cross-entity consistency checks over the OneMFin store.
//!
//! - [`engine::ConsistencyVerifier`] fetches users, forms and submissions and
//!   evaluates the named predicates in [`predicates`].
//! - [`report`] holds the resulting [`VerificationReport`] and renders it.
//! - [`seeder::NotificationSeeder`] probes write/read consistency.
//! - [`links::AssessmentLinkIssuer`] mints and back-fills assessment links.

pub mod engine;
pub mod events;
pub mod findings;
pub mod links;
pub mod predicates;
pub mod report;
pub mod seeder;

pub use engine::ConsistencyVerifier;
pub use findings::{CheckStatus, EntityKind, Finding, FindingKind, RecordCheck, Severity};
pub use links::{AssessmentLinkIssuer, IssuedLink};
pub use predicates::{Outcome, RecordIndex};
pub use report::{RecordCounts, ReportStatus, ReportSummary, VerificationReport};
pub use seeder::{NotificationSeeder, SeedOutcome};
