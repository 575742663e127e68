//! Structured log events for verifier, seeder, and link-issuer runs.
//!
//! Each function emits a `tracing` event with structured fields.

use crate::findings::{Finding, Severity};
use crate::report::ReportSummary;

/// Log the start of a verifier run.
pub fn run_started(check_submissions: bool) {
    tracing::info!(
        event = "run_started",
        check_submissions = check_submissions,
        "consistency run started"
    );
}

/// Log a completed store fetch.
pub fn fetch_completed(table: &str, rows: usize) {
    tracing::debug!(
        event = "fetch_completed",
        table = %table,
        rows = rows,
        "fetch completed"
    );
}

/// Log a store failure that aborted a run.
pub fn run_aborted(phase: &str, error: &dyn std::error::Error) {
    tracing::error!(
        event = "run_aborted",
        phase = %phase,
        error = %error,
        "consistency run aborted"
    );
}

/// Log a finding as it is recorded.
pub fn finding_recorded(finding: &Finding) {
    match finding.severity {
        Severity::Error | Severity::Warning => tracing::debug!(
            event = "finding_recorded",
            kind = %finding.kind,
            record_id = %finding.record_id,
            severity = ?finding.severity,
            "finding recorded"
        ),
        Severity::Info => tracing::trace!(
            event = "finding_recorded",
            kind = %finding.kind,
            record_id = %finding.record_id,
            "info finding recorded"
        ),
    }
}

/// Log the end of a verifier run.
pub fn run_completed(summary: &ReportSummary) {
    tracing::info!(
        event = "run_completed",
        info = summary.info,
        warnings = summary.warnings,
        errors = summary.errors,
        status = summary.status.as_str(),
        "consistency run completed"
    );
}

/// Log a probe notification write.
pub fn seed_inserted(user_id: &str, notification_id: &str) {
    tracing::info!(
        event = "seed_inserted",
        user_id = %user_id,
        notification_id = %notification_id,
        "probe notification inserted"
    );
}

/// Log a probe notification found on read-back.
pub fn seed_verified(user_id: &str, notification_id: &str, visible: usize) {
    tracing::info!(
        event = "seed_verified",
        user_id = %user_id,
        notification_id = %notification_id,
        visible = visible,
        "probe notification read back"
    );
}

/// Log a probe notification missing from its read-back.
pub fn seed_unconfirmed(user_id: &str, notification_id: &str, visible: usize) {
    tracing::warn!(
        event = "seed_unconfirmed",
        user_id = %user_id,
        notification_id = %notification_id,
        visible = visible,
        "probe notification not read back"
    );
}

/// Log an issued assessment link.
pub fn link_issued(user_id: &str, persisted: bool) {
    tracing::info!(
        event = "link_issued",
        user_id = %user_id,
        persisted = persisted,
        "assessment link issued"
    );
}
