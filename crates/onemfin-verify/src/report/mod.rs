//! Verification report and summary.

pub mod emitter;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::findings::{CheckStatus, Finding, RecordCheck, Severity};

pub use emitter::{render_json, render_text};

/// Overall run status, derived from the worst finding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    #[default]
    Clean,
    Warnings,
    Errors,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Warnings => "warnings",
            Self::Errors => "errors",
        }
    }
}

/// Number of records fetched per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCounts {
    pub users: usize,
    pub forms: usize,
    pub submissions: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub info: usize,
    pub warnings: usize,
    pub errors: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub status: ReportStatus,
}

/// Everything one verifier run found. Built only from a complete run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub generated_at: DateTime<Utc>,
    pub counts: RecordCounts,
    pub checks: Vec<RecordCheck>,
    /// In fetch order: users, then forms, then submissions.
    pub findings: Vec<Finding>,
    pub summary: ReportSummary,
}

impl VerificationReport {
    pub fn new(counts: RecordCounts, checks: Vec<RecordCheck>, findings: Vec<Finding>) -> Self {
        let summary = summarize(&checks, &findings);
        Self {
            generated_at: Utc::now(),
            counts,
            checks,
            findings,
            summary,
        }
    }

    pub fn status(&self) -> ReportStatus {
        self.summary.status
    }

    pub fn is_clean(&self) -> bool {
        self.status() == ReportStatus::Clean
    }

    /// Findings of one severity, in report order.
    pub fn findings_at(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.severity == severity)
    }
}

fn summarize(checks: &[RecordCheck], findings: &[Finding]) -> ReportSummary {
    let mut summary = ReportSummary::default();
    for f in findings {
        match f.severity {
            Severity::Info => summary.info += 1,
            Severity::Warning => summary.warnings += 1,
            Severity::Error => summary.errors += 1,
        }
    }
    for c in checks {
        match c.status {
            CheckStatus::Pass => summary.passed += 1,
            CheckStatus::Fail => summary.failed += 1,
            CheckStatus::Skip => summary.skipped += 1,
        }
    }
    summary.status = derive_status(findings);
    summary
}

/// Errors if any finding is an error, warnings if any is a warning,
/// otherwise clean. Info findings never change the status.
fn derive_status(findings: &[Finding]) -> ReportStatus {
    let mut worst = ReportStatus::Clean;
    for f in findings {
        match f.severity {
            Severity::Error => return ReportStatus::Errors,
            Severity::Warning => worst = ReportStatus::Warnings,
            Severity::Info => {}
        }
    }
    worst
}
