//! Findings and per-record check results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How serious a finding is. Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Fixed-width label used by the text report.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "[INFO] ",
            Self::Warning => "[WARN] ",
            Self::Error => "[ERROR]",
        }
    }
}

/// The record kind a check ran against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    User,
    Form,
    Submission,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::User => "user",
            Self::Form => "form",
            Self::Submission => "submission",
        })
    }
}

/// Each invariant the verifier checks, named by its violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    MissingAssessmentLink,
    OrphanForm,
    UnresolvedLead,
    OrphanSubmission,
    UserWithoutForms,
}

impl FindingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingAssessmentLink => "missing_assessment_link",
            Self::OrphanForm => "orphan_form",
            Self::UnresolvedLead => "unresolved_lead",
            Self::OrphanSubmission => "orphan_submission",
            Self::UserWithoutForms => "user_without_forms",
        }
    }

    /// Severity a violation of this invariant is reported at.
    pub fn severity(&self) -> Severity {
        match self {
            Self::OrphanForm | Self::OrphanSubmission => Severity::Error,
            Self::MissingAssessmentLink | Self::UnresolvedLead => Severity::Warning,
            Self::UserWithoutForms => Severity::Info,
        }
    }

    pub fn entity(&self) -> EntityKind {
        match self {
            Self::MissingAssessmentLink | Self::UserWithoutForms => EntityKind::User,
            Self::OrphanForm => EntityKind::Form,
            Self::UnresolvedLead | Self::OrphanSubmission => EntityKind::Submission,
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal invariant violation. Collected, never thrown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub severity: Severity,
    pub entity: EntityKind,
    pub record_id: String,
    pub message: String,
}

impl Finding {
    pub fn new(kind: FindingKind, record_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            entity: kind.entity(),
            record_id: record_id.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Pass,
    Fail,
    /// The predicate did not apply to this record.
    Skip,
}

impl CheckStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Skip => "SKIP",
        }
    }
}

/// One predicate evaluated against one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCheck {
    pub entity: EntityKind,
    pub record_id: String,
    pub predicate: FindingKind,
    pub status: CheckStatus,
    /// Reason for a skip, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
