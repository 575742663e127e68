use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A lead's completed (or in-progress) answers to an assessment form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentSubmission {
    pub id: String,
    /// The form this submission answers.
    pub assessment_id: Option<String>,
    /// The lead who submitted. Leads may be external prospects with no user row.
    pub lead_id: Option<String>,
    pub framework_version_id: Option<String>,
    /// Question id to answer.
    #[serde(default)]
    pub answers: BTreeMap<String, serde_json::Value>,
    /// Computed result object.
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: SubmissionStatus,
}

impl AssessmentSubmission {
    pub fn new(id: impl Into<String>, assessment_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            assessment_id: Some(assessment_id.into()),
            lead_id: None,
            framework_version_id: None,
            answers: BTreeMap::new(),
            result: None,
            submitted_at: None,
            status: SubmissionStatus::default(),
        }
    }

    pub fn with_lead(mut self, lead_id: impl Into<String>) -> Self {
        self.lead_id = Some(lead_id.into());
        self
    }
}

/// Submission lifecycle state. Values the store knows but this tool doesn't
/// are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SubmissionStatus {
    #[default]
    Pending,
    Completed,
    Reviewed,
    Archived,
    Other(String),
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::Reviewed => "reviewed",
            Self::Archived => "archived",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for SubmissionStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => Self::Pending,
            "completed" => Self::Completed,
            "reviewed" => Self::Reviewed,
            "archived" => Self::Archived,
            _ => Self::Other(value),
        }
    }
}

impl From<SubmissionStatus> for String {
    fn from(value: SubmissionStatus) -> Self {
        value.as_str().to_string()
    }
}
