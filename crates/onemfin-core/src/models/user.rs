use serde::{Deserialize, Serialize};

/// An advisor account, created on the first identity-provider sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Internal identifier.
    pub id: String,
    /// Identity-provider reference.
    pub clerk_id: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    /// URL handed to leads so they can fill this user's assessment.
    pub assessment_link: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            clerk_id: None,
            full_name: None,
            email: None,
            assessment_link: None,
        }
    }

    /// Name to show in reports: full name, then email, then the id.
    pub fn display_name(&self) -> &str {
        self.full_name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }

    /// The assessment link, if present and not blank.
    pub fn assessment_link(&self) -> Option<&str> {
        self.assessment_link
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}
