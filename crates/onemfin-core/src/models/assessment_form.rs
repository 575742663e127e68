use serde::{Deserialize, Serialize};

/// An assessment form owned by one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentForm {
    pub id: String,
    /// Owning user. Nullable in the store; a null owner is an orphan.
    pub user_id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl AssessmentForm {
    pub fn new(id: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            user_id: Some(user_id.into()),
            name: String::new(),
            is_active: true,
        }
    }
}
