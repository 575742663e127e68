use serde::{Deserialize, Serialize};

use super::defaults;

/// Which optional verifier phases run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifierConfig {
    /// Fetch submissions and check their form and lead references.
    pub check_submissions: bool,
    /// Emit an info finding for users that own no forms.
    pub report_users_without_forms: bool,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            check_submissions: defaults::DEFAULT_CHECK_SUBMISSIONS,
            report_users_without_forms: defaults::DEFAULT_REPORT_USERS_WITHOUT_FORMS,
        }
    }
}
