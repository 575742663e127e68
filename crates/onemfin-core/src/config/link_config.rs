use serde::{Deserialize, Serialize};

use super::defaults;

/// Assessment link issuance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkConfig {
    /// Public app URL links are built under. Required only for issuance.
    pub base_url: Option<String>,
    /// Path segment between `base_url` and the token.
    pub path_prefix: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            path_prefix: defaults::DEFAULT_LINK_PATH_PREFIX.to_string(),
        }
    }
}
