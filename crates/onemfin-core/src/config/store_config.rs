use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

const SERVICE_KEY_ENV_HINT: &str = "ONEMFIN_STORE_KEY or SUPABASE_SERVICE_ROLE_KEY";

/// Hosted store connection settings.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Project URL, e.g. `https://abc.supabase.co`.
    pub url: Option<String>,
    /// Privileged (service-role) key. Never serialized back out.
    #[serde(skip_serializing)]
    pub service_key: Option<String>,
    /// Path of the REST API under `url`.
    pub rest_path: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            service_key: None,
            rest_path: defaults::DEFAULT_REST_PATH.to_string(),
            timeout_secs: defaults::DEFAULT_STORE_TIMEOUT_SECS,
        }
    }
}

impl StoreConfig {
    /// The service key, checked to be present and usable as an HTTP header
    /// value (visible ASCII, spaces and tabs only).
    pub fn checked_service_key(&self) -> Result<&str, ConfigError> {
        let key = self
            .service_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| ConfigError::Missing {
                field: "store.service_key".to_string(),
                env_hint: SERVICE_KEY_ENV_HINT.to_string(),
            })?;
        if let Some(pos) = key.bytes().position(|b| b != b'\t' && !(0x20..0x7f).contains(&b)) {
            return Err(ConfigError::InvalidValue {
                field: "store.service_key".to_string(),
                message: format!("contains a character not allowed in a header at byte {pos}"),
            });
        }
        Ok(key)
    }
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("url", &self.url)
            .field("service_key", &self.service_key.as_ref().map(|_| "<redacted>"))
            .field("rest_path", &self.rest_path)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}
