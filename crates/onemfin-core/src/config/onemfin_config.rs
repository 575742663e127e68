//! Top-level OneMFin configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, LinkConfig, ObservabilityConfig, StoreConfig, VerifierConfig};
use crate::errors::ConfigError;

const ENV_STORE_URL: [&str; 2] = ["ONEMFIN_STORE_URL", "SUPABASE_URL"];
const ENV_STORE_KEY: [&str; 2] = ["ONEMFIN_STORE_KEY", "SUPABASE_SERVICE_ROLE_KEY"];
const ENV_STORE_TIMEOUT_SECS: &str = "ONEMFIN_STORE_TIMEOUT_SECS";
const ENV_LINK_BASE_URL: &str = "ONEMFIN_LINK_BASE_URL";
const ENV_CHECK_SUBMISSIONS: &str = "ONEMFIN_CHECK_SUBMISSIONS";
const ENV_JSON_LOGS: &str = "ONEMFIN_JSON_LOGS";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ONEMFIN_*`, plus the `SUPABASE_*` names the
///    deployment already exports)
/// 2. Config file (explicit path, or `onemfin.toml` in the working directory)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OnemfinConfig {
    pub store: StoreConfig,
    pub verifier: VerifierConfig,
    pub links: LinkConfig,
    pub observability: ObservabilityConfig,
}

impl OnemfinConfig {
    /// Load configuration from `path` (or the default file) and the process
    /// environment, then validate it.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, &|key| std::env::var(key).ok())
    }

    /// Same as [`load`](Self::load) but reads environment values through `env`.
    pub fn load_with_env(
        path: Option<&Path>,
        env: &dyn Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let default_path = Path::new(defaults::DEFAULT_CONFIG_FILENAME);
                if default_path.exists() {
                    Self::from_file(default_path)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides(env)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string. Missing keys take defaults;
    /// no validation is applied.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::ReadError {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment overrides. Empty values count as unset.
    pub fn apply_env_overrides(
        &mut self,
        env: &dyn Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        let get = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = ENV_STORE_URL.iter().find_map(|k| get(*k)) {
            self.store.url = Some(url);
        }
        if let Some(key) = ENV_STORE_KEY.iter().find_map(|k| get(*k)) {
            self.store.service_key = Some(key);
        }
        if let Some(val) = get(ENV_STORE_TIMEOUT_SECS) {
            self.store.timeout_secs = parse_env(ENV_STORE_TIMEOUT_SECS, &val)?;
        }
        if let Some(val) = get(ENV_LINK_BASE_URL) {
            self.links.base_url = Some(val);
        }
        if let Some(val) = get(ENV_CHECK_SUBMISSIONS) {
            self.verifier.check_submissions = parse_env(ENV_CHECK_SUBMISSIONS, &val)?;
        }
        if let Some(val) = get(ENV_JSON_LOGS) {
            self.observability.json_logs = parse_env(ENV_JSON_LOGS, &val)?;
        }
        Ok(())
    }

    /// Validate the configuration values. The store URL and key are required.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self
            .store
            .url
            .as_deref()
            .filter(|u| !u.trim().is_empty())
            .ok_or_else(|| ConfigError::Missing {
                field: "store.url".to_string(),
                env_hint: ENV_STORE_URL.join(" or "),
            })?;
        validate_http_url("store.url", url)?;

        self.store.checked_service_key()?;

        if self.store.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "store.timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }

        if let Some(ref base) = self.links.base_url {
            validate_http_url("links.base_url", base)?;
        }
        Ok(())
    }

    /// Serialize the config back to TOML. The store key is never written.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
        field: key.to_string(),
        message: format!("{value:?}: {e}"),
    })
}

/// Require an absolute http(s) URL.
fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    let parsed = url::Url::parse(value.trim()).map_err(|e| ConfigError::InvalidValue {
        field: field.to_string(),
        message: format!("{value:?} is not a valid URL: {e}"),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            field: field.to_string(),
            message: format!("unsupported scheme {:?}", parsed.scheme()),
        });
    }
    Ok(())
}
