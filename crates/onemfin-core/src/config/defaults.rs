// Single source of truth for all default values.

// --- Store ---
pub const DEFAULT_REST_PATH: &str = "/rest/v1";
pub const DEFAULT_STORE_TIMEOUT_SECS: u64 = 30;

// --- Verifier ---
pub const DEFAULT_CHECK_SUBMISSIONS: bool = true;
pub const DEFAULT_REPORT_USERS_WITHOUT_FORMS: bool = true;

// --- Links ---
pub const DEFAULT_LINK_PATH_PREFIX: &str = "assessment";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

// --- Files ---
pub const DEFAULT_CONFIG_FILENAME: &str = "onemfin.toml";
