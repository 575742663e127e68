/// OneMFin verifier version string.
pub const ONEMFIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Store tables.
pub const USERS_TABLE: &str = "users";
pub const FORMS_TABLE: &str = "assessment_forms";
pub const SUBMISSIONS_TABLE: &str = "assessment_submissions";
pub const NOTIFICATIONS_TABLE: &str = "notifications";

/// Fixed fields of the seeder's synthetic notification.
pub const PROBE_NOTIFICATION_TYPE: &str = "test";
pub const PROBE_NOTIFICATION_TITLE: &str = "Test Notification";
pub const PROBE_NOTIFICATION_MESSAGE: &str =
    "Synthetic notification written by the onemfin seed probe.";
