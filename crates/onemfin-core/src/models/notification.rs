use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An in-app notification addressed to one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub user_id: String,
    /// Type tag, e.g. "new_lead" or "test".
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub priority: NotificationPriority,
    #[serde(default)]
    pub is_read: bool,
    /// Free-form payload.
    #[serde(default)]
    pub data: serde_json::Value,
    pub created_at: Option<DateTime<Utc>>,
}

/// Insert payload for a notification; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNotification {
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub message: String,
    pub priority: NotificationPriority,
    pub is_read: bool,
    pub data: serde_json::Value,
}

impl NewNotification {
    /// Materialize the record the store would return for this payload.
    pub fn into_notification(self, id: impl Into<String>, created_at: DateTime<Utc>) -> Notification {
        Notification {
            id: id.into(),
            user_id: self.user_id,
            kind: self.kind,
            title: self.title,
            message: self.message,
            priority: self.priority,
            is_read: self.is_read,
            data: self.data,
            created_at: Some(created_at),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}
