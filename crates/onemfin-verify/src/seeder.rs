//! NotificationSeeder: a write/read consistency probe against the store.

use onemfin_core::constants::{
    PROBE_NOTIFICATION_MESSAGE, PROBE_NOTIFICATION_TITLE, PROBE_NOTIFICATION_TYPE,
};
use onemfin_core::errors::ProbeError;
use onemfin_core::models::{NewNotification, Notification, NotificationPriority};
use onemfin_core::traits::IRecordStore;
use serde::Serialize;

use crate::events;

/// A probe that wrote and read back its notification.
#[derive(Debug, Clone, Serialize)]
pub struct SeedOutcome {
    pub notification: Notification,
    /// Notifications visible for the user after the insert, probe included.
    pub visible: usize,
}

pub struct NotificationSeeder<'a> {
    store: &'a dyn IRecordStore,
}

impl<'a> NotificationSeeder<'a> {
    pub fn new(store: &'a dyn IRecordStore) -> Self {
        Self { store }
    }

    /// The fixed probe record for `user_id`.
    pub fn probe_notification(user_id: &str) -> NewNotification {
        NewNotification {
            user_id: user_id.to_string(),
            kind: PROBE_NOTIFICATION_TYPE.to_string(),
            title: PROBE_NOTIFICATION_TITLE.to_string(),
            message: PROBE_NOTIFICATION_MESSAGE.to_string(),
            priority: NotificationPriority::Medium,
            is_read: false,
            data: serde_json::json!({ "source": "onemfin-seed" }),
        }
    }

    /// Insert the probe notification, then confirm it is readable.
    ///
    /// An insert failure (including a foreign-key rejection for an unknown
    /// user) is a `SeedFailure`. A failed or incomplete read-back is a
    /// `VerifyFailure`.
    pub fn seed_and_verify(&self, user_id: &str) -> Result<SeedOutcome, ProbeError> {
        let probe = Self::probe_notification(user_id);
        let inserted = self
            .store
            .insert_notification(&probe)
            .map_err(|source| ProbeError::SeedFailure {
                user_id: user_id.to_string(),
                source,
            })?;
        events::seed_inserted(user_id, &inserted.id);

        let visible = self.store.fetch_notifications(user_id).map_err(|e| {
            ProbeError::VerifyFailure {
                user_id: user_id.to_string(),
                notification_id: inserted.id.clone(),
                reason: format!("read-back failed: {e}"),
            }
        })?;

        let found = visible.iter().any(|n| {
            n.id == inserted.id
                && n.user_id == probe.user_id
                && n.kind == probe.kind
                && n.title == probe.title
        });
        if !found {
            events::seed_unconfirmed(user_id, &inserted.id, visible.len());
            return Err(ProbeError::VerifyFailure {
                user_id: user_id.to_string(),
                notification_id: inserted.id,
                reason: format!(
                    "not among {} notifications read back for the user",
                    visible.len()
                ),
            });
        }

        events::seed_verified(user_id, &inserted.id, visible.len());
        Ok(SeedOutcome {
            notification: inserted,
            visible: visible.len(),
        })
    }
}
