//! Test fixtures for the OneMFin verifier.
//!
//! Provides an in-memory [`IRecordStore`] with failure injection, foreign-key
//! enforcement and read-after-write lag simulation, typed loading of the JSON
//! store snapshots under `data/`, and small record builders.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::Utc;
use onemfin_core::constants::{NOTIFICATIONS_TABLE, USERS_TABLE};
use onemfin_core::errors::{StoreError, StoreResult};
use onemfin_core::models::{
    AssessmentForm, AssessmentSubmission, NewNotification, Notification, User,
};
use onemfin_core::traits::IRecordStore;
use serde::Deserialize;

// ─── Snapshots ─────────────────────────────────────────────

/// Every row the in-memory store holds, in store order.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoreSnapshot {
    pub users: Vec<User>,
    pub forms: Vec<AssessmentForm>,
    pub submissions: Vec<AssessmentSubmission>,
    pub notifications: Vec<Notification>,
}

/// Absolute path of a file under this crate's `data/` directory.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join(relative_path)
}

/// Load and deserialize a snapshot fixture, e.g. `"inconsistent.json"`.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_snapshot(relative_path: &str) -> StoreSnapshot {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

// ─── Builders ─────────────────────────────────────────────

/// A user with an optional assessment link.
pub fn user(id: &str, link: Option<&str>) -> User {
    User {
        assessment_link: link.map(str::to_string),
        ..User::new(id)
    }
}

/// An active form owned by `owner` (`None` for a null owner column).
pub fn form(id: &str, owner: Option<&str>) -> AssessmentForm {
    AssessmentForm {
        id: id.to_string(),
        user_id: owner.map(str::to_string),
        name: format!("Form {id}"),
        is_active: true,
    }
}

/// A submission answering `form_id`, optionally by `lead`.
pub fn submission(id: &str, form_id: &str, lead: Option<&str>) -> AssessmentSubmission {
    let sub = AssessmentSubmission::new(id, form_id);
    match lead {
        Some(l) => sub.with_lead(l),
        None => sub,
    }
}

// ─── In-memory store ──────────────────────────────────────

/// The store calls an [`InMemoryStore`] records and can be told to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    FetchUsers,
    UpdateAssessmentLink,
    FetchForms,
    FetchSubmissions,
    FetchAllSubmissions,
    InsertNotification,
    FetchNotifications,
}

type FailureFn = Box<dyn Fn() -> StoreError + Send>;

#[derive(Default)]
struct State {
    snapshot: StoreSnapshot,
    failures: HashMap<StoreOp, FailureFn>,
    lagging: bool,
    hidden: HashSet<String>,
    calls: Vec<StoreOp>,
}

/// An `IRecordStore` backed by a [`StoreSnapshot`].
///
/// Mirrors the hosted store's behavior that the verifier depends on:
/// notification inserts are rejected for unknown users, and PATCHes that match
/// no row fail with `NotFound`.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        Self {
            state: Mutex::new(State {
                snapshot,
                ..State::default()
            }),
        }
    }

    /// Load a store from a JSON fixture under `data/`.
    pub fn from_fixture(relative_path: &str) -> Self {
        Self::from_snapshot(load_snapshot(relative_path))
    }

    pub fn with_users(self, users: impl IntoIterator<Item = User>) -> Self {
        self.lock().snapshot.users.extend(users);
        self
    }

    pub fn with_forms(self, forms: impl IntoIterator<Item = AssessmentForm>) -> Self {
        self.lock().snapshot.forms.extend(forms);
        self
    }

    pub fn with_submissions(
        self,
        submissions: impl IntoIterator<Item = AssessmentSubmission>,
    ) -> Self {
        self.lock().snapshot.submissions.extend(submissions);
        self
    }

    /// Make `op` fail with a network error.
    pub fn fail(&self, op: StoreOp) {
        self.fail_with(op, || StoreError::Network {
            url: "memory://store".to_string(),
            reason: "injected failure".to_string(),
        });
    }

    /// Make `op` fail with the error `make` builds.
    pub fn fail_with(&self, op: StoreOp, make: impl Fn() -> StoreError + Send + 'static) {
        self.lock().failures.insert(op, Box::new(make));
    }

    /// Accept notification inserts but keep them out of subsequent reads,
    /// as a lagging read replica would.
    pub fn simulate_read_lag(&self) {
        self.lock().lagging = true;
    }

    /// Every call made so far, in order.
    pub fn calls(&self) -> Vec<StoreOp> {
        self.lock().calls.clone()
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.lock().snapshot.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("in-memory store lock poisoned")
    }

    /// Record the call and return the injected failure, if any.
    fn enter(&self, op: StoreOp) -> StoreResult<std::sync::MutexGuard<'_, State>> {
        let mut state = self.lock();
        state.calls.push(op);
        if let Some(make) = state.failures.get(&op) {
            return Err(make());
        }
        Ok(state)
    }
}

impl IRecordStore for InMemoryStore {
    fn fetch_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.enter(StoreOp::FetchUsers)?.snapshot.users.clone())
    }

    fn update_assessment_link(&self, user_id: &str, link: &str) -> StoreResult<User> {
        let mut state = self.enter(StoreOp::UpdateAssessmentLink)?;
        let user = state
            .snapshot
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| StoreError::NotFound {
                table: USERS_TABLE.to_string(),
                id: user_id.to_string(),
            })?;
        user.assessment_link = Some(link.to_string());
        Ok(user.clone())
    }

    fn fetch_forms(&self) -> StoreResult<Vec<AssessmentForm>> {
        Ok(self.enter(StoreOp::FetchForms)?.snapshot.forms.clone())
    }

    fn fetch_submissions(&self, lead_id: &str) -> StoreResult<Vec<AssessmentSubmission>> {
        let state = self.enter(StoreOp::FetchSubmissions)?;
        Ok(state
            .snapshot
            .submissions
            .iter()
            .filter(|s| s.lead_id.as_deref() == Some(lead_id))
            .cloned()
            .collect())
    }

    fn fetch_all_submissions(&self) -> StoreResult<Vec<AssessmentSubmission>> {
        Ok(self
            .enter(StoreOp::FetchAllSubmissions)?
            .snapshot
            .submissions
            .clone())
    }

    fn insert_notification(&self, record: &NewNotification) -> StoreResult<Notification> {
        let mut state = self.enter(StoreOp::InsertNotification)?;
        if !state.snapshot.users.iter().any(|u| u.id == record.user_id) {
            return Err(StoreError::ConstraintViolation {
                table: NOTIFICATIONS_TABLE.to_string(),
                message: format!(
                    "insert or update on table \"notifications\" violates foreign key constraint: user_id {} not present",
                    record.user_id
                ),
            });
        }
        let id = uuid::Uuid::new_v4().to_string();
        let inserted = record.clone().into_notification(id.clone(), Utc::now());
        if state.lagging {
            state.hidden.insert(id);
        }
        state.snapshot.notifications.push(inserted.clone());
        Ok(inserted)
    }

    fn fetch_notifications(&self, user_id: &str) -> StoreResult<Vec<Notification>> {
        let state = self.enter(StoreOp::FetchNotifications)?;
        Ok(state
            .snapshot
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id && !state.hidden.contains(&n.id))
            .cloned()
            .collect())
    }
}
