use crate::errors::StoreResult;
use crate::models::{AssessmentForm, AssessmentSubmission, NewNotification, Notification, User};

/// Every read and write the verifier, seeder, and link issuer make against the
/// hosted store. Each call is one blocking round trip; implementations keep no
/// cache and never retry.
pub trait IRecordStore: Send + Sync {
    // --- Users ---
    fn fetch_users(&self) -> StoreResult<Vec<User>>;
    /// Set `assessment_link` on one user and return the updated row.
    fn update_assessment_link(&self, user_id: &str, link: &str) -> StoreResult<User>;

    // --- Forms ---
    fn fetch_forms(&self) -> StoreResult<Vec<AssessmentForm>>;

    // --- Submissions ---
    /// Submissions made by one lead.
    fn fetch_submissions(&self, lead_id: &str) -> StoreResult<Vec<AssessmentSubmission>>;
    fn fetch_all_submissions(&self) -> StoreResult<Vec<AssessmentSubmission>>;

    // --- Notifications ---
    /// Fails with `StoreError::ConstraintViolation` when `user_id` is unknown.
    fn insert_notification(&self, record: &NewNotification) -> StoreResult<Notification>;
    fn fetch_notifications(&self, user_id: &str) -> StoreResult<Vec<Notification>>;
}
