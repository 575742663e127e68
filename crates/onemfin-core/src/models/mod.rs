//! Records owned by the hosted store. Field names follow the store's columns.

mod assessment_form;
mod assessment_submission;
mod notification;
mod user;

pub use assessment_form::AssessmentForm;
pub use assessment_submission::{AssessmentSubmission, SubmissionStatus};
pub use notification::{NewNotification, Notification, NotificationPriority};
pub use user::User;
