use onemfin_core::models::*;
use serde_json::json;

#[test]
fn user_deserializes_with_nullable_columns() {
    let user: User = serde_json::from_value(json!({
        "id": "u-1",
        "clerk_id": "user_2abc",
        "full_name": null,
        "email": "advisor@example.com",
        "assessment_link": null,
        "created_at": "2024-05-01T10:00:00Z"
    }))
    .unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.clerk_id.as_deref(), Some("user_2abc"));
    assert!(user.assessment_link().is_none());
    assert_eq!(user.display_name(), "advisor@example.com");
}

#[test]
fn blank_assessment_link_is_treated_as_absent() {
    let mut user = User::new("u-1");
    user.assessment_link = Some("   ".into());
    assert!(user.assessment_link().is_none());

    user.assessment_link = Some(" https://app.onemfin.com/assessment/abc ".into());
    assert_eq!(
        user.assessment_link(),
        Some("https://app.onemfin.com/assessment/abc")
    );
}

#[test]
fn display_name_falls_back_to_id() {
    let user = User::new("u-7");
    assert_eq!(user.display_name(), "u-7");
}

#[test]
fn form_defaults_to_active_when_column_missing() {
    let form: AssessmentForm =
        serde_json::from_value(json!({"id": "f-1", "user_id": "u-1", "name": "Risk profile"})).unwrap();
    assert!(form.is_active);
    assert_eq!(form.user_id.as_deref(), Some("u-1"));
}

#[test]
fn form_with_null_owner_deserializes() {
    let form: AssessmentForm =
        serde_json::from_value(json!({"id": "f-2", "user_id": null, "name": "Orphan", "is_active": false}))
            .unwrap();
    assert!(form.user_id.is_none());
    assert!(!form.is_active);
}

#[test]
fn submission_keeps_answers_and_unknown_status() {
    let sub: AssessmentSubmission = serde_json::from_value(json!({
        "id": "s-1",
        "assessment_id": "f-1",
        "lead_id": "lead-9",
        "framework_version_id": "fv-2",
        "answers": {"q1": "yes", "q2": 4},
        "result": {"score": 72, "band": "moderate"},
        "submitted_at": "2024-05-02T09:30:00Z",
        "status": "escalated"
    }))
    .unwrap();
    assert_eq!(sub.answers.len(), 2);
    assert_eq!(sub.answers["q2"], json!(4));
    assert_eq!(sub.status, SubmissionStatus::Other("escalated".into()));
    assert_eq!(sub.status.as_str(), "escalated");

    let back = serde_json::to_value(&sub).unwrap();
    assert_eq!(back["status"], json!("escalated"));
}

#[test]
fn submission_status_known_values() {
    for (raw, expected) in [
        ("pending", SubmissionStatus::Pending),
        ("completed", SubmissionStatus::Completed),
        ("reviewed", SubmissionStatus::Reviewed),
        ("archived", SubmissionStatus::Archived),
    ] {
        assert_eq!(SubmissionStatus::from(raw.to_string()), expected);
    }
}

#[test]
fn notification_type_column_maps_to_kind() {
    let n: Notification = serde_json::from_value(json!({
        "id": "n-1",
        "user_id": "u-1",
        "type": "new_lead",
        "title": "New lead",
        "message": "A lead completed your assessment",
        "priority": "high",
        "is_read": false,
        "data": {"lead_id": "lead-9"},
        "created_at": "2024-05-02T09:31:00Z"
    }))
    .unwrap();
    assert_eq!(n.kind, "new_lead");
    assert_eq!(n.priority, NotificationPriority::High);
    assert_eq!(n.data["lead_id"], json!("lead-9"));
}

#[test]
fn new_notification_serializes_store_columns() {
    let record = NewNotification {
        user_id: "u-1".into(),
        kind: "test".into(),
        title: "Test Notification".into(),
        message: "hello".into(),
        priority: NotificationPriority::Medium,
        is_read: false,
        data: json!({}),
    };
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["type"], json!("test"));
    assert_eq!(value["priority"], json!("medium"));
    assert_eq!(value["is_read"], json!(false));
    assert!(value.get("kind").is_none());
}
