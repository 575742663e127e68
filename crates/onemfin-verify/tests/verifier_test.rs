//! Verifier runs against the in-memory store and the JSON snapshots.

use onemfin_core::config::VerifierConfig;
use onemfin_core::errors::{OnemfinError, StoreError};
use onemfin_verify::{
    CheckStatus, ConsistencyVerifier, FindingKind, ReportStatus, Severity,
};
use test_fixtures::{form, user, InMemoryStore, StoreOp};

fn kinds_for(report: &onemfin_verify::VerificationReport, record_id: &str) -> Vec<FindingKind> {
    report
        .findings
        .iter()
        .filter(|f| f.record_id == record_id)
        .map(|f| f.kind)
        .collect()
}

// ─── Whole-snapshot runs ──────────────────────────────────

#[test]
fn healthy_snapshot_is_clean() {
    let store = InMemoryStore::from_fixture("healthy.json");
    let report = ConsistencyVerifier::new(&store, VerifierConfig::default())
        .verify()
        .unwrap();

    assert!(report.findings.is_empty(), "{:?}", report.findings);
    assert_eq!(report.status(), ReportStatus::Clean);
    assert_eq!(report.counts.users, 2);
    assert_eq!(report.counts.forms, 2);
    assert_eq!(report.counts.submissions, 1);
    assert!(report.checks.iter().all(|c| c.status == CheckStatus::Pass));
}

#[test]
fn inconsistent_snapshot_reports_every_violation() {
    let store = InMemoryStore::from_fixture("inconsistent.json");
    let report = ConsistencyVerifier::new(&store, VerifierConfig::default())
        .verify()
        .unwrap();

    assert_eq!(report.summary.errors, 3);
    assert_eq!(report.summary.warnings, 3);
    assert_eq!(report.summary.info, 2);
    assert_eq!(report.status(), ReportStatus::Errors);

    assert_eq!(
        kinds_for(&report, "u-2"),
        vec![FindingKind::MissingAssessmentLink, FindingKind::UserWithoutForms]
    );
    assert_eq!(
        kinds_for(&report, "u-3"),
        vec![FindingKind::MissingAssessmentLink, FindingKind::UserWithoutForms]
    );
    assert_eq!(kinds_for(&report, "f-2"), vec![FindingKind::OrphanForm]);
    assert_eq!(kinds_for(&report, "f-3"), vec![FindingKind::OrphanForm]);
    assert_eq!(kinds_for(&report, "s-2"), vec![FindingKind::UnresolvedLead]);
    assert_eq!(kinds_for(&report, "s-3"), vec![FindingKind::OrphanSubmission]);
    assert!(kinds_for(&report, "u-1").is_empty());
    assert!(kinds_for(&report, "s-1").is_empty());
}

#[test]
fn findings_follow_fetch_order_by_phase() {
    let store = InMemoryStore::from_fixture("inconsistent.json");
    let report = ConsistencyVerifier::new(&store, VerifierConfig::default())
        .verify()
        .unwrap();

    let ids: Vec<&str> = report.findings.iter().map(|f| f.record_id.as_str()).collect();
    assert_eq!(ids, vec!["u-2", "u-2", "u-3", "u-3", "f-2", "f-3", "s-2", "s-3"]);
}

#[test]
fn submission_without_lead_is_skipped_not_flagged() {
    let store = InMemoryStore::from_fixture("inconsistent.json");
    let report = ConsistencyVerifier::new(&store, VerifierConfig::default())
        .verify()
        .unwrap();

    let check = report
        .checks
        .iter()
        .find(|c| c.record_id == "s-3" && c.predicate == FindingKind::UnresolvedLead)
        .unwrap();
    assert_eq!(check.status, CheckStatus::Skip);
    assert_eq!(check.note.as_deref(), Some("no lead id"));
    assert_eq!(report.summary.skipped, 1);
    assert_eq!(report.summary.failed, report.findings.len());
}

#[test]
fn empty_store_yields_clean_report() {
    let store = InMemoryStore::new();
    let report = ConsistencyVerifier::new(&store, VerifierConfig::default())
        .verify()
        .unwrap();

    assert!(report.findings.is_empty());
    assert!(report.checks.is_empty());
    assert!(report.is_clean());
}

// ─── Optional phases ──────────────────────────────────────

#[test]
fn submission_phase_can_be_disabled() {
    let store = InMemoryStore::from_fixture("inconsistent.json");
    let config = VerifierConfig {
        check_submissions: false,
        ..VerifierConfig::default()
    };
    let report = ConsistencyVerifier::new(&store, config).verify().unwrap();

    assert!(!store.calls().contains(&StoreOp::FetchAllSubmissions));
    assert_eq!(report.counts.submissions, 0);
    assert!(report
        .findings
        .iter()
        .all(|f| f.kind != FindingKind::UnresolvedLead && f.kind != FindingKind::OrphanSubmission));
}

#[test]
fn users_without_forms_can_be_silenced() {
    let store = InMemoryStore::new().with_users([user("u-1", Some("https://a.example/x"))]);
    let config = VerifierConfig {
        report_users_without_forms: false,
        ..VerifierConfig::default()
    };
    let report = ConsistencyVerifier::new(&store, config).verify().unwrap();
    assert_eq!(report.findings_at(Severity::Info).count(), 0);
}

// ─── Fatal store failures ─────────────────────────────────

#[test]
fn forms_fetch_failure_aborts_without_report() {
    let store = InMemoryStore::from_fixture("inconsistent.json");
    store.fail(StoreOp::FetchForms);

    let err = ConsistencyVerifier::new(&store, VerifierConfig::default())
        .verify()
        .unwrap_err();
    assert!(matches!(err, OnemfinError::Store(StoreError::Network { .. })));
    assert!(!store.calls().contains(&StoreOp::FetchAllSubmissions));
}

#[test]
fn users_fetch_failure_stops_before_forms() {
    let store = InMemoryStore::new().with_forms([form("f-1", Some("u-1"))]);
    store.fail_with(StoreOp::FetchUsers, || StoreError::AuthRejected { status: 401 });

    let err = ConsistencyVerifier::new(&store, VerifierConfig::default())
        .verify()
        .unwrap_err();
    assert!(matches!(err, OnemfinError::Store(StoreError::AuthRejected { status: 401 })));
    assert_eq!(store.calls(), vec![StoreOp::FetchUsers]);
}

#[test]
fn submissions_fetch_failure_is_fatal_too() {
    let store = InMemoryStore::from_fixture("healthy.json");
    store.fail(StoreOp::FetchAllSubmissions);

    let result = ConsistencyVerifier::new(&store, VerifierConfig::default()).verify();
    assert!(result.is_err());
}
