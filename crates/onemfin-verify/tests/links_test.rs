//! Assessment link back-fill against the in-memory store.

use onemfin_core::config::VerifierConfig;
use onemfin_core::errors::{OnemfinError, StoreError};
use onemfin_verify::{AssessmentLinkIssuer, ConsistencyVerifier, FindingKind};
use test_fixtures::{InMemoryStore, StoreOp};

fn issuer() -> AssessmentLinkIssuer {
    AssessmentLinkIssuer::new("https://app.onemfin.example", "assessment")
}

#[test]
fn dry_run_issues_without_writing() {
    let store = InMemoryStore::from_fixture("inconsistent.json");
    let issued = issuer().backfill(&store, true).unwrap();

    let ids: Vec<&str> = issued.iter().map(|i| i.user_id.as_str()).collect();
    assert_eq!(ids, vec!["u-2", "u-3"]);
    assert!(issued.iter().all(|i| !i.persisted));
    assert!(!store.calls().contains(&StoreOp::UpdateAssessmentLink));
    assert!(store.snapshot().users[1].assessment_link.is_none());
}

#[test]
fn backfill_clears_missing_link_findings() {
    let store = InMemoryStore::from_fixture("inconsistent.json");
    let issued = issuer().backfill(&store, false).unwrap();
    assert_eq!(issued.len(), 2);
    assert!(issued.iter().all(|i| i.persisted));
    assert!(issued
        .iter()
        .all(|i| i.link.starts_with("https://app.onemfin.example/assessment/")));

    let report = ConsistencyVerifier::new(&store, VerifierConfig::default())
        .verify()
        .unwrap();
    assert!(report
        .findings
        .iter()
        .all(|f| f.kind != FindingKind::MissingAssessmentLink));
}

#[test]
fn users_with_links_are_left_alone() {
    let store = InMemoryStore::from_fixture("healthy.json");
    let before = store.snapshot().users;
    let issued = issuer().backfill(&store, false).unwrap();
    assert!(issued.is_empty());
    assert_eq!(store.snapshot().users, before);
}

#[test]
fn store_error_stops_backfill() {
    let store = InMemoryStore::from_fixture("inconsistent.json");
    store.fail_with(StoreOp::UpdateAssessmentLink, || StoreError::NotFound {
        table: "users".into(),
        id: "u-2".into(),
    });

    let err = issuer().backfill(&store, false).unwrap_err();
    assert!(matches!(err, OnemfinError::Store(StoreError::NotFound { .. })));
    let updates = store
        .calls()
        .into_iter()
        .filter(|op| *op == StoreOp::UpdateAssessmentLink)
        .count();
    assert_eq!(updates, 1);
}
