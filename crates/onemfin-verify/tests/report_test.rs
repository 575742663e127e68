//! Text and JSON rendering.

use onemfin_core::config::VerifierConfig;
use onemfin_verify::report::{render_json, render_text};
use onemfin_verify::{ConsistencyVerifier, RecordCounts, VerificationReport};
use test_fixtures::InMemoryStore;

fn report_for(fixture: &str) -> VerificationReport {
    let store = InMemoryStore::from_fixture(fixture);
    ConsistencyVerifier::new(&store, VerifierConfig::default())
        .verify()
        .unwrap()
}

#[test]
fn clean_report_says_no_findings() {
    let text = render_text(&report_for("healthy.json"));
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "OneMFin consistency report");
    assert_eq!(lines[1], "checked: 2 users, 2 forms, 1 submissions");
    assert!(lines.contains(&"PASS user u-1 (missing_assessment_link)"));
    assert!(lines.contains(&"no findings"));
    assert_eq!(
        *lines.last().unwrap(),
        "summary: 0 info, 0 warnings, 0 errors; status clean"
    );
}

#[test]
fn findings_are_labelled_by_severity() {
    let text = render_text(&report_for("inconsistent.json"));

    assert!(text.contains("FAIL form f-2 (orphan_form)\n"));
    assert!(text.contains("SKIP submission s-3 (unresolved_lead): no lead id\n"));
    assert!(text.contains("[ERROR] orphan_form form f-2: form f-2 references missing user u-deleted\n"));
    assert!(text.contains("[ERROR] orphan_form form f-3: form f-3 has no owning user\n"));
    assert!(text.contains("[WARN]  missing_assessment_link user u-2: user Daniel Okafor has no assessment link\n"));
    assert!(text.contains("[WARN]  missing_assessment_link user u-3: user mei@advisors.example has a blank assessment link\n"));
    assert!(text.contains("[INFO]  user_without_forms user u-2: "));
    assert!(!text.contains("no findings"));
    assert!(text.ends_with("summary: 2 info, 3 warnings, 3 errors; status errors\n"));
}

#[test]
fn empty_report_renders_every_section() {
    let report = VerificationReport::new(RecordCounts::default(), vec![], vec![]);
    assert_eq!(
        render_text(&report),
        "OneMFin consistency report\n\
         checked: 0 users, 0 forms, 0 submissions\n\
         no findings\n\
         summary: 0 info, 0 warnings, 0 errors; status clean\n"
    );
}

#[test]
fn rendering_is_deterministic() {
    let report = report_for("inconsistent.json");
    assert_eq!(render_text(&report), render_text(&report));
    assert_eq!(render_json(&report).unwrap(), render_json(&report).unwrap());
}

#[test]
fn json_report_carries_summary_and_findings() {
    let json = render_json(&report_for("inconsistent.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["summary"]["status"], "errors");
    assert_eq!(value["summary"]["errors"], 3);
    assert_eq!(value["findings"][0]["kind"], "missing_assessment_link");
    assert_eq!(value["findings"][0]["severity"], "warning");
    assert_eq!(value["counts"]["submissions"], 3);
}
