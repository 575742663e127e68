//! Report rendering. Pure formatting, no I/O.

use std::fmt::Write;

use super::VerificationReport;

/// Render the human-readable report.
///
/// ```text
/// OneMFin consistency report
/// checked: 2 users, 1 forms, 0 submissions
/// PASS user u-1 (missing_assessment_link)
/// FAIL user u-2 (missing_assessment_link)
/// [WARN]  missing_assessment_link user u-2: user u-2 has no assessment link
/// summary: 0 info, 1 warnings, 0 errors; status warnings
/// ```
pub fn render_text(report: &VerificationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "OneMFin consistency report");
    let _ = writeln!(
        out,
        "checked: {} users, {} forms, {} submissions",
        report.counts.users, report.counts.forms, report.counts.submissions
    );

    for check in &report.checks {
        let _ = write!(
            out,
            "{} {} {} ({})",
            check.status.label(),
            check.entity,
            check.record_id,
            check.predicate
        );
        if let Some(ref note) = check.note {
            let _ = write!(out, ": {note}");
        }
        out.push('\n');
    }

    if report.findings.is_empty() {
        let _ = writeln!(out, "no findings");
    }
    for f in &report.findings {
        let _ = writeln!(
            out,
            "{} {} {} {}: {}",
            f.severity.label(),
            f.kind,
            f.entity,
            f.record_id,
            f.message
        );
    }

    let s = &report.summary;
    let _ = writeln!(
        out,
        "summary: {} info, {} warnings, {} errors; status {}",
        s.info,
        s.warnings,
        s.errors,
        s.status.as_str()
    );
    out
}

/// Render the report as pretty-printed JSON.
pub fn render_json(report: &VerificationReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
