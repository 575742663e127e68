//! ConsistencyVerifier: fetches every relevant record, then evaluates the
//! cross-entity predicates in memory.

use onemfin_core::config::VerifierConfig;
use onemfin_core::constants::{FORMS_TABLE, SUBMISSIONS_TABLE, USERS_TABLE};
use onemfin_core::errors::{OnemfinResult, StoreResult};
use onemfin_core::models::{AssessmentForm, AssessmentSubmission, User};
use onemfin_core::traits::IRecordStore;

use crate::events;
use crate::findings::{CheckStatus, Finding, FindingKind, RecordCheck};
use crate::predicates::{self, Outcome, RecordIndex};
use crate::report::{RecordCounts, VerificationReport};

/// Runs one consistency pass over a record store.
///
/// Every fetch completes before any predicate runs, and a store failure at
/// any point aborts the run: no partial report is ever returned.
pub struct ConsistencyVerifier<'a> {
    store: &'a dyn IRecordStore,
    config: VerifierConfig,
}

impl<'a> ConsistencyVerifier<'a> {
    pub fn new(store: &'a dyn IRecordStore, config: VerifierConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &VerifierConfig {
        &self.config
    }

    pub fn verify(&self) -> OnemfinResult<VerificationReport> {
        events::run_started(self.config.check_submissions);

        let users = fetch(USERS_TABLE, || self.store.fetch_users())?;
        let forms = fetch(FORMS_TABLE, || self.store.fetch_forms())?;
        let submissions = if self.config.check_submissions {
            fetch(SUBMISSIONS_TABLE, || self.store.fetch_all_submissions())?
        } else {
            Vec::new()
        };

        let report = self.evaluate(&users, &forms, &submissions);
        events::run_completed(&report.summary);
        Ok(report)
    }

    /// Evaluate every enabled predicate over already-fetched records.
    pub fn evaluate(
        &self,
        users: &[User],
        forms: &[AssessmentForm],
        submissions: &[AssessmentSubmission],
    ) -> VerificationReport {
        let index = RecordIndex::build(users, forms);
        let mut acc = Accumulator::default();

        for user in users {
            acc.record(
                FindingKind::MissingAssessmentLink,
                &user.id,
                predicates::has_assessment_link(user),
            );
            if self.config.report_users_without_forms {
                acc.record(
                    FindingKind::UserWithoutForms,
                    &user.id,
                    predicates::owns_forms(user, &index),
                );
            }
        }

        for form in forms {
            acc.record(
                FindingKind::OrphanForm,
                &form.id,
                predicates::form_has_owner(form, &index),
            );
        }

        for submission in submissions {
            acc.record(
                FindingKind::OrphanSubmission,
                &submission.id,
                predicates::submission_has_form(submission, &index),
            );
            acc.record(
                FindingKind::UnresolvedLead,
                &submission.id,
                predicates::lead_resolves(submission, &index),
            );
        }

        let counts = RecordCounts {
            users: users.len(),
            forms: forms.len(),
            submissions: submissions.len(),
        };
        VerificationReport::new(counts, acc.checks, acc.findings)
    }
}

fn fetch<T>(table: &str, call: impl FnOnce() -> StoreResult<Vec<T>>) -> OnemfinResult<Vec<T>> {
    match call() {
        Ok(rows) => {
            events::fetch_completed(table, rows.len());
            Ok(rows)
        }
        Err(e) => {
            events::run_aborted(table, &e);
            Err(e.into())
        }
    }
}

#[derive(Default)]
struct Accumulator {
    checks: Vec<RecordCheck>,
    findings: Vec<Finding>,
}

impl Accumulator {
    fn record(&mut self, kind: FindingKind, record_id: &str, outcome: Outcome) {
        let (status, note) = match outcome {
            Outcome::Satisfied => (CheckStatus::Pass, None),
            Outcome::Inapplicable(reason) => (CheckStatus::Skip, Some(reason)),
            Outcome::Violated(reason) => {
                let finding = Finding::new(kind, record_id, reason);
                events::finding_recorded(&finding);
                self.findings.push(finding);
                (CheckStatus::Fail, None)
            }
        };
        self.checks.push(RecordCheck {
            entity: kind.entity(),
            record_id: record_id.to_string(),
            predicate: kind,
            status,
            note,
        });
    }
}
