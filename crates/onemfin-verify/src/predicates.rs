//! Named invariant predicates.
//!
//! Every predicate returns a tri-state [`Outcome`]: `Satisfied`, `Violated`
//! with a reason, or `Inapplicable` when the record carries nothing to check.
//! Cross-entity predicates look references up in a [`RecordIndex`] built once
//! per run.

use std::collections::HashSet;

use onemfin_core::models::{AssessmentForm, AssessmentSubmission, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Satisfied,
    Violated(String),
    Inapplicable(String),
}

impl Outcome {
    pub fn is_violated(&self) -> bool {
        matches!(self, Self::Violated(_))
    }

    pub fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied)
    }
}

/// Lookup sets over one run's fetched records.
#[derive(Debug, Clone, Default)]
pub struct RecordIndex {
    user_ids: HashSet<String>,
    /// User ids plus identity-provider ids, the references a lead may carry.
    lead_refs: HashSet<String>,
    form_ids: HashSet<String>,
    form_owners: HashSet<String>,
}

impl RecordIndex {
    pub fn build(users: &[User], forms: &[AssessmentForm]) -> Self {
        let user_ids: HashSet<String> = users.iter().map(|u| u.id.clone()).collect();
        let lead_refs = users
            .iter()
            .flat_map(|u| std::iter::once(u.id.clone()).chain(u.clerk_id.clone()))
            .collect();
        let form_ids = forms.iter().map(|f| f.id.clone()).collect();
        let form_owners = forms.iter().filter_map(|f| f.user_id.clone()).collect();
        Self {
            user_ids,
            lead_refs,
            form_ids,
            form_owners,
        }
    }

    pub fn has_user(&self, id: &str) -> bool {
        self.user_ids.contains(id)
    }

    pub fn has_form(&self, id: &str) -> bool {
        self.form_ids.contains(id)
    }

    pub fn resolves_lead(&self, lead_id: &str) -> bool {
        self.lead_refs.contains(lead_id)
    }

    pub fn owns_forms(&self, user_id: &str) -> bool {
        self.form_owners.contains(user_id)
    }
}

/// A user must carry a non-blank assessment link.
pub fn has_assessment_link(user: &User) -> Outcome {
    match user.assessment_link.as_deref() {
        None => Outcome::Violated(format!("user {} has no assessment link", user.display_name())),
        Some(_) if user.assessment_link().is_none() => Outcome::Violated(format!(
            "user {} has a blank assessment link",
            user.display_name()
        )),
        Some(_) => Outcome::Satisfied,
    }
}

/// A form's owner must be a fetched user. A null owner is a violation.
pub fn form_has_owner(form: &AssessmentForm, index: &RecordIndex) -> Outcome {
    match form.user_id.as_deref() {
        None => Outcome::Violated(format!("form {} has no owning user", form.id)),
        Some(owner) if index.has_user(owner) => Outcome::Satisfied,
        Some(owner) => Outcome::Violated(format!(
            "form {} references missing user {}",
            form.id, owner
        )),
    }
}

/// A submission's form must be a fetched form.
pub fn submission_has_form(submission: &AssessmentSubmission, index: &RecordIndex) -> Outcome {
    match submission.assessment_id.as_deref() {
        None => Outcome::Violated(format!("submission {} has no assessment", submission.id)),
        Some(form) if index.has_form(form) => Outcome::Satisfied,
        Some(form) => Outcome::Violated(format!(
            "submission {} references missing form {}",
            submission.id, form
        )),
    }
}

/// A submission's lead should resolve to a known user. Leads may be external
/// prospects, so callers report a violation as a warning.
pub fn lead_resolves(submission: &AssessmentSubmission, index: &RecordIndex) -> Outcome {
    match submission.lead_id.as_deref().map(str::trim) {
        None | Some("") => Outcome::Inapplicable("no lead id".to_string()),
        Some(lead) if index.resolves_lead(lead) => Outcome::Satisfied,
        Some(lead) => Outcome::Violated(format!(
            "submission {} lead {} matches no known user",
            submission.id, lead
        )),
    }
}

/// A user should own at least one form.
pub fn owns_forms(user: &User, index: &RecordIndex) -> Outcome {
    if index.owns_forms(&user.id) {
        Outcome::Satisfied
    } else {
        Outcome::Violated(format!("user {} owns no assessment forms", user.display_name()))
    }
}
