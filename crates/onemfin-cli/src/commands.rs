//! Subcommand bodies. Each writes its result to `out` and leaves exit-status
//! decisions to the caller.

use std::io::Write;

use onemfin_core::config::{LinkConfig, VerifierConfig};
use onemfin_core::traits::IRecordStore;
use onemfin_core::OnemfinError;
use onemfin_verify::report::{render_json, render_text};
use onemfin_verify::{AssessmentLinkIssuer, ConsistencyVerifier, NotificationSeeder};

/// Errors a subcommand can end with.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Run(#[from] OnemfinError),

    #[error("could not render report: {0}")]
    Render(#[from] serde_json::Error),

    #[error("could not write output: {0}")]
    Output(#[from] std::io::Error),
}

pub fn verify(
    store: &dyn IRecordStore,
    config: &VerifierConfig,
    json: bool,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let report = ConsistencyVerifier::new(store, config.clone()).verify()?;
    if json {
        writeln!(out, "{}", render_json(&report)?)?;
    } else {
        write!(out, "{}", render_text(&report))?;
    }
    Ok(())
}

pub fn seed(store: &dyn IRecordStore, user_id: &str, out: &mut impl Write) -> Result<(), CommandError> {
    let outcome = NotificationSeeder::new(store)
        .seed_and_verify(user_id)
        .map_err(OnemfinError::from)?;
    writeln!(
        out,
        "seeded notification {} for user {}; read back with {} visible",
        outcome.notification.id, user_id, outcome.visible
    )?;
    Ok(())
}

pub fn issue_links(
    store: &dyn IRecordStore,
    config: &LinkConfig,
    dry_run: bool,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let issuer = AssessmentLinkIssuer::from_config(config).map_err(OnemfinError::from)?;
    let issued = issuer.backfill(store, dry_run)?;
    for link in &issued {
        writeln!(out, "{} {}", link.user_id, link.link)?;
    }
    let verb = if dry_run { "would issue" } else { "issued" };
    writeln!(out, "{verb} {} assessment links", issued.len())?;
    Ok(())
}

pub fn lead(store: &dyn IRecordStore, lead_id: &str, out: &mut impl Write) -> Result<(), CommandError> {
    let submissions = store.fetch_submissions(lead_id).map_err(OnemfinError::from)?;
    for s in &submissions {
        writeln!(
            out,
            "{} form={} status={} submitted={}",
            s.id,
            s.assessment_id.as_deref().unwrap_or("-"),
            s.status.as_str(),
            s.submitted_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| "-".to_string())
        )?;
    }
    writeln!(out, "lead {lead_id}: {} submissions", submissions.len())?;
    Ok(())
}
