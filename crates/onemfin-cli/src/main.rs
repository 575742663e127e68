//! `onemfin`: run the consistency verifier and its companion probes against
//! the hosted store.

#![forbid(unsafe_code)]

mod commands;
mod tracing_setup;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use onemfin_core::errors::{ErrorCode, ProbeError};
use onemfin_core::{OnemfinConfig, OnemfinError};
use onemfin_store::RestStore;

use commands::CommandError;

#[derive(Parser)]
#[command(name = "onemfin", version)]
#[command(about = "Consistency checks for OneMFin users, assessment forms, and submissions")]
struct Cli {
    /// TOML config file. Defaults to ./onemfin.toml when present.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Check cross-record invariants and print the report (default).
    Verify {
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Insert a test notification for a user and read it back.
    Seed {
        #[arg(value_name = "USER_ID")]
        user_id: String,
    },
    /// Issue assessment links for users that lack one.
    IssueLinks {
        /// List the links without storing them.
        #[arg(long)]
        dry_run: bool,
    },
    /// List a lead's assessment submissions.
    Lead {
        #[arg(value_name = "LEAD_ID")]
        lead_id: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error [{}]: {}", error_code(&e), e);
            ExitCode::from(exit_status(&e))
        }
    }
}

fn run(cli: Cli) -> Result<(), CommandError> {
    let config = OnemfinConfig::load(cli.config.as_deref()).map_err(OnemfinError::from)?;
    tracing_setup::init_tracing(&config.observability);
    tracing::debug!(config = ?config.store, "configuration loaded");

    let store = RestStore::from_config(&config.store)?;
    let mut out = io::stdout().lock();

    match cli.command.unwrap_or(Command::Verify { json: false }) {
        Command::Verify { json } => commands::verify(&store, &config.verifier, json, &mut out),
        Command::Seed { user_id } => commands::seed(&store, &user_id, &mut out),
        Command::IssueLinks { dry_run } => {
            commands::issue_links(&store, &config.links, dry_run, &mut out)
        }
        Command::Lead { lead_id } => commands::lead(&store, &lead_id, &mut out),
    }
}

fn error_code(e: &CommandError) -> &'static str {
    match e {
        CommandError::Run(inner) => inner.error_code(),
        CommandError::Render(_) | CommandError::Output(_) => "OUTPUT_ERROR",
    }
}

/// 0 completed, 1 store, 2 config, 3 seed failure, 4 verify failure.
fn exit_status(e: &CommandError) -> u8 {
    match e {
        CommandError::Run(OnemfinError::Config(_)) => 2,
        CommandError::Run(OnemfinError::Store(_)) => 1,
        CommandError::Run(OnemfinError::Probe(ProbeError::SeedFailure { .. })) => 3,
        CommandError::Run(OnemfinError::Probe(ProbeError::VerifyFailure { .. })) => 4,
        CommandError::Render(_) | CommandError::Output(_) => 1,
    }
}
