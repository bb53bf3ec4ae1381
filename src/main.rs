//! Strictly Scorebook - Unified CLI
//!
//! Interactive scorer, script replay and setup validation.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::{Path, PathBuf};
use strictly_cricket::{MatchConfig, MatchProgress, MatchState};
use strictly_scorebook::{
    MatchScript, ScoringSession, SetupFile, render_result, render_status, write_report,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // stdout carries the scoreboard
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Score { setup, export_dir } => run_score(&setup, export_dir),
        Command::Play {
            script,
            export_dir,
            json,
        } => run_play(&script, export_dir, json),
        Command::Check { setup } => run_check(&setup),
    }
}

/// Score a match from standard input
#[instrument]
fn run_score(setup: &Path, export_dir: Option<PathBuf>) -> Result<()> {
    let setup = load_setup(setup)?;
    let mut session = ScoringSession::start(&setup)?;

    let stdin = std::io::stdin();
    let flow = session.run(stdin.lock(), std::io::stdout())?;
    info!(?flow, "Scoring stopped");

    export(session.state(), export_dir)
}

/// Replay a script and print the outcome
#[instrument]
fn run_play(script: &Path, export_dir: Option<PathBuf>, json: bool) -> Result<()> {
    let script = MatchScript::from_file(script)?;
    let progress = script.play()?;

    if json {
        println!("{}", serde_json::to_string_pretty(progress.state())?);
    } else {
        match &progress {
            MatchProgress::Finished(finished) => {
                print!("{}", render_result(finished.state(), finished.result()))
            }
            MatchProgress::InProgress(game) => print!("{}", render_status(game.state())),
        }
    }

    export(progress.state(), export_dir)
}

/// Validate a setup file
#[instrument]
fn run_check(setup: &Path) -> Result<()> {
    let setup = load_setup(setup)?;
    let config = MatchConfig::new(setup.to_command())?;
    println!(
        "{} vs {}, {} overs. {} bat first.",
        config.team1(),
        config.team2(),
        config.total_overs(),
        config.batting_team()
    );
    Ok(())
}

fn load_setup(path: &Path) -> Result<SetupFile> {
    SetupFile::from_file(path)
        .with_context(|| format!("Failed to load setup from {}", path.display()))
}

fn export(state: &MatchState, export_dir: Option<PathBuf>) -> Result<()> {
    if let Some(dir) = export_dir {
        for path in write_report(state, &dir)? {
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}
