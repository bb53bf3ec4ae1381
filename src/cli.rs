//! Command-line interface for strictly_scorebook.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Scorebook - limited-overs cricket scorer
#[derive(Parser, Debug)]
#[command(name = "strictly_scorebook")]
#[command(about = "Ball-by-ball scorer for two-innings limited-overs cricket", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Score a match interactively from standard input
    Score {
        /// Path to the match setup file
        #[arg(short, long, default_value = "match.toml")]
        setup: PathBuf,

        /// Write the scorecard sheets here when scoring stops
        #[arg(long)]
        export_dir: Option<PathBuf>,
    },

    /// Replay a match script and print the scoreboard
    Play {
        /// Path to the match script
        script: PathBuf,

        /// Write the scorecard sheets here
        #[arg(long)]
        export_dir: Option<PathBuf>,

        /// Print the final match state as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a setup file without starting a match
    Check {
        /// Path to the match setup file
        setup: PathBuf,
    },
}
