//! Match setup loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_cricket::{StartMatchCommand, TossDecision};
use tracing::{debug, info, instrument};

/// Match setup as written in a TOML file.
///
/// Missing fields fall back to the scorer's defaults: "Team A" vs
/// "Team B", five overs, toss won by team 1 who choose to bat.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SetupFile {
    /// First team's name.
    #[serde(default = "default_team1")]
    team1: String,

    /// Second team's name.
    #[serde(default = "default_team2")]
    team2: String,

    /// Overs per innings.
    #[serde(default = "default_overs")]
    overs: u32,

    /// Toss winner; defaults to `team1`.
    #[serde(default)]
    toss_winner: Option<String>,

    /// `Bat` or `Bowl`.
    #[serde(default)]
    toss_decision: TossDecision,
}

#[instrument]
fn default_team1() -> String {
    "Team A".to_string()
}

#[instrument]
fn default_team2() -> String {
    "Team B".to_string()
}

#[instrument]
fn default_overs() -> u32 {
    5
}

impl SetupFile {
    /// Loads a setup from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SetupError> {
        debug!("Loading setup from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| SetupError::new(format!("Failed to read setup file: {}", e)))?;
        let setup = Self::parse(&content)?;
        info!(team1 = %setup.team1, team2 = %setup.team2, overs = setup.overs, "Setup loaded");
        Ok(setup)
    }

    /// Parses a setup from TOML text.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, SetupError> {
        toml::from_str(content).map_err(|e| SetupError::new(format!("Failed to parse setup: {}", e)))
    }

    /// Converts into the engine's start command.
    pub fn to_command(&self) -> StartMatchCommand {
        StartMatchCommand::new(
            self.team1.clone(),
            self.team2.clone(),
            self.overs,
            self.toss_winner.clone().unwrap_or_else(|| self.team1.clone()),
            self.toss_decision,
        )
    }
}

impl Default for SetupFile {
    fn default() -> Self {
        Self {
            team1: default_team1(),
            team2: default_team2(),
            overs: default_overs(),
            toss_winner: None,
            toss_decision: TossDecision::default(),
        }
    }
}

/// Setup file error.
#[derive(Debug, Clone, Display, Error)]
#[display("Setup error: {} at {}:{}", message, file, line)]
pub struct SetupError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SetupError {
    /// Creates a new setup error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
