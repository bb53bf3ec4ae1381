//! Match scripts: a setup plus the scorer's commands, replayed in order.
//!
//! ```toml
//! commands = ["bat Rohit", "off Gill", "bowl Starc", "4", "wd", "1"]
//!
//! [setup]
//! team1 = "India"
//! team2 = "Australia"
//! overs = 1
//! ```

use crate::console::{ConsoleCommand, ParseError, parse_command};
use crate::setup::SetupFile;
use derive_getters::Getters;
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_cricket::{ConfigError, InvalidInputError, MatchProgress, MatchSetup};
use tracing::{debug, info, instrument, warn};

/// A scripted match.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct MatchScript {
    /// Match setup.
    #[serde(default)]
    setup: SetupFile,

    /// Console lines, one command each.
    #[serde(default)]
    commands: Vec<String>,
}

/// Why a script could not be played.
#[derive(Debug, Display, Error, From)]
pub enum ScriptError {
    /// The script file could not be read or parsed.
    #[display("Failed to load script: {}", _0)]
    #[from(ignore)]
    Load(#[error(not(source))] String),

    /// The setup was rejected.
    #[display("{}", _0)]
    Config(ConfigError),

    /// A line is not a command.
    #[display("Line {}: {}", line, source)]
    #[from(ignore)]
    Parse {
        /// 1-based command index.
        line: usize,
        /// Parser error.
        source: ParseError,
    },

    /// The match refused a command.
    #[display("Line {} ({}): {}", line, command, source)]
    #[from(ignore)]
    Rejected {
        /// 1-based command index.
        line: usize,
        /// The offending line.
        command: String,
        /// Match error.
        source: InvalidInputError,
    },
}

impl MatchScript {
    /// Creates a script from a setup and command lines.
    pub fn new(setup: SetupFile, commands: Vec<String>) -> Self {
        Self { setup, commands }
    }

    /// Loads a script from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ScriptError::Load(e.to_string()))?;
        let script = Self::parse(&content)?;
        info!(commands = script.commands.len(), "Script loaded");
        Ok(script)
    }

    /// Parses a script from TOML text.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, ScriptError> {
        toml::from_str(content).map_err(|e| ScriptError::Load(e.to_string()))
    }

    /// Plays the script until its commands run out or the match ends.
    ///
    /// `status` and `help` lines are skipped, `quit` stops early. Any
    /// unparseable or rejected line aborts with its position.
    #[instrument(skip(self), fields(commands = self.commands.len()))]
    pub fn play(&self) -> Result<MatchProgress, ScriptError> {
        let mut game = MatchSetup::new().start(self.setup.to_command())?;

        for (idx, line) in self.commands.iter().enumerate() {
            let command = match parse_command(line) {
                Ok(ConsoleCommand::Score(command)) => command,
                Ok(ConsoleCommand::Quit) => {
                    debug!(line = idx + 1, "Script quit early");
                    break;
                }
                Ok(ConsoleCommand::Status | ConsoleCommand::Help) | Err(ParseError::Empty) => {
                    continue;
                }
                Err(source) => return Err(ScriptError::Parse { line: idx + 1, source }),
            };

            let progress = game.apply(&command).map_err(|source| ScriptError::Rejected {
                line: idx + 1,
                command: line.clone(),
                source,
            })?;

            match progress {
                MatchProgress::InProgress(next) => game = next,
                MatchProgress::Finished(finished) => {
                    let unused = self.commands.len() - idx - 1;
                    if unused > 0 {
                        warn!(unused, "Script lines left over after match end");
                    }
                    return Ok(MatchProgress::Finished(finished));
                }
            }
        }

        Ok(MatchProgress::InProgress(game))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#"
commands = [
    "bat Rohit", "off Gill", "bowl Starc",
    "4", "wd", "1", "status", "w", "bat Kohli", "6", "nb", "2",
]

[setup]
team1 = "India"
team2 = "Australia"
overs = 1
"#;

    #[test]
    fn test_parse_and_play_innings() {
        let script = MatchScript::parse(SCRIPT).unwrap();
        assert_eq!(script.setup().team1(), "India");

        let progress = script.play().unwrap();
        let innings = progress.state().innings1();
        assert_eq!(*innings.runs(), 4 + 1 + 1 + 6 + 1 + 2);
        assert_eq!(*innings.wickets(), 1);
        assert_eq!(*innings.legal_balls(), 5);
        assert!(matches!(progress, MatchProgress::InProgress(_)));
    }

    #[test]
    fn test_rejected_line_reports_position() {
        let script = MatchScript::new(SetupFile::default(), vec!["bowl Starc".into(), "4".into()]);
        let err = script.play().unwrap_err();
        assert!(matches!(
            err,
            ScriptError::Rejected { line: 2, source: InvalidInputError::MissingStriker, .. }
        ));
    }

    #[test]
    fn test_unknown_line_reports_position() {
        let script = MatchScript::new(SetupFile::default(), vec!["dance".into()]);
        let err = script.play().unwrap_err();
        assert_eq!(err.to_string(), "Line 1: Unknown command 'dance'");
    }

    #[test]
    fn test_quit_stops_early() {
        let script = MatchScript::new(
            SetupFile::default(),
            vec!["bat A".into(), "off B".into(), "bowl C".into(), "quit".into(), "4".into()],
        );
        let progress = script.play().unwrap();
        assert_eq!(*progress.state().current().runs(), 0);
    }
}
