//! Text command parser shared by match scripts and the interactive scorer.
//!
//! One command per line:
//!
//! | Input                 | Meaning                              |
//! |-----------------------|--------------------------------------|
//! | `0 1 2 3 4 6`         | runs off the bat                     |
//! | `wd`                  | wide (one run)                       |
//! | `nb` / `nb <runs>`    | no-ball, runs including the penalty  |
//! | `w` / `w <runs>`      | wicket, optionally with runs         |
//! | `bat <name>`          | batsman on strike                    |
//! | `off <name>`          | batsman at the non-striker's end     |
//! | `bowl <name>`         | current bowler                       |
//! | `status`              | print the scoreboard                 |
//! | `help`                | list commands                        |
//! | `quit`                | stop scoring                         |

use derive_more::Display;
use strictly_cricket::{BallEvent, Runs, ScoringCommand};
use tracing::instrument;

/// Help text listing every command.
pub const HELP: &str = "\
Runs:    0 1 2 3 4 6
Extras:  wd | nb [runs]
Wicket:  w [runs]
Players: bat <name> | off <name> | bowl <name>
Other:   status | help | quit";

/// A parsed console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// A command for the match.
    Score(ScoringCommand),
    /// Print the scoreboard.
    Status,
    /// Print the help text.
    Help,
    /// Stop scoring.
    Quit,
}

/// Why a console line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Display, derive_more::Error)]
pub enum ParseError {
    /// Blank line.
    #[display("Empty command")]
    Empty,

    /// First word not recognised.
    #[display("Unknown command '{}'", _0)]
    Unknown(#[error(not(source))] String),

    /// A player command without a name.
    #[display("'{}' needs a player name", _0)]
    MissingName(#[error(not(source))] String),

    /// Trailing text after a command that takes none.
    #[display("'{}' takes no argument, got '{}'", command, argument)]
    UnexpectedArgument {
        /// The command word.
        command: String,
        /// What followed it.
        argument: String,
    },

    /// Runs not in {0, 1, 2, 3, 4, 6}.
    #[display("'{}' is not a valid run count", _0)]
    BadRuns(#[error(not(source))] String),
}

/// Parses one console line.
#[instrument]
pub fn parse_command(line: &str) -> Result<ConsoleCommand, ParseError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let bare = |command: ConsoleCommand| -> Result<ConsoleCommand, ParseError> {
        if rest.is_empty() {
            Ok(command)
        } else {
            Err(ParseError::UnexpectedArgument {
                command: word.to_string(),
                argument: rest.to_string(),
            })
        }
    };
    let ball = |event: BallEvent| -> Result<ConsoleCommand, ParseError> {
        Ok(ConsoleCommand::Score(ScoringCommand::Ball(event)))
    };
    let name = |make: fn(String) -> ScoringCommand| -> Result<ConsoleCommand, ParseError> {
        if rest.is_empty() {
            Err(ParseError::MissingName(word.to_string()))
        } else {
            Ok(ConsoleCommand::Score(make(rest.to_string())))
        }
    };

    match word.to_ascii_lowercase().as_str() {
        "" => Err(ParseError::Empty),
        "wd" | "wide" => bare(ConsoleCommand::Score(ScoringCommand::Ball(BallEvent::wide()))),
        "nb" | "noball" => ball(BallEvent::new(runs_or(rest, Runs::One)?, false, true, false)),
        "w" | "wicket" => ball(BallEvent::new(runs_or(rest, Runs::Zero)?, false, false, true)),
        "bat" | "striker" => name(ScoringCommand::OnStrike),
        "off" | "nonstriker" => name(ScoringCommand::OffStrike),
        "bowl" | "bowler" => name(ScoringCommand::Bowler),
        "status" | "s" => bare(ConsoleCommand::Status),
        "help" | "?" => bare(ConsoleCommand::Help),
        "quit" | "exit" | "q" => bare(ConsoleCommand::Quit),
        digits if digits.chars().all(|c| c.is_ascii_digit()) => {
            let runs = parse_runs(digits)?;
            bare(ConsoleCommand::Score(ScoringCommand::Ball(BallEvent::runs(runs))))
        }
        other => Err(ParseError::Unknown(other.to_string())),
    }
}

fn runs_or(text: &str, default: Runs) -> Result<Runs, ParseError> {
    if text.is_empty() {
        Ok(default)
    } else {
        parse_runs(text)
    }
}

fn parse_runs(text: &str) -> Result<Runs, ParseError> {
    text.parse::<u32>()
        .ok()
        .and_then(|n| Runs::try_from(n).ok())
        .ok_or_else(|| ParseError::BadRuns(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(line: &str) -> BallEvent {
        match parse_command(line) {
            Ok(ConsoleCommand::Score(ScoringCommand::Ball(ball))) => ball,
            other => panic!("expected a ball, got {:?}", other),
        }
    }

    #[test]
    fn test_runs() {
        assert_eq!(ball("4"), BallEvent::runs(Runs::Four));
        assert_eq!(ball(" 0 "), BallEvent::runs(Runs::Zero));
        assert_eq!(parse_command("5"), Err(ParseError::BadRuns("5".to_string())));
    }

    #[test]
    fn test_extras_and_wickets() {
        assert_eq!(ball("wd"), BallEvent::wide());
        assert_eq!(ball("NB"), BallEvent::no_ball());
        assert_eq!(ball("nb 4"), BallEvent::new(Runs::Four, false, true, false));
        assert_eq!(ball("w"), BallEvent::wicket());
        assert_eq!(ball("w 1"), BallEvent::new(Runs::One, false, false, true));
    }

    #[test]
    fn test_trailing_text_is_rejected() {
        assert_eq!(
            parse_command("wd 4"),
            Err(ParseError::UnexpectedArgument {
                command: "wd".to_string(),
                argument: "4".to_string(),
            })
        );
        assert_eq!(
            parse_command("4 4"),
            Err(ParseError::UnexpectedArgument {
                command: "4".to_string(),
                argument: "4".to_string(),
            })
        );
        assert!(matches!(
            parse_command("quit now"),
            Err(ParseError::UnexpectedArgument { .. })
        ));
        assert!(matches!(
            parse_command("status please"),
            Err(ParseError::UnexpectedArgument { .. })
        ));
        assert_eq!(ball(" wd "), BallEvent::wide());
    }

    #[test]
    fn test_player_names_keep_spaces_and_case() {
        assert_eq!(
            parse_command("bat  Virat Kohli "),
            Ok(ConsoleCommand::Score(ScoringCommand::OnStrike(
                "Virat Kohli".to_string()
            )))
        );
        assert_eq!(
            parse_command("bowl"),
            Err(ParseError::MissingName("bowl".to_string()))
        );
    }

    #[test]
    fn test_control_words() {
        assert_eq!(parse_command("status"), Ok(ConsoleCommand::Status));
        assert_eq!(parse_command("quit"), Ok(ConsoleCommand::Quit));
        assert_eq!(parse_command(""), Err(ParseError::Empty));
        assert!(matches!(parse_command("dance"), Err(ParseError::Unknown(_))));
    }
}
