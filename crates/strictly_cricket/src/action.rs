//! First-class scoring actions.
//!
//! A ball is a domain event, not a side effect. It can be validated,
//! serialized for replay and logged before it is applied.

use super::error::InvalidInputError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Runs scored off the bat on one delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Runs {
    /// Dot ball.
    #[default]
    Zero,
    /// Single.
    One,
    /// Two runs.
    Two,
    /// Three runs.
    Three,
    /// Boundary four.
    Four,
    /// Boundary six.
    Six,
}

impl Runs {
    /// Numeric run value.
    pub fn value(self) -> u32 {
        match self {
            Runs::Zero => 0,
            Runs::One => 1,
            Runs::Two => 2,
            Runs::Three => 3,
            Runs::Four => 4,
            Runs::Six => 6,
        }
    }

    /// Odd runs bring the batsmen to opposite ends.
    pub fn rotates_strike(self) -> bool {
        matches!(self, Runs::One | Runs::Three)
    }
}

impl TryFrom<u32> for Runs {
    type Error = InvalidInputError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Runs::Zero),
            1 => Ok(Runs::One),
            2 => Ok(Runs::Two),
            3 => Ok(Runs::Three),
            4 => Ok(Runs::Four),
            6 => Ok(Runs::Six),
            other => Err(InvalidInputError::InvalidRuns(other)),
        }
    }
}

impl From<Runs> for u32 {
    fn from(runs: Runs) -> Self {
        runs.value()
    }
}

impl std::fmt::Display for Runs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Outcome of a single delivery as reported by the scorer.
///
/// A wicket delivery always counts as a legal ball, even when it is also
/// flagged wide or no-ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BallEvent {
    /// Runs for the delivery. For extras this includes the one-run penalty.
    pub runs_off_bat: Runs,
    /// Delivery was a wide.
    #[serde(default)]
    pub is_wide: bool,
    /// Delivery was a no-ball.
    #[serde(default)]
    pub is_no_ball: bool,
    /// Striker was dismissed.
    #[serde(default)]
    pub is_wicket: bool,
}

impl BallEvent {
    /// Creates a ball event from raw flags.
    #[instrument]
    pub fn new(runs_off_bat: Runs, is_wide: bool, is_no_ball: bool, is_wicket: bool) -> Self {
        Self {
            runs_off_bat,
            is_wide,
            is_no_ball,
            is_wicket,
        }
    }

    /// A legal delivery with runs off the bat.
    pub fn runs(runs: Runs) -> Self {
        Self::new(runs, false, false, false)
    }

    /// A wide worth one run.
    pub fn wide() -> Self {
        Self::new(Runs::One, true, false, false)
    }

    /// A no-ball worth one run.
    pub fn no_ball() -> Self {
        Self::new(Runs::One, false, true, false)
    }

    /// A dismissal with no runs.
    pub fn wicket() -> Self {
        Self::new(Runs::Zero, false, false, true)
    }

    /// True if the delivery counts toward the over.
    pub fn is_legal(&self) -> bool {
        self.is_wicket || !(self.is_wide || self.is_no_ball)
    }

    /// True if the delivery is a wide or a no-ball.
    pub fn is_extra(&self) -> bool {
        !self.is_legal()
    }
}

impl std::fmt::Display for BallEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_wicket {
            write!(f, "W")
        } else if self.is_wide {
            write!(f, "{}wd", self.runs_off_bat)
        } else if self.is_no_ball {
            write!(f, "{}nb", self.runs_off_bat)
        } else {
            write!(f, "{}", self.runs_off_bat)
        }
    }
}

/// A command dispatched to a match in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "value", rename_all = "snake_case")]
pub enum ScoringCommand {
    /// Put a batsman on strike.
    OnStrike(String),
    /// Put a batsman at the non-striker's end.
    OffStrike(String),
    /// Bring a bowler on.
    Bowler(String),
    /// Record a delivery.
    Ball(BallEvent),
}

impl std::fmt::Display for ScoringCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringCommand::OnStrike(name) => write!(f, "on strike: {}", name),
            ScoringCommand::OffStrike(name) => write!(f, "off strike: {}", name),
            ScoringCommand::Bowler(name) => write!(f, "bowler: {}", name),
            ScoringCommand::Ball(ball) => write!(f, "ball: {}", ball),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_reject_five() {
        assert_eq!(Runs::try_from(5), Err(InvalidInputError::InvalidRuns(5)));
        assert_eq!(Runs::try_from(7), Err(InvalidInputError::InvalidRuns(7)));
        assert_eq!(Runs::try_from(6), Ok(Runs::Six));
    }

    #[test]
    fn test_wicket_is_legal_even_if_flagged_wide() {
        let ball = BallEvent::new(Runs::Zero, true, false, true);
        assert!(ball.is_legal());
        assert!(!BallEvent::wide().is_legal());
        assert!(!BallEvent::no_ball().is_legal());
        assert!(BallEvent::runs(Runs::Four).is_legal());
    }

    #[test]
    fn test_command_serializes_tagged() {
        let cmd = ScoringCommand::Ball(BallEvent::runs(Runs::Four));
        let json = serde_json::to_string(&cmd).unwrap();
        assert!(json.contains("\"command\":\"ball\""));
        assert!(json.contains("\"runs_off_bat\":4"));

        let parsed: ScoringCommand =
            serde_json::from_str(r#"{"command":"bowler","value":"Starc"}"#).unwrap();
        assert_eq!(parsed, ScoringCommand::Bowler("Starc".to_string()));
    }

    #[test]
    fn test_invalid_runs_fail_to_deserialize() {
        let parsed: Result<BallEvent, _> = serde_json::from_str(r#"{"runs_off_bat":5}"#);
        assert!(parsed.is_err());
    }
}
