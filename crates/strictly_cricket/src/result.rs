//! Final result computation.

use super::controller::MatchState;
use super::types::ALL_OUT;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A team's final total.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct TeamScore {
    /// Team name.
    team: String,
    /// Runs scored.
    runs: u32,
    /// Wickets lost.
    wickets: u32,
}

impl std::fmt::Display for TeamScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}/{}", self.team, self.runs, self.wickets)
    }
}

/// How a match was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Margin {
    /// Side batting first defended its total.
    Runs(u32),
    /// Side batting second chased, with this many wickets in hand.
    Wickets(u32),
}

impl std::fmt::Display for Margin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Margin::Runs(n) => write!(f, "{} runs", n),
            Margin::Wickets(n) => write!(f, "{} wickets", n),
        }
    }
}

/// Outcome of a completed match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// A team won.
    Won {
        /// The winning team.
        team: String,
        /// Winning margin.
        margin: Margin,
    },
    /// Scores level.
    Tie,
}

impl MatchOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&str> {
        match self {
            MatchOutcome::Won { team, .. } => Some(team),
            MatchOutcome::Tie => None,
        }
    }

    /// Returns true if the scores finished level.
    pub fn is_tie(&self) -> bool {
        matches!(self, MatchOutcome::Tie)
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchOutcome::Won { team, margin } => write!(f, "{} won by {}!", team, margin),
            MatchOutcome::Tie => write!(f, "The match is a Tie!"),
        }
    }
}

/// Both totals and the outcome.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ResultSummary {
    /// Side that batted first.
    first: TeamScore,
    /// Side that batted second.
    second: TeamScore,
    /// Who won and by how much.
    outcome: MatchOutcome,
}

/// Computes the result of a finished match.
///
/// Returns `None` until the match is over. A successful chase is
/// margined by `10 - wickets` using the innings' final wicket count.
#[instrument(skip(state))]
pub fn compute_result(state: &MatchState) -> Option<ResultSummary> {
    if !state.match_over() {
        return None;
    }
    let first_innings = state.innings1();
    let second_innings = state.innings2()?;

    let first = TeamScore::new(
        first_innings.batting_team().clone(),
        *first_innings.runs(),
        *first_innings.wickets(),
    );
    let second = TeamScore::new(
        second_innings.batting_team().clone(),
        *second_innings.runs(),
        *second_innings.wickets(),
    );

    let outcome = if first.runs > second.runs {
        MatchOutcome::Won {
            team: first.team.clone(),
            margin: Margin::Runs(first.runs - second.runs),
        }
    } else if second.runs > first.runs {
        MatchOutcome::Won {
            team: second.team.clone(),
            margin: Margin::Wickets(ALL_OUT.saturating_sub(second.wickets)),
        }
    } else {
        MatchOutcome::Tie
    };

    debug!(%outcome, "Result computed");
    Some(ResultSummary {
        first,
        second,
        outcome,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_display() {
        let won = MatchOutcome::Won {
            team: "India".to_string(),
            margin: Margin::Runs(12),
        };
        assert_eq!(won.to_string(), "India won by 12 runs!");
        assert_eq!(won.winner(), Some("India"));

        let chased = MatchOutcome::Won {
            team: "Australia".to_string(),
            margin: Margin::Wickets(6),
        };
        assert_eq!(chased.to_string(), "Australia won by 6 wickets!");
        assert_eq!(MatchOutcome::Tie.to_string(), "The match is a Tie!");
        assert!(MatchOutcome::Tie.is_tie());
    }

    #[test]
    fn test_team_score_display() {
        let score = TeamScore::new("India".to_string(), 150, 10);
        assert_eq!(score.to_string(), "India: 150/10");
    }
}
