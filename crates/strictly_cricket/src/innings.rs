//! Running totals and scorecards for one innings.

use super::ledger::Ledger;
use super::types::{BatsmanStats, BowlerStats, format_overs};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// State of a single innings.
///
/// Mutated only by the scoring engine. Every legal ball is attributed to
/// exactly one bowler, so the bowlers' legal balls sum to `legal_balls`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct InningsState {
    /// Team batting in this innings.
    batting_team: String,
    /// Team bowling in this innings.
    bowling_team: String,
    /// Total runs, extras included.
    runs: u32,
    /// Wickets fallen.
    wickets: u32,
    /// Legal deliveries bowled.
    legal_balls: u32,
    /// Batsmen in order of arrival.
    batting_card: Ledger<BatsmanStats>,
    /// Bowlers in order of first delivery.
    bowling_card: Ledger<BowlerStats>,
}

impl InningsState {
    /// Starts an innings with nothing on the board.
    #[instrument]
    pub fn new(batting_team: String, bowling_team: String) -> Self {
        Self {
            batting_team,
            bowling_team,
            runs: 0,
            wickets: 0,
            legal_balls: 0,
            batting_card: Ledger::new(),
            bowling_card: Ledger::new(),
        }
    }

    /// Overs bowled, formatted `"O.B"`.
    pub fn overs(&self) -> String {
        format_overs(self.legal_balls)
    }

    /// Score line, e.g. `"45/2"`.
    pub fn score(&self) -> String {
        format!("{}/{}", self.runs, self.wickets)
    }

    /// True before any batsman or bowler has been recorded.
    pub fn has_started(&self) -> bool {
        !self.batting_card.is_empty() || !self.bowling_card.is_empty()
    }

    /// Runs this innings still needs to pass `target`.
    pub fn runs_needed(&self, target: u32) -> u32 {
        target.saturating_sub(self.runs)
    }

    /// Legal balls left out of `max_balls`.
    pub fn balls_remaining(&self, max_balls: u32) -> u32 {
        max_balls.saturating_sub(self.legal_balls)
    }

    pub(crate) fn add_runs(&mut self, runs: u32) {
        self.runs += runs;
    }

    pub(crate) fn add_legal_ball(&mut self) {
        self.legal_balls += 1;
    }

    pub(crate) fn add_wicket(&mut self) {
        self.wickets += 1;
    }

    pub(crate) fn batting_card_mut(&mut self) -> &mut Ledger<BatsmanStats> {
        &mut self.batting_card
    }

    pub(crate) fn bowling_card_mut(&mut self) -> &mut Ledger<BowlerStats> {
        &mut self.bowling_card
    }
}

/// Runs the chasing side must reach: one more than the first innings.
pub fn target(first_innings_runs: u32) -> u32 {
    first_innings_runs + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_innings_is_empty() {
        let innings = InningsState::new("India".to_string(), "Australia".to_string());
        assert_eq!(innings.score(), "0/0");
        assert_eq!(innings.overs(), "0.0");
        assert!(!innings.has_started());
    }

    #[test]
    fn test_chase_helpers() {
        let mut innings = InningsState::new("B".to_string(), "A".to_string());
        innings.add_runs(100);
        for _ in 0..40 {
            innings.add_legal_ball();
        }
        assert_eq!(target(120), 121);
        assert_eq!(innings.runs_needed(target(120)), 21);
        assert_eq!(innings.balls_remaining(60), 20);
        assert_eq!(innings.runs_needed(50), 0);
    }
}
