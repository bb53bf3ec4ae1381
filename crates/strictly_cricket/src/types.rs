//! Core domain types for limited-overs cricket scoring.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Legal deliveries in one over.
pub const BALLS_PER_OVER: u32 = 6;

/// Wickets that end an innings.
pub const ALL_OUT: u32 = 10;

/// Batting scorecard column headers, in field order.
pub const BATTING_COLUMNS: [&str; 5] = ["Runs", "Balls", "4s", "6s", "Status"];

/// Bowling scorecard column headers, in field order.
pub const BOWLING_COLUMNS: [&str; 3] = ["Overs", "Runs", "Wickets"];

/// Formats a legal-ball count as overs, e.g. 14 balls is `"2.2"`.
pub fn format_overs(balls: u32) -> String {
    format!("{}.{}", balls / BALLS_PER_OVER, balls % BALLS_PER_OVER)
}

/// What the toss winner chose to do.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum TossDecision {
    /// Toss winner bats first.
    #[default]
    Bat,
    /// Toss winner bowls first.
    Bowl,
}

/// Which innings of the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InningsNumber {
    /// First innings.
    First,
    /// Second innings (the chase).
    Second,
}

impl InningsNumber {
    /// Returns 1 or 2.
    pub fn number(self) -> u8 {
        match self {
            InningsNumber::First => 1,
            InningsNumber::Second => 2,
        }
    }
}

impl std::fmt::Display for InningsNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Innings {}", self.number())
    }
}

/// Whether a batsman is still in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BatsmanStatus {
    /// Still batting, or never dismissed.
    #[default]
    NotOut,
    /// Dismissed by the named bowler.
    Out {
        /// Bowler credited with the wicket.
        bowler: String,
    },
}

impl BatsmanStatus {
    /// Returns true if the batsman has been dismissed.
    pub fn is_out(&self) -> bool {
        matches!(self, BatsmanStatus::Out { .. })
    }
}

impl std::fmt::Display for BatsmanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatsmanStatus::NotOut => write!(f, "Not Out"),
            BatsmanStatus::Out { bowler } => write!(f, "Out b. {}", bowler),
        }
    }
}

/// One batsman's line on the batting card.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct BatsmanStats {
    /// Runs credited to the batsman.
    runs: u32,
    /// Legal deliveries faced.
    balls_faced: u32,
    /// Deliveries hit for exactly four.
    fours: u32,
    /// Deliveries hit for exactly six.
    sixes: u32,
    /// Dismissal state.
    status: BatsmanStatus,
}

impl BatsmanStats {
    /// Records one legal delivery faced, with its runs and boundary.
    pub(crate) fn face(&mut self, runs: u32) {
        self.balls_faced += 1;
        self.runs += runs;
        match runs {
            4 => self.fours += 1,
            6 => self.sixes += 1,
            _ => {}
        }
    }

    /// Credits runs without a ball faced (no-ball batted runs).
    pub(crate) fn credit(&mut self, runs: u32) {
        self.runs += runs;
    }

    pub(crate) fn dismiss(&mut self, bowler: &str) {
        self.status = BatsmanStatus::Out {
            bowler: bowler.to_string(),
        };
    }

    /// Card cells in [`BATTING_COLUMNS`] order.
    pub fn row(&self) -> [String; 5] {
        [
            self.runs.to_string(),
            self.balls_faced.to_string(),
            self.fours.to_string(),
            self.sixes.to_string(),
            self.status.to_string(),
        ]
    }
}

/// One bowler's line on the bowling card.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct BowlerStats {
    /// Legal deliveries attributed to this bowler.
    legal_balls: u32,
    /// Runs conceded, extras included.
    runs_conceded: u32,
    /// Wickets taken.
    wickets: u32,
}

impl BowlerStats {
    /// Overs bowled, formatted `"O.B"`.
    pub fn overs(&self) -> String {
        format_overs(self.legal_balls)
    }

    pub(crate) fn concede(&mut self, runs: u32) {
        self.runs_conceded += runs;
    }

    pub(crate) fn take_wicket(&mut self) {
        self.wickets += 1;
    }

    pub(crate) fn set_legal_balls(&mut self, balls: u32) {
        self.legal_balls = balls;
    }

    /// Card cells in [`BOWLING_COLUMNS`] order.
    pub fn row(&self) -> [String; 3] {
        [
            self.overs(),
            self.runs_conceded.to_string(),
            self.wickets.to_string(),
        ]
    }
}
