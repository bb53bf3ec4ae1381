//! Pure limited-overs cricket scoring.
//!
//! Given one delivery at a time, the engine updates the score, the
//! batting and bowling cards, strike rotation and over count, and the
//! controller moves the match from the first innings to the chase and
//! on to a result.
//!
//! # Example
//!
//! ```
//! use strictly_cricket::{BallEvent, MatchSetup, Runs, StartMatchCommand, TossDecision};
//!
//! let cmd = StartMatchCommand::new(
//!     "Team A".to_string(),
//!     "Team B".to_string(),
//!     5,
//!     "Team A".to_string(),
//!     TossDecision::Bat,
//! );
//! let mut game = MatchSetup::new().start(cmd).unwrap();
//! game.set_on_strike("Opener One").unwrap();
//! game.set_off_strike("Opener Two").unwrap();
//! game.set_bowler("Quick").unwrap();
//!
//! let (progress, _) = game.record_ball(BallEvent::runs(Runs::Four)).unwrap();
//! assert_eq!(*progress.state().current().runs(), 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod controller;
mod engine;
mod error;
mod innings;
mod ledger;
mod result;
mod rules;
mod strike;
mod types;

pub mod contracts;
pub mod invariants;

pub use action::{BallEvent, Runs, ScoringCommand};
pub use config::{MatchConfig, StartMatchCommand};
pub use controller::{
    MatchFinished, MatchInProgress, MatchPhase, MatchProgress, MatchSetup, MatchState,
    check_end_of_innings,
};
pub use engine::{BallOutcome, apply_ball};
pub use error::{ConfigError, InvalidInputError};
pub use innings::{InningsState, target};
pub use ledger::Ledger;
pub use result::{Margin, MatchOutcome, ResultSummary, TeamScore, compute_result};
pub use rules::{InningsEnd, innings_end};
pub use strike::StrikeState;
pub use types::{
    ALL_OUT, BALLS_PER_OVER, BATTING_COLUMNS, BOWLING_COLUMNS, BatsmanStats, BatsmanStatus,
    BowlerStats, InningsNumber, TossDecision, format_overs,
};
