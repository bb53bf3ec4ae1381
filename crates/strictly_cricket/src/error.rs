//! Error taxonomy for match setup and ball submission.
//!
//! Validation happens only at the boundary. Once a ball passes these
//! checks the engine and controller are total and never fail.

/// Error raised when a ball or a player assignment cannot be accepted.
///
/// A rejected action never mutates state; the caller re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidInputError {
    /// No batsman is on strike.
    #[display("Please enter a name for the on-strike batsman")]
    MissingStriker,

    /// No bowler has been named.
    #[display("Please enter a name for the current bowler")]
    MissingBowler,

    /// A player name was blank.
    #[display("Player names must not be empty")]
    EmptyName,

    /// Both ends were given the same batsman.
    #[display("{} cannot bat at both ends", _0)]
    SameBatsman(#[error(not(source))] String),

    /// Runs off the bat outside {0, 1, 2, 3, 4, 6}.
    #[display("{} is not a valid number of runs off the bat", _0)]
    InvalidRuns(#[error(not(source))] u32),

    /// The match has already finished.
    #[display("Match is already over")]
    MatchOver,

    /// A postcondition failed after applying a ball.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

/// Error raised for a degenerate match setup. The match never starts.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// A team name was blank.
    #[display("Team names must not be empty")]
    EmptyTeamName,

    /// Both teams share a name.
    #[display("Both teams are named {}", _0)]
    SameTeams(#[error(not(source))] String),

    /// The overs limit was zero.
    #[display("Overs per innings must be at least 1")]
    NoOvers,

    /// The overs limit does not fit the ball counter.
    #[display("{} overs per innings is more than can be scored", _0)]
    TooManyOvers(#[error(not(source))] u32),

    /// The toss winner is not one of the two teams.
    #[display("Toss winner {} is not playing in this match", _0)]
    UnknownTossWinner(#[error(not(source))] String),
}
