//! Contract-based validation for ball submission.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, ball)} apply_ball {Q(before, after)}.

use super::action::BallEvent;
use super::error::InvalidInputError;
use super::innings::InningsState;
use super::invariants::{InningsInvariants, InvariantSet};
use super::strike::StrikeState;
use tracing::{instrument, warn};

/// The scoring state a ball is applied to.
pub type Crease = (InningsState, StrikeState);

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), InvalidInputError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), InvalidInputError>;
}

/// Precondition: a batsman is on strike.
pub struct StrikerPresent;

impl StrikerPresent {
    /// Fails with `MissingStriker` when the striker's slot is empty.
    #[instrument(skip(strike))]
    pub fn check(strike: &StrikeState) -> Result<(), InvalidInputError> {
        match strike.on_strike() {
            Some(name) if !name.trim().is_empty() => Ok(()),
            _ => {
                warn!("Ball rejected: no batsman on strike");
                Err(InvalidInputError::MissingStriker)
            }
        }
    }
}

/// Precondition: a bowler has been named.
pub struct BowlerPresent;

impl BowlerPresent {
    /// Fails with `MissingBowler` when no bowler is named.
    #[instrument(skip(strike))]
    pub fn check(strike: &StrikeState) -> Result<(), InvalidInputError> {
        match strike.bowler() {
            Some(name) if !name.trim().is_empty() => Ok(()),
            _ => {
                warn!("Ball rejected: no bowler named");
                Err(InvalidInputError::MissingBowler)
            }
        }
    }
}

/// Contract for a delivery.
///
/// Preconditions:
/// - A batsman is on strike
/// - A bowler is named
///
/// Postconditions:
/// - Runs, wickets and legal balls never decrease
/// - All innings invariants hold
pub struct BallContract;

impl Contract<Crease, BallEvent> for BallContract {
    fn pre((_, strike): &Crease, _ball: &BallEvent) -> Result<(), InvalidInputError> {
        StrikerPresent::check(strike)?;
        BowlerPresent::check(strike)?;
        Ok(())
    }

    fn post((before, _): &Crease, (after, _): &Crease) -> Result<(), InvalidInputError> {
        if after.runs() < before.runs()
            || after.wickets() < before.wickets()
            || after.legal_balls() < before.legal_balls()
        {
            return Err(InvalidInputError::InvariantViolation(
                "Postcondition failed: innings totals went backwards".to_string(),
            ));
        }

        InningsInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            InvalidInputError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
