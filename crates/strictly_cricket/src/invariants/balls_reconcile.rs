//! Bowler attribution invariant: bowlers' legal balls sum to the innings total.

use super::super::InningsState;
use super::Invariant;

/// Invariant: Σ bowler legal balls == innings legal balls.
///
/// Every legal delivery is credited to exactly one bowler.
pub struct BowlerBallsReconcileInvariant;

impl Invariant<InningsState> for BowlerBallsReconcileInvariant {
    fn holds(innings: &InningsState) -> bool {
        innings.bowling_card().sum_by(|b| *b.legal_balls()) == *innings.legal_balls()
    }

    fn description() -> &'static str {
        "Bowlers' legal balls sum to the innings legal balls"
    }
}
