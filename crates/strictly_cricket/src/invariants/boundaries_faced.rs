//! Boundary bookkeeping invariant.

use super::super::InningsState;
use super::Invariant;

/// Invariant: each batsman's fours plus sixes never exceed balls faced.
pub struct BoundariesWithinBallsFacedInvariant;

impl Invariant<InningsState> for BoundariesWithinBallsFacedInvariant {
    fn holds(innings: &InningsState) -> bool {
        innings
            .batting_card()
            .iter()
            .all(|(_, b)| b.fours() + b.sixes() <= *b.balls_faced())
    }

    fn description() -> &'static str {
        "Boundaries counted never exceed balls faced"
    }
}
