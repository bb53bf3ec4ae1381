//! Wicket bounds invariant.

use super::super::{ALL_OUT, InningsState};
use super::Invariant;

/// Invariant: innings wickets never exceed ten, and bowlers' wickets
/// never exceed the innings total.
pub struct WicketsInRangeInvariant;

impl Invariant<InningsState> for WicketsInRangeInvariant {
    fn holds(innings: &InningsState) -> bool {
        let wickets = *innings.wickets();
        let dismissed = innings
            .batting_card()
            .iter()
            .filter(|(_, b)| b.status().is_out())
            .count() as u32;

        wickets <= ALL_OUT
            && innings.bowling_card().sum_by(|b| *b.wickets()) == wickets
            && dismissed <= wickets
    }

    fn description() -> &'static str {
        "Wickets stay within 0..=10 and match the bowlers' wickets"
    }
}
