//! End-of-innings rules.

use super::innings::InningsState;
use super::types::ALL_OUT;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Why an innings ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum InningsEnd {
    /// Ten wickets down.
    #[strum(to_string = "All out")]
    AllOut,
    /// Overs limit reached.
    #[strum(to_string = "Overs complete")]
    OversComplete,
    /// The chasing side passed the first-innings total.
    #[strum(to_string = "Target reached")]
    TargetReached,
}

/// Checks whether an innings is over.
///
/// `chase_against` is the first-innings total when `innings` is the chase,
/// `None` otherwise. Wickets are checked before overs, and overs before
/// the chase, so a last-ball all-out reports [`InningsEnd::AllOut`].
#[instrument(skip(innings), fields(runs = innings.runs(), wickets = innings.wickets(), legal_balls = innings.legal_balls()))]
pub fn innings_end(
    innings: &InningsState,
    max_balls: u32,
    chase_against: Option<u32>,
) -> Option<InningsEnd> {
    if *innings.wickets() >= ALL_OUT {
        Some(InningsEnd::AllOut)
    } else if *innings.legal_balls() >= max_balls {
        Some(InningsEnd::OversComplete)
    } else if chase_against.is_some_and(|first| *innings.runs() > first) {
        Some(InningsEnd::TargetReached)
    } else {
        None
    }
}
