//! The scoring engine: applies one delivery to an innings.
//!
//! `apply_ball` is a pure function of (innings, strike, ball). It either
//! rejects the ball before touching anything or returns the next state.

use super::action::BallEvent;
use super::contracts::{BallContract, Contract};
use super::error::InvalidInputError;
use super::innings::InningsState;
use super::strike::StrikeState;
use super::types::BALLS_PER_OVER;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Informational flags describing what a ball did.
///
/// These drive display only; no state depends on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BallOutcome {
    /// The striker was dismissed.
    pub wicket_fallen: bool,
    /// The ball was the sixth legal delivery of an over.
    pub over_complete: bool,
}

impl BallOutcome {
    /// Neither a wicket nor the end of an over.
    pub fn is_continuing(&self) -> bool {
        !self.wicket_fallen && !self.over_complete
    }
}

/// Applies a delivery, returning the updated innings, strike and outcome.
///
/// Rules, in order:
/// 1. Unknown striker, non-striker and bowler get zeroed card entries.
/// 2. Every run goes to the innings total and the bowler's runs conceded.
/// 3. Legal deliveries (not wide or no-ball, or any wicket) count toward
///    the over and the striker's balls faced.
/// 4. On a legal delivery the striker is credited the runs; exactly 4 or
///    6 counts a boundary.
/// 5. A no-ball credits the striker `runs - 1`, the first run being the
///    no-ball penalty.
/// 6. Odd runs off a legal delivery swap the batsmen.
/// 7. A wicket dismisses the striker, credits the bowler and vacates the
///    dismissed batsman's slot.
/// 8. The bowler's legal balls are recomputed from the innings total.
/// 9. A legal delivery completing an over swaps the batsmen again.
#[instrument(skip(innings, strike), fields(ball = %ball, runs = innings.runs(), legal_balls = innings.legal_balls()))]
pub fn apply_ball(
    innings: InningsState,
    strike: StrikeState,
    ball: BallEvent,
) -> Result<(InningsState, StrikeState, BallOutcome), InvalidInputError> {
    let before = (innings, strike);
    BallContract::pre(&before, &ball)?;

    #[cfg(debug_assertions)]
    let snapshot = before.clone();

    let (mut innings, mut strike) = before;
    let Some(batsman) = strike.on_strike().map(str::to_owned) else {
        return Err(InvalidInputError::MissingStriker);
    };
    let Some(bowler) = strike.bowler().map(str::to_owned) else {
        return Err(InvalidInputError::MissingBowler);
    };

    innings.batting_card_mut().register(&batsman);
    if let Some(partner) = strike.off_strike() {
        innings.batting_card_mut().register(partner);
    }
    innings.bowling_card_mut().register(&bowler);

    let runs = ball.runs_off_bat.value();
    innings.add_runs(runs);
    innings.bowling_card_mut().register(&bowler).concede(runs);

    let legal = ball.is_legal();
    if legal {
        innings.add_legal_ball();
        innings.batting_card_mut().register(&batsman).face(runs);
    }

    if ball.is_no_ball && !legal {
        innings
            .batting_card_mut()
            .register(&batsman)
            .credit(runs.saturating_sub(1));
    }

    if legal && ball.runs_off_bat.rotates_strike() {
        strike.swap();
    }

    if ball.is_wicket {
        innings.add_wicket();
        innings.bowling_card_mut().register(&bowler).take_wicket();
        innings.batting_card_mut().register(&batsman).dismiss(&bowler);
        strike.vacate(&batsman);
        info!(batsman = %batsman, bowler = %bowler, wickets = innings.wickets(), "Wicket");
    }

    let others = innings
        .bowling_card()
        .sum_by_except(&bowler, |b| *b.legal_balls());
    let bowler_balls = innings.legal_balls().saturating_sub(others);
    innings
        .bowling_card_mut()
        .register(&bowler)
        .set_legal_balls(bowler_balls);

    let legal_balls = *innings.legal_balls();
    let over_complete = legal && legal_balls > 0 && legal_balls % BALLS_PER_OVER == 0;
    if over_complete {
        info!(overs = %innings.overs(), "Over complete");
        strike.swap();
    }

    let after = (innings, strike);

    #[cfg(debug_assertions)]
    BallContract::post(&snapshot, &after)?;

    let (innings, strike) = after;
    debug!(score = %innings.score(), overs = %innings.overs(), "Ball applied");

    Ok((
        innings,
        strike,
        BallOutcome {
            wicket_fallen: ball.is_wicket,
            over_complete,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BatsmanStatus, Runs};

    fn ready() -> (InningsState, StrikeState) {
        let mut strike = StrikeState::new();
        strike.set_on_strike("Root").unwrap();
        strike.set_off_strike("Stokes").unwrap();
        strike.set_bowler("Starc").unwrap();
        (InningsState::new("ENG".to_string(), "AUS".to_string()), strike)
    }

    fn bowl(state: (InningsState, StrikeState), ball: BallEvent) -> (InningsState, StrikeState) {
        let (innings, strike, _) = apply_ball(state.0, state.1, ball).unwrap();
        (innings, strike)
    }

    #[test]
    fn test_registers_players_lazily() {
        let (innings, strike) = bowl(ready(), BallEvent::runs(Runs::Zero));
        let names: Vec<_> = innings.batting_card().names().collect();
        assert_eq!(names, vec!["Root", "Stokes"]);
        assert!(innings.bowling_card().contains("Starc"));
        assert_eq!(strike.on_strike(), Some("Root"));
    }

    #[test]
    fn test_missing_striker_rejected() {
        let mut strike = StrikeState::new();
        strike.set_bowler("Starc").unwrap();
        let innings = InningsState::new("ENG".to_string(), "AUS".to_string());
        let result = apply_ball(innings, strike, BallEvent::runs(Runs::Four));
        assert_eq!(result.unwrap_err(), InvalidInputError::MissingStriker);
    }

    #[test]
    fn test_missing_bowler_rejected() {
        let mut strike = StrikeState::new();
        strike.set_on_strike("Root").unwrap();
        let innings = InningsState::new("ENG".to_string(), "AUS".to_string());
        let result = apply_ball(innings, strike, BallEvent::runs(Runs::Four));
        assert_eq!(result.unwrap_err(), InvalidInputError::MissingBowler);
    }

    #[test]
    fn test_boundary_credited_to_striker() {
        let (innings, _) = bowl(ready(), BallEvent::runs(Runs::Six));
        let root = innings.batting_card().get("Root").unwrap();
        assert_eq!(*root.runs(), 6);
        assert_eq!(*root.sixes(), 1);
        assert_eq!(*root.balls_faced(), 1);
        assert_eq!(*innings.bowling_card().get("Starc").unwrap().runs_conceded(), 6);
    }

    #[test]
    fn test_wide_is_not_faced() {
        let (innings, strike) = bowl(ready(), BallEvent::wide());
        assert_eq!(*innings.runs(), 1);
        assert_eq!(*innings.legal_balls(), 0);
        let root = innings.batting_card().get("Root").unwrap();
        assert_eq!(*root.balls_faced(), 0);
        assert_eq!(*root.runs(), 0);
        assert_eq!(*innings.bowling_card().get("Starc").unwrap().runs_conceded(), 1);
        assert_eq!(strike.on_strike(), Some("Root"));
    }

    #[test]
    fn test_no_ball_credits_batted_runs_only() {
        let (innings, _) = bowl(ready(), BallEvent::new(Runs::Four, false, true, false));
        assert_eq!(*innings.runs(), 4);
        assert_eq!(*innings.legal_balls(), 0);
        let root = innings.batting_card().get("Root").unwrap();
        assert_eq!(*root.runs(), 3);
        assert_eq!(*root.balls_faced(), 0);
        assert_eq!(*root.fours(), 0);
    }

    #[test]
    fn test_plain_no_ball_credits_nothing_to_batsman() {
        let (innings, _) = bowl(ready(), BallEvent::no_ball());
        assert_eq!(*innings.runs(), 1);
        assert_eq!(*innings.batting_card().get("Root").unwrap().runs(), 0);
    }

    #[test]
    fn test_odd_runs_rotate_strike() {
        let (_, strike) = bowl(ready(), BallEvent::runs(Runs::Three));
        assert_eq!(strike.on_strike(), Some("Stokes"));
        assert_eq!(strike.off_strike(), Some("Root"));
    }

    #[test]
    fn test_wicket_vacates_striker() {
        let (innings, strike, outcome) = {
            let (i, s) = ready();
            apply_ball(i, s, BallEvent::wicket()).unwrap()
        };
        assert!(outcome.wicket_fallen);
        assert_eq!(*innings.wickets(), 1);
        assert_eq!(*innings.legal_balls(), 1);
        assert_eq!(
            innings.batting_card().get("Root").unwrap().status(),
            &BatsmanStatus::Out {
                bowler: "Starc".to_string()
            }
        );
        assert_eq!(*innings.bowling_card().get("Starc").unwrap().wickets(), 1);
        assert_eq!(strike.on_strike(), None);
        assert_eq!(strike.off_strike(), Some("Stokes"));
    }

    #[test]
    fn test_over_completion_rotates_strike() {
        let mut state = ready();
        for _ in 0..5 {
            state = bowl(state, BallEvent::runs(Runs::Zero));
        }
        let (innings, strike, outcome) = apply_ball(state.0, state.1, BallEvent::runs(Runs::Two)).unwrap();
        assert!(outcome.over_complete);
        assert_eq!(innings.overs(), "1.0");
        assert_eq!(strike.on_strike(), Some("Stokes"));
    }

    #[test]
    fn test_single_off_last_ball_keeps_striker() {
        let mut state = ready();
        for _ in 0..5 {
            state = bowl(state, BallEvent::runs(Runs::Zero));
        }
        let (_, strike) = bowl(state, BallEvent::runs(Runs::One));
        assert_eq!(strike.on_strike(), Some("Root"));
        assert_eq!(strike.off_strike(), Some("Stokes"));
    }

    #[test]
    fn test_bowler_change_reconciles_balls() {
        let mut state = ready();
        for _ in 0..6 {
            state = bowl(state, BallEvent::runs(Runs::Zero));
        }
        state.1.set_bowler("Cummins").unwrap();
        state = bowl(state, BallEvent::runs(Runs::Two));
        state = bowl(state, BallEvent::wide());

        let card = state.0.bowling_card();
        assert_eq!(card.get("Starc").unwrap().overs(), "1.0");
        assert_eq!(card.get("Cummins").unwrap().overs(), "0.1");
        assert_eq!(*card.get("Cummins").unwrap().runs_conceded(), 3);
    }
}
