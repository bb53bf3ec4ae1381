//! Match controller: innings transitions and the match lifecycle.
//!
//! `MatchState` is the full snapshot the view layer reads. Transitions
//! are pure: they borrow the current state and return the next one, so a
//! rejected ball leaves the caller's state untouched.
//!
//! The typestate wrappers encode the linear lifecycle
//! `AwaitingStart -> InInnings1 -> InInnings2 -> MatchOver`. A
//! [`MatchFinished`] always carries its result, never `Option`.

use super::action::{BallEvent, ScoringCommand};
use super::config::{MatchConfig, StartMatchCommand};
use super::engine::{BallOutcome, apply_ball};
use super::error::{ConfigError, InvalidInputError};
use super::innings::{InningsState, target};
use super::result::{ResultSummary, compute_result};
use super::rules::innings_end;
use super::strike::StrikeState;
use super::types::InningsNumber;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Where the match is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum MatchPhase {
    /// Setup not yet submitted.
    AwaitingStart,
    /// First innings in progress.
    InInnings1,
    /// Second innings in progress.
    InInnings2,
    /// Terminal.
    MatchOver,
}

/// Complete match snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    config: MatchConfig,
    innings1: InningsState,
    innings2: Option<InningsState>,
    current_innings: InningsNumber,
    match_over: bool,
    strike: StrikeState,
}

impl MatchState {
    /// Starts the first innings with the toss-derived batting order.
    #[instrument(skip(config), fields(batting = %config.batting_team(), bowling = %config.bowling_team()))]
    pub fn new(config: MatchConfig) -> Self {
        let innings1 = InningsState::new(
            config.batting_team().clone(),
            config.bowling_team().clone(),
        );
        Self {
            config,
            innings1,
            innings2: None,
            current_innings: InningsNumber::First,
            match_over: false,
            strike: StrikeState::new(),
        }
    }

    /// Match setup.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// First innings.
    pub fn innings1(&self) -> &InningsState {
        &self.innings1
    }

    /// Second innings, once the first has ended.
    pub fn innings2(&self) -> Option<&InningsState> {
        self.innings2.as_ref()
    }

    /// Innings currently being scored (the last one once the match is over).
    pub fn current(&self) -> &InningsState {
        match (self.current_innings, &self.innings2) {
            (InningsNumber::Second, Some(innings)) => innings,
            _ => &self.innings1,
        }
    }

    /// Which innings is current.
    pub fn current_innings(&self) -> InningsNumber {
        self.current_innings
    }

    /// True once the second innings has ended.
    pub fn match_over(&self) -> bool {
        self.match_over
    }

    /// Players at the crease and the bowler.
    pub fn strike(&self) -> &StrikeState {
        &self.strike
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> MatchPhase {
        match (self.match_over, self.current_innings) {
            (true, _) => MatchPhase::MatchOver,
            (false, InningsNumber::First) => MatchPhase::InInnings1,
            (false, InningsNumber::Second) => MatchPhase::InInnings2,
        }
    }

    /// First-innings total while the chase is on.
    pub fn chase_against(&self) -> Option<u32> {
        match self.current_innings {
            InningsNumber::First => None,
            InningsNumber::Second => Some(*self.innings1.runs()),
        }
    }

    /// Runs the chasing side needs to win, during the second innings.
    pub fn target(&self) -> Option<u32> {
        self.chase_against().map(target)
    }

    /// Runs still required in the chase.
    pub fn runs_needed(&self) -> Option<u32> {
        self.target().map(|t| self.current().runs_needed(t))
    }

    /// Legal balls left in the current innings.
    pub fn balls_remaining(&self) -> u32 {
        self.current().balls_remaining(self.config.max_legal_balls())
    }

    /// Puts a batsman on strike.
    #[instrument(skip(self))]
    pub fn set_on_strike(&mut self, name: &str) -> Result<(), InvalidInputError> {
        self.ensure_live()?;
        self.strike.set_on_strike(name)
    }

    /// Puts a batsman at the non-striker's end.
    #[instrument(skip(self))]
    pub fn set_off_strike(&mut self, name: &str) -> Result<(), InvalidInputError> {
        self.ensure_live()?;
        self.strike.set_off_strike(name)
    }

    /// Brings a bowler on.
    #[instrument(skip(self))]
    pub fn set_bowler(&mut self, name: &str) -> Result<(), InvalidInputError> {
        self.ensure_live()?;
        self.strike.set_bowler(name)
    }

    /// Applies a ball to the current innings and runs the end-of-innings check.
    ///
    /// On error `self` is unchanged.
    #[instrument(skip(self), fields(phase = %self.phase()))]
    pub fn record_ball(&self, ball: BallEvent) -> Result<(Self, BallOutcome), InvalidInputError> {
        self.ensure_live()?;

        let (innings, strike, outcome) =
            apply_ball(self.current().clone(), self.strike.clone(), ball)?;

        let mut next = self.clone();
        next.strike = strike;
        match (next.current_innings, next.innings2.as_mut()) {
            (InningsNumber::Second, Some(slot)) => *slot = innings,
            _ => next.innings1 = innings,
        }

        Ok((check_end_of_innings(next), outcome))
    }

    /// Applies any scoring command.
    pub fn apply(&self, command: &ScoringCommand) -> Result<(Self, Option<BallOutcome>), InvalidInputError> {
        let mut next = self.clone();
        match command {
            ScoringCommand::OnStrike(name) => next.set_on_strike(name)?,
            ScoringCommand::OffStrike(name) => next.set_off_strike(name)?,
            ScoringCommand::Bowler(name) => next.set_bowler(name)?,
            ScoringCommand::Ball(ball) => {
                let (next, outcome) = self.record_ball(*ball)?;
                return Ok((next, Some(outcome)));
            }
        }
        Ok((next, None))
    }

    fn ensure_live(&self) -> Result<(), InvalidInputError> {
        if self.match_over {
            warn!("Rejected action after match end");
            Err(InvalidInputError::MatchOver)
        } else {
            Ok(())
        }
    }
}

/// Ends the current innings if an end condition holds.
///
/// After the first innings the second is created with the teams swapped;
/// after the second the match is over. The strike state is cleared on
/// either transition. Calling this again without a new ball is a no-op.
#[instrument(skip(state), fields(phase = %state.phase()))]
pub fn check_end_of_innings(mut state: MatchState) -> MatchState {
    if state.match_over {
        return state;
    }
    let max_balls = state.config.max_legal_balls();

    match state.current_innings {
        InningsNumber::First => {
            if let Some(reason) = innings_end(&state.innings1, max_balls, None) {
                let innings2 = InningsState::new(
                    state.innings1.bowling_team().clone(),
                    state.innings1.batting_team().clone(),
                );
                info!(
                    %reason,
                    chasing = %innings2.batting_team(),
                    target_runs = target(*state.innings1.runs()),
                    "End of innings 1"
                );
                state.innings2 = Some(innings2);
                state.current_innings = InningsNumber::Second;
                state.strike.clear();
            }
        }
        InningsNumber::Second => {
            let first_total = *state.innings1.runs();
            let ended = state
                .innings2
                .as_ref()
                .and_then(|innings| innings_end(innings, max_balls, Some(first_total)));
            if let Some(reason) = ended {
                info!(%reason, "End of innings 2, match over");
                state.match_over = true;
                state.strike.clear();
            }
        }
    }

    state
}

// ─────────────────────────────────────────────────────────────
//  Typestate wrappers
// ─────────────────────────────────────────────────────────────

/// Match awaiting its setup command.
#[derive(Debug, Clone, Default)]
pub struct MatchSetup;

impl MatchSetup {
    /// Creates a match awaiting setup.
    pub fn new() -> Self {
        Self
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> MatchPhase {
        MatchPhase::AwaitingStart
    }

    /// Validates the setup and starts the first innings.
    #[instrument(skip(self))]
    pub fn start(self, cmd: StartMatchCommand) -> Result<MatchInProgress, ConfigError> {
        let config = MatchConfig::new(cmd)?;
        Ok(MatchInProgress {
            state: MatchState::new(config),
        })
    }
}

/// Match with an innings in progress.
#[derive(Debug, Clone)]
pub struct MatchInProgress {
    state: MatchState,
}

impl MatchInProgress {
    /// Current snapshot.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Lifecycle phase (first or second innings).
    pub fn phase(&self) -> MatchPhase {
        self.state.phase()
    }

    /// Puts a batsman on strike.
    pub fn set_on_strike(&mut self, name: &str) -> Result<(), InvalidInputError> {
        self.state.set_on_strike(name)
    }

    /// Puts a batsman at the non-striker's end.
    pub fn set_off_strike(&mut self, name: &str) -> Result<(), InvalidInputError> {
        self.state.set_off_strike(name)
    }

    /// Brings a bowler on.
    pub fn set_bowler(&mut self, name: &str) -> Result<(), InvalidInputError> {
        self.state.set_bowler(name)
    }

    /// Records a ball, returning the next phase.
    ///
    /// On error `self` is unchanged and can be retried.
    #[instrument(skip(self))]
    pub fn record_ball(&self, ball: BallEvent) -> Result<(MatchProgress, BallOutcome), InvalidInputError> {
        let (state, outcome) = self.state.record_ball(ball)?;
        Ok((MatchProgress::from_state(state), outcome))
    }

    /// Applies any scoring command, returning the next phase.
    #[instrument(skip(self), fields(command = %command))]
    pub fn apply(&self, command: &ScoringCommand) -> Result<MatchProgress, InvalidInputError> {
        let (state, _) = self.state.apply(command)?;
        Ok(MatchProgress::from_state(state))
    }

    /// Replays commands from this point until they run out or the match ends.
    #[instrument(skip(self, commands), fields(count = commands.len()))]
    pub fn replay(self, commands: &[ScoringCommand]) -> Result<MatchProgress, InvalidInputError> {
        let mut game = self;

        for (idx, command) in commands.iter().enumerate() {
            match game.apply(command)? {
                MatchProgress::InProgress(g) => game = g,
                MatchProgress::Finished(g) => {
                    let unused = commands.len() - idx - 1;
                    if unused > 0 {
                        warn!(unused, "Commands left over after match end");
                    }
                    return Ok(MatchProgress::Finished(g));
                }
            }
        }

        Ok(MatchProgress::InProgress(game))
    }
}

/// Match over. The result is always present.
#[derive(Debug, Clone)]
pub struct MatchFinished {
    state: MatchState,
    result: ResultSummary,
}

impl MatchFinished {
    /// Final snapshot.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Final result.
    pub fn result(&self) -> &ResultSummary {
        &self.result
    }

    /// Starts over with a fresh setup.
    #[instrument(skip(self))]
    pub fn restart(self) -> MatchSetup {
        MatchSetup::new()
    }
}

/// Result of recording a ball.
#[derive(Debug, Clone)]
pub enum MatchProgress {
    /// Match continues.
    InProgress(MatchInProgress),
    /// Match finished.
    Finished(MatchFinished),
}

impl MatchProgress {
    fn from_state(state: MatchState) -> Self {
        match compute_result(&state) {
            Some(result) => MatchProgress::Finished(MatchFinished { state, result }),
            None => MatchProgress::InProgress(MatchInProgress { state }),
        }
    }

    /// Snapshot regardless of phase.
    pub fn state(&self) -> &MatchState {
        match self {
            MatchProgress::InProgress(game) => game.state(),
            MatchProgress::Finished(game) => game.state(),
        }
    }
}
