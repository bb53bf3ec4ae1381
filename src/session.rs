//! Interactive scoring session.
//!
//! The session is the view layer's side of the boundary: it turns text
//! lines into scoring commands, dispatches them to the match and reports
//! what happened. All rules live in `strictly_cricket`.

use crate::console::{ConsoleCommand, HELP, ParseError, parse_command};
use crate::scoreboard::{render_result, render_status};
use crate::setup::SetupFile;
use std::fmt::Write as _;
use std::io::{BufRead, Write};
use strictly_cricket::{
    BallEvent, ConfigError, MatchFinished, MatchPhase, MatchProgress, MatchSetup, MatchState,
    ScoringCommand,
};
use tracing::{debug, info, instrument, warn};

/// What the caller should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading.
    Continue,
    /// The scorer asked to stop.
    Quit,
    /// The match is over.
    Finished,
}

/// A match being scored from text input.
#[derive(Debug, Clone)]
pub struct ScoringSession {
    progress: MatchProgress,
}

impl ScoringSession {
    /// Starts a match from a setup file.
    #[instrument(skip(setup))]
    pub fn start(setup: &SetupFile) -> Result<Self, ConfigError> {
        let game = MatchSetup::new().start(setup.to_command())?;
        info!(phase = %game.phase(), "Scoring session started");
        Ok(Self {
            progress: MatchProgress::InProgress(game),
        })
    }

    /// Current snapshot.
    pub fn state(&self) -> &MatchState {
        self.progress.state()
    }

    /// The finished match, once the result is in.
    pub fn finished(&self) -> Option<&MatchFinished> {
        match &self.progress {
            MatchProgress::Finished(finished) => Some(finished),
            MatchProgress::InProgress(_) => None,
        }
    }

    /// Handles one line of input, returning the text to show and what to do next.
    ///
    /// A rejected line leaves the match unchanged; the returned text says why.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> (String, Flow) {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(ParseError::Empty) => return (String::new(), self.flow()),
            Err(err) => {
                debug!(%err, "Unparseable line");
                return (format!("{}\n", err), self.flow());
            }
        };

        match command {
            ConsoleCommand::Quit => (String::new(), Flow::Quit),
            ConsoleCommand::Help => (format!("{}\n", HELP), self.flow()),
            ConsoleCommand::Status => (self.status_text(), self.flow()),
            ConsoleCommand::Score(command) => self.score(command),
        }
    }

    /// Reads lines until input runs out, the scorer quits or the match ends.
    #[instrument(skip(self, input, output))]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<Flow> {
        write!(output, "{}", self.status_text())?;
        writeln!(output, "Type 'help' for commands.")?;

        for line in input.lines() {
            let (text, flow) = self.handle_line(&line?);
            write!(output, "{}", text)?;
            if flow != Flow::Continue {
                return Ok(flow);
            }
        }
        Ok(self.flow())
    }

    fn score(&mut self, command: ScoringCommand) -> (String, Flow) {
        let game = match &self.progress {
            MatchProgress::InProgress(game) => game,
            MatchProgress::Finished(_) => {
                return ("Match is already over\n".to_string(), Flow::Finished);
            }
        };

        let ball = match command {
            ScoringCommand::Ball(ball) => ball,
            other => {
                return match game.apply(&other) {
                    Ok(progress) => {
                        self.progress = progress;
                        (String::new(), Flow::Continue)
                    }
                    Err(err) => {
                        warn!(%err, "Player assignment rejected");
                        (format!("{}\n", err), Flow::Continue)
                    }
                };
            }
        };

        let before_phase = game.phase();
        let striker = game.state().strike().on_strike().map(str::to_owned);

        match game.record_ball(ball) {
            Ok((progress, outcome)) => {
                self.progress = progress;
                let mut text = String::new();
                if outcome.wicket_fallen {
                    let _ = writeln!(text, "WICKET! {} is out!", striker.unwrap_or_default());
                }
                text.push_str(&self.transition_text(before_phase, ball, outcome.over_complete));
                (text, self.flow())
            }
            Err(err) => {
                warn!(%err, "Ball rejected");
                (format!("{}\n", err), Flow::Continue)
            }
        }
    }

    fn transition_text(&self, before: MatchPhase, ball: BallEvent, over_complete: bool) -> String {
        let state = self.state();
        let mut text = String::new();

        match (before, state.phase()) {
            (MatchPhase::InInnings1, MatchPhase::InInnings2) => {
                let _ = writeln!(
                    text,
                    "End of Innings 1. {} needs {} to win.",
                    state.current().batting_team(),
                    state.target().unwrap_or_default()
                );
                text.push_str(&render_status(state));
            }
            (_, MatchPhase::MatchOver) => {
                if let Some(finished) = self.finished() {
                    text.push_str(&render_result(finished.state(), finished.result()));
                }
            }
            _ => {
                if over_complete {
                    let _ = writeln!(text, "Over Complete!");
                }
                debug!(%ball, "Ball recorded");
                text.push_str(&render_status(state));
            }
        }
        text
    }

    fn status_text(&self) -> String {
        match self.finished() {
            Some(finished) => render_result(finished.state(), finished.result()),
            None => render_status(self.state()),
        }
    }

    fn flow(&self) -> Flow {
        if self.finished().is_some() {
            Flow::Finished
        } else {
            Flow::Continue
        }
    }
}
