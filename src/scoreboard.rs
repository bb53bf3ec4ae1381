//! Plain-text scoreboard rendered from a match snapshot.

use std::fmt::Write;
use strictly_cricket::{
    BATTING_COLUMNS, BOWLING_COLUMNS, InningsState, MatchState, ResultSummary,
};
use tracing::instrument;

/// Headline for the innings in play, with the chase line during innings 2.
///
/// ```text
/// Innings 2: Team B vs Team A
/// Team B: 34 / 2 (4.3 Overs)
/// Target: 61 | Need 27 runs in 33 balls
/// ```
#[instrument(skip(state))]
pub fn render_status(state: &MatchState) -> String {
    let innings = state.current();
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}: {} vs {}",
        state.current_innings(),
        innings.batting_team(),
        innings.bowling_team()
    );
    let _ = writeln!(
        out,
        "{}: {} / {} ({} Overs)",
        innings.batting_team(),
        innings.runs(),
        innings.wickets(),
        innings.overs()
    );
    if let (Some(target), Some(needed)) = (state.target(), state.runs_needed()) {
        let _ = writeln!(
            out,
            "Target: {} | Need {} runs in {} balls",
            target,
            needed,
            state.balls_remaining()
        );
    }

    let strike = state.strike();
    let _ = writeln!(
        out,
        "On strike: {} | Off strike: {} | Bowler: {}",
        strike.on_strike().unwrap_or("-"),
        strike.off_strike().unwrap_or("-"),
        strike.bowler().unwrap_or("-")
    );
    out
}

/// Batting and bowling cards for one innings.
#[instrument(skip(innings))]
pub fn render_cards(innings: &InningsState) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} Batting", innings.batting_team());
    let _ = writeln!(
        out,
        "{:<20} {:>5} {:>5} {:>3} {:>3}  {}",
        "Batsman", BATTING_COLUMNS[0], BATTING_COLUMNS[1], BATTING_COLUMNS[2],
        BATTING_COLUMNS[3], BATTING_COLUMNS[4]
    );
    for (name, stats) in innings.batting_card().iter() {
        let [runs, balls, fours, sixes, status] = stats.row();
        let _ = writeln!(
            out,
            "{:<20} {:>5} {:>5} {:>3} {:>3}  {}",
            name, runs, balls, fours, sixes, status
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{} Bowling", innings.bowling_team());
    let _ = writeln!(
        out,
        "{:<20} {:>5} {:>5} {:>7}",
        "Bowler", BOWLING_COLUMNS[0], BOWLING_COLUMNS[1], BOWLING_COLUMNS[2]
    );
    for (name, stats) in innings.bowling_card().iter() {
        let [overs, runs, wickets] = stats.row();
        let _ = writeln!(out, "{:<20} {:>5} {:>5} {:>7}", name, overs, runs, wickets);
    }
    out
}

/// Final scores, the result line and both innings' cards.
#[instrument(skip(state, result))]
pub fn render_result(state: &MatchState, result: &ResultSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Match Result");
    let _ = writeln!(out, "{}", result.first());
    let _ = writeln!(out, "{}", result.second());
    let _ = writeln!(out, "{}", result.outcome());
    let _ = writeln!(out);
    out.push_str(&render_cards(state.innings1()));
    if let Some(innings2) = state.innings2() {
        let _ = writeln!(out);
        out.push_str(&render_cards(innings2));
    }
    out
}
