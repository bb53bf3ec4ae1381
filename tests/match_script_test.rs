//! Tests for replaying recorded matches.

use std::path::PathBuf;
use strictly_cricket::{MatchOutcome, MatchPhase, MatchProgress};
use strictly_scorebook::{MatchScript, ScriptError, SetupFile, render_result};

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("demos").join(name)
}

#[test]
fn test_demo_final_replays_to_result() {
    let script = MatchScript::from_file(demo("final.toml")).expect("Demo script loads");
    let finished = match script.play().expect("Demo script plays") {
        MatchProgress::Finished(finished) => finished,
        MatchProgress::InProgress(_) => panic!("Demo match should finish"),
    };

    let state = finished.state();
    assert_eq!(state.phase(), MatchPhase::MatchOver);
    assert_eq!(state.innings1().score(), "30/1");
    assert_eq!(state.innings1().overs(), "2.0");
    assert_eq!(
        finished.result().outcome().to_string(),
        "Australia won by 9 wickets!"
    );
    assert!(matches!(finished.result().outcome(), MatchOutcome::Won { .. }));

    let text = render_result(state, finished.result());
    assert!(text.contains("India: 30/1"));
    assert!(text.contains("Australia: 31/1"));
}

#[test]
fn test_demo_setup_matches_script_setup() {
    let setup = SetupFile::from_file(demo("setup.toml")).expect("Demo setup loads");
    let script = MatchScript::from_file(demo("final.toml")).expect("Demo script loads");
    assert_eq!(&setup, script.setup());
}

#[test]
fn test_missing_file_is_a_load_error() {
    let err = MatchScript::from_file(demo("no_such_match.toml")).unwrap_err();
    assert!(matches!(err, ScriptError::Load(_)));
}

#[test]
fn test_invalid_setup_is_rejected_before_play() {
    let script = MatchScript::parse(
        r#"
commands = ["bat A"]

[setup]
team1 = "Lions"
team2 = "Lions"
"#,
    )
    .expect("Script parses");
    assert!(matches!(script.play(), Err(ScriptError::Config(_))));
}

#[test]
fn test_scripted_second_innings_stops_at_target() {
    let script = MatchScript::parse(
        r#"
commands = [
    "bat a1", "off a2", "bowl b1", "1", "0", "0", "0", "0", "0",
    "bat b2", "off b3", "bowl a3", "wd", "1",
    "4", "4",
]

[setup]
overs = 1
"#,
    )
    .expect("Script parses");

    let finished = match script.play().expect("Script plays") {
        MatchProgress::Finished(finished) => finished,
        MatchProgress::InProgress(_) => panic!("Target of 2 reached on the second delivery"),
    };
    assert_eq!(*finished.state().current().runs(), 2);
    assert_eq!(
        finished.result().outcome().to_string(),
        "Team B won by 10 wickets!"
    );
}

#[test]
fn test_oversized_overs_limit_is_rejected() {
    let script = MatchScript::parse(
        r#"
commands = ["bat A", "off B", "bowl C", "4"]

[setup]
overs = 4000000000
"#,
    )
    .expect("Script parses");
    let err = script.play().unwrap_err();
    assert!(matches!(
        err,
        ScriptError::Config(strictly_cricket::ConfigError::TooManyOvers(4_000_000_000))
    ));
}
