//! Match setup: the start command and the immutable config it produces.

use super::error::ConfigError;
use super::types::{BALLS_PER_OVER, TossDecision};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Command issued once to start a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct StartMatchCommand {
    /// First team's name.
    pub team1: String,
    /// Second team's name.
    pub team2: String,
    /// Overs per innings.
    pub total_overs: u32,
    /// Team that won the toss.
    pub toss_winner: String,
    /// What the toss winner chose.
    pub toss_decision: TossDecision,
}

/// Validated, immutable match setup.
///
/// `batting_team` and `bowling_team` are the first-innings assignment,
/// derived from the toss. They are always distinct and each is one of
/// `team1`/`team2`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(try_from = "StartMatchCommand")]
pub struct MatchConfig {
    team1: String,
    team2: String,
    total_overs: u32,
    toss_winner: String,
    toss_decision: TossDecision,
    batting_team: String,
    bowling_team: String,
}

impl MatchConfig {
    /// Validates a start command and derives the batting order.
    #[instrument(skip(cmd), fields(team1 = %cmd.team1, team2 = %cmd.team2, overs = cmd.total_overs))]
    pub fn new(cmd: StartMatchCommand) -> Result<Self, ConfigError> {
        let StartMatchCommand {
            team1,
            team2,
            total_overs,
            toss_winner,
            toss_decision,
        } = cmd;

        if team1.trim().is_empty() || team2.trim().is_empty() {
            warn!("Rejected setup with an empty team name");
            return Err(ConfigError::EmptyTeamName);
        }
        if team1 == team2 {
            warn!("Rejected setup with identical team names");
            return Err(ConfigError::SameTeams(team1));
        }
        if total_overs == 0 {
            warn!("Rejected setup with zero overs");
            return Err(ConfigError::NoOvers);
        }
        if total_overs.checked_mul(BALLS_PER_OVER).is_none() {
            warn!(total_overs, "Rejected setup with too many overs");
            return Err(ConfigError::TooManyOvers(total_overs));
        }

        let other_team = if toss_winner == team1 {
            team2.clone()
        } else if toss_winner == team2 {
            team1.clone()
        } else {
            warn!(toss_winner = %toss_winner, "Toss winner is not in this match");
            return Err(ConfigError::UnknownTossWinner(toss_winner));
        };

        let (batting_team, bowling_team) = match toss_decision {
            TossDecision::Bat => (toss_winner.clone(), other_team),
            TossDecision::Bowl => (other_team, toss_winner.clone()),
        };

        info!(batting = %batting_team, bowling = %bowling_team, "Match configured");
        Ok(Self {
            team1,
            team2,
            total_overs,
            toss_winner,
            toss_decision,
            batting_team,
            bowling_team,
        })
    }

    /// Legal deliveries available to each innings.
    ///
    /// `new` rejects any overs limit for which this would overflow.
    pub fn max_legal_balls(&self) -> u32 {
        self.total_overs * BALLS_PER_OVER
    }
}

impl TryFrom<StartMatchCommand> for MatchConfig {
    type Error = ConfigError;

    fn try_from(cmd: StartMatchCommand) -> Result<Self, Self::Error> {
        Self::new(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(winner: &str, decision: TossDecision) -> StartMatchCommand {
        StartMatchCommand::new(
            "Team A".to_string(),
            "Team B".to_string(),
            5,
            winner.to_string(),
            decision,
        )
    }

    #[test]
    fn test_toss_winner_bats() {
        let config = MatchConfig::new(command("Team B", TossDecision::Bat)).unwrap();
        assert_eq!(config.batting_team(), "Team B");
        assert_eq!(config.bowling_team(), "Team A");
        assert_eq!(config.max_legal_balls(), 30);
    }

    #[test]
    fn test_toss_winner_bowls() {
        let config = MatchConfig::new(command("Team A", TossDecision::Bowl)).unwrap();
        assert_eq!(config.batting_team(), "Team B");
        assert_eq!(config.bowling_team(), "Team A");
    }

    #[test]
    fn test_rejects_same_teams() {
        let cmd = StartMatchCommand::new(
            "India".to_string(),
            "India".to_string(),
            20,
            "India".to_string(),
            TossDecision::Bat,
        );
        assert_eq!(
            MatchConfig::new(cmd),
            Err(ConfigError::SameTeams("India".to_string()))
        );
    }

    #[test]
    fn test_rejects_zero_overs() {
        let mut cmd = command("Team A", TossDecision::Bat);
        cmd.total_overs = 0;
        assert_eq!(MatchConfig::new(cmd), Err(ConfigError::NoOvers));
    }

    #[test]
    fn test_rejects_overs_past_ball_counter() {
        let mut cmd = command("Team A", TossDecision::Bat);
        cmd.total_overs = 800_000_000;
        assert_eq!(
            MatchConfig::new(cmd),
            Err(ConfigError::TooManyOvers(800_000_000))
        );

        let mut cmd = command("Team A", TossDecision::Bat);
        cmd.total_overs = u32::MAX / BALLS_PER_OVER;
        let config = MatchConfig::new(cmd).unwrap();
        assert_eq!(config.max_legal_balls(), (u32::MAX / BALLS_PER_OVER) * BALLS_PER_OVER);
    }

    #[test]
    fn test_deserialize_goes_through_validation() {
        let config: MatchConfig = serde_json::from_str(
            r#"{"team1":"Team A","team2":"Team B","total_overs":2,
                "toss_winner":"Team B","toss_decision":"Bowl"}"#,
        )
        .unwrap();
        assert_eq!(config.batting_team(), "Team A");

        let tampered = r#"{"team1":"Team A","team2":"Team A","total_overs":2,
            "toss_winner":"Team A","toss_decision":"Bat"}"#;
        assert!(serde_json::from_str::<MatchConfig>(tampered).is_err());

        let round_trip: MatchConfig =
            serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
        assert_eq!(round_trip, config);
    }

    #[test]
    fn test_rejects_empty_team() {
        let mut cmd = command("Team A", TossDecision::Bat);
        cmd.team2 = "  ".to_string();
        assert_eq!(MatchConfig::new(cmd), Err(ConfigError::EmptyTeamName));
    }

    #[test]
    fn test_rejects_unknown_toss_winner() {
        let cmd = command("Team C", TossDecision::Bat);
        assert!(matches!(
            MatchConfig::new(cmd),
            Err(ConfigError::UnknownTossWinner(_))
        ));
    }
}
