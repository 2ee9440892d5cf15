use serde::Deserialize;

use crate::model::team::Team;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Game {
    #[serde(default)]
    pub status: String,
    pub home_team: Team,
    pub visitor_team: Team,
    // Scheduled games may report null scores
    #[serde(default)]
    pub home_team_score: Option<i64>,
    #[serde(default)]
    pub visitor_team_score: Option<i64>,
}

impl Game {
    pub fn home_score(&self) -> i64 {
        self.home_team_score.unwrap_or(0)
    }

    pub fn visitor_score(&self) -> i64 {
        self.visitor_team_score.unwrap_or(0)
    }
}
