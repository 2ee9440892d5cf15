#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use chrono::NaiveDate;
use thunder_bot::balldontlie::StatsProvider;
use thunder_bot::config::{Config, OAuthKeys};
use thunder_bot::error::BotError;
use thunder_bot::model::game::Game;
use thunder_bot::model::team::Team;
use thunder_bot::twitter::Publisher;

pub fn team(id: i64, abbreviation: &str, name: &str, full_name: &str) -> Team {
    Team {
        id,
        abbreviation: abbreviation.to_string(),
        full_name: full_name.to_string(),
        name: name.to_string(),
    }
}

pub fn thunder(id: i64) -> Team {
    team(id, "OKC", "Thunder", "Oklahoma City Thunder")
}

pub fn mavericks() -> Team {
    team(7, "DAL", "Mavericks", "Dallas Mavericks")
}

pub fn game(home: Team, visitor: Team, home_score: i64, visitor_score: i64, status: &str) -> Game {
    Game {
        status: status.to_string(),
        home_team: home,
        visitor_team: visitor,
        home_team_score: Some(home_score),
        visitor_team_score: Some(visitor_score),
    }
}

/// Config built from an explicit variable list, never the process environment.
pub fn config_with(vars: &[(&str, &str)]) -> Config {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    Config::from_vars(|key| map.get(key).cloned())
}

pub const ALL_CREDENTIALS: [(&str, &str); 4] = [
    ("TWITTER_API_KEY", "key"),
    ("TWITTER_API_SECRET", "secret"),
    ("TWITTER_ACCESS_TOKEN", "token"),
    ("TWITTER_ACCESS_SECRET", "token-secret"),
];

/// In-memory stats provider that counts calls.
#[derive(Default)]
pub struct FakeStats {
    pub teams: Vec<Team>,
    pub games: Vec<Game>,
    pub team_calls: Cell<usize>,
    pub game_calls: Cell<usize>,
    pub last_query: RefCell<Option<(NaiveDate, i64)>>,
}

impl FakeStats {
    pub fn new(teams: Vec<Team>, games: Vec<Game>) -> Self {
        Self { teams, games, ..Default::default() }
    }
}

impl StatsProvider for FakeStats {
    fn teams(&self) -> Result<Vec<Team>, BotError> {
        self.team_calls.set(self.team_calls.get() + 1);
        Ok(self.teams.clone())
    }

    fn games(&self, date: NaiveDate, team_id: i64) -> Result<Vec<Game>, BotError> {
        self.game_calls.set(self.game_calls.get() + 1);
        *self.last_query.borrow_mut() = Some((date, team_id));
        Ok(self.games.clone())
    }
}

/// Records every message instead of posting it.
#[derive(Default)]
pub struct FakePublisher {
    pub posted: RefCell<Vec<String>>,
    pub reject_with: Option<u16>,
}

impl Publisher for FakePublisher {
    fn publish(&self, _keys: &OAuthKeys, text: &str) -> Result<Option<String>, BotError> {
        self.posted.borrow_mut().push(text.to_string());
        match self.reject_with {
            Some(status) => Err(BotError::PostRejected { status, body: "{\"title\":\"Forbidden\"}".to_string() }),
            None => Ok(Some("1746000000000000000".to_string())),
        }
    }
}
