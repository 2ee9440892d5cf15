use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tracing::{error, info, info_span, instrument};

use crate::config::Config;
use crate::error::BotError;
use crate::model::ApiList;
use crate::model::game::Game;
use crate::model::team::Team;

/// Source of team and game data.
pub trait StatsProvider {
    /// Every team the provider knows about, in provider order.
    fn teams(&self) -> Result<Vec<Team>, BotError>;

    /// Games `team_id` played on `date`, in provider order.
    fn games(&self, date: NaiveDate, team_id: i64) -> Result<Vec<Game>, BotError>;
}

/// Blocking client for the BallDontLie v1 API.
#[derive(Clone)]
pub struct BallDontLie {
    agent: ureq::Agent,
    base_url: String,
    api_key: Option<String>,
}

impl BallDontLie {
    pub fn new(config: &Config) -> Self {
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .http_status_as_error(false)
            .build()
            .into();
        Self {
            agent,
            base_url: config.stats_base_url.trim_end_matches('/').to_string(),
            api_key: config.bdl_api_key.clone(),
        }
    }

    pub fn teams_url(&self) -> String {
        format!("{}/teams", self.base_url)
    }

    /// Games query for one team on one date; `[]` is percent-encoded.
    pub fn games_url(&self, date: NaiveDate, team_id: i64) -> String {
        format!(
            "{}/games?dates%5B%5D={}&team_ids%5B%5D={}&per_page=100",
            self.base_url,
            date.format("%Y-%m-%d"),
            team_id
        )
    }

    /// GET `url` and decode the body. Non-2xx statuses become [`BotError::HttpStatus`].
    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, BotError> {
        let mut request = self.agent.get(url);
        // Raw key, no "Bearer" prefix
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", key.as_str());
        }

        let response_result = {
            let _span = info_span!("balldontlie_fetch", url = %url).entered();
            request.call()
        };
        let response = match response_result {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, url = %url, "Stats request failed");
                return Err(BotError::Transport { url: url.to_string(), source: e });
            }
        };

        let status = response.status().as_u16();
        let mut body_reader = response.into_body();
        let body = body_reader
            .read_to_string()
            .map_err(|e| BotError::Transport { url: url.to_string(), source: e })?;

        if !(200..300).contains(&status) {
            error!(status, url = %url, "Stats provider returned an error status");
            return Err(BotError::HttpStatus { url: url.to_string(), status, body });
        }

        serde_json::from_str::<T>(&body)
            .map_err(|e| BotError::Decode { url: url.to_string(), source: e })
    }
}

impl StatsProvider for BallDontLie {
    #[instrument(level = "info", skip(self))]
    fn teams(&self) -> Result<Vec<Team>, BotError> {
        let list: ApiList<Team> = self.get_json(&self.teams_url())?;
        info!(count = list.data.len(), "Fetched team list");
        Ok(list.data)
    }

    #[instrument(level = "info", skip(self))]
    fn games(&self, date: NaiveDate, team_id: i64) -> Result<Vec<Game>, BotError> {
        let url = self.games_url(date, team_id);
        info!(url = %url, "Requesting games");
        let list: ApiList<Game> = self.get_json(&url)?;
        info!(count = list.data.len(), "Fetched games");
        Ok(list.data)
    }
}
