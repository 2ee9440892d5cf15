use std::env;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::BotError;

pub const BALLDONTLIE_API: &str = "https://api.balldontlie.io/v1";
pub const TWITTER_API: &str = "https://api.twitter.com";

/// Applies to each outbound call on its own.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Format and log the message, never publish it.
    Test,
    Production,
}

impl Mode {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "test" => Some(Mode::Test),
            "production" => Some(Mode::Production),
            _ => None,
        }
    }
}

/// The team this bot reports on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamProfile {
    pub abbreviation: String,
    pub nickname: String,
    pub full_name: String,
}

impl Default for TeamProfile {
    fn default() -> Self {
        Self {
            abbreviation: "OKC".to_string(),
            nickname: "Thunder".to_string(),
            full_name: "Oklahoma City Thunder".to_string(),
        }
    }
}

/// Posting credentials as found in the environment; any of them may be missing.
#[derive(Clone, Default)]
pub struct Credentials {
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub access_token: Option<String>,
    pub access_secret: Option<String>,
}

/// A complete credential set, only obtainable through [`Credentials::require`].
#[derive(Clone)]
pub struct OAuthKeys {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub token: String,
    pub token_secret: String,
}

impl Credentials {
    pub fn require(&self) -> Result<OAuthKeys, BotError> {
        match (&self.api_key, &self.api_secret, &self.access_token, &self.access_secret) {
            (Some(key), Some(secret), Some(token), Some(token_secret)) => Ok(OAuthKeys {
                consumer_key: key.clone(),
                consumer_secret: secret.clone(),
                token: token.clone(),
                token_secret: token_secret.clone(),
            }),
            _ => Err(BotError::MissingCredentials),
        }
    }
}

fn presence(value: &Option<String>) -> &'static str {
    if value.is_some() { "<set>" } else { "<missing>" }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &presence(&self.api_key))
            .field("api_secret", &presence(&self.api_secret))
            .field("access_token", &presence(&self.access_token))
            .field("access_secret", &presence(&self.access_secret))
            .finish()
    }
}

impl fmt::Debug for OAuthKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OAuthKeys").finish_non_exhaustive()
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub stats_base_url: String,
    pub twitter_base_url: String,
    pub bdl_api_key: Option<String>,
    pub force_date: Option<String>,
    pub team_id: Option<i64>,
    pub credentials: Credentials,
    pub mode: Mode,
    pub team: TeamProfile,
    pub timeout: Duration,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Empty values count as unset.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let team_id = get("TEAM_ID").and_then(|raw| match raw.trim().parse::<i64>() {
            Ok(id) => Some(id),
            Err(e) => {
                warn!(value = %raw, error = %e, "Ignoring TEAM_ID that is not an integer");
                None
            }
        });

        let mode = match get("BOT_MODE") {
            Some(raw) => Mode::parse(&raw).unwrap_or_else(|| {
                warn!(value = %raw, "Unknown BOT_MODE, defaulting to production");
                Mode::Production
            }),
            None => Mode::Production,
        };

        Config {
            stats_base_url: BALLDONTLIE_API.to_string(),
            twitter_base_url: TWITTER_API.to_string(),
            bdl_api_key: get("BDL_API_KEY"),
            force_date: get("FORCE_DATE"),
            team_id,
            credentials: Credentials {
                api_key: get("TWITTER_API_KEY"),
                api_secret: get("TWITTER_API_SECRET"),
                access_token: get("TWITTER_ACCESS_TOKEN"),
                access_secret: get("TWITTER_ACCESS_SECRET"),
            },
            mode,
            team: TeamProfile::default(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}
