use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use lambda_runtime::{Error, LambdaEvent};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::balldontlie::{BallDontLie, StatsProvider};
use crate::config::{Config, Mode};
use crate::date::resolve_target_date;
use crate::error::BotError;
use crate::lookup::{fetch_game_for, resolve_team_id};
use crate::message::format_message;
use crate::twitter::{Publisher, Twitter};

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Posted { id: Option<String>, message: String },
    NoGame { date: NaiveDate },
    DryRun { message: String },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Posted { id: Some(id), .. } => write!(f, "Tweet posted: {}", id),
            Outcome::Posted { id: None, .. } => write!(f, "Tweet posted (no id returned)"),
            Outcome::NoGame { date } => write!(f, "No game on {}, nothing to post.", date),
            Outcome::DryRun { message } => write!(f, "Test mode, not posting:\n{}", message),
        }
    }
}

/// Run the daily pipeline once: date, team, game, message, publish.
///
/// Credentials are only checked once there is something to publish.
#[instrument(level = "info", skip(config, stats, publisher))]
pub fn run<S, P>(
    config: &Config,
    stats: &S,
    publisher: &P,
    now: DateTime<Utc>,
) -> Result<Outcome, BotError>
where
    S: StatsProvider + ?Sized,
    P: Publisher + ?Sized,
{
    let date = resolve_target_date(config.force_date.as_deref(), now);
    let team_id = resolve_team_id(stats, config.team_id, &config.team)?;
    let game = fetch_game_for(stats, team_id, date)?;

    let Some(message) = format_message(game.as_ref(), date, team_id, &config.team) else {
        info!(date = %date, "No game yesterday, nothing to post");
        return Ok(Outcome::NoGame { date });
    };
    info!(message = %message, "Prepared message");

    if config.mode == Mode::Test {
        info!("Test mode, skipping publish");
        return Ok(Outcome::DryRun { message });
    }

    let keys = config.credentials.require()?;
    let id = publisher.publish(&keys, &message)?;
    Ok(Outcome::Posted { id, message })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Request {
    pub mode: Mode,
    /// Same meaning as FORCE_DATE; takes precedence over it.
    #[serde(default)]
    pub force_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub message: String,
}

#[instrument(skip(event))]
pub async fn handler(event: LambdaEvent<Request>) -> Result<Response, Error> {
    let payload = event.payload;
    let mut config = Config::from_env();
    config.mode = payload.mode;
    if payload.force_date.is_some() {
        config.force_date = payload.force_date;
    }

    // The pipeline blocks on network I/O
    let outcome = tokio::task::spawn_blocking(move || {
        let stats = BallDontLie::new(&config);
        let twitter = Twitter::new(&config);
        run(&config, &stats, &twitter, Utc::now())
    })
    .await??;

    info!(outcome = %outcome, "Run complete");
    Ok(Response { message: outcome.to_string() })
}
