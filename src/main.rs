use std::process::ExitCode;

use chrono::Utc;
use thunder_bot::balldontlie::BallDontLie;
use thunder_bot::config::Config;
use thunder_bot::handler;
use thunder_bot::twitter::Twitter;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = Config::from_env();
    let stats = BallDontLie::new(&config);
    let twitter = Twitter::new(&config);

    match handler::run(&config, &stats, &twitter, Utc::now()) {
        Ok(outcome) => {
            info!(outcome = %outcome, "Run complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Run failed");
            ExitCode::from(1)
        }
    }
}
