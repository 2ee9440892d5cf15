use chrono::NaiveDate;
use tracing::{error, info, instrument};

use crate::balldontlie::StatsProvider;
use crate::config::TeamProfile;
use crate::error::BotError;
use crate::model::game::Game;

/// Status strings (lowercased) the provider uses for finished games.
pub const COMPLETED_STATUSES: [&str; 3] = ["final", "final/ot", "finished"];

/// Resolve the provider's numeric id for `profile`.
///
/// An override is trusted as-is and the provider is not contacted. Otherwise
/// the first team whose abbreviation or full name matches wins.
#[instrument(level = "info", skip(stats, profile))]
pub fn resolve_team_id<S>(
    stats: &S,
    override_id: Option<i64>,
    profile: &TeamProfile,
) -> Result<i64, BotError>
where
    S: StatsProvider + ?Sized,
{
    if let Some(id) = override_id {
        info!(team_id = id, "Using TEAM_ID override");
        return Ok(id);
    }

    let teams = stats.teams()?;
    match teams
        .iter()
        .find(|t| t.abbreviation == profile.abbreviation || t.full_name == profile.full_name)
    {
        Some(team) => {
            info!(team_id = team.id, team = %team.full_name, "Resolved team id");
            Ok(team.id)
        }
        None => {
            error!(
                abbreviation = %profile.abbreviation,
                scanned = teams.len(),
                "Team not found in provider data"
            );
            Err(BotError::TeamNotFound {
                full_name: profile.full_name.clone(),
                abbreviation: profile.abbreviation.clone(),
            })
        }
    }
}

/// Fetch the game `team_id` played on `date`, if any.
#[instrument(level = "info", skip(stats))]
pub fn fetch_game_for<S>(stats: &S, team_id: i64, date: NaiveDate) -> Result<Option<Game>, BotError>
where
    S: StatsProvider + ?Sized,
{
    let games = stats.games(date, team_id)?;
    Ok(select_game(games))
}

/// A game counts as completed when its status says so or any points were scored.
pub fn is_completed(game: &Game) -> bool {
    let status = game.status.to_lowercase();
    COMPLETED_STATUSES.contains(&status.as_str())
        || game.home_score().saturating_add(game.visitor_score()) > 0
}

/// Choose "the" game out of a provider result list.
///
/// The first completed game wins; with none completed, the first record in
/// provider order is used. An empty list yields `None`.
pub fn select_game(games: Vec<Game>) -> Option<Game> {
    let pick = games.iter().position(is_completed).unwrap_or(0);
    games.into_iter().nth(pick)
}
