use chrono::{Datelike, NaiveDate};
use tracing::info;

use crate::config::TeamProfile;
use crate::model::game::Game;

/// Maximum post length, in characters.
pub const MAX_MESSAGE_CHARS: usize = 280;

/// Render the daily result post, or `None` when there was no game.
///
/// ```text
/// YES
///
/// Jan 15, 2024
/// vs Dallas Mavericks
/// Thunder 120 – 100 Mavericks
/// ```
///
/// Ties count as a loss.
pub fn format_message(
    game: Option<&Game>,
    date: NaiveDate,
    team_id: i64,
    profile: &TeamProfile,
) -> Option<String> {
    let Some(game) = game else {
        info!(date = %date, "No game found for date");
        return None;
    };

    let is_home = game.home_team.id == team_id;
    let (team_score, opp_score, opp) = if is_home {
        (game.home_score(), game.visitor_score(), &game.visitor_team)
    } else {
        (game.visitor_score(), game.home_score(), &game.home_team)
    };

    let yes_no = if team_score > opp_score { "YES" } else { "NO" };
    let venue = if is_home { "vs" } else { "@" };
    let date_str = format!("{} {}, {}", date.format("%b"), date.day(), date.year());

    let text = format!(
        "{}\n\n{}\n{} {}\n{} {} – {} {}",
        yes_no, date_str, venue, opp.full_name, profile.nickname, team_score, opp_score, opp.name
    );
    Some(truncate_chars(&text, MAX_MESSAGE_CHARS))
}

/// Hard cutoff at `max` characters, no ellipsis.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
