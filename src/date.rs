use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::America::Chicago;
use tracing::{info, warn};

/// Pick the calendar date whose game we report on.
///
/// A `forced` ISO date (`YYYY-MM-DD`) wins when it parses. Otherwise this is
/// the day before `now` as seen on a Chicago wall clock. A malformed override
/// (including one with surrounding whitespace) is logged and ignored.
pub fn resolve_target_date(forced: Option<&str>, now: DateTime<Utc>) -> NaiveDate {
    if let Some(raw) = forced {
        match raw.parse::<NaiveDate>() {
            Ok(date) => {
                info!(date = %date, "Using FORCE_DATE override");
                return date;
            }
            Err(e) => {
                warn!(
                    value = %raw,
                    error = %e,
                    "FORCE_DATE is not a valid YYYY-MM-DD date; using yesterday"
                );
            }
        }
    }
    chicago_yesterday(now)
}

/// The previous calendar day in America/Chicago.
///
/// Stepping back a calendar day (not 86400 seconds) keeps the answer right on
/// the two DST transition days.
pub fn chicago_yesterday(now: DateTime<Utc>) -> NaiveDate {
    let today = now.with_timezone(&Chicago).date_naive();
    today.pred_opt().unwrap_or(today)
}
