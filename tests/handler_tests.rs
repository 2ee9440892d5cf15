mod common;

use chrono::{NaiveDate, TimeZone, Utc};

use common::{ALL_CREDENTIALS, FakePublisher, FakeStats, config_with, game, mavericks, team, thunder};
use thunder_bot::config::Mode;
use thunder_bot::error::BotError;
use thunder_bot::handler::{Outcome, Request, run};

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 16, 14, 0, 0).unwrap()
}

fn vars_with<'a>(extra: &[(&'a str, &'a str)]) -> Vec<(&'a str, &'a str)> {
    let mut vars: Vec<(&str, &str)> = ALL_CREDENTIALS.to_vec();
    vars.extend_from_slice(extra);
    vars
}

#[test]
fn posts_home_win_for_forced_date() {
    let config = config_with(&vars_with(&[("FORCE_DATE", "2024-01-15")]));
    let stats = FakeStats::new(
        vec![mavericks(), thunder(25)],
        vec![game(thunder(25), mavericks(), 120, 100, "Final")],
    );
    let publisher = FakePublisher::default();

    let outcome = run(&config, &stats, &publisher, now()).expect("run should succeed");

    let expected = "YES\n\nJan 15, 2024\nvs Dallas Mavericks\nThunder 120 – 100 Mavericks";
    assert_eq!(*publisher.posted.borrow(), vec![expected.to_string()]);
    assert_eq!(
        outcome,
        Outcome::Posted { id: Some("1746000000000000000".to_string()), message: expected.to_string() }
    );
    assert_eq!(
        *stats.last_query.borrow(),
        Some((NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), 25))
    );
}

#[test]
fn defaults_to_chicago_yesterday() {
    let config = config_with(&vars_with(&[("TEAM_ID", "21")]));
    let stats = FakeStats::new(vec![], vec![]);
    let outcome = run(&config, &stats, &FakePublisher::default(), now()).unwrap();
    assert_eq!(outcome, Outcome::NoGame { date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap() });
    assert_eq!(stats.team_calls.get(), 0);
}

#[test]
fn no_game_is_a_successful_noop() {
    let config = config_with(&vars_with(&[("FORCE_DATE", "2024-01-15")]));
    let stats = FakeStats::new(vec![thunder(21)], vec![]);
    let publisher = FakePublisher::default();

    let outcome = run(&config, &stats, &publisher, now()).unwrap();

    assert!(matches!(outcome, Outcome::NoGame { .. }));
    assert!(publisher.posted.borrow().is_empty());
}

#[test]
fn no_game_does_not_need_credentials() {
    let config = config_with(&[("TEAM_ID", "21")]);
    let publisher = FakePublisher::default();
    let outcome = run(&config, &FakeStats::new(vec![], vec![]), &publisher, now()).unwrap();
    assert!(matches!(outcome, Outcome::NoGame { .. }));
}

#[test]
fn partial_credentials_fail_before_posting() {
    let config = config_with(&[
        ("TWITTER_API_KEY", "key"),
        ("TWITTER_API_SECRET", "secret"),
        ("TWITTER_ACCESS_TOKEN", "token"),
        ("FORCE_DATE", "2024-01-15"),
    ]);
    let stats = FakeStats::new(vec![thunder(21)], vec![game(thunder(21), mavericks(), 120, 100, "Final")]);
    let publisher = FakePublisher::default();

    let err = run(&config, &stats, &publisher, now()).unwrap_err();

    assert!(matches!(err, BotError::MissingCredentials));
    assert!(publisher.posted.borrow().is_empty());
}

#[test]
fn unknown_team_stops_the_run() {
    let config = config_with(&vars_with(&[]));
    let stats = FakeStats::new(vec![mavericks(), team(1, "ATL", "Hawks", "Atlanta Hawks")], vec![]);
    let publisher = FakePublisher::default();

    let err = run(&config, &stats, &publisher, now()).unwrap_err();

    assert!(matches!(err, BotError::TeamNotFound { .. }));
    assert_eq!(stats.game_calls.get(), 0);
    assert!(publisher.posted.borrow().is_empty());
}

#[test]
fn rejected_post_reports_status_and_body() {
    let config = config_with(&vars_with(&[("TEAM_ID", "21")]));
    let stats = FakeStats::new(vec![], vec![game(mavericks(), thunder(21), 90, 95, "Final")]);
    let publisher = FakePublisher { reject_with: Some(403), ..Default::default() };

    let err = run(&config, &stats, &publisher, now()).unwrap_err();

    assert_eq!(err.to_string(), "Twitter post failed [403]: {\"title\":\"Forbidden\"}");
}

#[test]
fn test_mode_formats_without_publishing() {
    let config = config_with(&[("BOT_MODE", "test"), ("TEAM_ID", "21"), ("FORCE_DATE", "2024-01-15")]);
    assert_eq!(config.mode, Mode::Test);
    let stats = FakeStats::new(vec![], vec![game(mavericks(), thunder(21), 90, 95, "Final")]);
    let publisher = FakePublisher::default();

    let outcome = run(&config, &stats, &publisher, now()).unwrap();

    assert_eq!(
        outcome,
        Outcome::DryRun { message: "YES\n\nJan 15, 2024\n@ Dallas Mavericks\nThunder 95 – 90 Mavericks".to_string() }
    );
    assert!(publisher.posted.borrow().is_empty());
}

#[test]
fn lambda_request_deserializes() {
    let req: Request = serde_json::from_value(serde_json::json!({ "mode": "test" })).unwrap();
    assert_eq!(req.mode, Mode::Test);
    assert!(req.force_date.is_none());

    let req: Request =
        serde_json::from_value(serde_json::json!({ "mode": "production", "force_date": "2024-01-15" })).unwrap();
    assert_eq!(req.mode, Mode::Production);
    assert_eq!(req.force_date.as_deref(), Some("2024-01-15"));

    assert!(serde_json::from_value::<Request>(serde_json::json!({ "mode": "staging" })).is_err());
}

#[test]
fn outcome_summaries_read_well() {
    assert_eq!(
        Outcome::Posted { id: Some("42".to_string()), message: String::new() }.to_string(),
        "Tweet posted: 42"
    );
    assert_eq!(
        Outcome::NoGame { date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap() }.to_string(),
        "No game on 2024-01-15, nothing to post."
    );
}
