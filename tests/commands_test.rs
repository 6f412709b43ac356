//! Integration tests for command handlers

use rffl_codex::{
    commands::{
        fetch_configured_league,
        league_report::{render_league_report, ReportSection},
        snapshot::{artifact_name, store_league_snapshot},
    },
    CodexError, Config, LeagueId, Season, SeasonStore,
};
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

const LEAGUE_PATH: &str = "/seasons/2023/segments/0/leagues/4242";

fn league_body() -> Value {
    json!({
        "id": 4242,
        "settings": { "name": "Backyard League" },
        "status": { "currentMatchupPeriod": 2 },
        "members": [{ "id": "{A}", "firstName": "Pat", "lastName": "Doe" }],
        "teams": [
            {
                "id": 7,
                "name": "Doe Re Mi",
                "owners": ["{A}"],
                "record": { "overall": { "wins": 2, "losses": 0, "ties": 0, "pointsFor": 250.5 } },
                "roster": { "entries": [
                    { "playerPoolEntry": { "player": { "fullName": "Lamar Jackson", "defaultPositionId": 1 } } }
                ] }
            },
            { "id": 8, "name": "Other Guys" }
        ],
        "schedule": [
            { "matchupPeriodId": 1, "home": { "teamId": 7, "totalPoints": 130.0 }, "away": { "teamId": 8, "totalPoints": 88.25 } },
            { "matchupPeriodId": 3, "home": { "teamId": 8 }, "away": { "teamId": 7 } }
        ]
    })
}

fn config_for(server: &MockServer, data_dir: &TempDir) -> Config {
    Config {
        base_url: format!("{}/seasons", server.uri()),
        league_id: LeagueId::new(4242),
        season: Season::new(2023),
        data_dir: data_dir.path().to_path_buf(),
        ..Config::default()
    }
}

#[tokio::test]
async fn test_fetch_report_and_snapshot_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LEAGUE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(league_body()))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir);

    let snapshot = fetch_configured_league(&config).await.unwrap().unwrap();

    let report = render_league_report(&snapshot, &config, &ReportSection::ALL);
    assert!(report.starts_with("Backyard League (2023)\n"));
    assert!(report.contains("  Score: 88.25 - 130.00\n"));
    assert!(report.contains("Week 3:\n  Doe Re Mi (Pat Doe) vs. Other Guys (Unknown Owner)\n\n"));
    assert!(report.contains("\nOther Guys (Unknown Owner):\n  No roster data\n"));

    let store = SeasonStore::from_config(&config);
    let paths = store_league_snapshot(&store, &snapshot, &config).unwrap();
    assert_eq!(paths.len(), 5);
    assert_eq!(artifact_name(&config), "league_4242");

    let raw = store
        .load(config.season, "raw", "league_4242", false)
        .unwrap();
    assert_eq!(raw.as_nested(), Some(&league_body()));
}

#[tokio::test]
async fn test_fetch_outcomes_without_league() {
    for status in [401, 404] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(LEAGUE_PATH))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let config = config_for(&server, &dir);
        assert!(fetch_configured_league(&config).await.unwrap().is_none());
    }
}

#[tokio::test]
async fn test_fetch_server_error_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LEAGUE_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = config_for(&server, &dir);

    match fetch_configured_league(&config).await {
        Err(CodexError::UnexpectedStatus { status, .. }) => assert_eq!(status.as_u16(), 503),
        other => panic!("Expected UnexpectedStatus, got {:?}", other),
    }
}
