//! Snapshot command: fetch once and persist the season's artifacts

use std::path::PathBuf;

use serde::Serialize;

use crate::{
    config::Config,
    espn::types::LeagueSnapshot,
    league::{
        assign_lineup, build_team_directory,
        directory::{standings_table, UNKNOWN_OWNER},
        group_by_week,
        lineup::{LineupSlot, SkippedEntry},
        matchups::schedule_table,
        organize_by_position, TeamRecord,
    },
    storage::{Category, SeasonStore, SnapshotData},
    Result, TeamId,
};

use super::fetch_configured_league;

/// Stored form of one team's suggested lineup.
#[derive(Debug, Serialize)]
struct TeamLineup {
    team_id: Option<TeamId>,
    team: String,
    owner: String,
    starters: Vec<LineupSlot>,
    bench: Vec<LineupSlot>,
    skipped: Vec<SkippedEntry>,
}

pub fn artifact_name(config: &Config) -> String {
    format!("league_{}", config.league_id)
}

/// Write raw, teams, standings, matchups and rosters artifacts for a snapshot.
pub fn store_league_snapshot(
    store: &SeasonStore,
    snapshot: &LeagueSnapshot,
    config: &Config,
) -> Result<Vec<PathBuf>> {
    let name = artifact_name(config);
    let season = config.season;
    let directory = build_team_directory(snapshot);
    let grouped = group_by_week(&snapshot.schedule());

    let teams: Vec<&TeamRecord> = directory.values().collect();

    let lineups: Vec<TeamLineup> = snapshot
        .teams()
        .into_iter()
        .filter_map(|team| {
            let roster = team.roster.as_ref()?;
            let organized = organize_by_position(&roster.player_entries());
            let lineup = assign_lineup(&organized, &config.roster_template);
            let record = team.id.and_then(|id| directory.get(&id));
            Some(TeamLineup {
                team_id: team.id,
                team: record
                    .map(|r| r.name.clone())
                    .unwrap_or_else(|| "Unknown Team".to_string()),
                owner: record
                    .map(|r| r.owner_name.clone())
                    .unwrap_or_else(|| UNKNOWN_OWNER.to_string()),
                starters: lineup.starters,
                bench: lineup.bench,
                skipped: organized.skipped().to_vec(),
            })
        })
        .collect();

    let artifacts = [
        (Category::Raw, SnapshotData::Nested(snapshot.raw().clone())),
        (Category::Teams, SnapshotData::Nested(serde_json::to_value(&teams)?)),
        (Category::Standings, SnapshotData::Table(standings_table(&directory))),
        (
            Category::Matchups,
            SnapshotData::Table(schedule_table(
                &grouped,
                &directory,
                snapshot.current_matchup_period(),
            )),
        ),
        (Category::Rosters, SnapshotData::Nested(serde_json::to_value(&lineups)?)),
    ];

    artifacts
        .iter()
        .map(|(category, data)| store.store(data, season, category.as_str(), &name))
        .collect()
}

/// Handle the `snapshot` command
pub async fn handle_snapshot(config: &Config) -> Result<()> {
    // tarpaulin::skip - HTTP call, covered by the client tests
    let Some(snapshot) = fetch_configured_league(config).await? else {
        return Ok(());
    };

    let store = SeasonStore::from_config(config);
    let paths = store_league_snapshot(&store, &snapshot, config)?;

    println!("✓ Stored {} artifacts for season {}", paths.len(), config.season);
    for path in paths {
        println!("  {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LeagueId;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_store_league_snapshot_writes_every_category() {
        let dir = TempDir::new().unwrap();
        let store = SeasonStore::new(dir.path());
        let config = Config {
            league_id: LeagueId::new(99),
            ..Config::default()
        };
        let snapshot = LeagueSnapshot::new(json!({
            "status": { "currentMatchupPeriod": 1 },
            "teams": [
                {
                    "id": 1,
                    "name": "Sack Lunch",
                    "record": { "overall": { "wins": 1, "pointsFor": 101.0 } },
                    "roster": { "entries": [
                        { "playerPoolEntry": { "player": { "fullName": "Josh Allen", "defaultPositionId": 1 } } },
                        { "playerPoolEntry": { "player": { "fullName": "Joe Burrow", "defaultPositionId": 1 } } }
                    ] }
                },
                { "id": 2, "name": "Smith Squad" }
            ],
            "schedule": [
                { "matchupPeriodId": 1, "home": { "teamId": 1, "totalPoints": 101.0 }, "away": { "teamId": 2, "totalPoints": 90.5 } }
            ]
        }));

        let paths = store_league_snapshot(&store, &snapshot, &config).unwrap();
        assert_eq!(paths.len(), 5);
        assert!(paths.iter().all(|p| p.exists()));

        let listing = store.list(config.season, None).unwrap();
        assert_eq!(listing.len(), 5);
        assert!(listing.values().all(|names| names == &vec!["league_99".to_string()]));

        let raw = store.load(config.season, "raw", "league_99", false).unwrap();
        assert_eq!(raw.as_nested(), Some(snapshot.raw()));

        let standings = store
            .load(config.season, "standings", "league_99", true)
            .unwrap();
        let standings = standings.as_table().unwrap();
        assert_eq!(standings.rows[0][1], "Sack Lunch");

        let matchups = store
            .load(config.season, "matchups", "league_99", true)
            .unwrap();
        assert_eq!(
            matchups.as_table().unwrap().rows[0],
            vec!["1", "Smith Squad", "90.50", "Sack Lunch", "101.00"]
        );

        let rosters = store
            .load(config.season, "rosters", "league_99", false)
            .unwrap();
        let rosters = rosters.as_nested().unwrap();
        assert_eq!(rosters.as_array().unwrap().len(), 1);
        assert_eq!(rosters[0]["team"], "Sack Lunch");
        assert_eq!(rosters[0]["starters"][0]["player"], "Josh Allen");
        assert_eq!(rosters[0]["bench"][0]["label"], "QB");

        let teams = store.load(config.season, "teams", "league_99", false).unwrap();
        assert_eq!(teams.as_nested().unwrap()[1]["name"], "Smith Squad");
    }
}
