//! Weekly head-to-head matchups.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::{
    cli::types::{TeamId, Week},
    espn::types::ScheduleItem,
    league::directory::TeamDirectory,
    storage::Table,
};

/// One scheduled game. A bye week has no away team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matchup {
    pub week: Week,
    pub home_team: Option<TeamId>,
    pub away_team: Option<TeamId>,
    pub home_score: f64,
    pub away_score: f64,
}

impl Matchup {
    /// Scores only count once the week has started.
    pub fn is_played(&self, current_week: Week) -> bool {
        self.week <= current_week
    }
}

impl From<&ScheduleItem> for Matchup {
    fn from(item: &ScheduleItem) -> Self {
        Self {
            week: item.matchup_period_id.unwrap_or_default(),
            home_team: item.home.as_ref().and_then(|side| side.team_id),
            away_team: item.away.as_ref().and_then(|side| side.team_id),
            home_score: item.home.as_ref().map(|side| side.score()).unwrap_or(0.0),
            away_score: item.away.as_ref().map(|side| side.score()).unwrap_or(0.0),
        }
    }
}

/// Group games by matchup period, keeping schedule order within a week.
pub fn group_by_week(schedule: &[ScheduleItem]) -> BTreeMap<Week, Vec<Matchup>> {
    let mut grouped: BTreeMap<Week, Vec<Matchup>> = BTreeMap::new();
    for item in schedule {
        let matchup = Matchup::from(item);
        grouped.entry(matchup.week).or_default().push(matchup);
    }
    grouped
}

/// Games where both teams are in the directory.
fn known_games<'a>(
    games: &'a [Matchup],
    directory: &'a TeamDirectory,
) -> impl Iterator<Item = (&'a Matchup, &'a str, &'a str, &'a str, &'a str)> + 'a {
    games.iter().filter_map(move |game| {
        let away = directory.get(&game.away_team?)?;
        let home = directory.get(&game.home_team?)?;
        Some((
            game,
            away.name.as_str(),
            away.owner_name.as_str(),
            home.name.as_str(),
            home.owner_name.as_str(),
        ))
    })
}

/// Render weeks in ascending order as "away vs. home" lines, with a score line
/// for weeks up to and including `current_week`.
pub fn render_matchups(
    grouped: &BTreeMap<Week, Vec<Matchup>>,
    directory: &TeamDirectory,
    current_week: Week,
) -> String {
    let mut out = format!("Matchup Information (Current Week: {})\n", current_week);

    for (week, games) in grouped {
        let _ = writeln!(out, "\nWeek {}:", week);
        for (game, away, away_owner, home, home_owner) in known_games(games, directory) {
            let _ = writeln!(
                out,
                "  {} ({}) vs. {} ({})",
                away, away_owner, home, home_owner
            );
            if game.is_played(current_week) {
                let _ = writeln!(
                    out,
                    "  Score: {:.2} - {:.2}",
                    game.away_score, game.home_score
                );
            }
            out.push('\n');
        }
    }

    out
}

/// Tabular form of the schedule; unplayed weeks have blank scores.
pub fn schedule_table(
    grouped: &BTreeMap<Week, Vec<Matchup>>,
    directory: &TeamDirectory,
    current_week: Week,
) -> Table {
    let headers = ["Week", "Away", "Away Score", "Home", "Home Score"];
    let mut rows = Vec::new();

    for (week, games) in grouped {
        for (game, away, _, home, _) in known_games(games, directory) {
            let (away_score, home_score) = if game.is_played(current_week) {
                (
                    format!("{:.2}", game.away_score),
                    format!("{:.2}", game.home_score),
                )
            } else {
                (String::new(), String::new())
            };
            rows.push(vec![
                week.to_string(),
                away.to_string(),
                away_score,
                home.to_string(),
                home_score,
            ]);
        }
    }

    Table::new(headers.iter().map(|h| h.to_string()).collect(), rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{espn::types::LeagueSnapshot, league::directory::build_team_directory};
    use serde_json::json;

    fn snapshot() -> LeagueSnapshot {
        LeagueSnapshot::new(json!({
            "status": { "currentMatchupPeriod": 2 },
            "teams": [
                { "id": 1, "name": "Sack Lunch", "owners": ["{A}"] },
                { "id": 2, "name": "Smith Squad", "owners": ["{B}"] }
            ],
            "members": [
                { "id": "{A}", "firstName": "Bubba", "lastName": "Jones" },
                { "id": "{B}", "firstName": "Cletus", "lastName": "Smith" }
            ],
            "schedule": [
                { "matchupPeriodId": 3, "home": { "teamId": 2 }, "away": { "teamId": 1 } },
                { "matchupPeriodId": 1, "home": { "teamId": 1, "totalPoints": 101.456 }, "away": { "teamId": 2, "totalPoints": 99.0 } },
                { "matchupPeriodId": 2, "home": { "teamId": 2, "totalPoints": 88.1 }, "away": { "teamId": 1, "totalPoints": 120.0 } },
                { "matchupPeriodId": 2, "home": { "teamId": 7, "totalPoints": 50.0 }, "away": { "teamId": 1, "totalPoints": 60.0 } },
                { "matchupPeriodId": 10, "home": { "teamId": 1 } }
            ]
        }))
    }

    #[test]
    fn test_group_by_week() {
        let grouped = group_by_week(&snapshot().schedule());

        let weeks: Vec<u16> = grouped.keys().map(Week::as_u16).collect();
        assert_eq!(weeks, vec![1, 2, 3, 10]);
        assert_eq!(grouped[&Week::new(2)].len(), 2);

        let bye = &grouped[&Week::new(10)][0];
        assert_eq!(bye.home_team, Some(TeamId::new(1)));
        assert_eq!(bye.away_team, None);
        assert_eq!(bye.away_score, 0.0);
    }

    #[test]
    fn test_missing_week_groups_under_zero() {
        let schedule: Vec<ScheduleItem> =
            serde_json::from_value(json!([{ "home": { "teamId": 1 }, "away": { "teamId": 2 } }]))
                .unwrap();
        let grouped = group_by_week(&schedule);
        assert!(grouped.contains_key(&Week::new(0)));
    }

    #[test]
    fn test_render_matchups_scores_only_for_played_weeks() {
        let snapshot = snapshot();
        let directory = build_team_directory(&snapshot);
        let grouped = group_by_week(&snapshot.schedule());

        let report = render_matchups(&grouped, &directory, snapshot.current_matchup_period());

        let expected = "Matchup Information (Current Week: 2)\n\
            \nWeek 1:\n\
            \x20 Smith Squad (Cletus Smith) vs. Sack Lunch (Bubba Jones)\n\
            \x20 Score: 99.00 - 101.46\n\
            \n\
            \nWeek 2:\n\
            \x20 Sack Lunch (Bubba Jones) vs. Smith Squad (Cletus Smith)\n\
            \x20 Score: 120.00 - 88.10\n\
            \n\
            \nWeek 3:\n\
            \x20 Sack Lunch (Bubba Jones) vs. Smith Squad (Cletus Smith)\n\
            \n\
            \nWeek 10:\n";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_schedule_table() {
        let snapshot = snapshot();
        let directory = build_team_directory(&snapshot);
        let grouped = group_by_week(&snapshot.schedule());

        let table = schedule_table(&grouped, &directory, Week::new(2));

        assert_eq!(table.headers.len(), 5);
        assert_eq!(table.rows.len(), 3);
        assert_eq!(
            table.rows[0],
            vec!["1", "Smith Squad", "99.00", "Sack Lunch", "101.46"]
        );
        assert_eq!(table.rows[2], vec!["3", "Sack Lunch", "", "Smith Squad", ""]);
    }
}
