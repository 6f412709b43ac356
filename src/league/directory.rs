//! Team directory: team id to display metadata, plus records and standings.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    cli::types::TeamId,
    espn::types::{LeagueSnapshot, Member, RecordLine, Team},
    storage::Table,
};

pub const UNKNOWN_OWNER: &str = "Unknown Owner";
pub const UNKNOWN_OWNER_ID: &str = "Unknown";

/// Display metadata for one fantasy team, derived from a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: TeamId,
    pub name: String,
    pub owner_id: String,
    pub owner_name: String,
    pub abbrev: String,
    pub location: String,
    pub nickname: String,
    pub overall: RecordLine,
}

pub type TeamDirectory = BTreeMap<TeamId, TeamRecord>;

fn trimmed(value: &Option<String>) -> &str {
    value.as_deref().map(str::trim).unwrap_or("")
}

/// Display name: `name`, then `location nickname`, then `abbrev`, then `Team {id}`.
pub fn resolve_team_name(team: &Team, id: TeamId) -> String {
    let name = trimmed(&team.name);
    if !name.is_empty() {
        return name.to_string();
    }

    let combined = format!("{} {}", trimmed(&team.location), trimmed(&team.nickname));
    let combined = combined.trim();
    if !combined.is_empty() {
        return combined.to_string();
    }

    let abbrev = trimmed(&team.abbrev);
    if !abbrev.is_empty() {
        return abbrev.to_string();
    }

    format!("Team {}", id)
}

/// Look an owner up in `members` (first id match wins).
///
/// Uses `firstName lastName`, then `displayName`, then [`UNKNOWN_OWNER`].
pub fn resolve_owner_name(owner_id: &str, members: &[Member]) -> String {
    let Some(member) = members
        .iter()
        .find(|member| member.id.as_deref() == Some(owner_id))
    else {
        return UNKNOWN_OWNER.to_string();
    };

    let full = format!(
        "{} {}",
        trimmed(&member.first_name),
        trimmed(&member.last_name)
    );
    let full = full.trim();
    if !full.is_empty() {
        return full.to_string();
    }

    let display = trimmed(&member.display_name);
    if !display.is_empty() {
        return display.to_string();
    }

    UNKNOWN_OWNER.to_string()
}

/// Build the team directory from a snapshot's `teams` and `members` sections.
///
/// A snapshot without `teams` yields an empty directory. Teams without an id
/// cannot be addressed and are left out.
pub fn build_team_directory(snapshot: &LeagueSnapshot) -> TeamDirectory {
    let members = snapshot.members();
    let mut directory = TeamDirectory::new();

    for team in snapshot.teams() {
        let Some(id) = team.id else {
            warn!("Skipping team without an id: {:?}", team.name);
            continue;
        };

        let owner_id = team
            .owners
            .first()
            .cloned()
            .unwrap_or_else(|| UNKNOWN_OWNER_ID.to_string());
        let owner_name = resolve_owner_name(&owner_id, &members);

        directory.insert(
            id,
            TeamRecord {
                id,
                name: resolve_team_name(&team, id),
                owner_id,
                owner_name,
                abbrev: team.abbrev.clone().unwrap_or_default(),
                location: team.location.clone().unwrap_or_default(),
                nickname: team.nickname.clone().unwrap_or_default(),
                overall: team.record.overall.clone(),
            },
        );
    }

    directory
}

/// Teams ordered by wins, then points for (both descending).
pub fn standings(directory: &TeamDirectory) -> Vec<&TeamRecord> {
    let mut teams: Vec<&TeamRecord> = directory.values().collect();
    teams.sort_by(|a, b| {
        b.overall
            .wins
            .cmp(&a.overall.wins)
            .then(b.overall.points_for.total_cmp(&a.overall.points_for))
    });
    teams
}

pub fn standings_table(directory: &TeamDirectory) -> Table {
    let headers = ["Rank", "Team", "Owner", "W", "L", "T", "PF", "PA"];
    let rows = standings(directory)
        .into_iter()
        .enumerate()
        .map(|(idx, team)| {
            vec![
                (idx + 1).to_string(),
                team.name.clone(),
                team.owner_name.clone(),
                team.overall.wins.to_string(),
                team.overall.losses.to_string(),
                team.overall.ties.to_string(),
                format!("{:.2}", team.overall.points_for),
                format!("{:.2}", team.overall.points_against),
            ]
        })
        .collect();

    Table::new(headers.iter().map(|h| h.to_string()).collect(), rows)
}

pub fn render_team_report(directory: &TeamDirectory) -> String {
    let mut out = String::from("Teams in the League:\n");
    for team in directory.values() {
        let record = &team.overall;
        let _ = writeln!(out, "- {}", team.name);
        let _ = writeln!(out, "  Owner: {}", team.owner_name);
        let _ = writeln!(
            out,
            "  Record: {}-{}-{}",
            record.wins, record.losses, record.ties
        );
        let _ = writeln!(out, "  Points For: {:.2}", record.points_for);
    }
    out
}
