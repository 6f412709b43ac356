//! Serde views over the league payload returned by the ESPN v3 API.
//!
//! The payload is kept as an opaque [`serde_json::Value`] inside
//! [`LeagueSnapshot`]; the typed views below are pulled out of it one element
//! at a time, so a single malformed team, member or game is dropped (with a
//! warning) instead of failing the whole report.

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::cli::types::{Position, TeamId, Week};


/// Deserialize each element of a JSON array independently, skipping the ones
/// that do not fit `T`.
fn parse_each<T: DeserializeOwned>(items: &[Value], what: &str) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .filter_map(|(idx, item)| match serde_json::from_value::<T>(item.clone()) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!("Skipping malformed {} at index {}: {}", what, idx, e);
                None
            }
        })
        .collect()
}

/// Read an explicit `null` as the field's default, like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn array_at<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// One fetched league payload for a (league, season) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueSnapshot {
    raw: Value,
}

impl LeagueSnapshot {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn has_teams(&self) -> bool {
        self.raw.get("teams").is_some()
    }

    pub fn has_schedule(&self) -> bool {
        self.raw.get("schedule").is_some()
    }

    pub fn teams(&self) -> Vec<Team> {
        parse_each(array_at(&self.raw, "teams"), "team")
    }

    pub fn members(&self) -> Vec<Member> {
        parse_each(array_at(&self.raw, "members"), "member")
    }

    pub fn schedule(&self) -> Vec<ScheduleItem> {
        parse_each(array_at(&self.raw, "schedule"), "schedule item")
    }

    /// `status.currentMatchupPeriod`, or week 0 when absent.
    pub fn current_matchup_period(&self) -> Week {
        self.raw
            .get("status")
            .and_then(|status| status.get("currentMatchupPeriod"))
            .and_then(Value::as_u64)
            .and_then(|week| u16::try_from(week).ok())
            .map(Week::new)
            .unwrap_or_default()
    }

    /// `settings.name`, when the payload includes `mSettings`.
    pub fn league_name(&self) -> Option<String> {
        self.raw
            .get("settings")
            .and_then(|settings| settings.get("name"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }
}

/// A fantasy team entry from `teams[]`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Team {
    pub id: Option<TeamId>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub nickname: Option<String>,
    pub abbrev: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub owners: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub record: TeamRecordSet,
    pub roster: Option<Roster>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TeamRecordSet {
    #[serde(deserialize_with = "null_as_default")]
    pub overall: RecordLine,
}

/// Win/loss line from `record.overall`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordLine {
    #[serde(deserialize_with = "null_as_default")]
    pub wins: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub losses: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub ties: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub points_for: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub points_against: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Roster {
    #[serde(deserialize_with = "null_as_default")]
    pub entries: Vec<Value>,
}

impl Roster {
    pub fn player_entries(&self) -> Vec<RosterEntry> {
        parse_each(&self.entries, "roster entry")
    }
}

/// `roster.entries[]`; only the player's name and default position matter here.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RosterEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub player_pool_entry: PlayerPoolEntry,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerPoolEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub player: RosterPlayer,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RosterPlayer {
    pub full_name: Option<String>,
    pub default_position_id: Option<i64>,
}

impl RosterEntry {
    pub fn player_name(&self) -> String {
        self.player_pool_entry
            .player
            .full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or("Unknown Player")
            .to_string()
    }

    pub fn position_id(&self) -> Option<i64> {
        self.player_pool_entry.player.default_position_id
    }

    /// Resolved position; a missing code is treated like an unmapped one.
    pub fn position(&self) -> Position {
        self.position_id()
            .map(Position::from_espn_id)
            .unwrap_or(Position::Unknown)
    }
}

/// A league member from `members[]`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Member {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub display_name: Option<String>,
}

/// One game from `schedule[]`. Bye weeks have no `away` side.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScheduleItem {
    pub matchup_period_id: Option<Week>,
    pub home: Option<MatchupSide>,
    pub away: Option<MatchupSide>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchupSide {
    pub team_id: Option<TeamId>,
    pub total_points: Option<f64>,
}

impl MatchupSide {
    pub fn score(&self) -> f64 {
        self.total_points.unwrap_or(0.0)
    }
}
