//! Roster organization and starter/bench assignment.
//!
//! A team's roster entries are bucketed by position, then a greedy pass fills
//! the template's starting slots in template order. Each single-position slot
//! takes players from the front of its bucket; the FLEX slot takes the first
//! remaining RB, else WR, else TE. Whatever is left goes to the bench in
//! bucket order (QB, RB, WR, TE, D/ST, K).

use std::collections::{BTreeMap, VecDeque};
use std::fmt::Write;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    cli::types::{Position, RosterSlot},
    espn::types::{LeagueSnapshot, RosterEntry},
    league::directory::{TeamDirectory, UNKNOWN_OWNER},
};

/// `count` starters of one slot kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRequirement {
    pub slot: RosterSlot,
    pub count: usize,
}

impl SlotRequirement {
    pub fn new(slot: RosterSlot, count: usize) -> Self {
        Self { slot, count }
    }
}

/// Starting slots in fill order, plus the number of bench spots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterTemplate {
    pub starters: Vec<SlotRequirement>,
    pub bench_spots: usize,
}

impl RosterTemplate {
    /// 1 QB, 2 RB, 2 WR, 1 TE, 1 FLEX, 1 D/ST, 1 K with 7 bench spots.
    pub fn standard() -> Self {
        use RosterSlot::{Flex, Position as Pos};

        Self {
            starters: vec![
                SlotRequirement::new(Pos(Position::QB), 1),
                SlotRequirement::new(Pos(Position::RB), 2),
                SlotRequirement::new(Pos(Position::WR), 2),
                SlotRequirement::new(Pos(Position::TE), 1),
                SlotRequirement::new(Flex, 1),
                SlotRequirement::new(Pos(Position::DST), 1),
                SlotRequirement::new(Pos(Position::K), 1),
            ],
            bench_spots: 7,
        }
    }

    pub fn starter_count(&self) -> usize {
        self.starters.iter().map(|req| req.count).sum()
    }

    pub fn roster_size(&self) -> usize {
        self.starter_count() + self.bench_spots
    }
}

impl Default for RosterTemplate {
    fn default() -> Self {
        Self::standard()
    }
}

/// A roster entry left out of every bucket because its position is unmapped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEntry {
    pub player: String,
    pub position_id: Option<i64>,
}

/// Player names per position, in roster order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizedRoster {
    buckets: BTreeMap<Position, Vec<String>>,
    skipped: Vec<SkippedEntry>,
}

impl Default for OrganizedRoster {
    fn default() -> Self {
        Self {
            buckets: Position::ALL.iter().map(|pos| (*pos, Vec::new())).collect(),
            skipped: Vec::new(),
        }
    }
}

impl OrganizedRoster {
    /// Build from explicit pools; positions not mentioned start empty.
    pub fn from_pools<I, S>(pools: I) -> Self
    where
        I: IntoIterator<Item = (Position, Vec<S>)>,
        S: Into<String>,
    {
        let mut organized = Self::default();
        for (position, players) in pools {
            if position.is_known() {
                organized
                    .buckets
                    .entry(position)
                    .or_default()
                    .extend(players.into_iter().map(Into::into));
            }
        }
        organized
    }

    pub fn players(&self, position: Position) -> &[String] {
        self.buckets
            .get(&position)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn buckets(&self) -> &BTreeMap<Position, Vec<String>> {
        &self.buckets
    }

    /// Entries dropped while organizing.
    pub fn skipped(&self) -> &[SkippedEntry] {
        &self.skipped
    }

    pub fn player_count(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

/// Bucket roster entries by position.
///
/// Entries whose position code is missing or not in the lookup table are not
/// placed in any bucket; they are recorded in [`OrganizedRoster::skipped`].
pub fn organize_by_position(entries: &[RosterEntry]) -> OrganizedRoster {
    let mut organized = OrganizedRoster::default();

    for entry in entries {
        let position = entry.position();
        let player = entry.player_name();

        if position.is_known() {
            organized.buckets.entry(position).or_default().push(player);
        } else {
            warn!(
                "Skipping {} with unmapped position id {:?}",
                player,
                entry.position_id()
            );
            organized.skipped.push(SkippedEntry {
                player,
                position_id: entry.position_id(),
            });
        }
    }

    organized
}

/// One (slot label, player) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineupSlot {
    pub label: String,
    pub player: String,
}

impl LineupSlot {
    pub fn new(label: impl Into<String>, player: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            player: player.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    pub starters: Vec<LineupSlot>,
    pub bench: Vec<LineupSlot>,
}

/// Greedy starter/bench assignment over an organized roster.
///
/// Every organized player ends up in exactly one of `starters` or `bench`.
/// Slots that cannot be filled are left empty.
pub fn assign_lineup(organized: &OrganizedRoster, template: &RosterTemplate) -> Lineup {
    let mut available: BTreeMap<Position, VecDeque<String>> = organized
        .buckets
        .iter()
        .map(|(pos, players)| (*pos, players.iter().cloned().collect()))
        .collect();
    let mut lineup = Lineup::default();

    for requirement in &template.starters {
        for _ in 0..requirement.count {
            let source = match requirement.slot {
                RosterSlot::Position(position) => Some(position),
                RosterSlot::Flex => RosterSlot::FLEX_ELIGIBLE
                    .iter()
                    .copied()
                    .find(|pos| available.get(pos).is_some_and(|pool| !pool.is_empty())),
            };

            let Some(player) = source
                .and_then(|pos| available.get_mut(&pos))
                .and_then(VecDeque::pop_front)
            else {
                break;
            };

            lineup
                .starters
                .push(LineupSlot::new(requirement.slot.to_string(), player));
        }
    }

    for (position, players) in available {
        for player in players {
            lineup.bench.push(LineupSlot::new(position.to_string(), player));
        }
    }

    lineup
}

/// Per-team "Starting Lineup" / "Bench" listing for every team in the snapshot.
pub fn render_roster_report(
    snapshot: &LeagueSnapshot,
    directory: &TeamDirectory,
    template: &RosterTemplate,
) -> String {
    let mut out = String::from("Roster Information:\n");

    for team in snapshot.teams() {
        let (name, owner) = team
            .id
            .and_then(|id| directory.get(&id))
            .map(|record| (record.name.as_str(), record.owner_name.as_str()))
            .unwrap_or(("Unknown Team", UNKNOWN_OWNER));
        let _ = writeln!(out, "\n{} ({}):", name, owner);

        let Some(roster) = team.roster.as_ref() else {
            let _ = writeln!(out, "  No roster data");
            continue;
        };

        let entries = roster.player_entries();
        let organized = organize_by_position(&entries);
        let lineup = assign_lineup(&organized, template);

        let _ = writeln!(out, "\n  Starting Lineup:");
        for slot in &lineup.starters {
            let _ = writeln!(out, "    {:<5} - {}", slot.label, slot.player);
        }

        let _ = writeln!(out, "\n  Bench ({}/{}):", lineup.bench.len(), template.bench_spots);
        for slot in &lineup.bench {
            let _ = writeln!(out, "    {:<5} - {}", slot.label, slot.player);
        }

        let _ = writeln!(out, "\n  Total roster size: {}", roster.entries.len());
        if !organized.skipped().is_empty() {
            let names: Vec<&str> = organized
                .skipped()
                .iter()
                .map(|s| s.player.as_str())
                .collect();
            let _ = writeln!(
                out,
                "  Skipped (unmapped position): {} ({})",
                names.len(),
                names.join(", ")
            );
        }
    }

    out
}
