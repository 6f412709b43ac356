//! League views derived from a fetched snapshot
//!
//! - `directory`: team names, owners, records and standings
//! - `lineup`: roster organization and starter/bench assignment
//! - `matchups`: weekly schedule grouping and rendering

pub mod directory;
pub mod lineup;
pub mod matchups;

pub use directory::{build_team_directory, TeamDirectory, TeamRecord};
pub use lineup::{assign_lineup, organize_by_position, Lineup, OrganizedRoster, RosterTemplate};
pub use matchups::{group_by_week, render_matchups, Matchup};
