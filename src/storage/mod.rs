//! Storage layer for season snapshots
//!
//! - `models`: categories, tables and the tagged snapshot payload
//! - `season_store`: the year/category/name addressed file store

pub mod models;
pub mod season_store;


pub use models::{Category, SnapshotData, SnapshotFormat, Table};
pub use season_store::SeasonStore;
