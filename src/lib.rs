//! RFFL Codex Library
//!
//! Reads an ESPN fantasy football league through the v3 league endpoint and
//! turns the snapshot into human-readable reports, plus a small on-disk
//! archive of per-season artifacts.
//!
//! ## Features
//!
//! - **League Fetch**: One authenticated request carrying every league view
//! - **Team Directory**: Team names, owners, records and standings
//! - **Lineups**: Position buckets and a greedy starter/bench assignment
//! - **Matchups**: The season schedule grouped by week with played scores
//! - **Season Store**: Tables as CSV and nested documents as JSON, by season and category
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rffl_codex::{Config, EspnClient, LeagueFetch};
//!
//! # async fn example() -> rffl_codex::Result<()> {
//! let config = Config::from_env()?;
//! let client = EspnClient::new(&config)?;
//!
//! if let LeagueFetch::Loaded(snapshot) = client
//!     .fetch_league(config.league_id, config.season)
//!     .await?
//! {
//!     let directory = rffl_codex::league::build_team_directory(&snapshot);
//!     println!("{} teams", directory.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Credentials and league coordinates come from the environment:
//! ```bash
//! export ESPN_SWID='{...}'
//! export ESPN_S2='...'
//! export RFFL_LEAGUE_ID=323196
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod espn;
pub mod league;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{LeagueId, Position, RosterSlot, Season, TeamId, Week};
pub use config::Config;
pub use error::{CodexError, Result};
pub use espn::http::{EspnClient, LeagueFetch};
pub use espn::types::LeagueSnapshot;
pub use storage::{Category, SeasonStore, SnapshotData, Table};
