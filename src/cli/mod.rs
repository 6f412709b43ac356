//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use types::{LeagueId, Season};

/// League coordinates shared between the fetching commands
#[derive(Debug, Args)]
pub struct LeagueArgs {
    /// League ID (or set `RFFL_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Season year (or set `RFFL_SEASON` env var).
    #[clap(long, short)]
    pub season: Option<Season>,
}

#[derive(Debug, Parser)]
#[clap(name = "rffl-codex", about = "ESPN fantasy football league reports and season archive")]
pub struct Cli {
    /// Emit debug logging on stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Full league report: teams, matchups and rosters
    League {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// Teams with owners and records
    Teams {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// Season schedule grouped by week, with scores for played weeks
    Matchups {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// Each team's suggested starting lineup and bench
    Rosters {
        #[clap(flatten)]
        league: LeagueArgs,
    },

    /// Fetch the league once and store raw and derived artifacts for the season.
    Snapshot {
        #[clap(flatten)]
        league: LeagueArgs,

        /// Storage root (or set `RFFL_DATA_DIR` env var).
        #[clap(long)]
        data_dir: Option<PathBuf>,
    },

    /// List stored artifacts for a season.
    List {
        /// Season year (or set `RFFL_SEASON` env var).
        #[clap(long, short)]
        season: Option<Season>,

        /// Only list this category (raw, processed, teams, standings, matchups, rosters).
        #[clap(long, short)]
        category: Option<String>,

        /// Storage root (or set `RFFL_DATA_DIR` env var).
        #[clap(long)]
        data_dir: Option<PathBuf>,
    },

    /// Print one stored artifact.
    Show {
        /// Season year (or set `RFFL_SEASON` env var).
        #[clap(long, short)]
        season: Option<Season>,

        /// Artifact category.
        #[clap(long, short)]
        category: String,

        /// Artifact name, e.g. `league_323196`.
        #[clap(long, short)]
        name: String,

        /// Load the tabular (CSV) form instead of the nested (JSON) form.
        #[clap(long)]
        table: bool,

        /// Storage root (or set `RFFL_DATA_DIR` env var).
        #[clap(long)]
        data_dir: Option<PathBuf>,
    },
}
