//! Process-wide configuration.
//!
//! A [`Config`] is built once at startup (environment first, then CLI flags)
//! and passed by reference to every component that needs credentials, league
//! coordinates, the storage root, or the roster template.

use std::path::PathBuf;
use std::str::FromStr;

use crate::{
    error::{CodexError, Result},
    league::lineup::RosterTemplate,
    LeagueId, Season,
};

pub const SWID_ENV_VAR: &str = "ESPN_SWID";
pub const ESPN_S2_ENV_VAR: &str = "ESPN_S2";
pub const LEAGUE_ID_ENV_VAR: &str = "RFFL_LEAGUE_ID";
pub const SEASON_ENV_VAR: &str = "RFFL_SEASON";
pub const BASE_URL_ENV_VAR: &str = "RFFL_BASE_URL";
pub const DATA_DIR_ENV_VAR: &str = "RFFL_DATA_DIR";

/// Seasons endpoint of the ESPN fantasy football v3 API.
pub const DEFAULT_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl/seasons";
pub const DEFAULT_LEAGUE_ID: u32 = 323196;
/// Anonymous SWID; enough for leagues that are publicly viewable.
pub const DEFAULT_SWID: &str = "{00000000-0000-0000-0000-000000000000}";
pub const DEFAULT_ESPN_S2: &str = "";

#[derive(Debug, Clone)]
pub struct Config {
    pub league_id: LeagueId,
    pub season: Season,
    pub swid: String,
    pub espn_s2: String,
    pub base_url: String,
    pub data_dir: PathBuf,
    pub roster_template: RosterTemplate,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            league_id: LeagueId::new(DEFAULT_LEAGUE_ID),
            season: Season::default(),
            swid: DEFAULT_SWID.to_string(),
            espn_s2: DEFAULT_ESPN_S2.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            data_dir: default_data_dir(),
            roster_template: RosterTemplate::standard(),
        }
    }
}

impl Config {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Unset keys fall back to the defaults; set-but-unparseable numeric keys
    /// are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::storage_from_lookup(&lookup)?;

        if let Some(swid) = lookup(SWID_ENV_VAR) {
            config.swid = swid;
        }
        if let Some(s2) = lookup(ESPN_S2_ENV_VAR) {
            config.espn_s2 = s2;
        }
        if let Some(raw) = lookup(LEAGUE_ID_ENV_VAR) {
            config.league_id = parse_setting(LEAGUE_ID_ENV_VAR, &raw)?;
        }
        if let Some(url) = lookup(BASE_URL_ENV_VAR) {
            config.base_url = url.trim_end_matches('/').to_string();
        }

        Ok(config)
    }

    /// Configuration for the archive commands, which never talk to ESPN.
    ///
    /// Only `RFFL_SEASON` and `RFFL_DATA_DIR` are read; league and credential
    /// settings keep their defaults.
    pub fn storage_from_env() -> Result<Self> {
        Self::storage_from_lookup(|key| std::env::var(key).ok())
    }

    pub fn storage_from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(SEASON_ENV_VAR) {
            config.season = parse_setting(SEASON_ENV_VAR, &raw)?;
        }
        if let Some(dir) = lookup(DATA_DIR_ENV_VAR) {
            config.data_dir = PathBuf::from(dir);
        }

        Ok(config)
    }

    /// Apply CLI overrides on top of the environment-derived values.
    pub fn with_overrides(
        mut self,
        league_id: Option<LeagueId>,
        season: Option<Season>,
        data_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(league_id) = league_id {
            self.league_id = league_id;
        }
        if let Some(season) = season {
            self.season = season;
        }
        if let Some(data_dir) = data_dir {
            self.data_dir = data_dir;
        }
        self
    }

    /// The first 30 characters of `espn_s2`, for display.
    pub fn masked_espn_s2(&self) -> String {
        let prefix: String = self.espn_s2.chars().take(30).collect();
        format!("{}...", prefix)
    }
}

fn parse_setting<T: FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.parse().map_err(|_| CodexError::InvalidConfig {
        key: key.to_string(),
        value: raw.to_string(),
    })
}

/// Path: {data_dir}/rffl-codex
pub fn default_data_dir() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".local");
        home.push("share");
        home
    });
    base.join("rffl-codex")
}
