//! Command implementations for the RFFL Codex CLI

pub mod archive;
pub mod league_report;
pub mod snapshot;

use crate::{
    config::Config,
    espn::{
        http::{EspnClient, LeagueFetch},
        types::LeagueSnapshot,
    },
    Result,
};

/// Message shown for a fetch that reached ESPN but produced no league.
pub fn fetch_failure_message(outcome: &LeagueFetch) -> Option<&'static str> {
    match outcome {
        LeagueFetch::Loaded(_) => None,
        LeagueFetch::Unauthorized => {
            Some("Authentication failed. Please check your ESPN_SWID and ESPN_S2 tokens.")
        }
        LeagueFetch::NotFound => Some("League not found. Please verify the League ID and Season."),
        LeagueFetch::Empty => Some("Received empty response from ESPN"),
    }
}

/// Fetch the configured league, reporting auth / not-found / empty outcomes.
///
/// Returns `Ok(None)` for those outcomes; transport errors propagate.
pub async fn fetch_configured_league(config: &Config) -> Result<Option<LeagueSnapshot>> {
    println!(
        "Fetching league information for League ID: {}, Season: {}",
        config.league_id, config.season
    );

    let client = EspnClient::new(config)?;
    let outcome = client.fetch_league(config.league_id, config.season).await?;

    match outcome {
        LeagueFetch::Loaded(snapshot) => Ok(Some(snapshot)),
        other => {
            if let Some(message) = fetch_failure_message(&other) {
                println!("{}", message);
            }
            println!("Failed to retrieve league data");
            Ok(None)
        }
    }
}
