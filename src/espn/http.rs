//! HTTP client for the ESPN fantasy football league endpoint.

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, COOKIE, ORIGIN, REFERER, USER_AGENT},
    Client, StatusCode,
};
use serde_json::Value;
use tracing::{debug, error, warn};

use crate::{
    config::Config,
    error::{CodexError, Result},
    espn::types::LeagueSnapshot,
    LeagueId, Season,
};


/// `view` selectors requested on every league fetch.
pub const LEAGUE_VIEWS: [&str; 8] = [
    "mTeam",
    "mRoster",
    "mMatchup",
    "mSettings",
    "mStandings",
    "mStatus",
    "mScoreboard",
    "mSchedule",
];

pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const FANTASY_ORIGIN: &str = "https://fantasy.espn.com";

/// Outcome of a league fetch that reached ESPN and got an answer.
///
/// Credential and league-id problems are expected outcomes the caller reports
/// to the user; transport and decoding failures are returned as errors.
#[derive(Debug, Clone, PartialEq)]
pub enum LeagueFetch {
    Loaded(LeagueSnapshot),
    /// HTTP 401: SWID / espn_s2 are wrong or expired.
    Unauthorized,
    /// HTTP 404: no such league for that season.
    NotFound,
    /// 2xx with an empty JSON document.
    Empty,
}

/// Authenticated client for `{base_url}/{season}/segments/0/leagues/{league_id}`.
pub struct EspnClient {
    http: Client,
    base_url: String,
    swid: String,
    espn_s2: String,
}

impl EspnClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder().build()?;
        Ok(Self::with_client(http, config))
    }

    /// Use a preconfigured [`reqwest::Client`] (proxies, timeouts, ...).
    pub fn with_client(http: Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            swid: config.swid.clone(),
            espn_s2: config.espn_s2.clone(),
        }
    }

    pub fn league_url(&self, league_id: LeagueId, season: Season) -> String {
        format!(
            "{}/{}/segments/0/leagues/{}",
            self.base_url, season, league_id
        )
    }

    /// Browser-like header set plus the two auth cookies.
    pub fn headers(&self, league_id: LeagueId) -> Result<HeaderMap> {
        let mut h = HeaderMap::new();
        h.insert(ACCEPT, HeaderValue::from_static("application/json"));
        h.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
        h.insert(ORIGIN, HeaderValue::from_static(FANTASY_ORIGIN));
        let referer = format!("{}/football/league?leagueId={}", FANTASY_ORIGIN, league_id);
        h.insert(REFERER, HeaderValue::from_str(&referer)?);
        let cookie = format!("SWID={}; espn_s2={}", self.swid, self.espn_s2);
        h.insert(COOKIE, HeaderValue::from_str(&cookie)?);
        Ok(h)
    }

    /// Fetch the full league payload for one season.
    ///
    /// Every call is a fresh request; nothing is cached or retried.
    pub async fn fetch_league(&self, league_id: LeagueId, season: Season) -> Result<LeagueFetch> {
        let url = self.league_url(league_id, season);
        let params: Vec<(&str, &str)> = LEAGUE_VIEWS.iter().map(|view| ("view", *view)).collect();
        let headers = self.headers(league_id)?;

        debug!("GET {} views={:?}", url, LEAGUE_VIEWS);

        let response = self
            .http
            .get(&url)
            .headers(headers)
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                error!("Error fetching league data from {}: {}", url, e);
                CodexError::from(e)
            })?;

        match response.status() {
            StatusCode::UNAUTHORIZED => {
                warn!("ESPN rejected credentials for league {}", league_id);
                return Ok(LeagueFetch::Unauthorized);
            }
            StatusCode::NOT_FOUND => {
                warn!("League {} not found for season {}", league_id, season);
                return Ok(LeagueFetch::NotFound);
            }
            status if !status.is_success() => {
                error!("ESPN returned {} for {}", status, url);
                return Err(CodexError::UnexpectedStatus { url, status });
            }
            _ => {}
        }

        let body = response.bytes().await.map_err(|e| {
            error!("Error reading league response body: {}", e);
            CodexError::from(e)
        })?;

        if body.iter().all(u8::is_ascii_whitespace) {
            warn!("Received empty response from ESPN");
            return Ok(LeagueFetch::Empty);
        }

        let value: Value = serde_json::from_slice(&body).map_err(|e| {
            error!("Error decoding league JSON: {}", e);
            CodexError::from(e)
        })?;

        if is_empty_document(&value) {
            warn!("Received empty response from ESPN");
            return Ok(LeagueFetch::Empty);
        }

        Ok(LeagueFetch::Loaded(LeagueSnapshot::new(value)))
    }
}

fn is_empty_document(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}
