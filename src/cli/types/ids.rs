//! ID types for ESPN fantasy leagues and teams.

use crate::error::{CodexError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for ESPN Fantasy Football League IDs.
///
/// # Examples
///
/// ```rust
/// use rffl_codex::LeagueId;
///
/// let league_id = LeagueId::new(323196);
/// assert_eq!(league_id.as_u32(), 323196);
/// assert_eq!(league_id.to_string(), "323196");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeagueId(pub u32);

impl LeagueId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for LeagueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for LeagueId {
    type Err = CodexError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Fantasy team identifier within a league (the `id` of a `teams[]` entry).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TeamId(pub u32);

impl TeamId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_id_parse() {
        assert_eq!("323196".parse::<LeagueId>().unwrap(), LeagueId::new(323196));
        assert_eq!(" 42 ".parse::<LeagueId>().unwrap().as_u32(), 42);
        assert!("abc".parse::<LeagueId>().is_err());
        assert!("-1".parse::<LeagueId>().is_err());
    }

    #[test]
    fn test_team_id_is_transparent_in_json() {
        let id: TeamId = serde_json::from_str("7").unwrap();
        assert_eq!(id, TeamId::new(7));
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
    }
}
