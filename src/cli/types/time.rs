//! Time-related types for ESPN Fantasy Football seasons and weeks.

use crate::error::{CodexError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2024)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = CodexError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// Matchup period number. ESPN calls this `matchupPeriodId`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_default_and_parse() {
        assert_eq!(Season::default().as_u16(), 2024);
        assert_eq!("2023".parse::<Season>().unwrap(), Season::new(2023));
        assert!("twenty".parse::<Season>().is_err());
    }

    #[test]
    fn test_week_ordering() {
        let mut weeks = vec![Week::new(10), Week::new(2), Week::new(1)];
        weeks.sort();
        assert_eq!(weeks, vec![Week::new(1), Week::new(2), Week::new(10)]);
        assert_eq!(Week::default(), Week::new(0));
    }
}
