//! Fantasy football position types and utilities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Player position category.
///
/// Variant order is significant: it is the bucket order used when a roster is
/// organized by position (QB, RB, WR, TE, D/ST, K), which in turn fixes the
/// order in which leftover players are listed on the bench.
///
/// # Examples
///
/// ```rust
/// use rffl_codex::Position;
///
/// assert_eq!(Position::from_espn_id(16), Position::DST);
/// assert_eq!(Position::DST.to_string(), "D/ST");
/// assert_eq!(Position::from_espn_id(99), Position::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    #[serde(rename = "D/ST")]
    DST,
    K,
    Unknown,
}

impl Position {
    /// Every real position, in bucket order.
    pub const ALL: [Position; 6] = [
        Position::QB,
        Position::RB,
        Position::WR,
        Position::TE,
        Position::DST,
        Position::K,
    ];

    /// Map an ESPN `defaultPositionId` to a position.
    ///
    /// Codes outside the league's lookup table (IDP, head coach, punter, ...)
    /// resolve to [`Position::Unknown`] rather than failing.
    pub fn from_espn_id(id: i64) -> Self {
        match id {
            1 => Position::QB,
            2 => Position::RB,
            3 => Position::WR,
            4 => Position::TE,
            5 => Position::K,
            16 => Position::DST,
            _ => Position::Unknown,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Position::Unknown)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::DST => "D/ST",
            Position::K => "K",
            Position::Unknown => "Unknown",
        };
        write!(f, "{}", s)
    }
}

/// A starting lineup slot: either a single position or the FLEX slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RosterSlot {
    Position(Position),
    Flex,
}

impl RosterSlot {
    /// Positions a FLEX slot draws from, in priority order.
    pub const FLEX_ELIGIBLE: [Position; 3] = [Position::RB, Position::WR, Position::TE];
}

impl fmt::Display for RosterSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterSlot::Position(position) => write!(f, "{}", position),
            RosterSlot::Flex => write!(f, "FLEX"),
        }
    }
}
