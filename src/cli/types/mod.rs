//! Type-safe wrappers and enums for ESPN Fantasy Football data.

pub mod ids;
pub mod position;
pub mod time;

pub use ids::{LeagueId, TeamId};
pub use position::{Position, RosterSlot};
pub use time::{Season, Week};
