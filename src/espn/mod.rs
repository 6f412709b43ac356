//! ESPN fantasy API access
//!
//! - `http`: the league client and its fetch outcomes
//! - `types`: the league snapshot and the typed views read from it

pub mod http;
pub mod types;
