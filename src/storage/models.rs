//! Data structures for the season data store

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::CodexError;

/// Storage taxonomy for persisted artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Raw,
    Processed,
    Teams,
    Standings,
    Matchups,
    Rosters,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Raw,
        Category::Processed,
        Category::Teams,
        Category::Standings,
        Category::Matchups,
        Category::Rosters,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Raw => "raw",
            Category::Processed => "processed",
            Category::Teams => "teams",
            Category::Standings => "standings",
            Category::Matchups => "matchups",
            Category::Rosters => "rosters",
        }
    }

    pub fn allowed() -> String {
        Self::ALL
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = CodexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| CodexError::InvalidCategory {
                category: s.to_string(),
                allowed: Self::allowed(),
            })
    }
}

/// On-disk serialization of an artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFormat {
    Csv,
    Json,
}

impl SnapshotFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            SnapshotFormat::Csv => "csv",
            SnapshotFormat::Json => "json",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "csv" => Some(SnapshotFormat::Csv),
            "json" => Some(SnapshotFormat::Json),
            _ => None,
        }
    }
}

/// A header row plus string-celled rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Column widths for aligned console output.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (idx, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(idx) {
                    Some(width) => *width = (*width).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths
    }
}

/// Data handed to the store, tagged with its shape by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotData {
    Table(Table),
    Nested(Value),
}

impl SnapshotData {
    pub fn format(&self) -> SnapshotFormat {
        match self {
            SnapshotData::Table(_) => SnapshotFormat::Csv,
            SnapshotData::Nested(_) => SnapshotFormat::Json,
        }
    }

    pub fn as_table(&self) -> Option<&Table> {
        match self {
            SnapshotData::Table(table) => Some(table),
            SnapshotData::Nested(_) => None,
        }
    }

    pub fn as_nested(&self) -> Option<&Value> {
        match self {
            SnapshotData::Nested(value) => Some(value),
            SnapshotData::Table(_) => None,
        }
    }
}

impl From<Table> for SnapshotData {
    fn from(table: Table) -> Self {
        SnapshotData::Table(table)
    }
}

impl From<Value> for SnapshotData {
    fn from(value: Value) -> Self {
        SnapshotData::Nested(value)
    }
}
