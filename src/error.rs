//! Error types for the RFFL Codex library and CLI

use std::path::PathBuf;
use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, CodexError>;

#[derive(Error, Debug)]
pub enum CodexError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("ESPN returned status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse number: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("Invalid value {value:?} for {key}")]
    InvalidConfig { key: String, value: String },

    #[error("Invalid storage category {category:?} (expected one of: {allowed})")]
    InvalidCategory { category: String, allowed: String },

    #[error("Invalid snapshot name {name:?}")]
    InvalidSnapshotName { name: String },

    #[error("Invalid table: {reason}")]
    InvalidTable { reason: String },

    #[error("No stored snapshot at {}", path.display())]
    SnapshotNotFound { path: PathBuf },
}
