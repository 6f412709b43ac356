//! Filesystem-backed store addressed by (season, category, name)
//!
//! Layout: `{root}/{season}/{category}/{name}.{csv|json}`. Storing to the same
//! triple overwrites the previous artifact.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use super::models::{Category, SnapshotData, SnapshotFormat, Table};
use crate::{
    config::Config,
    error::{CodexError, Result},
    Season,
};

#[derive(Debug, Clone)]
pub struct SeasonStore {
    root: PathBuf,
}

impl SeasonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.data_dir.clone())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn artifact_path(
        &self,
        season: Season,
        category: Category,
        name: &str,
        format: SnapshotFormat,
    ) -> PathBuf {
        self.category_dir(season, category)
            .join(format!("{}.{}", name, format.extension()))
    }

    fn category_dir(&self, season: Season, category: Category) -> PathBuf {
        self.root
            .join(season.to_string())
            .join(category.as_str())
    }

    /// Persist `data` and return the path written.
    pub fn store(
        &self,
        data: &SnapshotData,
        season: Season,
        category: &str,
        name: &str,
    ) -> Result<PathBuf> {
        let category: Category = category.parse()?;
        validate_name(name)?;

        let path = self.artifact_path(season, category, name, data.format());
        let contents = match data {
            SnapshotData::Table(table) => table_to_csv(table)?,
            SnapshotData::Nested(value) => serde_json::to_string_pretty(value)?,
        };

        write_string(&path, &contents)?;
        debug!("Stored {}", path.display());
        Ok(path)
    }

    /// Load an artifact; `as_table` selects the CSV artifact, otherwise JSON.
    pub fn load(
        &self,
        season: Season,
        category: &str,
        name: &str,
        as_table: bool,
    ) -> Result<SnapshotData> {
        let category: Category = category.parse()?;
        validate_name(name)?;

        let format = if as_table {
            SnapshotFormat::Csv
        } else {
            SnapshotFormat::Json
        };
        let path = self.artifact_path(season, category, name, format);

        let contents = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CodexError::SnapshotNotFound { path: path.clone() },
            _ => CodexError::Io(e),
        })?;

        match format {
            SnapshotFormat::Csv => Ok(SnapshotData::Table(table_from_csv(&contents)?)),
            SnapshotFormat::Json => Ok(SnapshotData::Nested(serde_json::from_str::<Value>(
                &contents,
            )?)),
        }
    }

    /// Stored artifact names per category for one season.
    ///
    /// With a category, that key is always present (possibly empty). Without
    /// one, only categories holding at least one artifact are listed.
    pub fn list(
        &self,
        season: Season,
        category: Option<&str>,
    ) -> Result<BTreeMap<String, Vec<String>>> {
        let scoped = category.is_some();
        let categories = match category {
            Some(raw) => vec![raw.parse::<Category>()?],
            None => Category::ALL.to_vec(),
        };

        let mut listing = BTreeMap::new();
        for category in categories {
            let names = self.names_in(season, category)?;
            if scoped || !names.is_empty() {
                listing.insert(category.as_str().to_string(), names);
            }
        }
        Ok(listing)
    }

    fn names_in(&self, season: Season, category: Category) -> Result<Vec<String>> {
        let dir = self.category_dir(season, category);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = BTreeSet::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let known_format = path
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(SnapshotFormat::from_extension)
                .is_some();
            if let (true, Some(stem)) = (known_format, path.file_stem().and_then(|s| s.to_str())) {
                names.insert(stem.to_string());
            }
        }
        Ok(names.into_iter().collect())
    }
}

/// Names become file stems, so they must stay inside their category directory.
fn validate_name(name: &str) -> Result<()> {
    let invalid = name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if invalid {
        return Err(CodexError::InvalidSnapshotName {
            name: name.to_string(),
        });
    }
    Ok(())
}

fn table_to_csv(table: &Table) -> Result<String> {
    if table.headers.is_empty() && !table.rows.is_empty() {
        return Err(CodexError::InvalidTable {
            reason: "rows without a header row".to_string(),
        });
    }
    if let Some((idx, row)) = table
        .rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != table.headers.len())
    {
        return Err(CodexError::InvalidTable {
            reason: format!(
                "row {} has {} cells, expected {}",
                idx,
                row.len(),
                table.headers.len()
            ),
        });
    }
    if table.headers.is_empty() {
        return Ok(String::new());
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    String::from_utf8(bytes).map_err(|e| CodexError::InvalidTable {
        reason: e.to_string(),
    })
}

fn table_from_csv(contents: &str) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(contents.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(str::to_string).collect());
    }

    Ok(Table::new(headers, rows))
}

/// Write a string to file, creating parent directories
fn write_string(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}
