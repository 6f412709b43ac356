//! `list` and `show` commands over the season data store

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::{
    config::Config,
    storage::{SeasonStore, SnapshotData, Table},
    Result,
};

/// Column-aligned text rendering of a table.
pub fn render_table(table: &Table) -> String {
    let widths = table.column_widths();
    let mut out = String::new();

    let mut push_row = |cells: &[String]| {
        let line = cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| {
                let width = widths.get(idx).copied().unwrap_or(0);
                format!("{:<width$}", cell, width = width)
            })
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "{}", line.trim_end());
    };

    push_row(&table.headers);
    if !table.headers.is_empty() {
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_row(&rule);
    }
    for row in &table.rows {
        push_row(row);
    }

    out
}

pub fn render_listing(listing: &BTreeMap<String, Vec<String>>) -> String {
    if listing.is_empty() {
        return "No stored data\n".to_string();
    }

    let mut out = String::new();
    for (category, names) in listing {
        let _ = writeln!(out, "{} ({}):", category, names.len());
        for name in names {
            let _ = writeln!(out, "  {}", name);
        }
    }
    out
}

/// Handle the `list` command
pub fn handle_list(config: &Config, category: Option<&str>) -> Result<()> {
    let store = SeasonStore::from_config(config);
    let listing = store.list(config.season, category)?;

    println!(
        "Stored data for season {} in {}:",
        config.season,
        store.root().display()
    );
    print!("{}", render_listing(&listing));
    Ok(())
}

/// Handle the `show` command
pub fn handle_show(config: &Config, category: &str, name: &str, as_table: bool) -> Result<()> {
    let store = SeasonStore::from_config(config);

    match store.load(config.season, category, name, as_table)? {
        SnapshotData::Table(table) => print!("{}", render_table(&table)),
        SnapshotData::Nested(value) => println!("{}", serde_json::to_string_pretty(&value)?),
    }
    Ok(())
}
