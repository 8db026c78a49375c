//! Rendering for list results: aligned text or JSON.

use crate::cli::OutputFormat;
use anyhow::Result;
use chrono::{DateTime, Local};
use serde_json::json;
use zettel_core::SortEntry;

/// Print a result list with its heading and count.
pub fn render(title: &str, entries: &[SortEntry], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => render_table(title, entries),
        OutputFormat::Json => render_json(entries)?,
    }
    Ok(())
}

fn render_table(title: &str, entries: &[SortEntry]) {
    println!("{} [{}]", title, entries.len());
    let width = entries
        .iter()
        .map(|e| e.note.name().len())
        .max()
        .unwrap_or(0);
    for entry in entries {
        println!(
            "  {:<width$}  {}  {}",
            entry.note.name(),
            format_modified(entry),
            entry.note.path().display(),
        );
    }
}

fn render_json(entries: &[SortEntry]) -> Result<()> {
    let items: Vec<_> = entries
        .iter()
        .map(|entry| {
            json!({
                "name": entry.note.name(),
                "path": entry.note.path(),
                "modified": entry.modified.map(|t| DateTime::<Local>::from(t).to_rfc3339()),
            })
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&items)?);
    Ok(())
}

fn format_modified(entry: &SortEntry) -> String {
    match entry.modified {
        Some(time) => DateTime::<Local>::from(time).format("%Y-%m-%d %H:%M").to_string(),
        None => "-".repeat(16),
    }
}
