//! List command - show cache files in the cache directory

use super::resolve_dir;
use crate::cache::{CacheFileName, Revision};
use crate::cli::args::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::{DagError, DagResult};
use chrono::{DateTime, Utc};
use console::style;
use serde::Serialize;
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// A cache file found in the cache directory
#[derive(Debug, Clone, Serialize)]
pub struct CacheEntry {
    pub name: String,
    pub revision: u32,
    /// Seed prefix as it appears in the name
    pub prefix: String,
    pub size_bytes: u64,
    pub modified: Option<DateTime<Utc>>,
    /// Written under an older or newer revision than the configured one
    pub stale: bool,
}

/// Execute the list command
pub async fn execute(args: ListArgs, config: &Config) -> DagResult<()> {
    let dir = resolve_dir(args.dir, config);
    let entries = scan_cache_dir(&dir, config.cache.revision).await?;

    if entries.is_empty() {
        match args.format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Plain => {}
            OutputFormat::Table => println!("No cache files in {}", dir.display()),
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Table => print_table(&entries),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
        OutputFormat::Plain => {
            for entry in &entries {
                println!("{}", entry.name);
            }
        }
    }

    Ok(())
}

/// Collect cache files in `dir`, newest revision first
pub async fn scan_cache_dir(dir: &Path, current: Revision) -> DagResult<Vec<CacheEntry>> {
    if !dir.exists() {
        return Ok(vec![]);
    }

    let mut found = vec![];
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| DagError::io(format!("reading cache directory {}", dir.display()), e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| DagError::io("reading cache directory entry", e))?
    {
        let name = entry.file_name().to_string_lossy().into_owned();
        let Some((revision, prefix)) = CacheFileName::parse(&name) else {
            debug!("Skipping {}", name);
            continue;
        };

        let meta = match entry.metadata().await {
            Ok(meta) if meta.is_file() => meta,
            _ => continue,
        };

        found.push(CacheEntry {
            name,
            revision: revision.0,
            prefix: format!("{:x}", prefix),
            size_bytes: meta.len(),
            modified: meta.modified().ok().map(DateTime::<Utc>::from),
            stale: revision != current,
        });
    }

    found.sort_by(|a, b| b.revision.cmp(&a.revision).then_with(|| a.name.cmp(&b.name)));
    Ok(found)
}

/// Human-readable size, scaled by 1024 up to TB
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", size, UNITS[unit])
}

fn print_table(entries: &[CacheEntry]) {
    println!(
        "{:<30} {:<10} {:<10} {:<20}",
        style("FILE").bold(),
        style("SIZE").bold(),
        style("STATE").bold(),
        style("MODIFIED").bold()
    );
    println!("{}", "-".repeat(70));

    for entry in entries {
        let state = if entry.stale {
            style("stale").dim()
        } else {
            style("current").green()
        };
        let modified = entry
            .modified
            .map(|m| m.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());

        println!(
            "{:<30} {:<10} {:<10} {:<20}",
            entry.name,
            format_bytes(entry.size_bytes),
            state,
            modified
        );
    }

    println!();
    println!("Total: {} cache file(s)", entries.len());
}
