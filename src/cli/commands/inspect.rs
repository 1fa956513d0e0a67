//! Inspect command - read the header of a cache file

use crate::cache::{CacheFileName, CacheHeader, HeaderRead, SeedHash, HEADER_SIZE};
use crate::cli::args::{InspectArgs, OutputFormat};
use crate::error::{DagError, DagResult};
use console::style;
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Header status of a cache file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderStatus {
    Valid,
    BadMagic,
    Truncated,
}

#[derive(Debug, Serialize)]
pub struct InspectReport {
    pub path: PathBuf,
    pub revision: u32,
    pub header: HeaderStatus,
    /// Seed recorded in the header, if it is valid
    pub seed: Option<SeedHash>,
    /// Whether the recorded seed agrees with the file name
    pub name_matches: Option<bool>,
    pub payload_bytes: u64,
}

/// Execute the inspect command
pub async fn execute(args: InspectArgs) -> DagResult<()> {
    let path = args.file;
    let report = tokio::task::spawn_blocking(move || inspect_file(&path))
        .await
        .map_err(|e| DagError::Internal(format!("inspect task failed: {}", e)))??;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Plain | OutputFormat::Table => print_report(&report),
    }

    Ok(())
}

/// Read and classify the header of a cache file
pub fn inspect_file(path: &Path) -> DagResult<InspectReport> {
    let (revision, prefix) = path
        .file_name()
        .and_then(|n| n.to_str())
        .and_then(CacheFileName::parse)
        .ok_or_else(|| DagError::NotCacheFile(path.to_path_buf()))?;

    let mut file = File::open(path).map_err(|e| DagError::CacheOpen {
        path: path.to_path_buf(),
        source: e,
    })?;
    let len = file
        .metadata()
        .map_err(|e| DagError::io(format!("reading metadata of {}", path.display()), e))?
        .len();

    let found = CacheHeader::read_from(&mut file).map_err(|e| DagError::HeaderRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let (header, seed) = match found {
        HeaderRead::Valid(h) => (HeaderStatus::Valid, Some(h.seed)),
        HeaderRead::BadMagic => (HeaderStatus::BadMagic, None),
        HeaderRead::Truncated => (HeaderStatus::Truncated, None),
    };

    Ok(InspectReport {
        path: path.to_path_buf(),
        revision: revision.0,
        header,
        seed,
        name_matches: seed.map(|s| s.prefix() == prefix),
        payload_bytes: len.saturating_sub(HEADER_SIZE as u64),
    })
}

fn print_report(report: &InspectReport) {
    let header = match report.header {
        HeaderStatus::Valid => style("valid").green(),
        HeaderStatus::BadMagic => style("bad magic").red(),
        HeaderStatus::Truncated => style("truncated").yellow(),
    };

    println!("{:<10} {}", style("File:").bold(), report.path.display());
    println!("{:<10} {}", style("Revision:").bold(), report.revision);
    println!("{:<10} {}", style("Header:").bold(), header);
    if let Some(seed) = report.seed {
        println!("{:<10} {}", style("Seed:").bold(), seed);
    }
    if report.name_matches == Some(false) {
        println!(
            "{:<10} {}",
            style("Warning:").bold(),
            style("seed does not match file name").red()
        );
    }
    println!("{:<10} {} bytes", style("Payload:").bold(), report.payload_bytes);
}
