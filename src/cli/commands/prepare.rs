//! Prepare command - create or validate the cache file for a seed

use super::{resolve_dir, resolve_revision};
use crate::cache::{CachePreparer, PrepareOutcome, SeedHash};
use crate::cli::args::{OutputFormat, PrepareArgs};
use crate::config::Config;
use crate::error::{DagError, DagResult};
use console::style;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;

#[derive(Serialize)]
struct PrepareReport {
    outcome: PrepareOutcome,
    path: PathBuf,
    seed: SeedHash,
    revision: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Execute the prepare command
pub async fn execute(args: PrepareArgs, config: &Config) -> DagResult<()> {
    let preparer = CachePreparer::new(resolve_dir(args.dir, config))
        .with_revision(resolve_revision(args.revision, config))
        .force_create(args.force);

    let seed = args.seed;
    let path = preparer.path_for(&seed);
    let revision = preparer.revision().0;

    debug!("Preparing {} for seed {}", path.display(), seed);

    // Blocking filesystem work stays off the runtime threads
    let result = tokio::task::spawn_blocking(move || preparer.prepare(&seed))
        .await
        .map_err(|e| DagError::Internal(format!("prepare task failed: {}", e)))?;

    let mut report = PrepareReport {
        outcome: PrepareOutcome::Fail,
        path,
        seed,
        revision,
        error: None,
    };

    let failure = match result {
        // The handle is closed here; regeneration is up to the DAG generator
        Ok(prepared) => {
            report.outcome = prepared.outcome();
            None
        }
        Err(e) => {
            report.error = Some(e.to_string());
            Some(e)
        }
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Plain => println!("{} {}", report.outcome, report.path.display()),
        OutputFormat::Table => print_report(&report),
    }

    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

fn print_report(report: &PrepareReport) {
    let outcome = match report.outcome {
        PrepareOutcome::Match => style("match (reuse)").green(),
        PrepareOutcome::Mismatch => style("mismatch (regenerate)").yellow(),
        PrepareOutcome::Fail => style("fail").red(),
    };

    println!("{:<10} {}", style("Outcome:").bold(), outcome);
    println!("{:<10} {}", style("Path:").bold(), report.path.display());
    println!("{:<10} {}", style("Seed:").bold(), report.seed);
    println!("{:<10} {}", style("Revision:").bold(), report.revision);
    if let Some(error) = &report.error {
        println!("{:<10} {}", style("Error:").bold(), style(error).red());
    }
}
