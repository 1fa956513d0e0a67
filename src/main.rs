//! dagcache - DAG cache file manager
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use dagcache::cli::args::{ConfigAction, ConfigArgs};
use dagcache::cli::{Cli, Commands};
use dagcache::config::{Config, ConfigManager, LogFormat};
use dagcache::error::DagResult;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> DagResult<()> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    // Init must work even when the existing file no longer parses
    let config = match cli.command {
        Commands::Config(ConfigArgs {
            action: Some(ConfigAction::Init { .. }),
        }) => Config::default(),
        _ => config_manager.load().await?,
    };

    init_logging(cli.verbose, &config);

    match cli.command {
        Commands::Name(args) => dagcache::cli::commands::name(args, &config).await,
        Commands::Path(args) => dagcache::cli::commands::path(args, &config).await,
        Commands::Prepare(args) => dagcache::cli::commands::prepare(args, &config).await,
        Commands::Inspect(args) => dagcache::cli::commands::inspect(args).await,
        Commands::List(args) => dagcache::cli::commands::list(args, &config).await,
        Commands::Config(args) => dagcache::cli::commands::config(args, &config, cli.config).await,
    }
}

/// 0 = warn, 1 = info, 2+ = debug
fn init_logging(verbose: u8, config: &Config) {
    let filter = match verbose {
        0 => EnvFilter::new("dagcache=warn"),
        1 => EnvFilter::new("dagcache=info"),
        _ => EnvFilter::new("dagcache=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr);

    match config.general.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}
