//! Config command - show or initialize configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::DagResult;
use console::style;
use std::path::PathBuf;

/// Execute the config command
pub async fn execute(args: ConfigArgs, config: &Config, config_path: Option<PathBuf>) -> DagResult<()> {
    let manager = match config_path {
        Some(path) => ConfigManager::with_path(path),
        None => ConfigManager::new(),
    };

    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => println!("{}", manager.path().display()),
        Some(ConfigAction::Init { force }) => init_config(&manager, force).await?,
    }

    Ok(())
}

fn show_config(config: &Config) -> DagResult<()> {
    println!("{}", toml::to_string_pretty(config)?);
    println!(
        "{} {}",
        style("# effective cache dir:").dim(),
        config.cache_dir().display()
    );
    Ok(())
}

async fn init_config(manager: &ConfigManager, force: bool) -> DagResult<()> {
    let path = manager.path();

    if path.exists() && !force {
        println!(
            "  {} Config already exists at {} - use --force to overwrite",
            style("[WARN]").yellow(),
            path.display()
        );
        return Ok(());
    }

    manager.save(&Config::default()).await?;
    println!(
        "  {} Configuration initialized ({})",
        style("[OK]").green(),
        path.display()
    );

    Ok(())
}
