//! CLI argument definitions using clap derive

use crate::cache::SeedHash;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// dagcache - proof-of-work DAG cache file manager
///
/// Names, locates and validates on-disk DAG cache files keyed by
/// epoch seed hash.
#[derive(Parser, Debug)]
#[command(name = "dagcache")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "DAGCACHE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the cache file name for a seed
    Name(NameArgs),

    /// Print the full cache file path for a seed
    Path(PathArgs),

    /// Prepare the cache file for a seed and report whether it can be reused
    Prepare(PrepareArgs),

    /// Read the header of a cache file
    Inspect(InspectArgs),

    /// List cache files in the cache directory
    List(ListArgs),

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the name command
#[derive(Parser, Debug)]
pub struct NameArgs {
    /// Seed hash (64 hex characters, optional 0x prefix)
    #[arg(short, long, value_parser = parse_seed)]
    pub seed: SeedHash,

    /// Format revision (default: from config)
    #[arg(short, long)]
    pub revision: Option<u32>,
}

/// Arguments for the path command
#[derive(Parser, Debug)]
pub struct PathArgs {
    /// Seed hash (64 hex characters, optional 0x prefix)
    #[arg(short, long, value_parser = parse_seed)]
    pub seed: SeedHash,

    /// Cache directory (default: from config)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Format revision (default: from config)
    #[arg(short, long)]
    pub revision: Option<u32>,
}

/// Arguments for the prepare command
#[derive(Parser, Debug)]
pub struct PrepareArgs {
    /// Seed hash (64 hex characters, optional 0x prefix)
    #[arg(short, long, value_parser = parse_seed)]
    pub seed: SeedHash,

    /// Cache directory (default: from config)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Format revision (default: from config)
    #[arg(short, long)]
    pub revision: Option<u32>,

    /// Truncate the file even if it matches
    #[arg(long)]
    pub force: bool,

    /// Output format
    #[arg(short, long, default_value = "plain")]
    pub format: OutputFormat,
}

/// Arguments for the inspect command
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Cache file to inspect
    pub file: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "plain")]
    pub format: OutputFormat,
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Cache directory (default: from config)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
}

fn parse_seed(s: &str) -> Result<SeedHash, String> {
    SeedHash::from_hex(s).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &str = "0x290decd9548b62a8d60345a988386fc84ba6bc95484008f6362f93160ef3e563";

    #[test]
    fn cli_parses_name() {
        let cli = Cli::parse_from(["dagcache", "name", "--seed", SEED, "-r", "22"]);
        match cli.command {
            Commands::Name(args) => {
                assert_eq!(args.seed.as_bytes()[0], 0x29);
                assert_eq!(args.revision, Some(22));
            }
            _ => panic!("expected Name command"),
        }
    }

    #[test]
    fn cli_rejects_bad_seed() {
        let result = Cli::try_parse_from(["dagcache", "name", "--seed", "beef"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parses_prepare() {
        let cli = Cli::parse_from([
            "dagcache", "prepare", "--seed", SEED, "--dir", "/tmp/dag", "--force", "-f", "json",
        ]);
        match cli.command {
            Commands::Prepare(args) => {
                assert!(args.force);
                assert_eq!(args.dir, Some(PathBuf::from("/tmp/dag")));
                assert!(matches!(args.format, OutputFormat::Json));
            }
            _ => panic!("expected Prepare command"),
        }
    }

    #[test]
    fn cli_parses_list_defaults() {
        let cli = Cli::parse_from(["dagcache", "list"]);
        match cli.command {
            Commands::List(args) => {
                assert!(args.dir.is_none());
                assert!(matches!(args.format, OutputFormat::Table));
            }
            _ => panic!("expected List command"),
        }
    }

    #[test]
    fn cli_parses_config_init() {
        let cli = Cli::parse_from(["dagcache", "config", "init", "--force"]);
        match cli.command {
            Commands::Config(args) => {
                assert!(matches!(args.action, Some(ConfigAction::Init { force: true })));
            }
            _ => panic!("expected Config command"),
        }
    }

    #[test]
    fn cli_verbose_levels() {
        let cli = Cli::parse_from(["dagcache", "list"]);
        assert_eq!(cli.verbose, 0);

        let cli = Cli::parse_from(["dagcache", "-v", "list"]);
        assert_eq!(cli.verbose, 1);

        let cli = Cli::parse_from(["dagcache", "-vv", "list"]);
        assert_eq!(cli.verbose, 2);
    }
}
