//! CLI command implementations

pub mod config;
pub mod inspect;
pub mod list;
pub mod name;
pub mod prepare;

pub use config::execute as config;
pub use inspect::execute as inspect;
pub use list::execute as list;
pub use name::{execute_name as name, execute_path as path};
pub use prepare::execute as prepare;

use crate::cache::Revision;
use crate::config::Config;
use std::path::PathBuf;

/// Cache directory from the command line, else from config
fn resolve_dir(dir: Option<PathBuf>, config: &Config) -> PathBuf {
    dir.unwrap_or_else(|| config.cache_dir())
}

/// Revision from the command line, else from config
fn resolve_revision(revision: Option<u32>, config: &Config) -> Revision {
    revision.map(Revision).unwrap_or(config.cache.revision)
}
