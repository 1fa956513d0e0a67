//! Name and path commands - show where a seed's cache file lives

use super::{resolve_dir, resolve_revision};
use crate::cache::{create_full_path, mutable_name};
use crate::cli::args::{NameArgs, PathArgs};
use crate::config::Config;
use crate::error::DagResult;

/// Execute the name command
pub async fn execute_name(args: NameArgs, config: &Config) -> DagResult<()> {
    let revision = resolve_revision(args.revision, config);
    println!("{}", mutable_name(revision, &args.seed));
    Ok(())
}

/// Execute the path command
pub async fn execute_path(args: PathArgs, config: &Config) -> DagResult<()> {
    let revision = resolve_revision(args.revision, config);
    let dir = resolve_dir(args.dir, config);
    let name = mutable_name(revision, &args.seed);
    println!("{}", create_full_path(&dir, &name).display());
    Ok(())
}
