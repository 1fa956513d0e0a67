//! dagcache - proof-of-work DAG cache files
//!
//! Derives the on-disk name of a DAG cache file from the format revision and
//! the epoch seed hash, and prepares that file for reuse or regeneration.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;

pub use cache::{prepare, CachePreparer, Preparation, PrepareOutcome, Revision, SeedHash};
pub use error::{DagError, DagResult};
