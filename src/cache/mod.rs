//! DAG cache file identity and preparation
//!
//! A cache file is named after the format revision and the first 8 bytes of
//! the epoch's seed hash, and starts with a header recording the full seed.
//! Preparing a file decides whether an earlier run left a payload that can be
//! reused or whether the generator has to start over.
//!
//! # Outcomes
//!
//! | Outcome | Meaning | Caller action |
//! |---------|---------|---------------|
//! | Match | Header names the requested seed | Read payload |
//! | Mismatch | Missing, stale or corrupt file | Regenerate into handle |
//! | Fail | Directory or I/O failure | Abort |

pub mod header;
pub mod naming;
pub mod prepare;
pub mod seed;

pub use header::{CacheHeader, HeaderRead, DAG_MAGIC, HEADER_SIZE};
pub use naming::{create_full_path, mutable_name, CacheFileName, MAX_NAME_SIZE};
pub use prepare::{prepare, CachePreparer, Preparation, PrepareOutcome};
pub use seed::{Revision, SeedHash, DEFAULT_REVISION, SEED_HASH_SIZE};
