//! Cache file preparation
//!
//! Creates the cache directory, locates the file for a seed and decides
//! whether its contents can be reused. The returned handle is ready for
//! whichever step comes next:
//!
//! | Outcome | Mode | Position |
//! |---------|------|----------|
//! | Match | read | just past the header |
//! | Mismatch | read + write, truncated | 0 |
//!
//! Failures come back as `Err` and never carry a handle.

use super::header::{CacheHeader, HeaderRead};
use super::naming::{create_full_path, mutable_name};
use super::seed::{Revision, SeedHash};
use crate::error::{DagError, DagResult};
use serde::Serialize;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Classification of a prepared cache file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PrepareOutcome {
    /// Header matched the requested seed
    Match,
    /// Absent, stale or corrupt; must be regenerated
    Mismatch,
    /// I/O failure, nothing usable
    Fail,
}

impl fmt::Display for PrepareOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Match => write!(f, "match"),
            Self::Mismatch => write!(f, "mismatch"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

/// A cache file ready for reuse or rewrite
#[derive(Debug)]
pub enum Preparation {
    /// Payload can be read from the handle as-is
    Match(File),
    /// Empty handle; the generator writes header and payload into it
    Mismatch(File),
}

impl Preparation {
    /// Outcome without the handle
    pub fn outcome(&self) -> PrepareOutcome {
        match self {
            Self::Match(_) => PrepareOutcome::Match,
            Self::Mismatch(_) => PrepareOutcome::Mismatch,
        }
    }

    /// Whether the existing payload can be reused
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match(_))
    }

    /// Take ownership of the file handle
    pub fn into_file(self) -> File {
        match self {
            Self::Match(file) | Self::Mismatch(file) => file,
        }
    }
}

/// Prepares cache files inside one directory
#[derive(Debug, Clone)]
pub struct CachePreparer {
    dir: PathBuf,
    revision: Revision,
    force_create: bool,
}

impl CachePreparer {
    /// Create a preparer for `dir` using the default revision
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            revision: Revision::default(),
            force_create: false,
        }
    }

    /// Use a specific format revision
    pub fn with_revision(mut self, revision: Revision) -> Self {
        self.revision = revision;
        self
    }

    /// Always discard an existing file, even when it matches
    pub fn force_create(mut self, force: bool) -> Self {
        self.force_create = force;
        self
    }

    /// Format revision used for naming
    pub fn revision(&self) -> Revision {
        self.revision
    }

    /// Full path of the cache file for `seed`
    pub fn path_for(&self, seed: &SeedHash) -> PathBuf {
        create_full_path(&self.dir, &mutable_name(self.revision, seed))
    }

    /// Prepare the cache file for `seed`
    pub fn prepare(&self, seed: &SeedHash) -> DagResult<Preparation> {
        fs::create_dir_all(&self.dir).map_err(|e| DagError::CacheDirCreate {
            path: self.dir.clone(),
            source: e,
        })?;

        let path = self.path_for(seed);

        if self.force_create {
            debug!("Forced rewrite of {}", path.display());
            return rewrite(&path);
        }

        let mut file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("Creating cache file {}", path.display());
                return rewrite(&path);
            }
            Err(e) => return Err(DagError::CacheOpen { path, source: e }),
        };

        let found = CacheHeader::read_from(&mut file).map_err(|e| DagError::HeaderRead {
            path: path.clone(),
            source: e,
        })?;

        match found {
            HeaderRead::Valid(header) if header.seed == *seed => {
                debug!("Cache file {} matches seed {}", path.display(), seed);
                Ok(Preparation::Match(file))
            }
            HeaderRead::Valid(header) => {
                debug!(
                    "Cache file {} was generated for seed {}, wanted {}",
                    path.display(),
                    header.seed,
                    seed
                );
                drop(file);
                rewrite(&path)
            }
            HeaderRead::BadMagic | HeaderRead::Truncated => {
                debug!("Cache file {} has no valid header ({:?})", path.display(), found);
                drop(file);
                rewrite(&path)
            }
        }
    }
}

/// Prepare the cache file for `seed` in `dir` under the default revision
pub fn prepare(dir: &Path, seed: &SeedHash) -> DagResult<Preparation> {
    CachePreparer::new(dir).prepare(seed)
}

/// Create or truncate `path` for writing from scratch
fn rewrite(path: &Path) -> DagResult<Preparation> {
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| DagError::CacheOpen {
            path: path.to_path_buf(),
            source: e,
        })?;

    info!("Cache file {} ready for regeneration", path.display());
    Ok(Preparation::Mismatch(file))
}
