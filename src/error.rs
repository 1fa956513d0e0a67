//! Error types for dagcache
//!
//! All modules use `DagResult<T>` as their return type. At the preparation
//! boundary every error is a hard failure: the caller must abort whatever
//! needed the cache instead of regenerating into it.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dagcache operations
pub type DagResult<T> = Result<T, DagError>;

/// All errors that can occur in dagcache
#[derive(Error, Debug)]
pub enum DagError {
    // Cache preparation errors
    #[error("Failed to create cache directory {path}: {source}")]
    CacheDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open cache file {path}: {source}")]
    CacheOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read cache header from {path}: {source}")]
    HeaderRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid seed hash '{input}': {reason}")]
    InvalidSeed { input: String, reason: String },

    #[error("Not a cache file name: {0}")]
    NotCacheFile(PathBuf),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DagError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create an invalid seed error
    pub fn invalid_seed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSeed {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Check if an operator can fix the cause and try again
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::CacheDirCreate { .. } | Self::ConfigDirCreate { .. })
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::CacheDirCreate { .. } => {
                Some("Check permissions on the cache directory or pass --dir")
            }
            Self::InvalidSeed { .. } => Some("Seed hashes are 32 bytes given as 64 hex characters"),
            Self::NotCacheFile(_) => Some("Cache files are named <revision>_<hex prefix>"),
            Self::ConfigInvalid { .. } => Some("Run: dagcache config init --force"),
            _ => None,
        }
    }
}
