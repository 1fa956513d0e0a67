//! Seed hash and format revision value types

use crate::error::{DagError, DagResult};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Size of a seed hash in bytes
pub const SEED_HASH_SIZE: usize = 32;

/// On-disk format revision of the ethash DAG
pub const DEFAULT_REVISION: u32 = 23;

/// 256-bit identifier of a proof-of-work epoch
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SeedHash([u8; SEED_HASH_SIZE]);

impl SeedHash {
    /// Wrap raw seed bytes
    pub const fn new(bytes: [u8; SEED_HASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// Raw seed bytes
    pub fn as_bytes(&self) -> &[u8; SEED_HASH_SIZE] {
        &self.0
    }

    /// First 8 bytes decoded as a big-endian integer.
    ///
    /// This is the only part of the seed that ends up in a file name.
    pub fn prefix(&self) -> u64 {
        let mut head = [0u8; 8];
        head.copy_from_slice(&self.0[..8]);
        u64::from_be_bytes(head)
    }

    /// Parse from hex, with or without a `0x` prefix
    pub fn from_hex(input: &str) -> DagResult<Self> {
        let trimmed = input.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if digits.len() != SEED_HASH_SIZE * 2 {
            return Err(DagError::invalid_seed(
                input,
                format!(
                    "expected {} hex characters, got {}",
                    SEED_HASH_SIZE * 2,
                    digits.len()
                ),
            ));
        }

        let mut bytes = [0u8; SEED_HASH_SIZE];
        hex::decode_to_slice(digits, &mut bytes)
            .map_err(|e| DagError::invalid_seed(input, e.to_string()))?;
        Ok(Self(bytes))
    }
}

impl From<[u8; SEED_HASH_SIZE]> for SeedHash {
    fn from(bytes: [u8; SEED_HASH_SIZE]) -> Self {
        Self(bytes)
    }
}

impl FromStr for SeedHash {
    type Err = DagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Display for SeedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl fmt::Debug for SeedHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SeedHash({})", self)
    }
}

impl Serialize for SeedHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Version of the cache file layout. A new revision invalidates every file
/// written under an older one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Revision(pub u32);

impl Default for Revision {
    fn default() -> Self {
        Self(DEFAULT_REVISION)
    }
}

impl From<u32> for Revision {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
