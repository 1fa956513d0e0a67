//! Cache file header
//!
//! Every cache file starts with a fixed 40-byte record: an 8-byte magic
//! number (little-endian) followed by the 32-byte seed hash the payload was
//! generated for. The generator writes it; the preparer reads it back to
//! decide whether the payload can be reused.

use super::seed::{SeedHash, SEED_HASH_SIZE};
use std::io::{self, Read, Write};

/// Marks a file as an ethash DAG cache
pub const DAG_MAGIC: u64 = 0xFEE1_DEAD_BADD_CAFE;

const MAGIC_SIZE: usize = 8;

/// Size of the header record in bytes
pub const HEADER_SIZE: usize = MAGIC_SIZE + SEED_HASH_SIZE;

/// Header stored at the start of a cache file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheHeader {
    /// Seed the payload was generated for
    pub seed: SeedHash,
}

/// What was found where a header should be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderRead {
    /// A well-formed header
    Valid(CacheHeader),
    /// Enough bytes, but not a cache file
    BadMagic,
    /// The file ended before a full header
    Truncated,
}

impl CacheHeader {
    /// Create a header for the given seed
    pub fn new(seed: SeedHash) -> Self {
        Self { seed }
    }

    /// Serialize to the on-disk layout
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        let mut buf = [0u8; HEADER_SIZE];
        buf[..MAGIC_SIZE].copy_from_slice(&DAG_MAGIC.to_le_bytes());
        buf[MAGIC_SIZE..].copy_from_slice(self.seed.as_bytes());
        buf
    }

    /// Parse the on-disk layout, rejecting a wrong magic number
    pub fn decode(buf: &[u8; HEADER_SIZE]) -> Option<Self> {
        let mut magic = [0u8; MAGIC_SIZE];
        magic.copy_from_slice(&buf[..MAGIC_SIZE]);
        if u64::from_le_bytes(magic) != DAG_MAGIC {
            return None;
        }

        let mut seed = [0u8; SEED_HASH_SIZE];
        seed.copy_from_slice(&buf[MAGIC_SIZE..]);
        Some(Self::new(SeedHash::new(seed)))
    }

    /// Read a header from the current position of `reader`.
    ///
    /// A short file is reported as [`HeaderRead::Truncated`]; any other I/O
    /// error is returned as-is.
    pub fn read_from<R: Read>(reader: &mut R) -> io::Result<HeaderRead> {
        let mut buf = [0u8; HEADER_SIZE];
        match reader.read_exact(&mut buf) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => return Ok(HeaderRead::Truncated),
            Err(e) => return Err(e),
        }

        Ok(match Self::decode(&buf) {
            Some(header) => HeaderRead::Valid(header),
            None => HeaderRead::BadMagic,
        })
    }

    /// Write the header at the current position of `writer`
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.encode())
    }
}
