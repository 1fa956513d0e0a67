//! Cache file naming
//!
//! Maps a (revision, seed hash) pair to a stable file name of the form
//! `<revision>_<prefix>`, where the prefix is the first 8 bytes of the seed
//! rendered as unpadded lowercase hex. Only 64 bits of the seed take part, so
//! two seeds sharing a prefix collide; the header check in
//! [`super::prepare`] catches that case.

use super::seed::{Revision, SeedHash};
use std::fmt;
use std::path::{Path, PathBuf};

/// Upper bound on a name including a trailing terminator:
/// 10 decimal digits of a `u32`, the underscore, 16 hex digits and 1.
pub const MAX_NAME_SIZE: usize = 10 + 1 + 16 + 1;

/// Name of a cache file inside the cache directory
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheFileName(String);

impl CacheFileName {
    /// The name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Recover the revision and seed prefix from a file name.
    ///
    /// Returns `None` for anything `mutable_name` would not produce.
    pub fn parse(name: &str) -> Option<(Revision, u64)> {
        let (revision, prefix) = name.split_once('_')?;

        if revision.is_empty() || !revision.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if prefix.is_empty()
            || prefix.len() > 16
            || !prefix.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        {
            return None;
        }
        // Neither part is ever rendered with a leading zero unless it is zero
        if has_leading_zero(revision) || has_leading_zero(prefix) {
            return None;
        }

        let revision = revision.parse::<u32>().ok()?;
        let prefix = u64::from_str_radix(prefix, 16).ok()?;
        Some((Revision(revision), prefix))
    }
}

fn has_leading_zero(digits: &str) -> bool {
    digits.len() > 1 && digits.starts_with('0')
}

impl fmt::Display for CacheFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<Path> for CacheFileName {
    fn as_ref(&self) -> &Path {
        Path::new(&self.0)
    }
}

/// Compute the file name for a seed under the given format revision
pub fn mutable_name(revision: Revision, seed: &SeedHash) -> CacheFileName {
    let name = format!("{}_{:x}", revision, seed.prefix());
    debug_assert!(name.len() < MAX_NAME_SIZE);
    CacheFileName(name)
}

/// Join the cache directory and a file name into the full cache path
pub fn create_full_path(directory: &Path, name: &CacheFileName) -> PathBuf {
    directory.join(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::seed::SEED_HASH_SIZE;

    fn seed_with_head(head: [u8; 8]) -> SeedHash {
        let mut bytes = [0u8; SEED_HASH_SIZE];
        bytes[..8].copy_from_slice(&head);
        SeedHash::new(bytes)
    }

    #[test]
    fn name_is_deterministic() {
        let seed = seed_with_head([0xde, 0xad, 0xbe, 0xef, 0, 1, 2, 3]);
        let first = mutable_name(Revision(23), &seed);
        let second = mutable_name(Revision(23), &seed);
        assert_eq!(first, second);
    }

    #[test]
    fn name_reads_first_bytes_in_order() {
        let seed = seed_with_head([1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(mutable_name(Revision(23), &seed).as_str(), "23_102030405060708");

        let seed = seed_with_head([8, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(mutable_name(Revision(23), &seed).as_str(), "23_807060504030201");
    }

    #[test]
    fn name_ignores_bytes_past_prefix() {
        let mut bytes = [0xffu8; SEED_HASH_SIZE];
        bytes[..8].copy_from_slice(&[0, 0, 0, 0, 0, 0, 0, 0x2a]);
        assert_eq!(mutable_name(Revision(1), &SeedHash::new(bytes)).as_str(), "1_2a");
    }

    #[test]
    fn zero_seed_is_unpadded() {
        assert_eq!(mutable_name(Revision(23), &SeedHash::default()).as_str(), "23_0");
    }

    #[test]
    fn name_fits_bound_at_extremes() {
        let seed = SeedHash::new([0xff; SEED_HASH_SIZE]);
        let name = mutable_name(Revision(u32::MAX), &seed);
        assert_eq!(name.as_str(), "4294967295_ffffffffffffffff");
        assert_eq!(name.as_str().len() + 1, MAX_NAME_SIZE);
    }

    #[test]
    fn full_path_inserts_separator() {
        let seed = seed_with_head([0, 0, 0, 0, 0, 0, 0, 1]);
        let name = mutable_name(Revision(23), &seed);

        let path = create_full_path(Path::new("/var/cache/ethash"), &name);
        assert_eq!(path, PathBuf::from("/var/cache/ethash/23_1"));

        let trailing = create_full_path(Path::new("/var/cache/ethash/"), &name);
        assert_eq!(trailing, path);
    }

    #[test]
    fn parse_inverts_mutable_name() {
        let seed = seed_with_head([0x12, 0x34, 0, 0, 0, 0, 0xab, 0xcd]);
        let name = mutable_name(Revision(23), &seed);
        assert_eq!(
            CacheFileName::parse(name.as_str()),
            Some((Revision(23), seed.prefix()))
        );
        assert_eq!(CacheFileName::parse("23_0"), Some((Revision(23), 0)));
        assert_eq!(CacheFileName::parse("0_1"), Some((Revision(0), 1)));
    }

    #[test]
    fn parse_rejects_foreign_names() {
        for name in [
            "",
            "23",
            "_abc",
            "23_",
            "x3_abc",
            "23_ABC",
            "23_0abc",
            "023_1",
            "00_1",
            "23_abc.tmp",
            "23_11111111111111111",
            "99999999999_1",
            "full_R23_0000000000000000",
        ] {
            assert_eq!(CacheFileName::parse(name), None, "accepted {name:?}");
        }
    }
}
