//! XXH3 hasher (requires the `xxhash` feature).
//!
//! Wraps the `xxhash-rust` crate's XXH3 implementation. XXH3 passes SMHasher,
//! has native seeding, and picks SIMD paths at runtime, which makes it the
//! drop-in upgrade over [`StdHasher`](crate::hash::StdHasher) when hashing is
//! measurable in profiles, typically string keys longer than a few dozen
//! bytes.
//!
//! # Examples
//!
//! ```
//! use cuckoocraft::hash::{KeyHasher, XxHasher};
//!
//! let hasher = XxHasher::new();
//! let h1 = hasher.hash_bytes(b"hello world");
//! let h2 = XxHasher::with_seed(42).hash_bytes(b"hello world");
//! assert_ne!(h1, h2);
//! ```

#![allow(clippy::module_name_repetitions)]

use super::hasher::KeyHasher;

use xxhash_rust::xxh3::{xxh3_64, xxh3_64_with_seed};

/// XXH3-based [`KeyHasher`].
#[derive(Debug, Clone, Copy, Default)]
pub struct XxHasher {
    seed: u64,
}

impl XxHasher {
    /// Create a new XXH3 hasher with seed 0.
    #[must_use]
    pub fn new() -> Self {
        Self { seed: 0 }
    }

    /// Create a new XXH3 hasher with an explicit seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl KeyHasher for XxHasher {
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        if self.seed == 0 {
            xxh3_64(bytes)
        } else {
            xxh3_64_with_seed(bytes, self.seed)
        }
    }

    #[inline]
    fn hash_bytes_with_seed(&self, bytes: &[u8], seed: u64) -> u64 {
        // XXH3 has native seeding; fold both seeds together instead of the
        // trait's XOR-after-the-fact default.
        xxh3_64_with_seed(bytes, self.seed ^ seed)
    }

    #[inline]
    fn name(&self) -> &'static str {
        "XxHasher"
    }
}
