//! Hash function trait and the default implementation.
//!
//! The cuckoo set needs exactly one base hash per key; the two bucket indices
//! are derived from it by XORing per-table salts and reducing modulo the
//! table size (see [`crate::sync::StripedCuckooSet`]). That keeps the
//! division of labor sharp:
//!
//! - **[`KeyHasher`]**: turns bytes into one well-mixed `u64`
//! - **Salts + modulo** (owned by the set): turn that `u64` into two indices
//!
//! Hashers operate on **byte slices** rather than generic `T: Hash` so the
//! algorithm is decoupled from Rust's `Hash` trait and pre-serialized data
//! can be hashed without a copy. The [`hash_item_to_bytes`] bridge covers the
//! common case of an arbitrary `T: Hash` key.
//!
//! # Examples
//!
//! ```
//! use cuckoocraft::hash::{KeyHasher, StdHasher, hash_item_to_bytes};
//!
//! let hasher = StdHasher::new();
//! let bytes = hash_item_to_bytes(&"hello");
//! let h = hasher.hash_bytes(&bytes);
//! assert_eq!(h, hasher.hash_bytes(&bytes)); // deterministic
//! ```

#![allow(clippy::module_name_repetitions)]

/// Base hasher trait for cuckoo set hash functions.
///
/// Implementations must be:
/// - **Deterministic**: same input, same output, for the set's lifetime
/// - **Well-mixed**: single-bit input changes flip ~half the output bits, so
///   the salt-XOR index derivation sees independent high and low halves
/// - **`Send + Sync`**: one hasher instance is shared by all threads
pub trait KeyHasher: Send + Sync {
    /// Hash arbitrary bytes to a 64-bit value.
    fn hash_bytes(&self, bytes: &[u8]) -> u64;

    /// Hash bytes with an explicit seed folded in.
    ///
    /// Default implementation XORs the seed with the base hash, which is
    /// sufficient but not optimal; override when the underlying algorithm
    /// has native seeding.
    fn hash_bytes_with_seed(&self, bytes: &[u8], seed: u64) -> u64 {
        self.hash_bytes(bytes) ^ seed
    }

    /// Human-readable name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Convert a hashable key to bytes for use with a [`KeyHasher`].
///
/// Runs the key through FNV-1a via the `std::hash::Hash` machinery and emits
/// the digest as 8 little-endian bytes. This is the bridge between "any
/// `T: Hash`" keys and the byte-oriented hasher trait; the final bucket
/// indices are computed by the set from the hasher's output, so the quality
/// of this intermediate step only needs to preserve key identity.
#[inline]
#[must_use]
pub fn hash_item_to_bytes<T: std::hash::Hash>(item: &T) -> [u8; 8] {
    use std::hash::Hasher;
    let mut hasher = Fnv1aHasher::new();
    item.hash(&mut hasher);
    hasher.finish().to_le_bytes()
}

/// Deterministic FNV-1a hasher state.
///
/// `std::collections::hash_map::DefaultHasher` is randomly keyed per process,
/// which would make a set's bucket layout irreproducible between runs and
/// useless for debugging dumps. FNV-1a is stable, tiny, and plenty for an
/// intermediate digest.
#[derive(Debug, Clone)]
pub struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    /// Create a new hasher with the FNV-1a offset basis.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: 0xcbf2_9ce4_8422_2325,
        }
    }
}

impl Default for Fnv1aHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl std::hash::Hasher for Fnv1aHasher {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state ^= u64::from(byte);
            self.state = self.state.wrapping_mul(0x0000_0100_0000_01b3);
        }
    }

    fn finish(&self) -> u64 {
        self.state
    }
}

/// Standard hasher: seeded FNV-1a over the input bytes.
///
/// The default choice. Deterministic across runs, adequate mixing for the
/// salt-XOR index derivation, no dependencies. For long keys or hot
/// workloads, enable the `xxhash` feature and use
/// [`XxHasher`](crate::hash::XxHasher) instead.
#[derive(Debug, Clone)]
pub struct StdHasher {
    seed: u64,
}

impl StdHasher {
    /// Create a new hasher with the default seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            seed: 0x517c_c1b7_2722_0a95,
        }
    }

    /// Create a new hasher with an explicit seed.
    ///
    /// Different seeds produce independent hash functions.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}

impl Default for StdHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyHasher for StdHasher {
    #[inline]
    fn hash_bytes(&self, bytes: &[u8]) -> u64 {
        use std::hash::Hasher;

        let mut hasher = Fnv1aHasher::new();
        hasher.write_u64(self.seed);
        hasher.write(bytes);
        hasher.finish()
    }

    #[inline]
    fn hash_bytes_with_seed(&self, bytes: &[u8], seed: u64) -> u64 {
        use std::hash::Hasher;

        let mut hasher = Fnv1aHasher::new();
        hasher.write_u64(self.seed ^ seed);
        hasher.write(bytes);
        hasher.finish()
    }

    #[inline]
    fn name(&self) -> &'static str {
        "StdHasher"
    }
}
