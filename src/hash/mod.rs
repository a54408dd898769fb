//! Hash functions for cuckoo sets.
//!
//! # Module Structure
//!
//! ```text
//! hash/
//! ├── hasher.rs  - KeyHasher trait, FNV-1a StdHasher, T: Hash → bytes bridge
//! ├── xxhash.rs  - XXH3 hasher (optional, feature = "xxhash")
//! └── mod.rs     - This file (public API)
//! ```
//!
//! # How hashing feeds the set
//!
//! One base hash per key, two indices per base hash:
//!
//! ```text
//! index(table) = (hash_bytes(key_bytes) XOR salt[table]) mod table_size
//! ```
//!
//! The salts are owned by the set and redrawn on every resize, so a pair of
//! pathologically colliding tables never survives a doubling. The same two
//! indices may coincide across tables; that is legal and handled, not an
//! error.
//!
//! # Choosing a Hash Function
//!
//! | Hash Function | Speed     | Use Case                                  |
//! |---------------|-----------|-------------------------------------------|
//! | [`StdHasher`] | Medium    | Default; zero dependencies, deterministic |
//! | [`XxHasher`]  | Very fast | Long keys, hash-bound workloads           |

// Core hash abstractions
pub mod hasher;

// Optional fast hash implementation
#[cfg(feature = "xxhash")]
pub mod xxhash;

pub use hasher::{hash_item_to_bytes, Fnv1aHasher, KeyHasher, StdHasher};

#[cfg(feature = "xxhash")]
pub use xxhash::XxHasher;

/// Type alias for the default hasher used by cuckoo sets.
///
/// A stable name for the default hash function, so code can reference
/// `DefaultHasher` without depending on the specific implementation
/// (currently [`StdHasher`]).
pub type DefaultHasher = StdHasher;

/// Get the recommended hash function for the enabled feature set.
///
/// Returns [`XxHasher`] when the `xxhash` feature is enabled, otherwise
/// [`StdHasher`]. Static dispatch; no allocation.
#[must_use]
pub fn recommended_hasher() -> impl KeyHasher {
    #[cfg(feature = "xxhash")]
    {
        XxHasher::new()
    }

    #[cfg(not(feature = "xxhash"))]
    {
        StdHasher::new()
    }
}
