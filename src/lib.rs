//! CuckooCraft: concurrent bucketized cuckoo hash set for Rust.
//!
//! CuckooCraft provides an exact-membership concurrent set with bounded
//! worst-case lookup cost. Every key lives in one of two candidate buckets
//! (one per table, chosen by two salted hashes), so `contains` inspects at
//! most `2 × probe_size` slots no matter how large the set grows.
//!
//! # What is Bucketized Cuckoo Hashing?
//!
//! Classic cuckoo hashing stores one key per bucket and resolves collisions
//! by *displacing* the occupant to its alternate bucket. The bucketized
//! variant lets each bucket hold a small probe set (`probe_size` keys),
//! which makes displacement rare, plus a soft `relocation_threshold` below
//! `probe_size` that triggers proactive rebalancing before a bucket fills:
//!
//! - **Exact answers**: no false positives, no false negatives
//! - **Bounded lookups**: two buckets, each at most `probe_size` keys
//! - **Amortized growth**: tables double when relocation cannot make room
//!
//! # Quick Start
//!
//! ```
//! use cuckoocraft::sync::StripedCuckooSet;
//! use cuckoocraft::core::ConcurrentSet;
//!
//! let set = StripedCuckooSet::<String>::with_defaults()?;
//!
//! assert!(set.add("hello".to_string()));
//! assert!(set.add("world".to_string()));
//! assert!(!set.add("hello".to_string()));   // duplicate: rejected
//!
//! assert!(set.contains(&"hello".to_string()));
//! assert!(set.remove(&"world".to_string()));
//! assert_eq!(set.len(), 1);
//! # Ok::<(), cuckoocraft::CuckooCraftError>(())
//! ```
//!
//! # Concurrency Model
//!
//! All operations take `&self` (the [`ConcurrentSet`](crate::core::ConcurrentSet)
//! trait), so an `Arc<StripedCuckooSet<T>>` is shared across threads with no
//! external locking:
//!
//! ```
//! use cuckoocraft::sync::StripedCuckooSet;
//! use cuckoocraft::core::ConcurrentSet;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let set = Arc::new(StripedCuckooSet::<u64>::with_defaults()?);
//!
//! let handles: Vec<_> = (0..8).map(|t| {
//!     let set = Arc::clone(&set);
//!     thread::spawn(move || {
//!         for i in 0..1000 {
//!             set.add(t * 1000 + i);
//!         }
//!     })
//! }).collect();
//!
//! for h in handles { h.join().unwrap(); }
//! assert_eq!(set.len(), 8000);
//! # Ok::<(), cuckoocraft::CuckooCraftError>(())
//! ```
//!
//! Internally, a two-level lock protocol keeps disjoint operations parallel:
//! one mutex per bucket per table (the lock stripe), under a single
//! reader/writer *resize permit* that only the resize controller takes
//! exclusively. See [`sync`] for the full protocol and the deadlock-freedom
//! argument.
//!
//! # Tuning
//!
//! ```
//! use cuckoocraft::builder::CuckooSetBuilder;
//!
//! let set = CuckooSetBuilder::new()
//!     .initial_capacity(1 << 16)
//!     .probe_size(4)
//!     .relocation_threshold(2)
//!     .relocation_limit(128)
//!     .build::<u64>()?;
//! # let _ = set;
//! # Ok::<(), cuckoocraft::CuckooCraftError>(())
//! ```
//!
//! With `probe_size = relocation_threshold = 1` the same type behaves as a
//! classic single-slot cuckoo set ([`CuckooConfig::single_slot`]).
//!
//! # Features
//!
//! | Feature   | Enables                                             |
//! |-----------|-----------------------------------------------------|
//! | (default) | FNV-1a [`StdHasher`](hash::StdHasher)               |
//! | `xxhash`  | [`XxHasher`](hash::XxHasher) via `xxhash-rust`      |
//! | `metrics` | Relocation counters on the insert path              |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::needless_range_loop)]

/// Core types, traits, and configuration
pub mod core;

/// Error types and result alias
pub mod error;

/// Hash functions
pub mod hash;

/// Concurrent set implementation
pub mod sync;

/// Type-safe construction
pub mod builder;

// Re-export the common surface at the crate root
pub use crate::builder::CuckooSetBuilder;
pub use crate::core::{Bucket, ConcurrentSet, CuckooConfig};
pub use crate::error::{CuckooCraftError, Result};
pub use crate::hash::KeyHasher;
pub use crate::sync::StripedCuckooSet;

#[cfg(feature = "metrics")]
pub use crate::sync::RelocationStats;

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use cuckoocraft::prelude::*;
///
/// let set = StripedCuckooSet::<u64>::with_defaults()?;
/// set.add(1);
/// assert!(set.contains(&1));
/// # Ok::<(), cuckoocraft::CuckooCraftError>(())
/// ```
pub mod prelude {
    pub use crate::builder::CuckooSetBuilder;
    pub use crate::core::{ConcurrentSet, CuckooConfig};
    pub use crate::error::{CuckooCraftError, Result};
    pub use crate::hash::{DefaultHasher, KeyHasher, StdHasher};
    pub use crate::sync::StripedCuckooSet;

    #[cfg(feature = "xxhash")]
    pub use crate::hash::XxHasher;

    #[cfg(feature = "metrics")]
    pub use crate::sync::RelocationStats;
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let set = StripedCuckooSet::<String>::with_defaults().unwrap();
        set.add("test".to_string());
        assert!(set.contains(&"test".to_string()));
    }

    #[test]
    fn test_trait_usage() {
        fn exercise<S: ConcurrentSet<u64>>(set: &S) {
            assert!(set.add(7));
            assert!(set.contains(&7));
            assert!(set.remove(&7));
        }

        let set = StripedCuckooSet::<u64>::with_defaults().unwrap();
        exercise(&set);
    }

    #[test]
    fn test_builder_from_root() {
        let set = CuckooSetBuilder::new()
            .initial_capacity(32)
            .build::<u64>()
            .unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_shared_across_threads() {
        use std::sync::Arc;

        let set = Arc::new(StripedCuckooSet::<String>::with_defaults().unwrap());
        let clone = Arc::clone(&set);
        let handle = std::thread::spawn(move || {
            clone.add("thread_item".to_string());
        });
        handle.join().unwrap();
        assert!(set.contains(&"thread_item".to_string()));
    }
}
