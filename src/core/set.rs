//! Core concurrent-set trait definition.
//!
//! [`ConcurrentSet`] is the interior-mutability contract of this crate: every
//! method takes `&self`, so an implementation wrapped in `Arc` is directly
//! shareable across threads with no external `Mutex`. Rust's type system
//! makes the distinction explicit: `&mut self` would promise exclusive
//! access, which is precisely what a concurrent container must not require.
//!
//! # Guarantees
//!
//! Implementations must provide, for any interleaving of concurrent calls:
//!
//! 1. **Exact membership**: `contains` reflects some consistent state of the
//!    set (no false positives, no false negatives at quiescence).
//! 2. **No duplicates**: a key is stored at most once; `add` of a present key
//!    returns `false` and changes nothing.
//! 3. **Linearizable pairs on one key**: `add(k)` then `contains(&k)` (with
//!    no interleaved `remove(&k)`) observes the insertion; `remove(&k)` then
//!    `contains(&k)` observes the removal.
//! 4. **Exact accounting at quiescence**: once all mutators have returned,
//!    `len()` equals successful adds minus successful removes.
//!
//! # Examples
//!
//! ```
//! use cuckoocraft::core::ConcurrentSet;
//! use cuckoocraft::sync::StripedCuckooSet;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let set = Arc::new(StripedCuckooSet::<u64>::with_defaults().unwrap());
//!
//! let handles: Vec<_> = (0..4).map(|t| {
//!     let set = Arc::clone(&set);
//!     thread::spawn(move || {
//!         for i in 0..100 {
//!             set.add(t * 100 + i);  // &self method
//!         }
//!     })
//! }).collect();
//!
//! for h in handles { h.join().unwrap(); }
//! assert_eq!(set.len(), 400);
//! ```

use std::hash::Hash;

/// A thread-safe set of hashable keys with `&self` operations.
///
/// The type parameter `T` is the stored key type. Keys are owned by the set
/// once added; queries and removals go by reference.
pub trait ConcurrentSet<T: Hash + Eq + Send + Sync>: Send + Sync {
    /// Insert a key.
    ///
    /// Returns `true` if the key was inserted, `false` if it was already
    /// present (in which case the set is unchanged and `key` is dropped).
    fn add(&self, key: T) -> bool;

    /// Remove a key.
    ///
    /// Returns `true` if the key was present and removed, `false` if absent.
    fn remove(&self, key: &T) -> bool;

    /// Membership test. No side effects.
    #[must_use]
    fn contains(&self, key: &T) -> bool;

    /// Number of keys currently stored.
    ///
    /// Exact at quiescent points; implementations document their behavior
    /// while mutators are in flight.
    #[must_use]
    fn len(&self) -> usize;

    /// Whether the set holds no keys.
    #[must_use]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert every key from an iterator, returning how many were new.
    fn add_all<I>(&self, keys: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        keys.into_iter()
            .map(|k| self.add(k))
            .filter(|&inserted| inserted)
            .count()
    }

    /// Membership test for a batch of keys, in order.
    #[must_use]
    fn contains_batch<'a, I>(&self, keys: I) -> Vec<bool>
    where
        T: 'a,
        I: IntoIterator<Item = &'a T>,
    {
        keys.into_iter().map(|k| self.contains(k)).collect()
    }
}
