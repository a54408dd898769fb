//! Concurrent cuckoo set implementation.
//!
//! # Concurrency Model
//!
//! [`StripedCuckooSet`] uses two levels of locking:
//!
//! 1. **Resize permit**: one `RwLock` over the whole hashed layout (salts,
//!    tables, lock stripe). Ordinary operations hold it shared for their
//!    entire duration, so any number of them run concurrently; a resize holds
//!    it exclusive, drains all shared holders, and swaps the layout as a
//!    unit.
//! 2. **Lock stripe**: one `Mutex` per bucket per table, acquired in a fixed
//!    ascending `(table, index)` order. Operations on disjoint bucket pairs
//!    never contend; overlapping pairs serialize at the shared bucket.
//!
//! Blocking happens only on lock acquisition. There is no spinning, no
//! cancellation, and no timeout: every operation runs to completion, looping
//! through resize-and-retry internally when capacity demands it.
//!
//! # Ordering Guarantees
//!
//! No global ordering across concurrent operations is promised. A `contains`
//! observes some consistent snapshot of the two buckets it locks. Two `add`s
//! on keys with disjoint bucket pairs proceed fully in parallel.
//!
//! # Examples
//!
//! ```
//! use cuckoocraft::sync::StripedCuckooSet;
//! use cuckoocraft::core::ConcurrentSet;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let set = Arc::new(StripedCuckooSet::<i32>::with_defaults()?);
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
//!
//! assert_eq!(set.len(), 400);
//! assert!(set.contains(&42));
//! # Ok::<(), cuckoocraft::CuckooCraftError>(())
//! ```

mod striped;

pub use striped::StripedCuckooSet;

#[cfg(feature = "metrics")]
pub use striped::RelocationStats;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConcurrentSet;

    #[test]
    fn test_striped_insert() {
        let set = StripedCuckooSet::<i32>::with_defaults().unwrap();
        for i in 0..100 {
            set.add(i);
        }
        for i in 0..100 {
            assert!(set.contains(&i), "Missing key {}", i);
        }
    }

    #[test]
    fn test_striped_remove() {
        let set = StripedCuckooSet::<i32>::with_defaults().unwrap();
        for i in 0..100 {
            set.add(i);
        }
        for i in (0..100).step_by(2) {
            assert!(set.remove(&i));
        }
        for i in 0..100 {
            assert_eq!(set.contains(&i), i % 2 == 1);
        }
    }

    #[test]
    fn test_striped_concurrent() {
        use std::sync::Arc;
        use std::thread;

        let set = Arc::new(StripedCuckooSet::<i32>::with_defaults().unwrap());

        let handles: Vec<_> = (0..4)
            .map(|tid| {
                let s = Arc::clone(&set);
                thread::spawn(move || {
                    for i in 0..100 {
                        s.add(tid * 100 + i);
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        for tid in 0..4 {
            for i in 0..100 {
                assert!(
                    set.contains(&(tid * 100 + i)),
                    "Missing key {}",
                    tid * 100 + i
                );
            }
        }
    }
}
