//! Striped-locking concurrent cuckoo hash set.
//!
//! # Design Philosophy
//!
//! A cuckoo set stores each key in one of two candidate buckets (one per
//! table, indexed by two salted hashes). Striped locking gives every bucket in
//! every table its own mutex, so operations on disjoint bucket pairs proceed
//! fully in parallel and only overlapping pairs serialize. Above the stripes
//! sits a single reader/writer **resize permit**: ordinary operations hold it
//! shared (unlimited concurrency), while a resize holds it exclusive and is
//! therefore the only code that may swap out the tables, the lock stripe, and
//! the hash salts as one unit.
//!
//! ## Two-Level Locking Protocol
//!
//! | Operation     | Resize permit | Bucket locks                 |
//! |---------------|---------------|------------------------------|
//! | `contains()`  | Shared        | Key's pair                   |
//! | `add()`       | Shared        | Key's pair (per attempt)     |
//! | `remove()`    | Shared        | Key's pair                   |
//! | relocation    | Shared        | Victim's pair (per round)    |
//! | `len()`       | Shared        | One bucket at a time         |
//! | resize        | **Exclusive** | None needed (sole owner)     |
//!
//! Bucket locks are always released before the shared permit, and nothing is
//! held across the hand-off from a failed operation into the resize
//! controller.
//!
//! ## Lock Ordering
//!
//! A key's two bucket locks are acquired in ascending `(table, index)` order.
//! Table 0 sorts before table 1, so the pair is always taken table-0-first:
//! a total order over all stripes.
//!
//! PROOF OF DEADLOCK-FREEDOM:
//! - A deadlock requires a cycle in the wait-for graph
//! - Every thread holding stripe locks acquired them in ascending
//!   `(table, index)` order, and the two locks of a pair always come from
//!   different tables
//! - A cycle would need some thread to wait on a lock ordered before one it
//!   holds, which the total order forbids
//! - The resize permit cannot re-enter the cycle either: it is acquired
//!   strictly before any stripe lock and never while one is held
//!
//! ## Capacity Pressure
//!
//! Buckets carry a hard cap (`probe_size`) and a soft cap
//! (`relocation_threshold`). An insert that lands a bucket between the two
//! succeeds immediately and then runs the **relocation engine**: the crowded
//! bucket's oldest key is pushed toward its alternate-table bucket, cascading
//! across buckets for up to `relocation_limit` rounds. If the cascade cannot
//! get below the soft cap, or an insert finds both candidate buckets at the
//! hard cap, the tables double, every key is rehashed under fresh salts, and
//! the operation proceeds. Lookups stay O(1): a key is only ever in one of
//! two buckets of bounded size.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use cuckoocraft::sync::StripedCuckooSet;
//! use cuckoocraft::core::ConcurrentSet;
//!
//! let set = StripedCuckooSet::<String>::with_defaults()?;
//! assert!(set.add("hello".to_string()));
//! assert!(set.contains(&"hello".to_string()));
//! assert!(!set.add("hello".to_string())); // duplicate
//! assert!(set.remove(&"hello".to_string()));
//! # Ok::<(), cuckoocraft::CuckooCraftError>(())
//! ```
//!
//! ## Concurrent Access
//!
//! ```
//! use cuckoocraft::sync::StripedCuckooSet;
//! use cuckoocraft::core::ConcurrentSet;
//! use std::sync::Arc;
//!
//! let set = Arc::new(StripedCuckooSet::<u64>::with_defaults()?);
//!
//! let handles: Vec<_> = (0..4).map(|t| {
//!     let set = Arc::clone(&set);
//!     std::thread::spawn(move || {
//!         for i in 0..1000 {
//!             set.add(t * 1000 + i);  // &self method
//!         }
//!     })
//! }).collect();
//!
//! for h in handles { h.join().unwrap(); }
//! assert_eq!(set.len(), 4000);
//! # Ok::<(), cuckoocraft::CuckooCraftError>(())
//! ```

use crate::core::bucket::Bucket;
use crate::core::config::CuckooConfig;
use crate::core::set::ConcurrentSet;
use crate::error::Result;
use crate::hash::{hash_item_to_bytes, DefaultHasher, KeyHasher};

use log::debug;
use parking_lot::{Mutex, MutexGuard, RwLock};
use std::fmt;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};

/// One coherent view of the set's hashed layout.
///
/// Salts, tables, and the lock stripe (the `Mutex` wrappers) live and die
/// together: the resize controller replaces the whole generation under the
/// exclusive permit, so a shared-permit holder always observes a consistent
/// `(salt0, salt1, table_size)` triple. Stale indices from an older
/// generation cannot leak across a resize because no operation keeps them
/// past releasing the permit.
struct Generation<T> {
    /// Per-table hash salts, redrawn (both) on every resize.
    salts: [u64; 2],
    /// The two tables; each bucket is fused with its stripe lock.
    tables: [Box<[Mutex<Bucket<T>>]>; 2],
}

impl<T> Generation<T> {
    fn new(capacity: usize, salts: [u64; 2], probe_size: usize) -> Self {
        let table = |_: usize| {
            (0..capacity)
                .map(|_| Mutex::new(Bucket::new(probe_size)))
                .collect::<Vec<_>>()
                .into_boxed_slice()
        };
        Self {
            salts,
            tables: [table(0), table(1)],
        }
    }

    /// Buckets per table. Both tables always have the same length.
    #[inline]
    fn capacity(&self) -> usize {
        self.tables[0].len()
    }
}

/// What the locked phase of an `add` decided.
///
/// All locks and the shared permit are released before the decision is acted
/// on; `Relocate` and `MustResize` carry everything the follow-up needs.
enum Placement {
    /// Finished: inserted (`true`) or duplicate (`false`).
    Done(bool),
    /// Inserted above the soft cap; this bucket needs rebalancing.
    Relocate { table: usize, index: usize },
    /// Both candidate buckets at the hard cap; nothing was inserted.
    MustResize { observed_capacity: usize },
}

/// Striped-locking concurrent cuckoo hash set.
///
/// An exact-membership set (no false positives, no false negatives) with
/// bounded worst-case lookup cost: a key is in one of two buckets, each
/// holding at most `probe_size` keys. All operations take `&self` via the
/// [`ConcurrentSet`] trait, so an `Arc<StripedCuckooSet<T>>` is directly
/// shareable across threads.
///
/// # Type Parameters
///
/// - `T`: key type (`Hash + Eq + Clone`; `Clone` because relocation moves a
///   key between lock scopes by value)
/// - `H`: hash function (defaults to [`DefaultHasher`])
///
/// # Memory Layout
///
/// ```text
/// StripedCuckooSet
/// ├─ generation: RwLock<Generation>     ← resize permit
/// │   ├─ salts: [u64; 2]                ← redrawn each resize
/// │   └─ tables: [Box<[Mutex<Bucket>]>; 2]  ← stripe = bucket's own Mutex
/// ├─ config: CuckooConfig               ← immutable after construction
/// ├─ hasher: H                          ← shared by all threads
/// └─ resizes: AtomicU64                 ← completed-resize counter
/// ```
///
/// # Termination
///
/// An `add` that keeps failing relocation keeps doubling the tables, and each
/// doubling strictly increases capacity while the number of stored keys at
/// any instant is finite, so the retry loop terminates. No bound is placed
/// on the number of resizes.
pub struct StripedCuckooSet<T, H = DefaultHasher>
where
    H: KeyHasher + Clone + Default,
{
    /// The resize permit and everything it guards.
    ///
    /// **Why `RwLock<Generation>` instead of separate fields:** every
    /// operation needs `(salt0, salt1, table_size)` as one consistent
    /// snapshot (a resize could interleave field-by-field reads). Bundling
    /// them under the permit makes the snapshot free: holding the read guard
    /// *is* the snapshot.
    generation: RwLock<Generation<T>>,

    /// Tuning parameters, validated at construction, never mutated.
    config: CuckooConfig,

    /// Hash function shared by all operations.
    hasher: H,

    /// Completed resizes. Also serves as the idempotence evidence in tests.
    resizes: AtomicU64,

    /// Total relocation cascade rounds executed (requires `metrics` feature).
    #[cfg(feature = "metrics")]
    relocation_rounds: AtomicU64,

    /// Relocation cascades that exhausted their round limit (requires
    /// `metrics` feature).
    #[cfg(feature = "metrics")]
    relocation_failures: AtomicU64,
}

/// Relocation counters (requires `metrics` feature).
#[cfg(feature = "metrics")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelocationStats {
    /// Total cascade rounds executed across all relocations.
    pub rounds: u64,
    /// Cascades that hit the round limit and forced a resize.
    pub failures: u64,
}

impl<T, H> StripedCuckooSet<T, H>
where
    T: Hash + Eq + Clone,
    H: KeyHasher + Clone + Default,
{
    /// Create a set with [`CuckooConfig::default`] parameters.
    ///
    /// # Errors
    ///
    /// Never fails for the default configuration; the `Result` keeps the
    /// constructor family uniform.
    pub fn with_defaults() -> Result<Self> {
        Self::with_config(CuckooConfig::default())
    }

    /// Create a set from explicit parameters.
    ///
    /// Arguments mirror the tuning knobs in construction order: buckets per
    /// table, relocation round limit, hard per-bucket cap, soft per-bucket
    /// cap.
    ///
    /// # Errors
    ///
    /// Returns a validation error when any parameter is outside its
    /// documented range (see [`CuckooConfig::validate`]).
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoocraft::sync::StripedCuckooSet;
    ///
    /// let set = StripedCuckooSet::<u64>::new(1024, 100, 4, 2)?;
    /// assert_eq!(set.capacity(), 1024);
    ///
    /// assert!(StripedCuckooSet::<u64>::new(0, 100, 4, 2).is_err());
    /// assert!(StripedCuckooSet::<u64>::new(1024, 100, 4, 9).is_err());
    /// # Ok::<(), cuckoocraft::CuckooCraftError>(())
    /// ```
    pub fn new(
        initial_capacity: usize,
        relocation_limit: usize,
        probe_size: usize,
        relocation_threshold: usize,
    ) -> Result<Self> {
        Self::with_config(CuckooConfig {
            initial_capacity,
            probe_size,
            relocation_threshold,
            relocation_limit,
        })
    }

    /// Create a set from a [`CuckooConfig`] with the default hasher.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the config is out of range.
    pub fn with_config(config: CuckooConfig) -> Result<Self> {
        Self::with_config_and_hasher(config, H::default())
    }

    /// Create a set from a [`CuckooConfig`] and an explicit hasher instance.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the config is out of range.
    pub fn with_config_and_hasher(config: CuckooConfig, hasher: H) -> Result<Self> {
        config.validate()?;
        let salts = [rand::random::<u64>(), rand::random::<u64>()];
        Ok(Self {
            generation: RwLock::new(Generation::new(
                config.initial_capacity,
                salts,
                config.probe_size,
            )),
            config,
            hasher,
            resizes: AtomicU64::new(0),
            #[cfg(feature = "metrics")]
            relocation_rounds: AtomicU64::new(0),
            #[cfg(feature = "metrics")]
            relocation_failures: AtomicU64::new(0),
        })
    }

    /// Current buckets per table.
    ///
    /// Grows by doubling on each resize; never shrinks.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.generation.read().capacity()
    }

    /// Hard cap on keys per bucket.
    #[inline]
    #[must_use]
    pub fn probe_size(&self) -> usize {
        self.config.probe_size
    }

    /// Soft cap that triggers relocation.
    #[inline]
    #[must_use]
    pub fn relocation_threshold(&self) -> usize {
        self.config.relocation_threshold
    }

    /// Maximum relocation cascade rounds before a resize.
    #[inline]
    #[must_use]
    pub fn relocation_limit(&self) -> usize {
        self.config.relocation_limit
    }

    /// Number of completed resizes since construction.
    #[must_use]
    pub fn resize_count(&self) -> u64 {
        self.resizes.load(Ordering::Relaxed)
    }

    /// The hasher's type name, for diagnostics.
    #[must_use]
    pub fn hasher_name(&self) -> &'static str {
        self.hasher.name()
    }

    /// Relocation counters (requires `metrics` feature).
    #[cfg(feature = "metrics")]
    #[must_use]
    pub fn relocation_stats(&self) -> RelocationStats {
        RelocationStats {
            rounds: self.relocation_rounds.load(Ordering::Relaxed),
            failures: self.relocation_failures.load(Ordering::Relaxed),
        }
    }

    /// Insert keys from a generator until `count` of them were new.
    ///
    /// Duplicate keys produced by the generator are silently retried, so the
    /// set ends up exactly `count` keys larger. The generator is the caller's
    /// key source, typically random draws over a keyspace several times the
    /// target count.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuckoocraft::sync::StripedCuckooSet;
    /// use cuckoocraft::core::ConcurrentSet;
    ///
    /// let set = StripedCuckooSet::<u32>::with_defaults()?;
    /// let mut next = 0u32;
    /// set.populate(40, || {
    ///     next = next.wrapping_add(7);
    ///     next % 50 // only 50 distinct values: forces duplicate retries
    /// });
    /// assert_eq!(set.len(), 40);
    /// # Ok::<(), cuckoocraft::CuckooCraftError>(())
    /// ```
    pub fn populate<F>(&self, count: usize, mut next_key: F)
    where
        T: Send + Sync,
        F: FnMut() -> T,
    {
        let mut inserted = 0;
        while inserted < count {
            if self.add(next_key()) {
                inserted += 1;
            }
        }
    }

    /// Human-readable listing of every non-empty bucket.
    ///
    /// Holds the shared resize permit for the whole dump, so the listing
    /// never interleaves with a table swap; individual buckets are locked one
    /// at a time, so concurrent mutators may appear in some buckets and not
    /// others.
    #[must_use]
    pub fn debug_dump(&self) -> String
    where
        T: fmt::Debug,
    {
        use fmt::Write as _;

        let generation = self.generation.read();
        let mut out = String::new();
        let _ = writeln!(out, "=== StripedCuckooSet state ===");
        let _ = writeln!(out, "table_size: {}", generation.capacity());
        for (table_id, table) in generation.tables.iter().enumerate() {
            for (index, bucket) in table.iter().enumerate() {
                let bucket = bucket.lock();
                if bucket.is_empty() {
                    continue;
                }
                let keys: Vec<String> = bucket.iter().map(|key| format!("{key:?}")).collect();
                let _ = writeln!(out, "[{table_id}][{index}]: {}", keys.join(" "));
            }
        }
        out
    }

    /// Compute the key's bucket index in each table from one snapshot.
    ///
    /// Pure given the generation: `(base_hash ^ salt[table]) % table_size`.
    /// The two indices may coincide across tables; the buckets are still
    /// distinct because they live in different tables.
    #[inline]
    fn bucket_indices(&self, generation: &Generation<T>, key: &T) -> (usize, usize) {
        let bytes = hash_item_to_bytes(key);
        let base = self.hasher.hash_bytes(&bytes);
        let capacity = generation.capacity() as u64;
        let h0 = ((base ^ generation.salts[0]) % capacity) as usize;
        let h1 = ((base ^ generation.salts[1]) % capacity) as usize;
        (h0, h1)
    }

    /// Lock a key's bucket pair in the fixed stripe order.
    ///
    /// LOCK ORDERING INVARIANT: ascending `(table, index)`, table 0 always
    /// first. See the module docs for the deadlock-freedom argument. The
    /// guards release in reverse order when dropped.
    fn lock_pair<'g>(
        generation: &'g Generation<T>,
        h0: usize,
        h1: usize,
    ) -> (MutexGuard<'g, Bucket<T>>, MutexGuard<'g, Bucket<T>>) {
        let guard0 = generation.tables[0][h0].lock();
        let guard1 = generation.tables[1][h1].lock();
        (guard0, guard1)
    }

    /// Append to a bucket whose room was verified under the same lock.
    fn append_checked(bucket: &mut Bucket<T>, key: T, cap: usize) {
        let appended = bucket.try_push(key, cap).is_ok();
        debug_assert!(appended, "append failed despite a room check under the same lock");
    }

    /// Push a crowded bucket's oldest key toward its alternate bucket,
    /// cascading for up to `relocation_limit` rounds.
    ///
    /// Holds the shared resize permit for the whole cascade (salts and
    /// capacity are frozen across rounds); bucket locks are taken and
    /// released per round. Returns `false` when the cascade could not bring
    /// the crowded bucket below the soft cap; the caller must resize.
    fn relocate(&self, start_table: usize, start_index: usize) -> bool {
        let generation = self.generation.read();
        let threshold = self.config.relocation_threshold;
        let probe_size = self.config.probe_size;

        let (mut table, mut index) = (start_table, start_index);
        for _round in 0..self.config.relocation_limit {
            #[cfg(feature = "metrics")]
            self.relocation_rounds.fetch_add(1, Ordering::Relaxed);

            // Peek under the source lock alone: a concurrent remove may
            // already have relieved the pressure, and stale state must not
            // trigger a pointless move.
            let victim = {
                let bucket = generation.tables[table][index].lock();
                if bucket.len() < threshold {
                    return true;
                }
                match bucket.oldest() {
                    Some(key) => key.clone(),
                    None => return true,
                }
            };

            let (h0, h1) = self.bucket_indices(&generation, &victim);
            debug_assert_eq!(
                if table == 0 { h0 } else { h1 },
                index,
                "victim peeked from a bucket it does not hash to"
            );

            let (mut bucket0, mut bucket1) = Self::lock_pair(&generation, h0, h1);
            let (source, dest, dest_table, dest_index) = if table == 0 {
                (&mut bucket0, &mut bucket1, 1, h1)
            } else {
                (&mut bucket1, &mut bucket0, 0, h0)
            };

            if source.remove(&victim) {
                if dest.len() < threshold {
                    Self::append_checked(dest, victim, probe_size);
                    return true;
                } else if dest.len() < probe_size {
                    Self::append_checked(dest, victim, probe_size);
                    // The destination is now the crowded bucket; the cascade
                    // follows it with the table roles swapped.
                    table = dest_table;
                    index = dest_index;
                } else {
                    // Destination at the hard cap: undo the removal and let
                    // the caller fall back to resizing.
                    Self::append_checked(source, victim, probe_size);
                    return false;
                }
            } else {
                // Another thread moved or removed the victim between the
                // peek and the pair acquisition.
                if source.len() < threshold {
                    return true;
                }
                // Still crowded: retry with whatever is oldest now.
            }
        }

        false
    }

    /// Double the tables, rehash every key under fresh salts, and rebuild
    /// the lock stripe, all under the exclusive resize permit.
    ///
    /// `observed_capacity` is the capacity the caller saw when it decided to
    /// resize. If it no longer matches, another thread already completed the
    /// doubling and this call is a no-op (callers tolerate redundant resize
    /// attempts by design).
    fn resize(&self, observed_capacity: usize) {
        let mut generation = self.generation.write();

        if generation.capacity() != observed_capacity {
            return;
        }

        let new_capacity = observed_capacity * 2;
        let salts = [rand::random::<u64>(), rand::random::<u64>()];
        let old = std::mem::replace(
            &mut *generation,
            Generation::new(new_capacity, salts, self.config.probe_size),
        );

        let mut migrated = 0usize;
        for table in old.tables {
            for bucket in table.into_vec() {
                for key in bucket.into_inner().into_keys() {
                    self.reinsert(&mut generation, key);
                    migrated += 1;
                }
            }
        }

        self.resizes.fetch_add(1, Ordering::Relaxed);
        debug!(
            "resized tables: {} -> {} buckets per table, {} keys migrated",
            observed_capacity, new_capacity, migrated
        );
    }

    /// Plain append used only by the resize controller.
    ///
    /// No relocation, no soft-cap check: the doubled tables are sized to
    /// hold everything that fit before. A key that fits in neither candidate
    /// bucket means that sizing invariant is broken, and continuing would
    /// corrupt the set, so this panics instead of degrading.
    fn reinsert(&self, generation: &mut Generation<T>, key: T) {
        let (h0, h1) = self.bucket_indices(generation, &key);
        let probe_size = self.config.probe_size;

        // The exclusive permit makes every stripe lock free to take; get_mut
        // skips them entirely.
        let key = match generation.tables[0][h0].get_mut().try_push(key, probe_size) {
            Ok(()) => return,
            Err(key) => key,
        };
        if generation.tables[1][h1]
            .get_mut()
            .try_push(key, probe_size)
            .is_err()
        {
            panic!(
                "post-resize reinsertion found both candidate buckets full \
                 (capacity {}); this is a bug in CuckooCraft",
                generation.capacity()
            );
        }
    }
}

impl<T, H> ConcurrentSet<T> for StripedCuckooSet<T, H>
where
    T: Hash + Eq + Clone + Send + Sync,
    H: KeyHasher + Clone + Default,
{
    fn add(&self, key: T) -> bool {
        // Bounded-state retry loop instead of recursion: each pass either
        // finishes, or resizes and tries again with strictly more capacity.
        loop {
            let outcome = {
                let generation = self.generation.read();
                let (h0, h1) = self.bucket_indices(&generation, &key);
                let (mut bucket0, mut bucket1) = Self::lock_pair(&generation, h0, h1);

                let threshold = self.config.relocation_threshold;
                let probe_size = self.config.probe_size;

                if bucket0.contains(&key) || bucket1.contains(&key) {
                    Placement::Done(false)
                } else if bucket0.len() < threshold {
                    Self::append_checked(&mut bucket0, key.clone(), probe_size);
                    Placement::Done(true)
                } else if bucket1.len() < threshold {
                    Self::append_checked(&mut bucket1, key.clone(), probe_size);
                    Placement::Done(true)
                } else if bucket0.len() < probe_size {
                    Self::append_checked(&mut bucket0, key.clone(), probe_size);
                    Placement::Relocate { table: 0, index: h0 }
                } else if bucket1.len() < probe_size {
                    Self::append_checked(&mut bucket1, key.clone(), probe_size);
                    Placement::Relocate { table: 1, index: h1 }
                } else {
                    Placement::MustResize {
                        observed_capacity: generation.capacity(),
                    }
                }
                // Bucket guards drop here, then the shared permit.
            };

            match outcome {
                Placement::Done(inserted) => return inserted,
                Placement::Relocate { table, index } => {
                    // The key is already stored; rebalance, and if the
                    // cascade gives up, a single resize restores the soft
                    // invariant. Either way the insertion succeeded.
                    if !self.relocate(table, index) {
                        #[cfg(feature = "metrics")]
                        self.relocation_failures.fetch_add(1, Ordering::Relaxed);
                        debug!("relocation cascade exhausted; falling back to resize");
                        let observed = self.capacity();
                        self.resize(observed);
                    }
                    return true;
                }
                Placement::MustResize { observed_capacity } => {
                    self.resize(observed_capacity);
                    // Retry from the top against the grown tables.
                }
            }
        }
    }

    fn remove(&self, key: &T) -> bool {
        let generation = self.generation.read();
        let (h0, h1) = self.bucket_indices(&generation, key);
        let (mut bucket0, mut bucket1) = Self::lock_pair(&generation, h0, h1);
        // Table 0 first, mirroring the insertion priority. Freed capacity
        // never violates an invariant, so no rebalancing on this path.
        bucket0.remove(key) || bucket1.remove(key)
    }

    fn contains(&self, key: &T) -> bool {
        let generation = self.generation.read();
        let (h0, h1) = self.bucket_indices(&generation, key);
        let (bucket0, bucket1) = Self::lock_pair(&generation, h0, h1);
        bucket0.contains(key) || bucket1.contains(key)
    }

    /// Sum of live keys across both tables.
    ///
    /// Takes the shared resize permit and locks buckets one at a time: the
    /// count is exact at any quiescent point and best-effort while mutators
    /// are in flight, but never racing a table swap.
    fn len(&self) -> usize {
        let generation = self.generation.read();
        generation
            .tables
            .iter()
            .map(|table| table.iter().map(|bucket| bucket.lock().len()).sum::<usize>())
            .sum()
    }
}

impl<T, H> fmt::Debug for StripedCuckooSet<T, H>
where
    T: Hash + Eq + Clone + Send + Sync,
    H: KeyHasher + Clone + Default,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StripedCuckooSet")
            .field("capacity", &self.capacity())
            .field("probe_size", &self.config.probe_size)
            .field("relocation_threshold", &self.config.relocation_threshold)
            .field("relocation_limit", &self.config.relocation_limit)
            .field("len", &self.len())
            .field("resizes", &self.resize_count())
            .field("hasher", &self.hasher.name())
            .finish()
    }
}

impl<T, H> fmt::Display for StripedCuckooSet<T, H>
where
    T: Hash + Eq + Clone + Send + Sync,
    H: KeyHasher + Clone + Default,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "StripedCuckooSet(2 x {} buckets, probe={}, threshold={}, len={})",
            self.capacity(),
            self.config.probe_size,
            self.config.relocation_threshold,
            self.len()
        )
    }
}
