//! Configuration parameters for cuckoo sets.
//!
//! Four knobs govern a set's shape and its response to pressure:
//!
//! | Knob                   | Role                                            |
//! |------------------------|-------------------------------------------------|
//! | `initial_capacity`     | buckets per table at construction               |
//! | `probe_size`           | hard cap on keys per bucket                     |
//! | `relocation_threshold` | soft cap that triggers proactive relocation     |
//! | `relocation_limit`     | max cascade rounds before falling back to resize|
//!
//! The threshold sits at or below the probe size: the gap between them is the
//! slack that lets an insert complete immediately and defer rebalancing to
//! the relocation engine. With `probe_size = relocation_threshold = 1` the
//! bucketized design degenerates into classic single-slot cuckoo hashing:
//! one data structure, two behaviors.
//!
//! # Examples
//!
//! ```
//! use cuckoocraft::CuckooConfig;
//!
//! let config = CuckooConfig::default();
//! assert!(config.validate().is_ok());
//!
//! let bad = CuckooConfig { relocation_threshold: 9, ..config };
//! assert!(bad.validate().is_err());
//! ```

use crate::error::{CuckooCraftError, Result};

/// Default buckets per table.
pub const DEFAULT_INITIAL_CAPACITY: usize = 1024;

/// Default hard cap on keys per bucket.
pub const DEFAULT_PROBE_SIZE: usize = 4;

/// Default soft cap triggering relocation.
pub const DEFAULT_RELOCATION_THRESHOLD: usize = 2;

/// Default maximum relocation cascade rounds.
///
/// Practical displacement limits sit in the 100-200 range; past that, the
/// cascade is almost certainly cycling and a resize is the cheaper exit.
pub const DEFAULT_RELOCATION_LIMIT: usize = 100;

/// Tuning parameters for a [`StripedCuckooSet`](crate::sync::StripedCuckooSet).
///
/// Plain data: construct it literally, with struct update syntax from
/// `default()`, or through [`CuckooSetBuilder`](crate::builder::CuckooSetBuilder).
/// Validation happens once, at set construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CuckooConfig {
    /// Buckets per table at construction. The table count is always two and
    /// the capacity doubles on each resize; it never shrinks.
    pub initial_capacity: usize,

    /// Hard cap on keys per bucket. No bucket ever exceeds this.
    pub probe_size: usize,

    /// Soft cap on keys per bucket. An append that lands a bucket above this
    /// (but within `probe_size`) succeeds and then kicks off relocation.
    /// Must satisfy `1 <= relocation_threshold <= probe_size`.
    pub relocation_threshold: usize,

    /// Maximum rounds the relocation cascade may run before the set falls
    /// back to doubling the tables.
    pub relocation_limit: usize,
}

impl Default for CuckooConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            probe_size: DEFAULT_PROBE_SIZE,
            relocation_threshold: DEFAULT_RELOCATION_THRESHOLD,
            relocation_limit: DEFAULT_RELOCATION_LIMIT,
        }
    }
}

impl CuckooConfig {
    /// The degenerate single-slot configuration: classic cuckoo hashing with
    /// one key per bucket and no probe-set slack.
    #[must_use]
    pub fn single_slot(initial_capacity: usize, relocation_limit: usize) -> Self {
        Self {
            initial_capacity,
            probe_size: 1,
            relocation_threshold: 1,
            relocation_limit,
        }
    }

    /// Check every parameter against its documented range.
    ///
    /// # Errors
    ///
    /// - `initial_capacity == 0` → [`CuckooCraftError::InvalidCapacity`]
    /// - `probe_size == 0` → [`CuckooCraftError::InvalidProbeSize`]
    /// - `relocation_threshold` outside `[1, probe_size]` →
    ///   [`CuckooCraftError::InvalidThreshold`]
    /// - `relocation_limit == 0` → [`CuckooCraftError::InvalidRelocationLimit`]
    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(CuckooCraftError::invalid_capacity(self.initial_capacity));
        }
        if self.probe_size == 0 {
            return Err(CuckooCraftError::invalid_probe_size(self.probe_size));
        }
        if self.relocation_threshold == 0 || self.relocation_threshold > self.probe_size {
            return Err(CuckooCraftError::invalid_threshold(
                self.relocation_threshold,
                self.probe_size,
            ));
        }
        if self.relocation_limit == 0 {
            return Err(CuckooCraftError::invalid_relocation_limit(
                self.relocation_limit,
            ));
        }
        Ok(())
    }
}
