//! Fluent builder for [`StripedCuckooSet`].
//!
//! The positional constructor takes four `usize`s in a row; the builder
//! names them. Both end in the same validation.
//!
//! # Examples
//!
//! ```
//! use cuckoocraft::builder::CuckooSetBuilder;
//!
//! let set = CuckooSetBuilder::new()
//!     .initial_capacity(4096)
//!     .probe_size(4)
//!     .relocation_threshold(2)
//!     .relocation_limit(128)
//!     .build::<u64>()?;
//!
//! assert_eq!(set.capacity(), 4096);
//! # Ok::<(), cuckoocraft::CuckooCraftError>(())
//! ```

use crate::core::config::CuckooConfig;
use crate::error::Result;
use crate::hash::KeyHasher;
use crate::sync::StripedCuckooSet;

use std::hash::Hash;

/// Builder for [`StripedCuckooSet`] construction.
///
/// Every knob defaults to its [`CuckooConfig::default`] value; set only what
/// differs. Validation happens in [`build`](Self::build), so an inconsistent
/// combination (say, a threshold above the probe size) errors there rather
/// than panicking later.
#[derive(Debug, Clone, Default)]
pub struct CuckooSetBuilder {
    config: CuckooConfig,
}

impl CuckooSetBuilder {
    /// Start from the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Buckets per table at construction.
    #[must_use]
    pub fn initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.config.initial_capacity = initial_capacity;
        self
    }

    /// Hard cap on keys per bucket.
    #[must_use]
    pub fn probe_size(mut self, probe_size: usize) -> Self {
        self.config.probe_size = probe_size;
        self
    }

    /// Soft cap that triggers relocation.
    #[must_use]
    pub fn relocation_threshold(mut self, relocation_threshold: usize) -> Self {
        self.config.relocation_threshold = relocation_threshold;
        self
    }

    /// Maximum relocation cascade rounds before a resize.
    #[must_use]
    pub fn relocation_limit(mut self, relocation_limit: usize) -> Self {
        self.config.relocation_limit = relocation_limit;
        self
    }

    /// The accumulated configuration, before validation.
    #[must_use]
    pub fn config(&self) -> CuckooConfig {
        self.config
    }

    /// Build a set with the default hasher.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the accumulated configuration is out
    /// of range (see [`CuckooConfig::validate`]).
    pub fn build<T>(self) -> Result<StripedCuckooSet<T>>
    where
        T: Hash + Eq + Clone,
    {
        StripedCuckooSet::with_config(self.config)
    }

    /// Build a set with an explicit hasher instance.
    ///
    /// # Errors
    ///
    /// Returns a validation error when the accumulated configuration is out
    /// of range.
    pub fn build_with_hasher<T, H>(self, hasher: H) -> Result<StripedCuckooSet<T, H>>
    where
        T: Hash + Eq + Clone,
        H: KeyHasher + Clone + Default,
    {
        StripedCuckooSet::with_config_and_hasher(self.config, hasher)
    }
}
