//! Error types for CuckooCraft operations.
//!
//! Construction is the only fallible part of the public API: duplicate adds
//! and absent removes are ordinary boolean outcomes, and capacity pressure is
//! absorbed internally by relocation and resizing. What remains here is
//! parameter validation plus an internal-invariant variant for conditions
//! that indicate a bug in CuckooCraft itself.
//!
//! # Error Propagation
//!
//! ```
//! use cuckoocraft::{Result, CuckooConfig};
//!
//! fn tuned_config(capacity: usize) -> Result<CuckooConfig> {
//!     let config = CuckooConfig {
//!         initial_capacity: capacity,
//!         ..CuckooConfig::default()
//!     };
//!     config.validate()?;
//!     Ok(config)
//! }
//! # assert!(tuned_config(1024).is_ok());
//! # assert!(tuned_config(0).is_err());
//! ```

#![allow(clippy::module_name_repetitions)]

use std::fmt;

/// Result type alias for CuckooCraft operations.
///
/// All fallible operations return [`Result<T>`] where the error type is
/// [`CuckooCraftError`].
pub type Result<T> = std::result::Result<T, CuckooCraftError>;

/// Errors that can occur during cuckoo set construction and validation.
///
/// # Design Notes
/// - `Clone` + `PartialEq` enable testing and error comparison
/// - All variants include the offending value for diagnostics
/// - Runtime conditions (duplicate key, absent key, full bucket) never reach
///   this type; they are boolean results or internal recovery paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CuckooCraftError {
    /// Initial table capacity is invalid.
    ///
    /// Each of the two tables needs at least one bucket; a zero-bucket table
    /// has no valid hash index.
    InvalidCapacity {
        /// The invalid capacity that was provided.
        capacity: usize,
    },

    /// Probe-set capacity is invalid.
    ///
    /// Every bucket holds up to `probe_size` keys; zero would make insertion
    /// impossible.
    InvalidProbeSize {
        /// The invalid probe size that was provided.
        probe_size: usize,
    },

    /// Relocation threshold is out of range for the configured probe size.
    ///
    /// The threshold is the soft occupancy cap that triggers relocation. It
    /// must satisfy `1 <= threshold <= probe_size`. Equality with a probe
    /// size of one is the degenerate single-slot configuration (classic
    /// non-bucketized cuckoo hashing).
    InvalidThreshold {
        /// The invalid threshold that was provided.
        threshold: usize,
        /// The probe size it was validated against.
        probe_size: usize,
    },

    /// Relocation round limit is invalid.
    ///
    /// The cascade must be allowed at least one round, otherwise every
    /// over-threshold bucket forces an immediate resize.
    InvalidRelocationLimit {
        /// The invalid limit that was provided.
        limit: usize,
    },

    /// Internal invariant violated.
    ///
    /// This should never occur in correct usage. If it does, it indicates a
    /// bug in CuckooCraft itself.
    Internal {
        /// Description of the invariant that was violated.
        message: String,
    },
}

impl fmt::Display for CuckooCraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity { capacity } => {
                write!(
                    f,
                    "Invalid table capacity: {}. Each table needs at least one bucket.",
                    capacity
                )
            }
            Self::InvalidProbeSize { probe_size } => {
                write!(
                    f,
                    "Invalid probe size: {}. Buckets must hold at least one key.",
                    probe_size
                )
            }
            Self::InvalidThreshold {
                threshold,
                probe_size,
            } => {
                write!(
                    f,
                    "Invalid relocation threshold: {}. Must be in range [1, {}].",
                    threshold, probe_size
                )
            }
            Self::InvalidRelocationLimit { limit } => {
                write!(
                    f,
                    "Invalid relocation limit: {}. The cascade needs at least one round.",
                    limit
                )
            }
            Self::Internal { message } => {
                write!(
                    f,
                    "Internal error (this is a bug in CuckooCraft): {}.",
                    message
                )
            }
        }
    }
}

impl std::error::Error for CuckooCraftError {}

impl CuckooCraftError {
    /// Create an `InvalidCapacity` error.
    #[must_use]
    pub fn invalid_capacity(capacity: usize) -> Self {
        Self::InvalidCapacity { capacity }
    }

    /// Create an `InvalidProbeSize` error.
    #[must_use]
    pub fn invalid_probe_size(probe_size: usize) -> Self {
        Self::InvalidProbeSize { probe_size }
    }

    /// Create an `InvalidThreshold` error.
    #[must_use]
    pub fn invalid_threshold(threshold: usize, probe_size: usize) -> Self {
        Self::InvalidThreshold {
            threshold,
            probe_size,
        }
    }

    /// Create an `InvalidRelocationLimit` error.
    #[must_use]
    pub fn invalid_relocation_limit(limit: usize) -> Self {
        Self::InvalidRelocationLimit { limit }
    }

    /// Create an `Internal` error.
    ///
    /// This should only be used for conditions that indicate bugs in
    /// CuckooCraft.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
