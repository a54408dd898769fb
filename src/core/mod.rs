//! Core types, traits, and configuration for CuckooCraft.
//!
//! This module contains the building blocks the concurrent set is assembled
//! from:
//!
//! - **Traits**: [`ConcurrentSet`], the `&self` interior-mutability contract
//! - **Data structures**: [`Bucket`], the bounded, insertion-ordered probe set
//! - **Configuration**: [`CuckooConfig`], validated tuning parameters
//!
//! # Module Organization
//!
//! ```text
//! core/
//! ├── set.rs     - Trait definition
//! ├── bucket.rs  - Probe-set implementation
//! ├── config.rs  - Tuning parameters and validation
//! └── mod.rs     - This file (public API)
//! ```
//!
//! # Design Principles
//!
//! 1. **Separation of concerns**: buckets store, stripes lock, the facade
//!    orchestrates; no layer reaches around another
//! 2. **Locking lives above storage**: `Bucket` has no synchronization of its
//!    own; the lock discipline is owned entirely by [`crate::sync`]
//! 3. **Validate once**: configuration errors surface at construction, never
//!    on the hot path

pub mod bucket;
pub mod config;
pub mod set;

pub use bucket::Bucket;
pub use config::{
    CuckooConfig, DEFAULT_INITIAL_CAPACITY, DEFAULT_PROBE_SIZE, DEFAULT_RELOCATION_LIMIT,
    DEFAULT_RELOCATION_THRESHOLD,
};
pub use set::ConcurrentSet;
