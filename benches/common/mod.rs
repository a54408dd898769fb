//! Shared key generators for benchmarks.
//!
//! The set core treats key generation as an external collaborator; these
//! helpers are that collaborator for the criterion harness. Keyspaces span
//! several multiples of the populated count, so adds hit a healthy mix of
//! fresh and duplicate keys.
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Keys drawn uniformly from `[0, space)` with a fixed seed per stream.
pub struct UniformKeys {
    rng: StdRng,
    space: u64,
}

impl UniformKeys {
    pub fn new(seed: u64, space: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            space,
        }
    }

    #[inline]
    pub fn next_key(&mut self) -> u64 {
        self.rng.gen_range(0..self.space)
    }
}

/// Generate `count` distinct sequential keys.
pub fn sequential_keys(count: usize) -> Vec<u64> {
    (0..count as u64).collect()
}

/// Generate string keys with a predictable format ("key_00000001", ...).
pub fn sequential_strings(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("key_{i:08}")).collect()
}

/// Pick an operation from the standard mix: 30% add, 30% remove,
/// 40% contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add,
    Remove,
    Contains,
}

pub struct OpMix {
    rng: StdRng,
}

impl OpMix {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn next_op(&mut self) -> Op {
        match self.rng.gen_range(0..100u32) {
            0..=29 => Op::Add,
            30..=59 => Op::Remove,
            _ => Op::Contains,
        }
    }
}
