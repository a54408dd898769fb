//! Concurrency integration tests.
//!
//! The central check: N threads hammer one set
//! with a fixed add/remove/contains mix while keeping their own signed tally
//! of successful mutations. After the join, `len()` must equal the
//! pre-populated count plus the summed tallies, exactly, every run.

use cuckoocraft::core::ConcurrentSet;
use cuckoocraft::StripedCuckooSet;

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Deterministic per-thread key stream (splitmix-style), so the stress mix
/// needs no dev-dependency and reproduces across runs.
struct KeyStream {
    state: u64,
}

impl KeyStream {
    fn new(seed: u64) -> Self {
        Self {
            state: seed.wrapping_mul(0x9e37_79b9_7f4a_7c15).wrapping_add(1),
        }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }
}

/// Run the mixed workload and return (expected_len, actual_len).
///
/// Workload mix: 30% add, 30% remove, 40% contains,
/// keys drawn from a space four times the pre-population target.
fn run_mixed_workload(
    num_threads: u64,
    ops_per_thread: u64,
    prepopulate: u64,
    key_space: u64,
) -> (i64, i64) {
    let set = Arc::new(StripedCuckooSet::<u64>::new(64, 100, 4, 2).unwrap());

    let mut seed_stream = KeyStream::new(0xfeed);
    set.populate(prepopulate as usize, || seed_stream.next() % key_space);
    let initial = set.len() as i64;
    assert_eq!(initial, prepopulate as i64);

    let handles: Vec<_> = (0..num_threads)
        .map(|t| {
            let set = Arc::clone(&set);
            thread::spawn(move || {
                let mut keys = KeyStream::new(t + 1);
                let mut ops = KeyStream::new(t + 1_000_003);
                let mut tally = 0i64;

                for _ in 0..ops_per_thread {
                    let key = keys.next() % key_space;
                    let choice = ops.next() % 100;

                    if choice < 30 {
                        if set.add(key) {
                            tally += 1;
                        }
                    } else if choice < 60 {
                        if set.remove(&key) {
                            tally -= 1;
                        }
                    } else {
                        set.contains(&key);
                    }
                }

                tally
            })
        })
        .collect();

    let mut expected = initial;
    for handle in handles {
        expected += handle.join().unwrap();
    }

    (expected, set.len() as i64)
}

#[test]
fn test_mixed_workload_size_reconciles_exactly() {
    let (expected, actual) = run_mixed_workload(8, 10_000, 1_000, 4_000);
    assert_eq!(
        expected, actual,
        "per-thread tallies and len() disagree: lost or phantom updates"
    );
}

#[test]
fn test_mixed_workload_reconciles_across_repeated_runs() {
    // Zero tolerance, every run: a single lost update fails one of these.
    for _ in 0..3 {
        let (expected, actual) = run_mixed_workload(4, 5_000, 500, 2_000);
        assert_eq!(expected, actual);
    }
}

#[test]
fn test_concurrent_adds_all_visible() {
    let set = Arc::new(StripedCuckooSet::<u64>::new(16, 100, 4, 2).unwrap());

    let handles: Vec<_> = (0..8u64)
        .map(|t| {
            let set = Arc::clone(&set);
            thread::spawn(move || {
                for i in 0..2_000u64 {
                    set.add(t * 2_000 + i);
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    assert_eq!(set.len(), 16_000);
    for t in 0..8u64 {
        for i in 0..2_000u64 {
            assert!(set.contains(&(t * 2_000 + i)), "missing {}", t * 2_000 + i);
        }
    }
}

#[test]
fn test_resize_storm_under_contention() {
    // Start tiny so every thread keeps tripping resizes; membership must
    // survive all of them.
    let set = Arc::new(StripedCuckooSet::<u64>::new(2, 8, 2, 1).unwrap());

    let handles: Vec<_> = (0..4u64)
        .map(|t| {
            let set = Arc::clone(&set);
            thread::spawn(move || {
                for i in 0..1_000u64 {
                    set.add(t * 1_000 + i);
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    assert!(set.resize_count() > 0, "workload sized to force resizes");
    assert_eq!(set.len(), 4_000);
    for t in 0..4u64 {
        for i in 0..1_000u64 {
            assert!(set.contains(&(t * 1_000 + i)));
        }
    }
}

#[test]
fn test_disjoint_and_overlapping_key_mix() {
    // Half the threads fight over the same small key range (maximum bucket
    // overlap), half work on private ranges (maximum parallelism).
    let set = Arc::new(StripedCuckooSet::<u64>::new(32, 100, 4, 2).unwrap());

    let handles: Vec<_> = (0..8u64)
        .map(|t| {
            let set = Arc::clone(&set);
            thread::spawn(move || {
                let mut tally = 0i64;
                if t % 2 == 0 {
                    // Contended range: add and remove the same 64 keys.
                    for i in 0..4_000u64 {
                        let key = i % 64;
                        if i % 2 == 0 {
                            if set.add(key) {
                                tally += 1;
                            }
                        } else if set.remove(&key) {
                            tally -= 1;
                        }
                    }
                } else {
                    // Private range: every add is a new key.
                    for i in 0..2_000u64 {
                        if set.add(1_000_000 + t * 10_000 + i) {
                            tally += 1;
                        }
                    }
                }
                tally
            })
        })
        .collect();

    let mut expected = 0i64;
    for h in handles {
        expected += h.join().unwrap();
    }

    assert_eq!(set.len() as i64, expected);
}

#[test]
fn test_stress_terminates_within_watchdog_budget() {
    // Deadlock freedom, empirically: the whole mixed workload must finish
    // well inside the budget or we declare a hang.
    let (tx, rx) = mpsc::channel();

    let worker = thread::spawn(move || {
        let result = run_mixed_workload(8, 5_000, 500, 2_000);
        tx.send(result).ok();
    });

    match rx.recv_timeout(Duration::from_secs(60)) {
        Ok((expected, actual)) => {
            assert_eq!(expected, actual);
            worker.join().unwrap();
        }
        Err(_) => panic!("stress workload did not terminate within 60s (possible deadlock)"),
    }
}

#[test]
fn test_len_is_safe_during_mutation() {
    // len() may be stale mid-flight but must never tear, panic, or deadlock.
    let set = Arc::new(StripedCuckooSet::<u64>::new(8, 32, 4, 2).unwrap());
    let stop = Arc::new(std::sync::atomic::AtomicBool::new(false));

    let mutator = {
        let set = Arc::clone(&set);
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            let mut keys = KeyStream::new(7);
            while !stop.load(std::sync::atomic::Ordering::Relaxed) {
                let key = keys.next() % 256;
                set.add(key);
                set.remove(&key);
            }
        })
    };

    for _ in 0..1_000 {
        let len = set.len();
        assert!(len <= 256, "len() exceeded live key bound: {}", len);
    }

    stop.store(true, std::sync::atomic::Ordering::Relaxed);
    mutator.join().unwrap();
}
