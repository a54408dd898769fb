//! Concurrent operations benchmarks.
//!
//! Measures mixed add/remove/contains throughput across thread counts, plus
//! isolated insert and query paths. The mixed workload pre-populates to half
//! the initial table capacity, then hammers with 30% add / 30% remove /
//! 40% contains over a keyspace four times the populated count.

mod common;

use common::{Op, OpMix, UniformKeys};

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use cuckoocraft::core::ConcurrentSet;
use cuckoocraft::StripedCuckooSet;
use std::sync::Arc;
use std::thread;

const INITIAL_CAPACITY: usize = 1 << 14;
const RELOCATION_LIMIT: usize = 100;
const PROBE_SIZE: usize = 4;
const THRESHOLD: usize = 2;

fn prepopulated_set(count: usize, key_space: u64) -> Arc<StripedCuckooSet<u64>> {
    let set = Arc::new(
        StripedCuckooSet::<u64>::new(INITIAL_CAPACITY, RELOCATION_LIMIT, PROBE_SIZE, THRESHOLD)
            .unwrap(),
    );
    let mut keys = UniformKeys::new(0xc0ffee, key_space);
    set.populate(count, || keys.next_key());
    set
}

/// Benchmark the mixed workload at several thread counts.
fn bench_mixed_workload(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_workload");

    let ops_per_thread = 10_000u64;
    let prepopulate = INITIAL_CAPACITY / 2;
    let key_space = (INITIAL_CAPACITY * 4) as u64;
    let thread_counts = [1, 2, 4, 8];

    for &threads in &thread_counts {
        group.throughput(Throughput::Elements(ops_per_thread * threads as u64));

        group.bench_with_input(
            BenchmarkId::new("striped", threads),
            &threads,
            |b, &threads| {
                b.iter_batched(
                    || prepopulated_set(prepopulate, key_space),
                    |set| {
                        let handles: Vec<_> = (0..threads)
                            .map(|t| {
                                let set = Arc::clone(&set);
                                thread::spawn(move || {
                                    let mut keys = UniformKeys::new(t as u64 + 1, key_space);
                                    let mut ops = OpMix::new(t as u64 + 101);
                                    for _ in 0..ops_per_thread {
                                        let key = keys.next_key();
                                        match ops.next_op() {
                                            Op::Add => {
                                                black_box(set.add(key));
                                            }
                                            Op::Remove => {
                                                black_box(set.remove(&key));
                                            }
                                            Op::Contains => {
                                                black_box(set.contains(&key));
                                            }
                                        }
                                    }
                                })
                            })
                            .collect();

                        for handle in handles {
                            handle.join().unwrap();
                        }

                        black_box(set)
                    },
                    criterion::BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark concurrent inserts of distinct keys (no duplicates, no removes).
fn bench_concurrent_inserts(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_inserts");

    let ops_per_thread = 10_000usize;
    let thread_counts = [1, 2, 4, 8];

    for &threads in &thread_counts {
        group.throughput(Throughput::Elements((ops_per_thread * threads) as u64));

        group.bench_with_input(
            BenchmarkId::new("striped", threads),
            &threads,
            |b, &threads| {
                b.iter_batched(
                    || {
                        Arc::new(
                            StripedCuckooSet::<u64>::new(
                                INITIAL_CAPACITY,
                                RELOCATION_LIMIT,
                                PROBE_SIZE,
                                THRESHOLD,
                            )
                            .unwrap(),
                        )
                    },
                    |set| {
                        let handles: Vec<_> = (0..threads)
                            .map(|t| {
                                let set = Arc::clone(&set);
                                let start = (t * ops_per_thread) as u64;
                                thread::spawn(move || {
                                    for i in 0..ops_per_thread as u64 {
                                        set.add(black_box(start + i));
                                    }
                                })
                            })
                            .collect();

                        for handle in handles {
                            handle.join().unwrap();
                        }

                        black_box(set)
                    },
                    criterion::BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark read-only lookups against a pre-populated set.
fn bench_concurrent_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_queries");

    let ops_per_thread = 10_000u64;
    let prepopulate = INITIAL_CAPACITY / 2;
    let key_space = (INITIAL_CAPACITY * 4) as u64;
    let thread_counts = [1, 4, 8];

    let set = prepopulated_set(prepopulate, key_space);

    for &threads in &thread_counts {
        group.throughput(Throughput::Elements(ops_per_thread * threads as u64));

        group.bench_with_input(
            BenchmarkId::new("striped", threads),
            &threads,
            |b, &threads| {
                b.iter(|| {
                    let handles: Vec<_> = (0..threads)
                        .map(|t| {
                            let set = Arc::clone(&set);
                            thread::spawn(move || {
                                let mut keys = UniformKeys::new(t as u64 + 7, key_space);
                                let mut hits = 0usize;
                                for _ in 0..ops_per_thread {
                                    if set.contains(black_box(&keys.next_key())) {
                                        hits += 1;
                                    }
                                }
                                hits
                            })
                        })
                        .collect();

                    let mut total = 0;
                    for handle in handles {
                        total += handle.join().unwrap();
                    }
                    black_box(total)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_mixed_workload,
    bench_concurrent_inserts,
    bench_concurrent_queries
);
criterion_main!(benches);
