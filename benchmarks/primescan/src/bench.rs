//! Criterion benchmarks for the primescan generators and scans.
//!
//! Benchmarks cover:
//! - Trial division variants (naive, early exit, helper)
//! - Sieve variants (unbounded, square-root bounded, vectorized)
//! - Linear scans over present and absent targets
//!
//! Bounds default to a quick scale; use `PRIMESCAN_SCALE=large cargo bench`
//! for the full sweep.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use primescan::internals::algorithms::search::{scan_bounded, scan_unbounded};
use primescan::prelude::*;
use rand::prelude::*;
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

const TRIAL_SMALL: &[usize] = &[500, 2_000];
const TRIAL_LARGE: &[usize] = &[1_000, 5_000, 20_000];
const SIEVE_SMALL: &[usize] = &[10_000, 100_000];
const SIEVE_LARGE: &[usize] = &[10_000, 100_000, 1_000_000];

fn get_scale() -> (&'static [usize], &'static [usize], &'static str) {
    match env::var("PRIMESCAN_SCALE").ok().as_deref() {
        Some("large") => (TRIAL_LARGE, SIEVE_LARGE, "large"),
        _ => (TRIAL_SMALL, SIEVE_SMALL, "small"),
    }
}

/// Generate a shuffled sequence of distinct values with reproducible RNG.
fn generate_sequence(size: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data: Vec<u64> = (0..size as u64).collect();
    data.shuffle(&mut rng);
    data
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_trial_division(c: &mut Criterion) {
    let (trial_bounds, _, scale) = get_scale();
    let mut group = c.benchmark_group(format!("trial_division/{scale}"));
    group.sample_size(20);

    for &bound in trial_bounds {
        group.throughput(Throughput::Elements(bound as u64));
        for variant in [Naive, EarlyExit, Helper] {
            let generator = Primes::new().method(variant).build().unwrap();
            group.bench_with_input(
                BenchmarkId::new(variant.name(), bound),
                &bound,
                |b, &bound| b.iter(|| generator.generate(black_box(bound)).unwrap()),
            );
        }
    }

    group.finish();
}

fn bench_sieve(c: &mut Criterion) {
    let (_, sieve_bounds, scale) = get_scale();
    let mut group = c.benchmark_group(format!("sieve/{scale}"));
    group.sample_size(20);

    for &bound in sieve_bounds {
        group.throughput(Throughput::Elements(bound as u64));
        for variant in [Unbounded, SqrtBounded, Vectorized] {
            let generator = Primes::new().method(variant).build().unwrap();
            group.bench_with_input(
                BenchmarkId::new(variant.name(), bound),
                &bound,
                |b, &bound| b.iter(|| generator.generate(black_box(bound)).unwrap()),
            );
        }
    }

    group.finish();
}

fn bench_linear_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_scan");

    for size in [1_000, 100_000] {
        let data = generate_sequence(size, 42);
        let present = data[size * 3 / 4];
        let absent = size as u64;
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("counter_driven", size), &data, |b, data| {
            b.iter(|| scan_unbounded(black_box(&present), data).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("length_bounded", size), &data, |b, data| {
            b.iter(|| scan_bounded(black_box(&present), data))
        });
        group.bench_with_input(
            BenchmarkId::new("length_bounded_absent", size),
            &data,
            |b, data| b.iter(|| scan_bounded(black_box(&absent), data)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_trial_division, bench_sieve, bench_linear_scan);
criterion_main!(benches);
