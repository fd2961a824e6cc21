#![cfg(feature = "dev")]
//! Tests for the execution engine.

use primescan::internals::algorithms::{Method, SieveVariant, TrialVariant};
use primescan::internals::engine::executor::{ExecutorConfig, PrimeExecutor};

fn config(method: Method, collect_stats: bool, cross_check: bool) -> ExecutorConfig {
    ExecutorConfig {
        method,
        collect_stats,
        cross_check,
    }
}

/// Test that statistics are only attached when requested.
#[test]
fn test_executor_stats_optional() {
    let method = Method::Sieve(SieveVariant::Unbounded);

    let plain = PrimeExecutor::run_with_config(30, &config(method, false, false)).unwrap();
    assert!(plain.stats.is_none());

    let counted = PrimeExecutor::run_with_config(30, &config(method, true, false)).unwrap();
    assert_eq!(counted.primes, plain.primes);
    assert_eq!(counted.stats.map(|s| s.outer_steps), Some(29));
}

/// Test that cross-checked runs succeed for every method.
#[test]
fn test_executor_cross_check_all_methods() {
    for method in Method::ALL {
        let output = PrimeExecutor::run_with_config(60, &config(method, false, true)).unwrap();
        assert_eq!(output.primes.len(), 17, "{}", method);
    }
}

/// Test that bounds below 2 produce no primes and no work.
#[test]
fn test_executor_empty_bound() {
    let method = Method::TrialDivision(TrialVariant::Naive);
    let output = PrimeExecutor::run_with_config(1, &config(method, true, true)).unwrap();
    assert!(output.primes.is_empty());
    assert_eq!(output.stats.map(|s| s.total()), Some(0));
}
