#![cfg(feature = "dev")]
//! Tests for the trial-division generators.
//!
//! These tests verify the three trial-division variants:
//! - Known prime sequences for small bounds
//! - Agreement between variants
//! - The divisor helper used by the `Helper` variant
//!
//! ## Test Organization
//!
//! 1. **Known Outputs** - Small bounds with hand-checked results
//! 2. **Edge Cases** - Bounds below 2
//! 3. **Variant Agreement** - Identical output across variants
//! 4. **Helper Function** - `is_divisible_by_any`

use primescan::internals::algorithms::trial::{
    TrialVariant, early_exit, helper, is_divisible_by_any, naive,
};

const ALL: [TrialVariant; 3] = [
    TrialVariant::Naive,
    TrialVariant::EarlyExit,
    TrialVariant::Helper,
];

// ============================================================================
// Known Outputs Tests
// ============================================================================

/// Test that every variant yields the primes up to 10.
#[test]
fn test_trial_bound_ten() {
    for variant in ALL {
        assert_eq!(
            variant.generate(10, &mut ()),
            vec![2, 3, 5, 7],
            "{} should find the primes up to 10",
            variant.name()
        );
    }
}

/// Test that a prime bound is itself included.
#[test]
fn test_trial_bound_is_inclusive() {
    assert_eq!(naive(13, &mut ()), vec![2, 3, 5, 7, 11, 13]);
    assert_eq!(early_exit(13, &mut ()), vec![2, 3, 5, 7, 11, 13]);
    assert_eq!(helper(13, &mut ()), vec![2, 3, 5, 7, 11, 13]);
}

/// Test the prime counting function at 100.
#[test]
fn test_trial_count_to_hundred() {
    let primes = helper(100, &mut ());
    assert_eq!(primes.len(), 25);
    assert_eq!(primes.last(), Some(&97));
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test bounds below the first prime.
#[test]
fn test_trial_small_bounds() {
    for variant in ALL {
        assert!(variant.generate(0, &mut ()).is_empty());
        assert!(variant.generate(1, &mut ()).is_empty());
        assert_eq!(variant.generate(2, &mut ()), vec![2]);
    }
}

// ============================================================================
// Variant Agreement Tests
// ============================================================================

/// Test that all variants agree for every bound up to 500.
#[test]
fn test_trial_variants_agree() {
    for bound in 0..=500 {
        let reference = naive(bound, &mut ());
        assert_eq!(early_exit(bound, &mut ()), reference, "bound {bound}");
        assert_eq!(helper(bound, &mut ()), reference, "bound {bound}");
    }
}

/// Test that output is strictly increasing.
#[test]
fn test_trial_strictly_increasing() {
    let primes = early_exit(1_000, &mut ());
    assert!(primes.windows(2).all(|w| w[0] < w[1]));
}

/// Test that repeated runs are identical.
#[test]
fn test_trial_repeatable() {
    let first = naive(300, &mut ());
    for _ in 0..5 {
        assert_eq!(naive(300, &mut ()), first);
    }
}

// ============================================================================
// Helper Function Tests
// ============================================================================

/// Test the divisor helper.
#[test]
fn test_is_divisible_by_any() {
    assert!(is_divisible_by_any(9, &[2, 3, 5], &mut ()));
    assert!(!is_divisible_by_any(7, &[2, 3, 5], &mut ()));
    assert!(!is_divisible_by_any(4, &[], &mut ()));
}
