#![cfg(feature = "dev")]
//! Tests for generator output.
//!
//! ## Test Organization
//!
//! 1. **Query Methods** - len, largest, contains
//! 2. **Display** - Summary, statistics and row elision

use primescan::internals::algorithms::{Method, SieveVariant};
use primescan::internals::engine::output::PrimeResult;
use primescan::internals::evaluation::stats::WorkStats;

fn result_with(primes: Vec<u32>, bound: u32) -> PrimeResult<u32> {
    PrimeResult {
        bound,
        primes,
        method: Method::Sieve(SieveVariant::SqrtBounded),
        stats: None,
        cross_checked: false,
    }
}

// ============================================================================
// Query Method Tests
// ============================================================================

/// Test the query helpers on a populated result.
#[test]
fn test_output_queries() {
    let result = result_with(vec![2, 3, 5, 7], 10);
    assert_eq!(result.len(), 4);
    assert!(!result.is_empty());
    assert_eq!(result.largest(), Some(7));
    assert!(result.contains(5));
    assert!(!result.contains(9));
    assert!(!result.has_stats());
}

/// Test the query helpers on an empty result.
#[test]
fn test_output_queries_empty() {
    let result = result_with(vec![], 1);
    assert!(result.is_empty());
    assert_eq!(result.largest(), None);
    assert!(!result.contains(1));
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the summary and table for a short result.
#[test]
fn test_output_display_short() {
    let text = format!("{}", result_with(vec![2, 3, 5, 7], 10));
    assert!(text.contains("Summary:"));
    assert!(text.contains("Bound:   10"));
    assert!(text.contains("Method:  Sieve(SqrtBounded)"));
    assert!(text.contains("Largest: 7"));
    assert!(!text.contains("..."));
    assert!(!text.contains("Cross-check"));
}

/// Test that long results elide the middle rows.
#[test]
fn test_output_display_elides() {
    let primes: Vec<u32> = vec![
        2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83,
        89, 97,
    ];
    let text = format!("{}", result_with(primes, 100));
    assert!(text.contains("..."));
    assert!(text.contains("97"));
    assert!(!text.contains(" 43\n"), "row 13 should be elided");
}

/// Test that statistics and the cross-check flag are rendered.
#[test]
fn test_output_display_with_stats() {
    let mut result = result_with(vec![2, 3], 3);
    result.stats = Some(WorkStats::new());
    result.cross_checked = true;
    let text = format!("{}", result);
    assert!(text.contains("Work Statistics:"));
    assert!(text.contains("Cross-check: Passed"));
}
