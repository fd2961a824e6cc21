#![cfg(feature = "dev")]
//! Tests for bound and configuration validation.
//!
//! ## Test Organization
//!
//! 1. **Bound Conversion** - Accepted bounds across integer types
//! 2. **Bound Rejection** - Negative, oversized and over-limit bounds
//! 3. **Configuration** - Max bound and duplicate parameters

use primescan::internals::engine::validator::Validator;
use primescan::internals::primitives::errors::PrimeError;

// ============================================================================
// Bound Conversion Tests
// ============================================================================

/// Test that valid bounds convert unchanged.
#[test]
fn test_validate_bound_accepts() {
    assert_eq!(Validator::validate_bound(0u8, 100), Ok(0));
    assert_eq!(Validator::validate_bound(10i32, 100), Ok(10));
    assert_eq!(Validator::validate_bound(100u64, 100), Ok(100));
    assert_eq!(Validator::validate_bound(255u8, 1_000), Ok(255));
}

// ============================================================================
// Bound Rejection Tests
// ============================================================================

/// Test that negative bounds are rejected with their value.
#[test]
fn test_validate_bound_negative() {
    assert_eq!(
        Validator::validate_bound(-1i32, 100),
        Err(PrimeError::NegativeBound(-1))
    );
    assert_eq!(
        Validator::validate_bound(i64::MIN, 100),
        Err(PrimeError::NegativeBound(i64::MIN as i128))
    );
}

/// Test that bounds above the limit are rejected.
#[test]
fn test_validate_bound_too_large() {
    assert_eq!(
        Validator::validate_bound(101u32, 100),
        Err(PrimeError::BoundTooLarge { got: 101, max: 100 })
    );
}

/// Test that bounds not representable as `usize` are rejected.
#[test]
fn test_validate_bound_exceeds_usize() {
    assert_eq!(
        Validator::validate_bound(u128::MAX, 100),
        Err(PrimeError::BoundTooLarge {
            got: u128::MAX,
            max: 100
        })
    );
}

// ============================================================================
// Configuration Tests
// ============================================================================

/// Test the max bound limits.
#[test]
fn test_validate_max_bound() {
    assert!(Validator::validate_max_bound(1).is_ok());
    assert!(Validator::validate_max_bound(Validator::MAX_SAFE_BOUND).is_ok());
    assert_eq!(
        Validator::validate_max_bound(0),
        Err(PrimeError::InvalidMaxBound(0))
    );
    assert_eq!(
        Validator::validate_max_bound(usize::MAX),
        Err(PrimeError::InvalidMaxBound(usize::MAX))
    );

    // A marking array of cap + 1 entries must be a legal allocation request
    assert!(Validator::MAX_SAFE_BOUND < isize::MAX as usize);
    assert_eq!(
        Validator::validate_max_bound(isize::MAX as usize),
        Err(PrimeError::InvalidMaxBound(isize::MAX as usize))
    );
}

/// Test duplicate parameter detection.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("method")),
        Err(PrimeError::DuplicateParameter {
            parameter: "method"
        })
    );
}
