#![cfg(feature = "dev")]
//! Tests for cross-variant consistency checks.

use primescan::internals::algorithms::{Method, SieveVariant};
use primescan::internals::evaluation::consistency::{cross_check, verify_against};
use primescan::internals::primitives::errors::PrimeError;

/// Test that every variant agrees across a range of bounds.
#[test]
fn test_cross_check_agrees() {
    for bound in [0, 1, 2, 10, 97, 100, 500] {
        let primes = cross_check(bound).expect("variants should agree");
        assert_eq!(primes, Method::ALL[0].run(bound, &mut ()).unwrap());
    }
    assert_eq!(cross_check(10), Ok(vec![2, 3, 5, 7]));
}

/// Test that a tampered sequence is reported as a mismatch.
#[test]
fn test_verify_against_detects_tampering() {
    let method = Method::Sieve(SieveVariant::Vectorized);
    assert_eq!(verify_against(method, &[2, 3, 5, 7], 10), Ok(()));

    let err = verify_against(method, &[2, 3, 5], 10).unwrap_err();
    assert_eq!(
        err,
        PrimeError::VariantMismatch {
            expected: Method::ALL[0],
            actual: method,
            bound: 10,
        }
    );
}
