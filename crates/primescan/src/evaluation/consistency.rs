//! Cross-variant agreement checks.
//!
//! All six generator variants must return the same primes for the same
//! bound. [`cross_check`] runs them in [`Method::ALL`] order, takes the
//! first as the reference, and reports the first one that disagrees.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::algorithms::Method;
use crate::primitives::errors::PrimeError;

/// Run every variant on `bound` and return the agreed primes.
///
/// `bound` must be below `isize::MAX`.
pub fn cross_check(bound: usize) -> Result<Vec<usize>, PrimeError> {
    let reference_method = Method::ALL[0];
    let reference = reference_method.run(bound, &mut ())?;

    for method in Method::ALL.iter().skip(1) {
        let primes = method.run(bound, &mut ())?;
        if primes != reference {
            tracing::warn!(
                bound,
                expected = %reference_method,
                actual = %method,
                "generator variants disagree"
            );
            return Err(PrimeError::VariantMismatch {
                expected: reference_method,
                actual: *method,
                bound,
            });
        }
    }

    tracing::trace!(bound, count = reference.len(), "all variants agree");
    Ok(reference)
}

/// Check that `primes` matches what `method` produces for `bound`.
pub fn verify_against(
    method: Method,
    primes: &[usize],
    bound: usize,
) -> Result<(), PrimeError> {
    let agreed = cross_check(bound)?;
    if agreed.as_slice() != primes {
        return Err(PrimeError::VariantMismatch {
            expected: Method::ALL[0],
            actual: method,
            bound,
        });
    }
    Ok(())
}
