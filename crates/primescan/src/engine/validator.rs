//! Input validation for generator configuration and bounds.
//!
//! ## Purpose
//!
//! This module checks builder configuration and converts caller-supplied
//! bounds of any primitive integer type into kernel-ready `usize` values.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Bound checks are generic over `PrimInt` types.
//!
//! ## Invariants
//!
//! * A validated bound is non-negative, fits in `usize`, and is `<= max_bound`.
//! * A validated `max_bound` is in `1..isize::MAX`, so kernel arithmetic never
//!   overflows and a marking array of `bound + 1` entries is a valid allocation request.
//!
//! ## Non-goals
//!
//! * This module does not clamp or otherwise correct invalid inputs.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::errors::PrimeError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for generator configuration and bounds.
pub struct Validator;

impl Validator {
    /// Largest bound any kernel can run with.
    ///
    /// Whether the marking array for it can actually be allocated is decided
    /// at run time.
    pub const MAX_SAFE_BOUND: usize = isize::MAX as usize - 1;

    /// Validate a bound and convert it to `usize`.
    pub fn validate_bound<T: PrimInt>(bound: T, max_bound: usize) -> Result<usize, PrimeError> {
        // Check 1: Non-negative
        if bound < T::zero() {
            return Err(PrimeError::NegativeBound(
                bound.to_i128().unwrap_or(i128::MIN),
            ));
        }

        // Check 2: Fits in usize
        let widened = bound.to_u128().unwrap_or(u128::MAX);
        let index = bound.to_usize().ok_or(PrimeError::BoundTooLarge {
            got: widened,
            max: max_bound,
        })?;

        // Check 3: Within the configured limit
        if index > max_bound {
            return Err(PrimeError::BoundTooLarge {
                got: widened,
                max: max_bound,
            });
        }

        Ok(index)
    }

    /// Validate the configured maximum bound.
    pub fn validate_max_bound(max_bound: usize) -> Result<(), PrimeError> {
        if max_bound == 0 || max_bound > Self::MAX_SAFE_BOUND {
            return Err(PrimeError::InvalidMaxBound(max_bound));
        }
        Ok(())
    }

    /// Validate that no builder parameter was set more than once.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), PrimeError> {
        if let Some(parameter) = duplicate_param {
            return Err(PrimeError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
