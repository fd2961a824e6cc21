//! Error types for prime generation and linear search.
//!
//! ## Purpose
//!
//! This module defines every error condition the crate can report, from the
//! deliberately reproduced out-of-range access of the unbounded scan to bound
//! and builder validation failures.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (index and length, bound and limit).
//! * **Deferred**: Builder misuse is recorded during configuration and reported at `build()`.
//! * **No-std**: Only `core` formatting is required.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Access faults**: The unbounded scan walking past the end of its input.
//! 2. **Bound validation**: Negative bounds, bounds above the configured limit, and
//!    bounds whose marking array cannot be allocated.
//! 3. **Consistency**: Two generator variants disagreeing on the same bound.
//! 4. **Configuration**: Invalid limits and duplicated builder parameters.
//!
//! ## Invariants
//!
//! * Index and length values are reported zero-based, exactly as accessed.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * The not-found case of the bounded scan is not an error (see `SearchOutcome`).

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::algorithms::Method;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for prime generation and search operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrimeError {
    /// The unbounded scan read past the end of its input.
    IndexOutOfRange {
        /// Zero-based index that was accessed.
        index: usize,
        /// Length of the scanned sequence.
        len: usize,
    },

    /// A signed bound was below zero.
    NegativeBound(i128),

    /// The bound exceeds the configured maximum (or does not fit in `usize`).
    BoundTooLarge {
        /// Requested bound, widened for reporting.
        got: u128,
        /// Largest accepted bound.
        max: usize,
    },

    /// The sieve marking array for this bound could not be allocated.
    AllocationFailed {
        /// Bound the array was sized for.
        bound: usize,
    },

    /// The configured maximum bound is zero or too large to index safely.
    InvalidMaxBound(usize),

    /// Two generator variants produced different primes for the same bound.
    VariantMismatch {
        /// Method whose output was taken as the reference.
        expected: Method,
        /// First method that disagreed with the reference.
        actual: Method,
        /// Bound both methods were run with.
        bound: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for PrimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Index out of range: accessed {index} in a sequence of length {len}")
            }
            Self::NegativeBound(bound) => {
                write!(f, "Invalid bound: {bound} (must be >= 0)")
            }
            Self::BoundTooLarge { got, max } => {
                write!(f, "Bound too large: {got} (must be at most {max})")
            }
            Self::AllocationFailed { bound } => {
                write!(f, "Allocation failed: cannot reserve a marking array for bound {bound}")
            }
            Self::InvalidMaxBound(max) => {
                write!(f, "Invalid max_bound: {max} (must be >= 1 and < isize::MAX)")
            }
            Self::VariantMismatch {
                expected,
                actual,
                bound,
            } => {
                write!(
                    f,
                    "Variant mismatch at bound {bound}: {actual} disagrees with {expected}"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for PrimeError {}
