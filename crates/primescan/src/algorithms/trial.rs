//! Prime generation by trial division.
//!
//! ## Purpose
//!
//! Three variants that test each candidate against the primes found so far.
//! They differ only in how much work they do, never in what they return.
//!
//! ## Key concepts
//!
//! * **Naive**: Tests every known prime, even after a divisor is found.
//! * **EarlyExit**: Stops at the first divisor.
//! * **Helper**: `EarlyExit` with the divisor test factored into [`is_divisible_by_any`].
//!
//! ## Invariants
//!
//! * Output is strictly increasing and contains exactly the primes `<= bound`.
//! * Bounds below 2 produce an empty sequence.
//! * No divisor test stops at the square root of the candidate.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::probe::Probe;

// ============================================================================
// Variant Selection
// ============================================================================

/// Trial-division variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrialVariant {
    /// Tests every previously found prime without early exit.
    Naive,

    /// Stops testing a candidate at its first divisor.
    EarlyExit,

    /// Early exit with the divisor test as a separate operation.
    #[default]
    Helper,
}

impl TrialVariant {
    /// Variant name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Naive => "Naive",
            Self::EarlyExit => "EarlyExit",
            Self::Helper => "Helper",
        }
    }

    /// Generate all primes `<= bound` with this variant.
    #[inline]
    pub fn generate<P: Probe>(&self, bound: usize, probe: &mut P) -> Vec<usize> {
        match self {
            Self::Naive => naive(bound, probe),
            Self::EarlyExit => early_exit(bound, probe),
            Self::Helper => helper(bound, probe),
        }
    }
}

// ============================================================================
// Kernels
// ============================================================================

/// Trial division testing every known prime for every candidate.
pub fn naive<P: Probe>(bound: usize, probe: &mut P) -> Vec<usize> {
    let mut primes = Vec::new();

    for candidate in 2..=bound {
        probe.candidate();
        let mut composite = false;
        for &prime in &primes {
            probe.divisibility_test();
            if candidate % prime == 0 {
                composite = true;
            }
        }
        if !composite {
            primes.push(candidate);
        }
    }

    primes
}

/// Trial division that abandons a candidate at its first divisor.
pub fn early_exit<P: Probe>(bound: usize, probe: &mut P) -> Vec<usize> {
    let mut primes = Vec::new();

    for candidate in 2..=bound {
        probe.candidate();
        let mut composite = false;
        for &prime in &primes {
            probe.divisibility_test();
            if candidate % prime == 0 {
                composite = true;
                break;
            }
        }
        if !composite {
            primes.push(candidate);
        }
    }

    primes
}

/// Trial division delegating the divisor test to [`is_divisible_by_any`].
pub fn helper<P: Probe>(bound: usize, probe: &mut P) -> Vec<usize> {
    let mut primes = Vec::new();

    for candidate in 2..=bound {
        probe.candidate();
        if !is_divisible_by_any(candidate, &primes, probe) {
            primes.push(candidate);
        }
    }

    primes
}

/// Whether any of `divisors` divides `candidate`, stopping at the first hit.
#[inline]
pub fn is_divisible_by_any<P: Probe>(candidate: usize, divisors: &[usize], probe: &mut P) -> bool {
    divisors.iter().any(|&divisor| {
        probe.divisibility_test();
        candidate % divisor == 0
    })
}
