//! Prime generation with the Sieve of Eratosthenes.
//!
//! ## Purpose
//!
//! Three variants over a shared [`MarkBuffer`]: each unmarked index found by
//! the outer scan is prime and has its multiples marked composite.
//!
//! ## Key concepts
//!
//! * **Unbounded**: Outer scan runs to `bound`, marking from `2i` one step at a time.
//! * **SqrtBounded**: Outer scan stops once `i > sqrt(bound)`, marking from `i*i`.
//! * **Vectorized**: `SqrtBounded` with each prime's multiples marked in one strided pass.
//!
//! ## Invariants
//!
//! * All variants return the same strictly increasing sequence for a given bound.
//! * Bounds below 2 produce an empty sequence.
//! * `bound` must be below `isize::MAX` (the engine enforces this).
//! * A marking array that cannot be allocated is reported, never a panic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::errors::PrimeError;
use crate::primitives::marks::MarkBuffer;
use crate::primitives::probe::Probe;

// ============================================================================
// Variant Selection
// ============================================================================

/// Sieve variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SieveVariant {
    /// Scans every index up to the bound and marks from `2i`.
    Unbounded,

    /// Stops marking once `i * i > bound` and marks from `i * i`.
    #[default]
    SqrtBounded,

    /// Square-root bounded, marking all multiples of a prime in one pass.
    Vectorized,
}

impl SieveVariant {
    /// Variant name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unbounded => "Unbounded",
            Self::SqrtBounded => "SqrtBounded",
            Self::Vectorized => "Vectorized",
        }
    }

    /// Generate all primes `<= bound` with this variant.
    #[inline]
    pub fn generate<P: Probe>(&self, bound: usize, probe: &mut P) -> Result<Vec<usize>, PrimeError> {
        match self {
            Self::Unbounded => unbounded(bound, probe),
            Self::SqrtBounded => sqrt_bounded(bound, probe),
            Self::Vectorized => vectorized(bound, probe),
        }
    }
}

// ============================================================================
// Kernels
// ============================================================================

/// Sieve whose outer scan visits every index up to `bound`.
pub fn unbounded<P: Probe>(bound: usize, probe: &mut P) -> Result<Vec<usize>, PrimeError> {
    let mut marks = MarkBuffer::new(bound)?;
    let mut primes = Vec::new();

    for i in 2..=bound {
        probe.outer_step();
        if marks.is_marked(i) {
            continue;
        }
        primes.push(i);

        let mut multiple = i + i;
        while multiple <= bound {
            marks.mark(multiple);
            probe.marks(1);
            multiple += i;
        }
    }

    Ok(primes)
}

/// Sieve whose marking scan stops at the square root of `bound`.
pub fn sqrt_bounded<P: Probe>(bound: usize, probe: &mut P) -> Result<Vec<usize>, PrimeError> {
    let mut marks = MarkBuffer::new(bound)?;

    // i <= bound / i is i * i <= bound without overflow
    let mut i = 2;
    while i <= bound / i {
        probe.outer_step();
        if !marks.is_marked(i) {
            let mut multiple = i * i;
            while multiple <= bound {
                marks.mark(multiple);
                probe.marks(1);
                multiple += i;
            }
        }
        i += 1;
    }

    Ok(marks.unmarked().collect())
}

/// Square-root bounded sieve marking each prime's multiples in one pass.
pub fn vectorized<P: Probe>(bound: usize, probe: &mut P) -> Result<Vec<usize>, PrimeError> {
    let mut marks = MarkBuffer::new(bound)?;

    let mut i = 2;
    while i <= bound / i {
        probe.outer_step();
        if !marks.is_marked(i) {
            let written = marks.mark_strided(i * i, i);
            probe.marks(written);
        }
        i += 1;
    }

    Ok(marks.unmarked().collect())
}
