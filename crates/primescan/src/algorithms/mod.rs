//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer holds the generator kernels (trial division and the sieves)
//! and the linear first-index scans. Every kernel is a pure function of its
//! inputs operating on `usize` values; generic integer handling lives in the
//! engine.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{self, Display, Formatter};

// Internal dependencies
use crate::primitives::errors::PrimeError;
use crate::primitives::probe::Probe;

/// Trial-division prime generators.
pub mod trial;

/// Sieve of Eratosthenes prime generators.
pub mod sieve;

/// Linear first-index scans.
pub mod search;

pub use sieve::SieveVariant;
pub use trial::TrialVariant;

// ============================================================================
// Generation Method
// ============================================================================

/// Prime generation strategy: one trial-division or one sieve variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Trial division against previously found primes.
    TrialDivision(TrialVariant),

    /// Sieve of Eratosthenes over a marking array.
    Sieve(SieveVariant),
}

impl Default for Method {
    fn default() -> Self {
        Self::Sieve(SieveVariant::default())
    }
}

impl Method {
    /// Every available method, trial-division variants first.
    pub const ALL: [Method; 6] = [
        Method::TrialDivision(TrialVariant::Naive),
        Method::TrialDivision(TrialVariant::EarlyExit),
        Method::TrialDivision(TrialVariant::Helper),
        Method::Sieve(SieveVariant::Unbounded),
        Method::Sieve(SieveVariant::SqrtBounded),
        Method::Sieve(SieveVariant::Vectorized),
    ];

    /// Name of the method family.
    pub fn family(&self) -> &'static str {
        match self {
            Self::TrialDivision(_) => "TrialDivision",
            Self::Sieve(_) => "Sieve",
        }
    }

    /// Name of the variant within its family.
    pub fn variant(&self) -> &'static str {
        match self {
            Self::TrialDivision(v) => v.name(),
            Self::Sieve(v) => v.name(),
        }
    }

    /// Generate all primes `<= bound`, reporting work to `probe`.
    ///
    /// `bound` must be below `isize::MAX`. Sieve variants fail with
    /// [`PrimeError::AllocationFailed`] when their marking array cannot be
    /// reserved.
    #[inline]
    pub fn run<P: Probe>(&self, bound: usize, probe: &mut P) -> Result<Vec<usize>, PrimeError> {
        match self {
            Self::TrialDivision(v) => Ok(v.generate(bound, probe)),
            Self::Sieve(v) => v.generate(bound, probe),
        }
    }
}

impl From<TrialVariant> for Method {
    fn from(variant: TrialVariant) -> Self {
        Method::TrialDivision(variant)
    }
}

impl From<SieveVariant> for Method {
    fn from(variant: SieveVariant) -> Self {
        Method::Sieve(variant)
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.family(), self.variant())
    }
}
