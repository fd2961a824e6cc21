//! Work counters for prime generator runs.
//!
//! ## Purpose
//!
//! This module provides [`WorkStats`], a [`Probe`] that tallies the
//! elementary operations of a generator run. Counts are deterministic for a
//! given method and bound, so variants can be compared without a timer.
//!
//! ## Key concepts
//!
//! * **Candidates**: Numbers considered by trial division.
//! * **Divisibility tests**: `candidate % prime` evaluations.
//! * **Marks**: Composite marks written by a sieve (including re-marks).
//! * **Outer steps**: Indices visited by a sieve's outer scan.
//!
//! ## Invariants
//!
//! * Trial-division runs never record marks or outer steps.
//! * Sieve runs never record candidates or divisibility tests.
//!
//! ## Non-goals
//!
//! * This module does not measure wall-clock time.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::primitives::probe::Probe;

// ============================================================================
// Work Statistics
// ============================================================================

/// Operation counts collected during one generator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WorkStats {
    /// Numbers considered as prime candidates.
    pub candidates: usize,

    /// Divisibility tests evaluated.
    pub divisibility_tests: usize,

    /// Composite marks written.
    pub marks: usize,

    /// Outer-scan steps taken by a sieve.
    pub outer_steps: usize,
}

impl WorkStats {
    /// Create zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sum of all counted operations.
    pub fn total(&self) -> usize {
        self.candidates + self.divisibility_tests + self.marks + self.outer_steps
    }
}

impl Probe for WorkStats {
    #[inline]
    fn candidate(&mut self) {
        self.candidates += 1;
    }

    #[inline]
    fn divisibility_test(&mut self) {
        self.divisibility_tests += 1;
    }

    #[inline]
    fn marks(&mut self, count: usize) {
        self.marks += count;
    }

    #[inline]
    fn outer_step(&mut self) {
        self.outer_steps += 1;
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for WorkStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Work Statistics:")?;
        writeln!(f, "  Candidates:         {}", self.candidates)?;
        writeln!(f, "  Divisibility tests: {}", self.divisibility_tests)?;
        writeln!(f, "  Marks written:      {}", self.marks)?;
        writeln!(f, "  Outer steps:        {}", self.outer_steps)?;
        write!(f, "  Total operations:   {}", self.total())
    }
}
