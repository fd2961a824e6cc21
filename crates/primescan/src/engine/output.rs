//! Output types for prime generator runs.
//!
//! ## Purpose
//!
//! This module defines [`PrimeResult`], which carries the primes produced by
//! a run together with the bound, the method used, and optional work
//! statistics.
//!
//! ## Design notes
//!
//! * **Generics**: Results are generic over the caller's integer type.
//! * **Ergonomics**: Implements `Display` for a human-readable summary and table.
//!
//! ## Invariants
//!
//! * `primes` is strictly increasing and every element is `<= bound`.
//! * `stats` is populated only when statistics were requested.
//!
//! ## Non-goals
//!
//! * This module does not perform generation; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::PrimInt;

// Internal dependencies
use crate::algorithms::Method;
use crate::evaluation::stats::WorkStats;

// ============================================================================
// Result Structure
// ============================================================================

/// Primes produced by one generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeResult<T> {
    /// Inclusive upper bound the run was asked for.
    pub bound: T,

    /// All primes `<= bound`, in increasing order.
    pub primes: Vec<T>,

    /// Generator variant that produced the primes.
    pub method: Method,

    /// Work counters, when requested.
    pub stats: Option<WorkStats>,

    /// Whether every other variant was run and agreed.
    pub cross_checked: bool,
}

impl<T: PrimInt> PrimeResult<T> {
    /// Number of primes found.
    pub fn len(&self) -> usize {
        self.primes.len()
    }

    /// Check if no primes were found (bound below 2).
    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// Largest prime found.
    pub fn largest(&self) -> Option<T> {
        self.primes.last().copied()
    }

    /// Check whether `value` is one of the primes found.
    pub fn contains(&self, value: T) -> bool {
        self.primes.binary_search(&value).is_ok()
    }

    /// Check if work statistics were collected.
    pub fn has_stats(&self) -> bool {
        self.stats.is_some()
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: PrimInt + Display> Display for PrimeResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Bound:   {}", self.bound)?;
        writeln!(f, "  Method:  {}", self.method)?;
        writeln!(f, "  Primes:  {}", self.primes.len())?;
        if let Some(largest) = self.largest() {
            writeln!(f, "  Largest: {}", largest)?;
        }
        if self.cross_checked {
            writeln!(f, "  Cross-check: Passed")?;
        }
        writeln!(f)?;

        if let Some(stats) = &self.stats {
            writeln!(f, "{}", stats)?;
            writeln!(f)?;
        }

        writeln!(f, "Primes:")?;
        writeln!(f, "{:>8} {:>12}", "Index", "Prime")?;
        writeln!(f, "{:-<21}", "")?;

        // Show first 10 and last 10 rows if more than 20 primes
        let n = self.primes.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;
            writeln!(f, "{:>8} {:>12}", idx, self.primes[idx])?;
        }

        Ok(())
    }
}
