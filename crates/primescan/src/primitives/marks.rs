//! Composite-marking buffer for the Sieve of Eratosthenes.
//!
//! ## Purpose
//!
//! This module provides the boolean marking array shared by all sieve
//! variants. Index `i` holds `true` once `i` is known to be composite.
//!
//! ## Invariants
//!
//! * The buffer covers indices `0..=bound`.
//! * Construction never panics on size; a buffer that cannot be allocated is an error.
//! * Indices 0 and 1 are marked from construction; every other index starts unmarked.
//! * Marks are only ever set, never cleared.
//!
//! ## Non-goals
//!
//! * This module does not decide which indices to mark (the sieve variants do).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::primitives::errors::PrimeError;

// ============================================================================
// Marking Buffer
// ============================================================================

/// Marking array of size `bound + 1`, local to a single sieve run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkBuffer {
    marks: Vec<bool>,
}

impl MarkBuffer {
    /// Allocate a buffer covering `0..=bound` with 0 and 1 pre-marked.
    ///
    /// Fails with [`PrimeError::AllocationFailed`] when `bound + 1` entries
    /// cannot be reserved.
    pub fn new(bound: usize) -> Result<Self, PrimeError> {
        let len = bound
            .checked_add(1)
            .ok_or(PrimeError::AllocationFailed { bound })?;

        let mut marks = Vec::new();
        marks
            .try_reserve_exact(len)
            .map_err(|_| PrimeError::AllocationFailed { bound })?;
        marks.resize(len, false);

        for slot in marks.iter_mut().take(2) {
            *slot = true;
        }
        Ok(Self { marks })
    }

    /// Whether `index` has been marked composite.
    #[inline]
    pub fn is_marked(&self, index: usize) -> bool {
        self.marks[index]
    }

    /// Mark a single index as composite.
    #[inline]
    pub fn mark(&mut self, index: usize) {
        self.marks[index] = true;
    }

    /// Mark every `step`-th index starting at `start` in one strided pass.
    ///
    /// Returns the number of indices written. Does nothing when `start`
    /// lies beyond the buffer.
    #[inline]
    pub fn mark_strided(&mut self, start: usize, step: usize) -> usize {
        debug_assert!(step >= 1, "mark_strided: step must be at least 1");
        match self.marks.get_mut(start..) {
            Some(tail) => {
                let mut written = 0;
                for slot in tail.iter_mut().step_by(step) {
                    *slot = true;
                    written += 1;
                }
                written
            }
            None => 0,
        }
    }

    /// Indices that are still unmarked, in increasing order.
    pub fn unmarked(&self) -> impl Iterator<Item = usize> + '_ {
        self.marks
            .iter()
            .enumerate()
            .filter(|(_, marked)| !**marked)
            .map(|(i, _)| i)
    }
}
