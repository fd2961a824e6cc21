//! Linear first-index scans.
//!
//! ## Purpose
//!
//! This module provides two scans for the smallest index holding a target
//! value. [`scan_unbounded`] keeps the classic bug: its loop is driven only by
//! a counter, so an absent target walks the counter off the end of the input.
//! [`scan_bounded`] is the fix: the loop is bounded by the input length and
//! absence is an explicit [`SearchOutcome::NotFound`].
//!
//! ## Invariants
//!
//! * Indices are zero-based at this layer.
//! * For a present target both scans return the same index.
//! * For an absent target the unbounded scan always fails at index `len`.
//!
//! ## Non-goals
//!
//! * No sorted-input fast path; the input is scanned front to back.

// Internal dependencies
use crate::primitives::errors::PrimeError;

// ============================================================================
// Configuration
// ============================================================================

/// Scan strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanMode {
    /// Counter-driven loop with no length bound; fails when the target is absent.
    CounterDriven,

    /// Loop bounded by the input length; reports absence as `NotFound`.
    #[default]
    LengthBounded,
}

/// Convention used to report found indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexBase {
    /// First element is index 0.
    #[default]
    ZeroBased,

    /// First element is index 1.
    OneBased,
}

impl IndexBase {
    /// Offset added to a zero-based index.
    #[inline]
    pub fn offset(&self) -> usize {
        match self {
            Self::ZeroBased => 0,
            Self::OneBased => 1,
        }
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// Result of a bounded scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Target found at this index.
    Found(usize),

    /// Target does not occur in the input.
    NotFound,
}

impl SearchOutcome {
    /// Check if the target was found.
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// Index of the target, if found.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        match *self {
            Self::Found(i) => Some(i),
            Self::NotFound => None,
        }
    }

    /// Re-express a zero-based outcome in `base`.
    #[inline]
    pub fn rebase(self, base: IndexBase) -> Self {
        match self {
            Self::Found(i) => Self::Found(i + base.offset()),
            Self::NotFound => Self::NotFound,
        }
    }
}

impl From<Option<usize>> for SearchOutcome {
    fn from(index: Option<usize>) -> Self {
        index.map_or(Self::NotFound, Self::Found)
    }
}

// ============================================================================
// Scans
// ============================================================================

/// Scan with an unbounded counter.
///
/// Only the element access is checked, so an absent target surfaces as
/// [`PrimeError::IndexOutOfRange`] at index `sequence.len()`.
pub fn scan_unbounded<T: PartialEq>(target: &T, sequence: &[T]) -> Result<usize, PrimeError> {
    let mut i = 0;
    loop {
        let value = sequence.get(i).ok_or(PrimeError::IndexOutOfRange {
            index: i,
            len: sequence.len(),
        })?;
        if value == target {
            return Ok(i);
        }
        i += 1;
    }
}

/// Scan bounded by the sequence length.
pub fn scan_bounded<T: PartialEq>(target: &T, sequence: &[T]) -> SearchOutcome {
    for (i, value) in sequence.iter().enumerate() {
        if value == target {
            return SearchOutcome::Found(i);
        }
    }
    SearchOutcome::NotFound
}
