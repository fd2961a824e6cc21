//! Execution engine for prime generator runs.
//!
//! ## Purpose
//!
//! This module runs one configured generator over a validated bound. It
//! picks the probe (no-op or counting), dispatches to the selected kernel,
//! and optionally confirms the output against every other variant.
//!
//! ## Design notes
//!
//! * The no-op probe path is monomorphised separately, so runs without
//!   statistics carry no counting overhead.
//! * Cross-checking reruns all six variants and is intended for tests and audits.
//!
//! ## Invariants
//!
//! * The bound has already been validated (below `isize::MAX`).
//! * Output primes are strictly increasing.
//!
//! ## Non-goals
//!
//! * This module does not validate bounds (handled by `validator`).
//! * This module does not convert values to the caller's integer type.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Internal dependencies
use crate::algorithms::Method;
use crate::evaluation::consistency::verify_against;
use crate::evaluation::stats::WorkStats;
use crate::primitives::errors::PrimeError;

// ============================================================================
// Configuration and Output
// ============================================================================

/// Resolved configuration for a generator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutorConfig {
    /// Generator variant to run.
    pub method: Method,

    /// Whether to count work with [`WorkStats`].
    pub collect_stats: bool,

    /// Whether to confirm the output against every other variant.
    pub cross_check: bool,
}

/// Output from a generator run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutorOutput {
    /// Primes `<= bound`, in increasing order.
    pub primes: Vec<usize>,

    /// Work counters, when requested.
    pub stats: Option<WorkStats>,
}

// ============================================================================
// Executor
// ============================================================================

/// Unified executor for all generator variants.
pub struct PrimeExecutor;

impl PrimeExecutor {
    /// Run the configured generator on a validated bound.
    pub fn run_with_config(
        bound: usize,
        config: &ExecutorConfig,
    ) -> Result<ExecutorOutput, PrimeError> {
        tracing::debug!(bound, method = %config.method, "generating primes");

        let (primes, stats) = if config.collect_stats {
            let mut stats = WorkStats::new();
            let primes = config.method.run(bound, &mut stats)?;
            tracing::trace!(
                candidates = stats.candidates,
                divisibility_tests = stats.divisibility_tests,
                marks = stats.marks,
                outer_steps = stats.outer_steps,
                "work counted"
            );
            (primes, Some(stats))
        } else {
            (config.method.run(bound, &mut ())?, None)
        };

        if config.cross_check {
            verify_against(config.method, &primes, bound)?;
        }

        tracing::debug!(bound, count = primes.len(), "generation finished");
        Ok(ExecutorOutput { primes, stats })
    }
}
