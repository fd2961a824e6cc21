//! High-level API for prime generation and linear search.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder for
//! configuring a prime generator and another for configuring a first-index
//! search.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with sensible defaults for all parameters.
//! * **Validated**: Configuration is validated when `.build()` is called.
//! * **Type-Safe**: Generation is generic over primitive integer types.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`PrimesBuilder`] via `Primes::new()` (or a [`SearchBuilder`] via `Search::new()`).
//! 2. Chain configuration methods (`.method()`, `.max_bound()`, etc.).
//! 3. Call `.build()` to validate and obtain a reusable runner.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::algorithms::search::{scan_bounded, scan_unbounded};
use crate::engine::executor::{ExecutorConfig, PrimeExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::search::{IndexBase, ScanMode, SearchOutcome};
pub use crate::algorithms::{Method, SieveVariant, TrialVariant};
pub use crate::engine::output::PrimeResult;
pub use crate::evaluation::stats::WorkStats;
pub use crate::primitives::errors::PrimeError;

/// Default largest bound accepted by a generator.
pub const DEFAULT_MAX_BOUND: usize = 10_000_000;

// ============================================================================
// Prime Generation
// ============================================================================

/// Fluent builder for configuring a prime generator.
#[derive(Debug, Clone, Default)]
pub struct PrimesBuilder {
    /// Generator variant (default: `Sieve(SqrtBounded)`).
    pub method: Option<Method>,

    /// Largest accepted bound (default: [`DEFAULT_MAX_BOUND`]).
    pub max_bound: Option<usize>,

    /// Attach work statistics to results.
    pub return_stats: Option<bool>,

    /// Confirm every result against all other variants.
    pub cross_check: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl PrimesBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generator variant.
    pub fn method(mut self, method: impl Into<Method>) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method.into());
        self
    }

    /// Set the largest bound the generator will accept.
    pub fn max_bound(mut self, max_bound: usize) -> Self {
        if self.max_bound.is_some() {
            self.duplicate_param = Some("max_bound");
        }
        self.max_bound = Some(max_bound);
        self
    }

    /// Attach work statistics to every result.
    pub fn return_stats(mut self) -> Self {
        if self.return_stats.is_some() {
            self.duplicate_param = Some("return_stats");
        }
        self.return_stats = Some(true);
        self
    }

    /// Run every other variant as well and fail if any disagrees.
    pub fn cross_check(mut self) -> Self {
        if self.cross_check.is_some() {
            self.duplicate_param = Some("cross_check");
        }
        self.cross_check = Some(true);
        self
    }

    /// Validate the configuration and build the generator.
    pub fn build(self) -> Result<PrimeGenerator, PrimeError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let max_bound = self.max_bound.unwrap_or(DEFAULT_MAX_BOUND);
        Validator::validate_max_bound(max_bound)?;

        let config = ExecutorConfig {
            method: self.method.unwrap_or_default(),
            collect_stats: self.return_stats.unwrap_or(false),
            cross_check: self.cross_check.unwrap_or(false),
        };
        tracing::debug!(method = %config.method, max_bound, "prime generator built");

        Ok(PrimeGenerator { config, max_bound })
    }
}

/// Validated, reusable prime generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeGenerator {
    config: ExecutorConfig,
    max_bound: usize,
}

impl PrimeGenerator {
    /// Generator variant in use.
    pub fn method(&self) -> Method {
        self.config.method
    }

    /// Largest accepted bound.
    pub fn max_bound(&self) -> usize {
        self.max_bound
    }

    /// Generate all primes `<= bound`.
    ///
    /// Bounds below 2 yield an empty result. Negative bounds and bounds above
    /// `max_bound` are rejected.
    pub fn generate<T: PrimInt>(&self, bound: T) -> Result<PrimeResult<T>, PrimeError> {
        let index = Validator::validate_bound(bound, self.max_bound)?;
        let output = PrimeExecutor::run_with_config(index, &self.config)?;

        // Every prime is <= bound, so narrowing back to T cannot fail
        let primes = output
            .primes
            .into_iter()
            .map(|p| T::from(p))
            .collect::<Option<Vec<T>>>()
            .ok_or(PrimeError::BoundTooLarge {
                got: index as u128,
                max: self.max_bound,
            })?;

        Ok(PrimeResult {
            bound,
            primes,
            method: self.config.method,
            stats: output.stats,
            cross_checked: self.config.cross_check,
        })
    }
}

// ============================================================================
// Linear Search
// ============================================================================

/// Fluent builder for configuring a first-index search.
#[derive(Debug, Clone, Default)]
pub struct SearchBuilder {
    /// Scan strategy (default: `LengthBounded`).
    pub mode: Option<ScanMode>,

    /// Index reporting convention (default: `ZeroBased`).
    pub index_base: Option<IndexBase>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl SearchBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scan strategy.
    pub fn mode(mut self, mode: ScanMode) -> Self {
        if self.mode.is_some() {
            self.duplicate_param = Some("mode");
        }
        self.mode = Some(mode);
        self
    }

    /// Set the index reporting convention.
    pub fn index_base(mut self, base: IndexBase) -> Self {
        if self.index_base.is_some() {
            self.duplicate_param = Some("index_base");
        }
        self.index_base = Some(base);
        self
    }

    /// Validate the configuration and build the search.
    pub fn build(self) -> Result<LinearSearch, PrimeError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(LinearSearch {
            mode: self.mode.unwrap_or_default(),
            index_base: self.index_base.unwrap_or_default(),
        })
    }
}

/// Validated first-index search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearSearch {
    mode: ScanMode,
    index_base: IndexBase,
}

impl LinearSearch {
    /// Scan strategy in use.
    pub fn mode(&self) -> ScanMode {
        self.mode
    }

    /// Index reporting convention in use.
    pub fn index_base(&self) -> IndexBase {
        self.index_base
    }

    /// Find the first index of `target` in `sequence`.
    ///
    /// With `CounterDriven` an absent target is an
    /// [`PrimeError::IndexOutOfRange`] whose index is zero-based regardless of
    /// the configured base. With `LengthBounded` it is `SearchOutcome::NotFound`.
    pub fn find<T: PartialEq>(&self, target: &T, sequence: &[T]) -> Result<SearchOutcome, PrimeError> {
        let outcome = match self.mode {
            ScanMode::CounterDriven => {
                let index = scan_unbounded(target, sequence).inspect_err(|err| {
                    tracing::debug!(%err, "counter-driven scan ran off the end");
                })?;
                SearchOutcome::Found(index)
            }
            ScanMode::LengthBounded => scan_bounded(target, sequence),
        };

        Ok(outcome.rebase(self.index_base))
    }
}
