//! # primescan — Prime Generators and First-Index Search for Rust
//!
//! A small reference library of array-processing algorithms: three
//! trial-division prime generators, three Sieve of Eratosthenes variants, and
//! a first-index linear search in both its classic buggy form and its fixed
//! form.
//!
//! Every generator returns the same primes for the same bound; they differ
//! only in how much work they do, which the crate can count for you.
//!
//! ## Quick Start
//!
//! ### Generating Primes
//!
//! ```rust
//! use primescan::prelude::*;
//!
//! // Build a generator
//! let generator = Primes::new()
//!     .method(Sieve(SqrtBounded))   // Stop marking at sqrt(bound)
//!     .build()?;
//!
//! // Generate primes up to and including the bound
//! let result = generator.generate(10u32)?;
//!
//! assert_eq!(result.primes, vec![2, 3, 5, 7]);
//! println!("{}", result);
//! # Result::<(), PrimeError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Bound:   10
//!   Method:  Sieve(SqrtBounded)
//!   Primes:  4
//!   Largest: 7
//!
//! Primes:
//!    Index        Prime
//! ---------------------
//!        0            2
//!        1            3
//!        2            5
//!        3            7
//! ```
//!
//! ### Comparing Variants
//!
//! ```rust
//! use primescan::prelude::*;
//!
//! let naive = Primes::new()
//!     .method(TrialDivision(Naive))
//!     .return_stats()                  // Count divisibility tests
//!     .build()?
//!     .generate(100u64)?;
//!
//! let early = Primes::new()
//!     .method(TrialDivision(EarlyExit))
//!     .return_stats()
//!     .cross_check()                   // Also run every other variant
//!     .build()?
//!     .generate(100u64)?;
//!
//! assert_eq!(naive.primes, early.primes);
//! assert!(early.stats.unwrap().divisibility_tests < naive.stats.unwrap().divisibility_tests);
//! # Result::<(), PrimeError>::Ok(())
//! ```
//!
//! ### Finding the First Index
//!
//! The counter-driven scan reproduces the classic bug: with the target absent
//! it walks off the end of the input. The length-bounded scan reports absence
//! explicitly.
//!
//! ```rust
//! use primescan::prelude::*;
//!
//! let buggy = Search::new().mode(CounterDriven).build()?;
//! assert_eq!(buggy.find(&2, &[1, 3, 2, 4, 5])?, Found(2));
//! assert_eq!(
//!     buggy.find(&1, &[2, 3, 4]),
//!     Err(PrimeError::IndexOutOfRange { index: 3, len: 3 })
//! );
//!
//! let fixed = Search::new().index_base(OneBased).build()?;
//! assert_eq!(fixed.find(&2, &[1, 3, 2, 4, 5])?, Found(3));
//! assert_eq!(fixed.find(&1, &[2, 3, 4])?, NotFound);
//! # Result::<(), PrimeError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Fallible operations return `Result<_, PrimeError>`. The `?` operator is
//! idiomatic; errors carry the offending values:
//!
//! ```rust
//! use primescan::prelude::*;
//!
//! let generator = Primes::new().max_bound(1_000).build()?;
//!
//! match generator.generate(-5i32) {
//!     Ok(result) => println!("Primes: {:?}", result.primes),
//!     Err(e) => eprintln!("Generation failed: {}", e),
//! }
//! # Result::<(), PrimeError>::Ok(())
//! ```
//!
//! ## Logging
//!
//! Builders and the engine emit `tracing` events (`debug` for dispatch,
//! `trace` for work counters, `warn` when variants disagree). Install any
//! subscriber to see them.
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to drop the standard library dependency; only
//! `alloc` is required:
//!
//! ```toml
//! [dependencies]
//! primescan = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - errors, marking buffer, probes.
mod primitives;

// Layer 2: Algorithms - generator kernels and scans.
mod algorithms;

// Layer 3: Evaluation - work statistics and consistency checks.
mod evaluation;

// Layer 4: Engine - validation, dispatch and output.
mod engine;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        IndexBase::OneBased,
        IndexBase::ZeroBased,
        LinearSearch, Method,
        Method::Sieve,
        Method::TrialDivision,
        PrimeError, PrimeGenerator, PrimeResult, PrimesBuilder as Primes,
        ScanMode::CounterDriven,
        ScanMode::LengthBounded,
        SearchBuilder as Search, SearchOutcome,
        SearchOutcome::Found,
        SearchOutcome::NotFound,
        SieveVariant,
        SieveVariant::SqrtBounded,
        SieveVariant::Unbounded,
        SieveVariant::Vectorized,
        TrialVariant,
        TrialVariant::EarlyExit,
        TrialVariant::Helper,
        TrialVariant::Naive,
        WorkStats, DEFAULT_MAX_BOUND,
    };
    pub use crate::api::{IndexBase, ScanMode};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
