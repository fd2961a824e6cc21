//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a generator run: it validates bounds and
//! configuration, dispatches to the selected kernel with the right probe,
//! optionally cross-checks the other variants, and assembles the result.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Execution engine for generator runs.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for generator runs.
pub mod output;
