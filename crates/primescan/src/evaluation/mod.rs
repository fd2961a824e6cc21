//! Layer 3: Evaluation
//!
//! # Purpose
//!
//! This layer measures and checks generator runs: it counts the work a
//! variant performs and verifies that every variant agrees on its output.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Evaluation ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Work counters for a single generator run.
pub mod stats;

/// Cross-variant agreement checks.
pub mod consistency;
