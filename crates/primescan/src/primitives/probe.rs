//! Work-counting hooks for the generator kernels.
//!
//! Every kernel reports the elementary operations it performs through a
//! [`Probe`]. The unit type is the no-op probe used on the fast path; the
//! evaluation layer supplies a counting implementation.

/// Receiver for the elementary operations of a prime generator.
///
/// All methods default to doing nothing so an implementation only overrides
/// the events it cares about.
pub trait Probe {
    /// A number was considered as a prime candidate.
    #[inline]
    fn candidate(&mut self) {}

    /// One `candidate % divisor` test was evaluated.
    #[inline]
    fn divisibility_test(&mut self) {}

    /// `count` composite marks were written to the marking buffer.
    #[inline]
    fn marks(&mut self, _count: usize) {}

    /// The outer scan of a sieve advanced by one index.
    #[inline]
    fn outer_step(&mut self) {}
}

impl Probe for () {}
