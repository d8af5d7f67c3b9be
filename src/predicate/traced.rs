//! Tracing support for predicates.
//!
//! Provides [`Traced`], a wrapper emitting one `trace` event per check.
//! Only compiled with the `tracing` feature.

use super::combinators::Predicate;

/// A predicate that reports each evaluation to the active `tracing` subscriber.
///
/// Created by [`PredicateExt::traced`](super::PredicateExt::traced).
#[derive(Clone, Copy, Debug)]
pub struct Traced<P> {
    inner: P,
    name: &'static str,
}

impl<P> Traced<P> {
    pub(crate) fn new(inner: P, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The name reported in trace events.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Unwrap the inner predicate.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Traced<P> {
    fn check(&self, value: &T) -> bool {
        let outcome = self.inner.check(value);
        tracing::trace!(predicate = self.name, outcome, "predicate evaluated");
        outcome
    }
}
