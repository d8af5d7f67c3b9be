//! Semigroup trait for associative operations
//!
//! Used by [`Validation`](crate::Validation) to merge the failures of several
//! predicate checks instead of stopping at the first.
//!
//! # Laws
//!
//! `combine` must be associative:
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use purepred::Semigroup;
//!
//! assert_eq!(vec!["not prime"].combine(vec!["not even"]), vec!["not prime", "not even"]);
//! assert_eq!("odd; ".to_string().combine("negative".to_string()), "odd; negative");
//! ```

/// A type that supports an associative binary operation.
///
/// `combine` takes both sides by value; clone first to keep the originals.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively.
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}
