//! Validation type for accumulating predicate failures
//!
//! [`Validation`] is like `Result`, except that combining two failures keeps
//! both errors (via [`Semigroup`]) instead of short-circuiting on the first.
//! That makes it the natural carrier when a value is run past several
//! predicates and every violation should be reported.
//!
//! # Example
//!
//! ```
//! use purepred::predicate::{even, gt, validate};
//! use purepred::Validation;
//!
//! let result = validate(7, even(), vec!["not even"])
//!     .and(validate(7, gt(10), vec!["not above ten"]));
//!
//! assert_eq!(result, Validation::Failure(vec!["not even", "not above ten"]));
//! ```

use crate::predicate::Predicate;
use crate::Semigroup;

/// Either a validated value or the accumulated errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation.
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation.
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a `Result`.
    ///
    /// ```
    /// use purepred::{numeric, PredicateError, Validation};
    ///
    /// let v = Validation::from_result(numeric::is_divisible(10, 0));
    /// assert_eq!(v, Validation::Failure(PredicateError::zero_divisor()));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert into a `Result`.
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation succeeded.
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed.
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Keep the value only if it satisfies `predicate`.
    ///
    /// An existing failure is passed through untouched, since there is no
    /// value left to check.
    ///
    /// ```
    /// use purepred::predicate::{between, prime};
    /// use purepred::Validation;
    ///
    /// let v = Validation::<_, &str>::success(17)
    ///     .ensure(prime(), "not prime")
    ///     .ensure(between(10, 50), "out of range");
    /// assert_eq!(v, Validation::Success(17));
    ///
    /// let v = Validation::<_, &str>::success(9)
    ///     .ensure(prime(), "not prime")
    ///     .ensure(between(10, 50), "out of range");
    /// assert_eq!(v, Validation::Failure("not prime"));
    /// ```
    pub fn ensure<P>(self, predicate: P, error: E) -> Self
    where
        P: Predicate<T>,
    {
        match self {
            Validation::Success(value) if predicate.check(&value) => Validation::Success(value),
            Validation::Success(_) => Validation::Failure(error),
            failure => failure,
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Pair two validations, accumulating errors when both fail.
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) | (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Combine many validations, accumulating every failure in order.
    ///
    /// ```
    /// use purepred::predicate::{prime, validate_with};
    /// use purepred::Validation;
    ///
    /// let checks = [2, 4, 5, 9]
    ///     .into_iter()
    ///     .map(|n| validate_with(n, prime(), |n| vec![format!("{n} is not prime")]))
    ///     .collect();
    ///
    /// assert_eq!(
    ///     Validation::all_vec(checks),
    ///     Validation::Failure(vec!["4 is not prime".to_string(), "9 is not prime".to_string()])
    /// );
    /// ```
    pub fn all_vec(validations: Vec<Validation<T, E>>) -> Validation<Vec<T>, E> {
        let mut successes = Vec::with_capacity(validations.len());
        let mut errors: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    errors = Some(match errors {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match errors {
            None => Validation::Success(successes),
            Some(errors) => Validation::Failure(errors),
        }
    }
}
