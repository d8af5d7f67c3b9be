//! Error types for fallible predicates.
//!
//! Almost every predicate in this crate is a total function. The exceptions are
//! the ones whose arguments have a domain restriction: a divisor of zero, or an
//! Armstrong check on a negative number. Those return [`PredicateError`].

use thiserror::Error;

/// Result alias for fallible predicates.
pub type Result<T> = std::result::Result<T, PredicateError>;

/// Error returned when a predicate is called outside its domain.
///
/// # Example
///
/// ```rust
/// use purepred::{numeric, PredicateError};
///
/// let err = numeric::is_divisible(10, 0).unwrap_err();
/// assert!(err.is_invalid_argument());
/// assert_eq!(err, PredicateError::zero_divisor());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PredicateError {
    /// An argument fell outside the domain the predicate is defined on.
    #[error("invalid argument `{argument}` = {value}: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        argument: &'static str,
        /// The rejected value.
        value: i64,
        /// Human-readable description of the domain restriction.
        reason: &'static str,
    },
}

impl PredicateError {
    /// Divisor was zero.
    pub fn zero_divisor() -> Self {
        Self::InvalidArgument {
            argument: "divisor",
            value: 0,
            reason: "cannot test divisibility by zero",
        }
    }

    /// Armstrong check on a negative number.
    pub fn negative_armstrong(n: i64) -> Self {
        Self::InvalidArgument {
            argument: "n",
            value: n,
            reason: "armstrong numbers are defined for non-negative integers",
        }
    }

    /// Returns true if this is an `InvalidArgument` error.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// The rejected value.
    pub fn value(&self) -> i64 {
        match self {
            Self::InvalidArgument { value, .. } => *value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_divisor_display() {
        let err = PredicateError::zero_divisor();
        let display = format!("{}", err);
        assert!(display.contains("divisor"));
        assert!(display.contains("zero"));
        assert_eq!(err.value(), 0);
    }

    #[test]
    fn test_negative_armstrong_keeps_value() {
        let err = PredicateError::negative_armstrong(-153);
        assert!(err.is_invalid_argument());
        assert_eq!(err.value(), -153);
        assert!(format!("{}", err).contains("-153"));
    }

    #[test]
    fn test_is_std_error() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_error(&PredicateError::zero_divisor());
    }
}
