//! Numeric predicates
//!
//! Plain functions classifying integers. All of them are total except
//! [`is_divisible`] and [`is_armstrong`], which reject arguments outside their
//! domain with [`PredicateError`](crate::PredicateError).
//!
//! # Example
//!
//! ```rust
//! use purepred::numeric::*;
//!
//! assert!(is_prime(17));
//! assert!(is_even(-4));
//! assert!(is_in_range(10, 10, 50));
//! assert_eq!(is_armstrong(153), Ok(true));
//! assert_eq!(is_divisible(10, 5), Ok(true));
//! ```

use std::num::NonZeroI64;

use crate::error::{PredicateError, Result};

/// Check whether `n` is prime.
///
/// Numbers below 2 are never prime. Trial division runs up to and including
/// the integer square root of `n`.
///
/// # Example
///
/// ```rust
/// use purepred::numeric::is_prime;
///
/// assert!(is_prime(2));
/// assert!(is_prime(17));
/// assert!(!is_prime(9));
/// assert!(!is_prime(1));
/// assert!(!is_prime(-7));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    (2..=n.isqrt()).all(|i| n % i != 0)
}

/// Check whether `n` is an Armstrong number.
///
/// Each decimal digit is raised to the power of the digit count and the
/// results summed; `n` is an Armstrong number when the sum equals `n`.
/// Zero has a single digit and qualifies. Negative numbers have no digit
/// sequence to speak of and are rejected.
///
/// # Example
///
/// ```rust
/// use purepred::numeric::is_armstrong;
///
/// assert_eq!(is_armstrong(153), Ok(true));
/// assert_eq!(is_armstrong(9474), Ok(true));
/// assert_eq!(is_armstrong(154), Ok(false));
/// assert!(is_armstrong(-153).is_err());
/// ```
pub fn is_armstrong(n: i64) -> Result<bool> {
    match u64::try_from(n) {
        Ok(unsigned) => Ok(is_armstrong_unsigned(unsigned)),
        Err(_) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(n, "armstrong check rejected negative input");
            Err(PredicateError::negative_armstrong(n))
        }
    }
}

/// Infallible Armstrong check for unsigned input.
///
/// ```rust
/// use purepred::numeric::is_armstrong_unsigned;
///
/// assert!(is_armstrong_unsigned(0));
/// assert!(is_armstrong_unsigned(370));
/// assert!(!is_armstrong_unsigned(10));
/// ```
pub fn is_armstrong_unsigned(n: u64) -> bool {
    let digits = n.checked_ilog10().map_or(1, |log| log + 1);

    // u64 has at most 20 digits; 20 * 9^20 fits comfortably in u128.
    let mut rest = n;
    let mut sum: u128 = 0;
    loop {
        sum += u128::from(rest % 10).pow(digits);
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    sum == u128::from(n)
}

/// Check whether `n` is even, using the mathematical modulus.
///
/// ```rust
/// use purepred::numeric::is_even;
///
/// assert!(is_even(10));
/// assert!(is_even(-4));
/// assert!(!is_even(-3));
/// ```
#[inline]
pub fn is_even(n: i64) -> bool {
    n.rem_euclid(2) == 0
}

/// Check whether `lo <= n <= hi`.
///
/// Both ends are inclusive. A range with `lo > hi` contains nothing.
///
/// ```rust
/// use purepred::numeric::is_in_range;
///
/// assert!(is_in_range(33, 10, 50));
/// assert!(is_in_range(10, 10, 50));
/// assert!(is_in_range(50, 10, 50));
/// assert!(!is_in_range(51, 10, 50));
/// assert!(!is_in_range(9, 10, 50));
/// ```
#[inline]
pub fn is_in_range<T: PartialOrd>(n: T, lo: T, hi: T) -> bool {
    lo <= n && n <= hi
}

/// Check whether `a` is evenly divisible by `b`.
///
/// # Errors
///
/// Returns [`PredicateError::InvalidArgument`] when `b` is zero.
///
/// ```rust
/// use purepred::numeric::is_divisible;
///
/// assert_eq!(is_divisible(10, 5), Ok(true));
/// assert_eq!(is_divisible(10, 3), Ok(false));
/// assert!(is_divisible(10, 0).is_err());
/// ```
pub fn is_divisible(a: i64, b: i64) -> Result<bool> {
    let divisor = NonZeroI64::new(b).ok_or_else(|| {
        #[cfg(feature = "tracing")]
        tracing::debug!(dividend = a, "divisibility check rejected zero divisor");
        PredicateError::zero_divisor()
    })?;
    Ok(divides(a, divisor))
}

// wrapping_rem: i64::MIN % -1 is 0 rather than an overflow.
#[inline]
pub(crate) fn divides(a: i64, divisor: NonZeroI64) -> bool {
    a.wrapping_rem(divisor.get()) == 0
}


#[cfg(all(test, feature = "tracing"))]
mod tracing_tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn test_zero_divisor_is_logged() {
        let _ = is_divisible(42, 0);
        assert!(logs_contain("rejected zero divisor"));
    }

    #[test]
    #[traced_test]
    fn test_negative_armstrong_is_logged() {
        let _ = is_armstrong(-1);
        assert!(logs_contain("rejected negative input"));
    }
}
