//! Number predicates
//!
//! Comparators plus composable adapters for the functions in
//! [`crate::numeric`].

use std::fmt;
use std::marker::PhantomData;
use std::num::NonZeroI64;

use super::combinators::Predicate;
use crate::error::{PredicateError, Result};
use crate::numeric;

/// Predicate for equality.
#[derive(Clone, Copy, Debug)]
pub struct Eq<T>(pub T);

impl<T: PartialEq + Send + Sync> Predicate<T> for Eq<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value == self.0
    }
}

/// Create a predicate that checks for equality.
pub fn eq<T: PartialEq + Send + Sync>(value: T) -> Eq<T> {
    Eq(value)
}

/// Predicate for greater than.
#[derive(Clone, Copy, Debug)]
pub struct Gt<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Gt<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value > self.0
    }
}

/// Create a predicate that checks if value is greater than threshold.
///
/// ```rust
/// use purepred::predicate::*;
///
/// let greater_than_five = gt(5);
/// assert!(greater_than_five.check(&10));
/// assert!(!greater_than_five.check(&3));
/// ```
pub fn gt<T: PartialOrd + Send + Sync>(value: T) -> Gt<T> {
    Gt(value)
}

/// Predicate for greater than or equal.
#[derive(Clone, Copy, Debug)]
pub struct Ge<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Ge<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value >= self.0
    }
}

/// Create a predicate that checks if value is at least threshold.
pub fn ge<T: PartialOrd + Send + Sync>(value: T) -> Ge<T> {
    Ge(value)
}

/// Predicate for less than.
#[derive(Clone, Copy, Debug)]
pub struct Lt<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Lt<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value < self.0
    }
}

/// Create a predicate that checks if value is less than threshold.
pub fn lt<T: PartialOrd + Send + Sync>(value: T) -> Lt<T> {
    Lt(value)
}

/// Predicate for less than or equal.
#[derive(Clone, Copy, Debug)]
pub struct Le<T>(pub T);

impl<T: PartialOrd + Send + Sync> Predicate<T> for Le<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        *value <= self.0
    }
}

/// Create a predicate that checks if value is at most threshold.
pub fn le<T: PartialOrd + Send + Sync>(value: T) -> Le<T> {
    Le(value)
}

/// Predicate for value in an inclusive range.
#[derive(Clone, Copy, Debug)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        numeric::is_in_range(value, &self.min, &self.max)
    }
}

/// Create a predicate that checks `min <= value <= max`.
///
/// ```rust
/// use purepred::predicate::*;
///
/// let between_10_and_50 = between(10, 50);
/// assert!(between_10_and_50.check(&33));
/// assert!(between_10_and_50.check(&10));
/// assert!(between_10_and_50.check(&50));
/// assert!(!between_10_and_50.check(&9));
/// assert!(!between_10_and_50.check(&51));
/// ```
pub fn between<T: PartialOrd + Send + Sync>(min: T, max: T) -> Between<T> {
    Between { min, max }
}

/// Create a predicate that checks if value is greater than zero.
pub fn positive<T>() -> Gt<T>
where
    T: PartialOrd + Default + Send + Sync,
{
    Gt(T::default())
}

/// Create a predicate that checks if value is less than zero.
pub fn negative<T>() -> Lt<T>
where
    T: PartialOrd + Default + Send + Sync,
{
    Lt(T::default())
}

/// Predicate backed by [`numeric::is_prime`].
pub struct Prime<T>(PhantomData<fn(&T)>);

impl<T: Copy + Into<i64>> Predicate<T> for Prime<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        numeric::is_prime((*value).into())
    }
}

/// Create a predicate that checks for primality.
///
/// ```rust
/// use purepred::predicate::*;
///
/// assert!(prime().check(&5));
/// assert!(!prime().check(&10));
/// ```
pub fn prime<T: Copy + Into<i64>>() -> Prime<T> {
    Prime(PhantomData)
}

/// Predicate backed by [`numeric::is_even`].
pub struct Even<T>(PhantomData<fn(&T)>);

impl<T: Copy + Into<i64>> Predicate<T> for Even<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        numeric::is_even((*value).into())
    }
}

/// Create a predicate that checks for evenness.
///
/// ```rust
/// use purepred::predicate::*;
///
/// assert!(even().check(&10));
/// assert!(!even().check(&3));
/// ```
pub fn even<T: Copy + Into<i64>>() -> Even<T> {
    Even(PhantomData)
}

/// Predicate backed by [`numeric::is_armstrong_unsigned`].
///
/// Only implemented for unsigned integers, so it cannot be handed a
/// negative number.
pub struct Armstrong<T>(PhantomData<fn(&T)>);

impl<T: Copy + Into<u64>> Predicate<T> for Armstrong<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        numeric::is_armstrong_unsigned((*value).into())
    }
}

/// Create a predicate that checks for Armstrong numbers.
///
/// ```rust
/// use purepred::predicate::*;
///
/// assert!(armstrong().check(&153u32));
/// assert!(!armstrong().check(&154u32));
/// ```
pub fn armstrong<T: Copy + Into<u64>>() -> Armstrong<T> {
    Armstrong(PhantomData)
}

/// Predicate backed by [`numeric::is_divisible`] with a fixed, non-zero divisor.
pub struct DivisibleBy<T> {
    divisor: NonZeroI64,
    _marker: PhantomData<fn(&T)>,
}

impl<T> DivisibleBy<T> {
    /// The divisor this predicate tests against.
    pub fn divisor(&self) -> i64 {
        self.divisor.get()
    }
}

impl<T: Copy + Into<i64>> Predicate<T> for DivisibleBy<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        numeric::divides((*value).into(), self.divisor)
    }
}

/// Create a predicate that checks divisibility by `divisor`.
///
/// # Errors
///
/// Fails with [`PredicateError::InvalidArgument`] when `divisor` is zero, so
/// the resulting predicate itself can never fail.
///
/// ```rust
/// use purepred::predicate::*;
///
/// let by_three = divisible_by(3)?;
/// assert!(by_three.check(&21));
/// assert!(!by_three.check(&10));
/// assert!(divisible_by::<i32>(0).is_err());
/// # Ok::<(), purepred::PredicateError>(())
/// ```
pub fn divisible_by<T: Copy + Into<i64>>(divisor: i64) -> Result<DivisibleBy<T>> {
    let divisor = NonZeroI64::new(divisor).ok_or_else(PredicateError::zero_divisor)?;
    Ok(DivisibleBy {
        divisor,
        _marker: PhantomData,
    })
}

// Hand-written so the marker types don't require `T: Clone + Debug`.
macro_rules! impl_marker_traits {
    ($($name:ident),+) => {
        $(
            impl<T> Clone for $name<T> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<T> Copy for $name<T> {}

            impl<T> fmt::Debug for $name<T> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(stringify!($name))
                }
            }
        )+
    };
}

impl_marker_traits!(Prime, Even, Armstrong);

impl<T> Clone for DivisibleBy<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DivisibleBy<T> {}

impl<T> fmt::Debug for DivisibleBy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DivisibleBy")
            .field("divisor", &self.divisor)
            .finish()
    }
}
