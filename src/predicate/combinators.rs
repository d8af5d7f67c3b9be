//! Core predicate trait and logical combinators

/// A pure, composable test over values of type `T`.
///
/// Implementations must be referentially transparent: checking the same value
/// twice gives the same answer. Any `Fn(&T) -> bool + Send + Sync` closure or
/// function is a predicate.
///
/// # Example
///
/// ```rust
/// use purepred::predicate::*;
///
/// let even_above_ten = even().and(gt(10));
/// assert!(even_above_ten.check(&20));
/// assert!(!even_above_ten.check(&8));
/// assert!(!even_above_ten.check(&21));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Method-chaining combinators for any [`Predicate`].
///
/// Every combinator returns a concrete type, so a composed predicate is as
/// cheap to check as the hand-written boolean expression.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// True only when both predicates are true. Short-circuits.
    ///
    /// ```rust
    /// use purepred::predicate::*;
    ///
    /// let p = prime().and(gt(10));
    /// assert!(p.check(&17));
    /// assert!(!p.check(&7));
    /// assert!(!p.check(&15));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// True when either predicate is true. Short-circuits.
    ///
    /// ```rust
    /// use purepred::predicate::*;
    ///
    /// let p = lt(10).or(gt(50));
    /// assert!(p.check(&9));
    /// assert!(p.check(&51));
    /// assert!(!p.check(&33));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// ```rust
    /// use purepred::predicate::*;
    ///
    /// let odd = even().not();
    /// assert!(odd.check(&3));
    /// assert!(!odd.check(&4));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Emit a `trace` event with `name` and the outcome on every check.
    ///
    /// ```rust
    /// use purepred::predicate::*;
    ///
    /// let p = prime().traced("is_prime");
    /// assert!(p.check(&5));
    /// assert_eq!(p.name(), "is_prime");
    /// ```
    #[cfg(feature = "tracing")]
    fn traced(self, name: &'static str) -> super::traced::Traced<Self> {
        super::traced::Traced::new(self, name)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

/// All predicates in a fixed-size array must hold.
///
/// The predicates must share one type; chain `.and()` for mixed types.
#[derive(Clone, Copy, Debug)]
pub struct AllOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AllOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().all(|p| p.check(value))
    }
}

/// Create a predicate requiring every one of `predicates`.
///
/// ```rust
/// use purepred::predicate::*;
///
/// let p = all_of([gt(0), gt(-10)]);
/// assert!(p.check(&5));
/// assert!(!p.check(&-5));
/// ```
pub fn all_of<P, const N: usize>(predicates: [P; N]) -> AllOf<P, N> {
    AllOf(predicates)
}

/// At least one predicate in a fixed-size array must hold.
#[derive(Clone, Copy, Debug)]
pub struct AnyOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AnyOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().any(|p| p.check(value))
    }
}

/// Create a predicate requiring at least one of `predicates`.
///
/// ```rust
/// use purepred::predicate::*;
///
/// let p = any_of([eq(1), eq(5), eq(10)]);
/// assert!(p.check(&5));
/// assert!(!p.check(&7));
/// ```
pub fn any_of<P, const N: usize>(predicates: [P; N]) -> AnyOf<P, N> {
    AnyOf(predicates)
}

/// No predicate in a fixed-size array may hold.
#[derive(Clone, Copy, Debug)]
pub struct NoneOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for NoneOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.iter().any(|p| p.check(value))
    }
}

/// Create a predicate rejecting every one of `predicates`.
pub fn none_of<P, const N: usize>(predicates: [P; N]) -> NoneOf<P, N> {
    NoneOf(predicates)
}
