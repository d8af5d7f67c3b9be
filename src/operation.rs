//! Two-argument integer operations
//!
//! A minimal callable contract: anything that maps two integers to one.
//! Plain functions, function pointers and closures all qualify.
//!
//! # Example
//!
//! ```rust
//! use purepred::operation::{Calculate, ADDITION, SUBTRACTION};
//!
//! assert_eq!(ADDITION.calculate(2, 3), 5);
//! assert_eq!(SUBTRACTION.calculate(10, 2), 8);
//!
//! let product = |a: i64, b: i64| a * b;
//! assert_eq!(product.calculate(4, 5), 20);
//! ```

/// Function pointer type for a binary integer operation.
pub type IntOperation = fn(i64, i64) -> i64;

/// A callable taking two integers and returning one.
pub trait Calculate {
    /// Apply the operation.
    fn calculate(&self, a: i64, b: i64) -> i64;
}

impl<F> Calculate for F
where
    F: Fn(i64, i64) -> i64,
{
    #[inline]
    fn calculate(&self, a: i64, b: i64) -> i64 {
        self(a, b)
    }
}

/// `a + b`, wrapping on overflow.
#[inline]
pub fn add(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// `a - b`, wrapping on overflow.
#[inline]
pub fn subtract(a: i64, b: i64) -> i64 {
    a.wrapping_sub(b)
}

/// Addition as an [`IntOperation`].
pub const ADDITION: IntOperation = add;

/// Subtraction as an [`IntOperation`].
pub const SUBTRACTION: IntOperation = subtract;
