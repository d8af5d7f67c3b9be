//! Composable predicates
//!
//! The plain functions in [`numeric`](crate::numeric), [`text`](crate::text),
//! [`sequence`](crate::sequence) and [`person`](crate::person) answer one
//! question each. This module wraps them as [`Predicate`] values so they can be
//! combined with `and`, `or` and `not`, applied to every element of a
//! collection, or fed into a [`Validation`](crate::Validation).
//!
//! # Example
//!
//! ```rust
//! use purepred::predicate::*;
//!
//! // even and greater than 10
//! let p = even().and(gt(10));
//! assert!(p.check(&20));
//! assert!(!p.check(&8));
//!
//! // every element prime
//! assert!(all(prime()).check(&vec![2, 3, 5, 7]));
//!
//! // closures are predicates too
//! let greater_than_five = |x: &i32| *x > 5;
//! assert!(greater_than_five.and(prime()).check(&7));
//! ```
//!
//! # Integration with Validation
//!
//! ```rust
//! use purepred::{Validation, predicate::*};
//!
//! let result = Validation::<_, &str>::success(153u32)
//!     .ensure(armstrong(), "not an armstrong number")
//!     .ensure(between(100, 999), "not three digits");
//! assert_eq!(result, Validation::success(153));
//! ```

mod collection;
mod combinators;
mod number;
mod person;
mod string;
#[cfg(feature = "tracing")]
mod traced;
mod validation;

pub mod prelude;

pub use combinators::{all_of, any_of, none_of, AllOf, And, AnyOf, NoneOf, Not, Or};
pub use combinators::{Predicate, PredicateExt};

pub use number::{
    armstrong, between, divisible_by, eq, even, ge, gt, le, lt, negative, positive, prime,
    Armstrong, Between, DivisibleBy, Eq, Even, Ge, Gt, Le, Lt, Prime,
};

pub use string::{
    contains, email_shaped, empty, len_greater_than, not_empty, palindrome,
    palindrome_ignore_case, starts_with, uppercase, vowel_bounded, Contains, EmailShaped, Empty,
    LenGreaterThan, NotEmpty, Palindrome, StartsWith, Uppercase, VowelBounded,
};

pub use collection::{
    all, any, contains_element, is_empty, unique_elements, All, Any, ContainsElement, IsEmpty,
    UniqueElements,
};

pub use person::{adult, Adult};

#[cfg(feature = "tracing")]
pub use traced::Traced;

pub use validation::{validate, validate_with};
