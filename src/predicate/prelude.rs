//! Predicate prelude for convenient imports
//!
//! ```rust
//! use purepred::predicate::prelude::*;
//!
//! let even_above_ten = even().and(gt(10));
//! assert!(even_above_ten.check(&20));
//! ```

pub use super::combinators::{all_of, any_of, none_of, And, Not, Or, Predicate, PredicateExt};

pub use super::number::{
    armstrong, between, divisible_by, eq, even, ge, gt, le, lt, negative, positive, prime,
};

pub use super::string::{
    contains, email_shaped, empty, len_greater_than, not_empty, palindrome,
    palindrome_ignore_case, starts_with, uppercase, vowel_bounded,
};

pub use super::collection::{all, any, contains_element, is_empty, unique_elements};

pub use super::person::adult;

pub use super::validation::{validate, validate_with};
