//! # purepred
//!
//! Pure predicates over numbers, strings and collections, with combinators
//! for composing them.
//!
//! ## Layout
//!
//! - [`numeric`], [`text`], [`sequence`]: plain, individually named
//!   predicate functions (`is_prime`, `is_palindrome`, `has_unique_elements`, ...).
//! - [`predicate`]: the [`Predicate`](predicate::Predicate) trait and adapters
//!   that turn those functions into composable values.
//! - [`operation`]: a minimal two-argument integer operation type.
//! - [`person`]: the `Person` record and its age predicate.
//! - [`Validation`]: error-accumulating results for checking values against
//!   several predicates at once.
//!
//! ## Quick Example
//!
//! ```rust
//! use purepred::numeric::{is_armstrong, is_divisible, is_prime};
//! use purepred::predicate::*;
//! use purepred::text::{is_palindrome, CaseSensitivity};
//!
//! assert!(is_prime(17));
//! assert_eq!(is_armstrong(9474), Ok(true));
//! assert!(is_palindrome("Madam", CaseSensitivity::Insensitive));
//! assert!(is_divisible(10, 0).is_err());
//!
//! let even_above_ten = even().and(gt(10));
//! assert!(even_above_ten.check(&20));
//! ```
//!
//! ## Features
//!
//! - `tracing`: `PredicateExt::traced` and debug events on rejected arguments.
//! - `serde`: `Serialize`/`Deserialize` for [`Person`].
//! - `proptest`: `Arbitrary` for [`Person`], [`Validation`] and
//!   [`CaseSensitivity`](text::CaseSensitivity).

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod numeric;
pub mod operation;
pub mod person;
pub mod predicate;
pub mod semigroup;
pub mod sequence;
pub mod testing;
pub mod text;
pub mod validation;

// Re-exports
pub use error::{PredicateError, Result};
pub use operation::{Calculate, IntOperation};
pub use person::{is_adult, Person};
pub use semigroup::Semigroup;
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::PredicateError;
    pub use crate::operation::{Calculate, IntOperation};
    pub use crate::person::Person;
    pub use crate::predicate::{Predicate, PredicateExt};
    pub use crate::semigroup::Semigroup;
    pub use crate::text::CaseSensitivity;
    pub use crate::validation::Validation;
}
