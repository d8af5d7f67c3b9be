//! String predicates
//!
//! Every predicate here is implemented for both `str` and `String`, delegating
//! to [`crate::text`]. Because of the two impls, chaining string predicates
//! with [`PredicateExt`](super::PredicateExt) needs the target type spelled
//! out, e.g. `PredicateExt::<str>::and(...)`.

use super::combinators::Predicate;
use crate::text::{self, CaseSensitivity};

macro_rules! impl_str_predicate {
    // Generic arm first: a plain `ty` matcher would fail hard on a leading `<`.
    (<$param:ident> $name:ty, |$this:ident, $s:ident| $body:expr) => {
        impl<$param: AsRef<str> + Send + Sync> Predicate<str> for $name {
            #[inline]
            fn check(&self, value: &str) -> bool {
                let $this = self;
                let $s = value;
                $body
            }
        }

        impl<$param: AsRef<str> + Send + Sync> Predicate<String> for $name {
            #[inline]
            fn check(&self, value: &String) -> bool {
                <Self as Predicate<str>>::check(self, value.as_str())
            }
        }
    };
    ($name:ty, |$this:ident, $s:ident| $body:expr) => {
        impl Predicate<str> for $name {
            #[inline]
            fn check(&self, value: &str) -> bool {
                let $this = self;
                let $s = value;
                $body
            }
        }

        impl Predicate<String> for $name {
            #[inline]
            fn check(&self, value: &String) -> bool {
                <Self as Predicate<str>>::check(self, value.as_str())
            }
        }
    };
}

/// Predicate that checks if a string is empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct Empty;

impl_str_predicate!(Empty, |_this, s| text::is_empty(s));

/// Create a predicate that checks if a string is empty.
///
/// ```rust
/// use purepred::predicate::*;
///
/// assert!(empty().check(""));
/// assert!(!empty().check("java"));
/// ```
pub fn empty() -> Empty {
    Empty
}

/// Predicate that checks if a string is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl_str_predicate!(NotEmpty, |_this, s| !text::is_empty(s));

/// Create a predicate that checks if a string is not empty.
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate that checks if a string starts with a prefix.
#[derive(Clone, Debug)]
pub struct StartsWith<S>(pub S);

impl_str_predicate!(<S> StartsWith<S>, |this, s| text::starts_with(s, this.0.as_ref()));

/// Create a predicate that checks if a string starts with `prefix`.
///
/// ```rust
/// use purepred::predicate::*;
///
/// let starts_with_re = starts_with("Re");
/// assert!(starts_with_re.check("Reactive"));
/// assert!(!starts_with_re.check("Java"));
/// ```
pub fn starts_with<S: AsRef<str> + Send + Sync>(prefix: S) -> StartsWith<S> {
    StartsWith(prefix)
}

/// Predicate that checks if a string contains a substring.
#[derive(Clone, Debug)]
pub struct Contains<S>(pub S);

impl_str_predicate!(<S> Contains<S>, |this, s| s.contains(this.0.as_ref()));

/// Create a predicate that checks if a string contains `substring`.
pub fn contains<S: AsRef<str> + Send + Sync>(substring: S) -> Contains<S> {
    Contains(substring)
}

/// Predicate that checks a string has more than a given number of characters.
#[derive(Clone, Copy, Debug)]
pub struct LenGreaterThan(pub usize);

impl_str_predicate!(LenGreaterThan, |this, s| text::has_more_than_chars(s, this.0));

/// Create a predicate that checks if a string has more than `n` characters.
///
/// ```rust
/// use purepred::predicate::*;
///
/// let more_than_five = len_greater_than(5);
/// assert!(more_than_five.check("Selenium"));
/// assert!(!more_than_five.check("Java"));
/// ```
pub fn len_greater_than(n: usize) -> LenGreaterThan {
    LenGreaterThan(n)
}

/// Predicate backed by [`text::is_all_uppercase`].
#[derive(Clone, Copy, Default, Debug)]
pub struct Uppercase;

impl_str_predicate!(Uppercase, |_this, s| text::is_all_uppercase(s));

/// Create a predicate that checks every character is uppercase.
///
/// ```rust
/// use purepred::predicate::*;
///
/// assert!(uppercase().check("JAVA"));
/// assert!(!uppercase().check("Java"));
/// assert!(uppercase().check(""));
/// ```
pub fn uppercase() -> Uppercase {
    Uppercase
}

/// Predicate backed by [`text::is_palindrome`].
#[derive(Clone, Copy, Default, Debug)]
pub struct Palindrome(pub CaseSensitivity);

impl_str_predicate!(Palindrome, |this, s| text::is_palindrome(s, this.0));

/// Create a case-sensitive palindrome predicate.
///
/// ```rust
/// use purepred::predicate::*;
///
/// assert!(palindrome().check("madam"));
/// assert!(!palindrome().check("Madam"));
/// ```
pub fn palindrome() -> Palindrome {
    Palindrome(CaseSensitivity::Sensitive)
}

/// Create a case-insensitive palindrome predicate.
///
/// ```rust
/// use purepred::predicate::*;
///
/// assert!(palindrome_ignore_case().check("Madam"));
/// assert!(!palindrome_ignore_case().check("Hello"));
/// ```
pub fn palindrome_ignore_case() -> Palindrome {
    Palindrome(CaseSensitivity::Insensitive)
}

/// Predicate backed by [`text::starts_and_ends_with_vowel`].
#[derive(Clone, Copy, Default, Debug)]
pub struct VowelBounded;

impl_str_predicate!(VowelBounded, |_this, s| text::starts_and_ends_with_vowel(s));

/// Create a predicate that checks the first and last characters are vowels.
pub fn vowel_bounded() -> VowelBounded {
    VowelBounded
}

/// Predicate backed by [`text::looks_like_email`].
///
/// The same weak `@`-and-`.` heuristic; not address validation.
#[derive(Clone, Copy, Default, Debug)]
pub struct EmailShaped;

impl_str_predicate!(EmailShaped, |_this, s| text::looks_like_email(s));

/// Create a predicate that checks a string looks like an email address.
///
/// ```rust
/// use purepred::predicate::*;
///
/// assert!(email_shaped().check("phani@gmail.com"));
/// assert!(!email_shaped().check("abc@gmail"));
/// ```
pub fn email_shaped() -> EmailShaped {
    EmailShaped
}
