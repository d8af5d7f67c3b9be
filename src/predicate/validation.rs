//! Validation integration for predicates

use super::combinators::Predicate;
use crate::Validation;

/// Validate a value using a predicate.
///
/// Returns `Validation::success(value)` if the predicate holds, otherwise
/// `Validation::failure(error)`.
///
/// # Example
///
/// ```rust
/// use purepred::{Validation, predicate::*};
///
/// let result = validate(String::from("JAVA"), uppercase(), "must be uppercase");
/// assert_eq!(result, Validation::success(String::from("JAVA")));
///
/// let result = validate(String::from("Java"), uppercase(), "must be uppercase");
/// assert_eq!(result, Validation::failure("must be uppercase"));
/// ```
pub fn validate<T, E, P>(value: T, predicate: P, error: E) -> Validation<T, E>
where
    P: Predicate<T>,
{
    if predicate.check(&value) {
        Validation::success(value)
    } else {
        Validation::failure(error)
    }
}

/// Validate a value, building the error from the rejected value.
///
/// # Example
///
/// ```rust
/// use purepred::{Validation, predicate::*};
///
/// let result = validate_with(
///     String::from("abc@gmail"),
///     email_shaped(),
///     |s| format!("'{}' does not look like an email", s),
/// );
/// assert_eq!(
///     result,
///     Validation::failure("'abc@gmail' does not look like an email".to_string())
/// );
/// ```
pub fn validate_with<T, E, P, F>(value: T, predicate: P, error_fn: F) -> Validation<T, E>
where
    P: Predicate<T>,
    F: FnOnce(&T) -> E,
{
    if predicate.check(&value) {
        Validation::success(value)
    } else {
        Validation::failure(error_fn(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{adult, between, divisible_by, not_empty, prime};
    use crate::Person;

    #[test]
    fn test_validate_numbers() {
        assert_eq!(validate(17, prime(), "not prime"), Validation::success(17));
        assert_eq!(validate(9, prime(), "not prime"), Validation::failure("not prime"));
        assert_eq!(
            validate(51, between(10, 50), "out of range"),
            Validation::failure("out of range")
        );
    }

    #[test]
    fn test_validate_with_divisor() {
        let by_five = divisible_by(5).unwrap();
        let result = validate_with(12, by_five, |n| format!("{} is not divisible by 5", n));
        assert_eq!(
            result,
            Validation::failure("12 is not divisible by 5".to_string())
        );
    }

    #[test]
    fn test_validate_person() {
        let result = validate(Person::new("Komal", 15), adult(), "minor");
        assert_eq!(result, Validation::failure("minor"));
    }

    #[test]
    fn test_validate_accumulates_across_fields() {
        let person = Person::new("", 15);
        let name = validate(person.name().to_string(), not_empty(), vec!["name is empty"]);
        let age = validate(person, adult(), vec!["not an adult"]);
        assert_eq!(
            name.and(age),
            Validation::failure(vec!["name is empty", "not an adult"])
        );
    }
}
