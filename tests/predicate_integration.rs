//! End-to-end checks of the named predicates and their composable forms

use purepred::numeric::{is_armstrong, is_divisible, is_even, is_in_range, is_prime};
use purepred::operation::{ADDITION, SUBTRACTION};
use purepred::predicate::*;
use purepred::sequence::{all_match, contains, has_unique_elements, none_match};
use purepred::text::{
    is_all_uppercase, is_empty, is_palindrome, looks_like_email, starts_and_ends_with_vowel,
    starts_with, CaseSensitivity,
};
use purepred::{is_adult, Calculate, Person, PredicateError, Validation};

#[test]
fn numeric_predicates() {
    for n in [-7, -1, 0, 1] {
        assert!(!is_prime(n), "{n} must not be prime");
    }
    assert!(is_prime(2));
    assert!(!is_prime(9));
    assert!(is_prime(17));

    assert_eq!(is_armstrong(153), Ok(true));
    assert_eq!(is_armstrong(154), Ok(false));
    assert_eq!(is_armstrong(9474), Ok(true));

    assert!(is_even(-4));
    assert!(!is_even(-3));
    assert!(is_in_range(10, 10, 50));
    assert!(is_in_range(50, 10, 50));
    assert!(!is_in_range(51, 10, 50));
}

#[test]
fn divisibility_rejects_zero_divisor() {
    assert_eq!(is_divisible(10, 5), Ok(true));
    assert_eq!(is_divisible(10, 3), Ok(false));

    let err = is_divisible(10, 0).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err, PredicateError::zero_divisor());
    assert!(divisible_by::<i32>(0).is_err());
}

#[test]
fn string_predicates() {
    assert!(is_palindrome("madam", CaseSensitivity::Sensitive));
    assert!(is_palindrome("Madam", CaseSensitivity::Insensitive));
    assert!(!is_palindrome("Madam", CaseSensitivity::Sensitive));

    assert!(is_all_uppercase("JAVA"));
    assert!(!is_all_uppercase("Java"));
    assert!(is_all_uppercase(""));

    assert!(is_empty(""));
    assert!(starts_with("Java", "J"));
    assert!(!starts_with("Java", "j"));
    assert!(starts_and_ends_with_vowel("Apple pie"));
    assert!(!starts_and_ends_with_vowel("Banana"));
    assert!(looks_like_email("abc@gmail.com"));
    assert!(!looks_like_email("abc@gmail"));
}

#[test]
fn collection_predicates() {
    assert!(has_unique_elements(&[1, 2, 3, 4]));
    assert!(!has_unique_elements(&[1, 2, 2, 3]));
    assert!(contains(&["Java", "Kotlin"], &"Kotlin"));

    let empty: [i64; 0] = [];
    assert!(all_match(&empty, |n: &i64| *n > 100));
    assert!(none_match(&[4, 6, 8], |n: &i64| is_prime(*n)));
}

#[test]
fn composed_predicates_agree_with_named_functions() {
    let odd_prime = prime().and(even().not());
    for n in -10i64..200 {
        assert_eq!(odd_prime.check(&n), is_prime(n) && !is_even(n));
    }

    let words = vec![String::from("Anna"), String::from("Otto")];
    assert!(all(palindrome_ignore_case()).check(&words));
    assert!(!all(palindrome()).check(&words));
    assert!(any(vowel_bounded()).check(&words));
}

#[test]
fn person_age_check() {
    let adult_person = Person::new("Mohan", 22);
    let minor = Person::new("Komal", 15);
    let boundary = Person::new("Ravi", 18);

    assert!(is_adult(&adult_person));
    assert!(!is_adult(&minor));
    assert!(!is_adult(&boundary));
    assert_eq!(adult().check(&adult_person), is_adult(&adult_person));
}

#[test]
fn validation_collects_every_failed_check() {
    let email = String::from("not-an-email");
    let result = validate(email.clone(), email_shaped(), vec!["email shape"])
        .and(validate(email, uppercase(), vec!["uppercase"]));

    assert_eq!(result, Validation::failure(vec!["email shape", "uppercase"]));
}

#[test]
fn numeric_operations() {
    assert_eq!(ADDITION.calculate(2, 3), 5);
    assert_eq!(SUBTRACTION.calculate(2, 3), -1);

    let multiply = |a: i64, b: i64| a * b;
    assert_eq!(multiply.calculate(4, 5), 20);
}
