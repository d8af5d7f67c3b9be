//! Testing utilities for predicates and validations
//!
//! Assertion macros for [`Validation`](crate::Validation) results, a purity
//! check for predicates, and (with the `proptest` feature) `Arbitrary`
//! implementations for this crate's types.
//!
//! # Examples
//!
//! ```rust
//! use purepred::predicate::{prime, validate};
//! use purepred::{assert_failure, assert_pure, assert_success};
//!
//! assert_success!(validate(17, prime(), "not prime"));
//! assert_failure!(validate(9, prime(), "not prime"));
//! assert_pure!(purepred::numeric::is_prime, 97);
//! ```

/// Assert that a validation succeeds.
///
/// Panics with the errors if the validation is a `Failure`.
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
///
/// Panics with the value if the validation is a `Success`.
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a function gives the same answer when called twice on the
/// same input.
///
/// `$f` is any callable taking the input by value (it must be `Clone`);
/// the result must be `PartialEq + Debug`. Evaluates to the result.
///
/// ```rust
/// use purepred::{assert_pure, text};
///
/// let upper = assert_pure!(text::is_all_uppercase, "JAVA");
/// assert!(upper);
/// ```
#[macro_export]
macro_rules! assert_pure {
    ($f:expr, $input:expr) => {{
        let input = $input;
        let first = ($f)(::core::clone::Clone::clone(&input));
        let second = ($f)(input);
        assert_eq!(
            first, second,
            "predicate gave different results for the same input"
        );
        first
    }};
}

#[cfg(any(test, feature = "proptest"))]
mod arbitrary {
    use proptest::prelude::*;

    use crate::text::CaseSensitivity;
    use crate::{Person, Validation};

    impl Arbitrary for Person {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            ("[A-Z][a-z]{0,11}", 0u32..=120)
                .prop_map(|(name, age)| Person::new(name, age))
                .boxed()
        }
    }

    impl Arbitrary for CaseSensitivity {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            any::<bool>().prop_map(CaseSensitivity::from).boxed()
        }
    }

    impl<T, E> Arbitrary for Validation<T, E>
    where
        T: Arbitrary + 'static,
        E: Arbitrary + 'static,
        T::Strategy: 'static,
        E::Strategy: 'static,
    {
        type Parameters = (T::Parameters, E::Parameters);
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
            let (t_params, e_params) = args;
            prop_oneof![
                any_with::<T>(t_params).prop_map(Validation::success),
                any_with::<E>(e_params).prop_map(Validation::failure),
            ]
            .boxed()
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::predicate::{even, validate};
    use crate::{numeric, text, Validation};

    #[test]
    fn assert_success_macro() {
        assert_success!(validate(4, even(), "odd"));
    }

    #[test]
    fn assert_failure_macro() {
        assert_failure!(validate(3, even(), "odd"));
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        assert_success!(Validation::<i32, _>::failure("odd"));
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        assert_failure!(Validation::<_, &str>::success(4));
    }

    #[test]
    fn assert_pure_returns_result() {
        assert!(assert_pure!(numeric::is_prime, 17));
        assert_eq!(assert_pure!(numeric::is_even, 3), false);
        assert!(assert_pure!(|s: &str| text::is_palindrome(s, false.into()), "Madam"));
    }

    #[test]
    #[should_panic(expected = "different results")]
    fn assert_pure_catches_impure_function() {
        use std::cell::Cell;

        let calls = Cell::new(0i64);
        let impure = |n: i64| {
            calls.set(calls.get() + 1);
            n + calls.get()
        };
        assert_pure!(impure, 1);
    }

    mod proptest_tests {
        use crate::predicate::{adult, Predicate};
        use crate::text::CaseSensitivity;
        use crate::{person, Person, Validation};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn arbitrary_person_is_well_formed(p in any::<Person>()) {
                prop_assert!(!p.name().is_empty());
                prop_assert!(p.age() <= 120);
                prop_assert_eq!(adult().check(&p), person::is_adult(&p));
            }

            #[test]
            fn arbitrary_validation_generates_both_variants(
                v in any::<Validation<i32, Vec<String>>>()
            ) {
                prop_assert_ne!(v.is_success(), v.is_failure());
            }

            #[test]
            fn arbitrary_case_sensitivity_matches_bool_flag(case in any::<CaseSensitivity>()) {
                prop_assert_eq!(CaseSensitivity::from(case == CaseSensitivity::Sensitive), case);
            }
        }
    }
}
