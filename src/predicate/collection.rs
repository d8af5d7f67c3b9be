//! Collection predicates
//!
//! Implemented for `Vec<T>` and `[T]`. Semantics match [`crate::sequence`].

use std::hash::Hash;

use super::combinators::Predicate;
use crate::sequence;

/// Predicate that checks if a collection is empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct IsEmpty;

impl<T> Predicate<Vec<T>> for IsEmpty {
    #[inline]
    fn check(&self, value: &Vec<T>) -> bool {
        value.is_empty()
    }
}

impl<T> Predicate<[T]> for IsEmpty {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        value.is_empty()
    }
}

/// Create a predicate that checks if a collection is empty.
pub fn is_empty() -> IsEmpty {
    IsEmpty
}

/// Predicate that checks if every element satisfies a predicate.
#[derive(Clone, Copy, Debug)]
pub struct All<P>(pub P);

impl<T, P: Predicate<T>> Predicate<Vec<T>> for All<P> {
    #[inline]
    fn check(&self, value: &Vec<T>) -> bool {
        value.iter().all(|item| self.0.check(item))
    }
}

impl<T, P: Predicate<T>> Predicate<[T]> for All<P> {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        value.iter().all(|item| self.0.check(item))
    }
}

/// Create a predicate that checks if every element satisfies `predicate`.
///
/// Vacuously true for empty collections.
///
/// ```rust
/// use purepred::predicate::*;
///
/// let has_all_even = all(even());
/// assert!(has_all_even.check(&vec![2, 4, 6, 8]));
/// assert!(!has_all_even.check(&vec![3, 5, 2, 6]));
/// assert!(has_all_even.check(&Vec::<i32>::new()));
/// ```
pub fn all<P>(predicate: P) -> All<P> {
    All(predicate)
}

/// Predicate that checks if any element satisfies a predicate.
#[derive(Clone, Copy, Debug)]
pub struct Any<P>(pub P);

impl<T, P: Predicate<T>> Predicate<Vec<T>> for Any<P> {
    #[inline]
    fn check(&self, value: &Vec<T>) -> bool {
        value.iter().any(|item| self.0.check(item))
    }
}

impl<T, P: Predicate<T>> Predicate<[T]> for Any<P> {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        value.iter().any(|item| self.0.check(item))
    }
}

/// Create a predicate that checks if any element satisfies `predicate`.
pub fn any<P>(predicate: P) -> Any<P> {
    Any(predicate)
}

/// Predicate that checks if a collection contains a specific element.
#[derive(Clone, Copy, Debug)]
pub struct ContainsElement<T>(pub T);

impl<T: PartialEq + Send + Sync> Predicate<Vec<T>> for ContainsElement<T> {
    #[inline]
    fn check(&self, value: &Vec<T>) -> bool {
        sequence::contains(value, &self.0)
    }
}

impl<T: PartialEq + Send + Sync> Predicate<[T]> for ContainsElement<T> {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        sequence::contains(value, &self.0)
    }
}

/// Create a predicate that checks if a collection contains `element`.
///
/// ```rust
/// use purepred::predicate::*;
///
/// let contains_reactive = contains_element("Reactive");
/// assert!(contains_reactive.check(&vec!["Reactive", "non-Reactive", "java"]));
/// assert!(!contains_reactive.check(&vec!["java"]));
/// ```
pub fn contains_element<T: PartialEq + Send + Sync>(element: T) -> ContainsElement<T> {
    ContainsElement(element)
}

/// Predicate backed by [`sequence::has_unique_elements`].
#[derive(Clone, Copy, Default, Debug)]
pub struct UniqueElements;

impl<T: Eq + Hash> Predicate<Vec<T>> for UniqueElements {
    #[inline]
    fn check(&self, value: &Vec<T>) -> bool {
        sequence::has_unique_elements(value)
    }
}

impl<T: Eq + Hash> Predicate<[T]> for UniqueElements {
    #[inline]
    fn check(&self, value: &[T]) -> bool {
        sequence::has_unique_elements(value)
    }
}

/// Create a predicate that checks a collection has no duplicates.
///
/// ```rust
/// use purepred::predicate::*;
///
/// assert!(unique_elements().check(&vec![1, 2, 3, 4]));
/// assert!(!unique_elements().check(&vec![1, 2, 2, 3]));
/// ```
pub fn unique_elements() -> UniqueElements {
    UniqueElements
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{even, negative, positive, PredicateExt};

    #[test]
    fn test_is_empty() {
        assert!(is_empty().check(&Vec::<i32>::new()));
        assert!(!is_empty().check(&vec![1]));
        let slice: &[i32] = &[];
        assert!(is_empty().check(slice));
    }

    #[test]
    fn test_all() {
        assert!(all(even()).check(&vec![2, 4, 6, 8]));
        assert!(!all(even()).check(&vec![3, 5, 2, 6]));
        assert!(!all(even()).check(&vec![3, 5, 7, 9]));
        assert!(all(even()).check(&Vec::<i32>::new()));
    }

    #[test]
    fn test_any() {
        assert!(any(negative::<i32>()).check(&vec![10, -10]));
        assert!(!any(negative::<i32>()).check(&vec![10, 20]));
        assert!(!any(negative::<i32>()).check(&Vec::<i32>::new()));
    }

    #[test]
    fn test_contains_element() {
        let words = vec!["Reactive", "non-Reactive", "java"];
        assert!(contains_element("Reactive").check(&words));
        assert!(!contains_element("reactive").check(&words));
        let slice: &[i32] = &[1, 5, 10];
        assert!(contains_element(5).check(slice));
    }

    #[test]
    fn test_unique_elements() {
        assert!(unique_elements().check(&vec![1, 2, 3, 4]));
        assert!(!unique_elements().check(&vec![1, 2, 2, 3]));
        let slice: &[&str] = &["a", "b"];
        assert!(unique_elements().check(slice));
    }

    #[test]
    fn test_composed_collection_predicate() {
        let p = PredicateExt::<Vec<i32>>::and(all(positive::<i32>()), unique_elements());
        assert!(p.check(&vec![1, 2, 3]));
        assert!(!p.check(&vec![1, 1, 2]));
        assert!(!p.check(&vec![-1, 2, 3]));
    }
}
