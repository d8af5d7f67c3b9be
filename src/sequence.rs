//! Collection predicates
//!
//! Plain functions over slices. Element tests accept any
//! [`Predicate`], so closures and the adapters in [`crate::predicate`] both work.
//!
//! # Example
//!
//! ```rust
//! use purepred::predicate::even;
//! use purepred::sequence::*;
//!
//! assert!(all_match(&[2, 4, 6, 8], even()));
//! assert!(!all_match(&[3, 5, 2, 6], even()));
//! assert!(has_unique_elements(&[1, 2, 3, 4]));
//! assert!(contains(&["Reactive", "non-Reactive", "java"], &"Reactive"));
//! ```

use std::collections::HashSet;
use std::hash::Hash;

use crate::predicate::Predicate;

/// Check whether every element satisfies `predicate`.
///
/// Vacuously true for an empty slice.
///
/// ```rust
/// use purepred::sequence::all_match;
///
/// assert!(all_match(&[2, 4, 6], |n: &i32| n % 2 == 0));
/// assert!(all_match(&[] as &[i32], |n: &i32| n % 2 == 0));
/// ```
pub fn all_match<T, P: Predicate<T>>(items: &[T], predicate: P) -> bool {
    items.iter().all(|item| predicate.check(item))
}

/// Check whether at least one element satisfies `predicate`.
///
/// Always false for an empty slice.
pub fn any_match<T, P: Predicate<T>>(items: &[T], predicate: P) -> bool {
    items.iter().any(|item| predicate.check(item))
}

/// Check whether no element satisfies `predicate`.
///
/// Vacuously true for an empty slice.
pub fn none_match<T, P: Predicate<T>>(items: &[T], predicate: P) -> bool {
    !any_match(items, predicate)
}

/// Check whether the slice contains no duplicates.
///
/// Stops at the first repeated element.
///
/// ```rust
/// use purepred::sequence::has_unique_elements;
///
/// assert!(has_unique_elements(&[1, 2, 3, 4]));
/// assert!(!has_unique_elements(&[1, 2, 2, 3]));
/// ```
pub fn has_unique_elements<T: Eq + Hash>(items: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().all(|item| seen.insert(item))
}

/// Check whether `value` is present in the slice.
#[inline]
pub fn contains<T: PartialEq>(items: &[T], value: &T) -> bool {
    items.contains(value)
}

/// Collect clones of the elements that satisfy `predicate`, preserving order.
///
/// ```rust
/// use purepred::sequence::filter_matching;
///
/// let nos = [10, 30, 21, 45, 24];
/// assert_eq!(filter_matching(&nos, |n: &i32| n % 3 == 0), vec![30, 21, 45, 24]);
/// ```
pub fn filter_matching<T: Clone, P: Predicate<T>>(items: &[T], predicate: P) -> Vec<T> {
    items
        .iter()
        .filter(|item| predicate.check(item))
        .cloned()
        .collect()
}

/// Remove the elements that satisfy `predicate`, in place.
///
/// Returns the number of removed elements.
///
/// ```rust
/// use purepred::predicate::negative;
/// use purepred::sequence::remove_matching;
///
/// let mut nums = vec![10, 20, 30, -10, -20, -30];
/// assert_eq!(remove_matching(&mut nums, negative()), 3);
/// assert_eq!(nums, vec![10, 20, 30]);
/// ```
pub fn remove_matching<T, P: Predicate<T>>(items: &mut Vec<T>, predicate: P) -> usize {
    let before = items.len();
    items.retain(|item| !predicate.check(item));
    before - items.len()
}
