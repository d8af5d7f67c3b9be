//! Person predicates

use super::combinators::Predicate;
use crate::person::{self, Person};

/// Predicate backed by [`person::is_adult`].
#[derive(Clone, Copy, Default, Debug)]
pub struct Adult;

impl Predicate<Person> for Adult {
    #[inline]
    fn check(&self, value: &Person) -> bool {
        person::is_adult(value)
    }
}

/// Create a predicate that checks a person is older than
/// [`ADULT_AGE`](crate::person::ADULT_AGE).
///
/// ```rust
/// use purepred::predicate::*;
/// use purepred::Person;
///
/// assert!(adult().check(&Person::new("Mohan", 22)));
/// assert!(!adult().check(&Person::new("Komal", 15)));
/// ```
pub fn adult() -> Adult {
    Adult
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{all, PredicateExt};

    #[test]
    fn test_adult_in_collection() {
        let people = vec![Person::new("Mohan", 22), Person::new("Asha", 40)];
        assert!(all(adult()).check(&people));

        let mixed = vec![Person::new("Mohan", 22), Person::new("Komal", 15)];
        assert!(!all(adult()).check(&mixed));
    }

    #[test]
    fn test_adult_not() {
        let minor = adult().not();
        assert!(minor.check(&Person::new("Komal", 15)));
    }
}
