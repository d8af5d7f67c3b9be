//! Person record used as sample input for age predicates.

/// Age a person must exceed to count as an adult.
pub const ADULT_AGE: u32 = 18;

/// A named person with an age in years.
///
/// # Example
///
/// ```rust
/// use purepred::{is_adult, Person};
///
/// let mohan = Person::new("Mohan", 22);
/// let komal = Person::new("Komal", 15);
/// assert!(is_adult(&mohan));
/// assert!(!is_adult(&komal));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Person {
    name: String,
    age: u32,
}

impl Person {
    /// Create a person.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    /// The person's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The person's age in years.
    pub fn age(&self) -> u32 {
        self.age
    }

    /// Replace the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replace the age.
    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }
}

/// Check whether `person` is strictly older than [`ADULT_AGE`].
///
/// Being a plain `fn(&Person) -> bool`, this is also a
/// [`Predicate<Person>`](crate::predicate::Predicate).
pub fn is_adult(person: &Person) -> bool {
    person.age > ADULT_AGE
}
