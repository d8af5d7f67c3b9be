//! String predicates
//!
//! Plain functions classifying string slices. All are total.
//! Character-level checks operate on Unicode scalar values (`char`), not bytes.

/// Case handling for [`is_palindrome`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CaseSensitivity {
    /// Characters must match exactly.
    #[default]
    Sensitive,
    /// Characters are lowercased before comparison.
    Insensitive,
}

impl From<bool> for CaseSensitivity {
    /// `true` means case-sensitive.
    fn from(case_sensitive: bool) -> Self {
        if case_sensitive {
            CaseSensitivity::Sensitive
        } else {
            CaseSensitivity::Insensitive
        }
    }
}

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

#[inline]
fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c.to_ascii_lowercase())
}

/// Check whether `s` has length zero.
///
/// ```rust
/// use purepred::text::is_empty;
///
/// assert!(is_empty(""));
/// assert!(!is_empty("java"));
/// ```
#[inline]
pub fn is_empty(s: &str) -> bool {
    s.is_empty()
}

/// Check whether `s` begins with `prefix` (case-sensitive).
///
/// ```rust
/// use purepred::text::starts_with;
///
/// assert!(starts_with("Reactive", "Re"));
/// assert!(!starts_with("reactive", "Re"));
/// assert!(starts_with("anything", ""));
/// ```
#[inline]
pub fn starts_with(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
}

/// Check whether every character of `s` is uppercase.
///
/// The empty string is vacuously uppercase. Digits, spaces and punctuation
/// have no case and therefore fail the check.
///
/// ```rust
/// use purepred::text::is_all_uppercase;
///
/// assert!(is_all_uppercase("JAVA"));
/// assert!(!is_all_uppercase("Java"));
/// assert!(is_all_uppercase(""));
/// ```
pub fn is_all_uppercase(s: &str) -> bool {
    s.chars().all(char::is_uppercase)
}

/// Check whether `s` reads the same forwards and backwards.
///
/// Compares character `i` with character `len - 1 - i` for every `i` below
/// `len / 2`. With [`CaseSensitivity::Insensitive`] both characters are
/// lowercased first.
///
/// ```rust
/// use purepred::text::{is_palindrome, CaseSensitivity};
///
/// assert!(is_palindrome("madam", CaseSensitivity::Sensitive));
/// assert!(!is_palindrome("Madam", CaseSensitivity::Sensitive));
/// assert!(is_palindrome("Madam", CaseSensitivity::Insensitive));
/// assert!(is_palindrome("Madam", false.into()));
/// ```
pub fn is_palindrome(s: &str, case: CaseSensitivity) -> bool {
    let chars: Vec<char> = s.chars().collect();
    let len = chars.len();
    (0..len / 2).all(|i| {
        let (a, b) = (chars[i], chars[len - 1 - i]);
        match case {
            CaseSensitivity::Sensitive => a == b,
            CaseSensitivity::Insensitive => a.to_lowercase().eq(b.to_lowercase()),
        }
    })
}

/// Check whether the first and last characters of `s` are both vowels.
///
/// Vowels are `a e i o u` in either case. The first and last characters must
/// be distinct positions, so strings shorter than two characters fail.
///
/// ```rust
/// use purepred::text::starts_and_ends_with_vowel;
///
/// assert!(starts_and_ends_with_vowel("apple"));
/// assert!(starts_and_ends_with_vowel("Orange"));
/// assert!(!starts_and_ends_with_vowel("banana"));
/// assert!(!starts_and_ends_with_vowel("grape"));
/// ```
pub fn starts_and_ends_with_vowel(s: &str) -> bool {
    let mut chars = s.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => is_vowel(first) && is_vowel(last),
        _ => false,
    }
}

/// Check whether `s` contains at least one vowel.
///
/// ```rust
/// use purepred::text::contains_vowel;
///
/// assert!(contains_vowel("Hello"));
/// assert!(!contains_vowel("rhythm"));
/// ```
pub fn contains_vowel(s: &str) -> bool {
    s.chars().any(is_vowel)
}

/// Check whether `s` has more than `n` characters.
///
/// ```rust
/// use purepred::text::has_more_than_chars;
///
/// assert!(has_more_than_chars("Selenium", 5));
/// assert!(!has_more_than_chars("Java", 5));
/// ```
pub fn has_more_than_chars(s: &str, n: usize) -> bool {
    s.chars().nth(n).is_some()
}

/// Check whether `s` looks like an email address.
///
/// This is a toy heuristic: it only requires an `@` and a `.` somewhere in
/// the string. It is not address validation and must not be used as a
/// security boundary.
///
/// ```rust
/// use purepred::text::looks_like_email;
///
/// assert!(looks_like_email("phani@gmail.com"));
/// assert!(!looks_like_email("abc@gmail"));
/// assert!(looks_like_email(".@"));
/// ```
pub fn looks_like_email(s: &str) -> bool {
    s.contains('@') && s.contains('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_empty() {
        assert!(is_empty(""));
        assert!(!is_empty(" "));
        assert!(!is_empty("java"));
    }

    #[test]
    fn test_starts_with_is_case_sensitive() {
        assert!(starts_with("Reactive", "Re"));
        assert!(!starts_with("Java", "Re"));
        assert!(!starts_with("REactive", "Re"));
        assert!(!starts_with("R", "Re"));
    }

    #[test]
    fn test_is_all_uppercase() {
        assert!(is_all_uppercase("JAVA"));
        assert!(!is_all_uppercase("Java"));
        assert!(!is_all_uppercase("JAVA 8"));
        assert!(is_all_uppercase("ÉTÉ"));
    }

    #[test]
    fn test_is_all_uppercase_empty_is_vacuously_true() {
        assert!(is_all_uppercase(""));
    }

    #[test]
    fn test_is_palindrome_case_sensitive() {
        assert!(is_palindrome("madam", CaseSensitivity::Sensitive));
        assert!(is_palindrome("abba", CaseSensitivity::Sensitive));
        assert!(!is_palindrome("Madam", CaseSensitivity::Sensitive));
        assert!(!is_palindrome("Hello", CaseSensitivity::Sensitive));
    }

    #[test]
    fn test_is_palindrome_case_insensitive() {
        assert!(is_palindrome("Madam", CaseSensitivity::Insensitive));
        assert!(is_palindrome("RaceCar", CaseSensitivity::Insensitive));
        assert!(!is_palindrome("Hello", CaseSensitivity::Insensitive));
    }

    #[test]
    fn test_is_palindrome_trivial_inputs() {
        assert!(is_palindrome("", CaseSensitivity::Sensitive));
        assert!(is_palindrome("x", CaseSensitivity::Sensitive));
    }

    #[test]
    fn test_is_palindrome_multibyte() {
        assert!(is_palindrome("été", CaseSensitivity::Sensitive));
        assert!(is_palindrome("Été", CaseSensitivity::Insensitive));
    }

    #[test]
    fn test_case_sensitivity_from_bool() {
        assert_eq!(CaseSensitivity::from(true), CaseSensitivity::Sensitive);
        assert_eq!(CaseSensitivity::from(false), CaseSensitivity::Insensitive);
        assert_eq!(CaseSensitivity::default(), CaseSensitivity::Sensitive);
    }

    #[test]
    fn test_starts_and_ends_with_vowel() {
        let words = ["apple", "banana", "orange", "grape"];
        let matching: Vec<&str> = words
            .into_iter()
            .filter(|w| starts_and_ends_with_vowel(w))
            .collect();
        assert_eq!(matching, vec!["apple", "orange"]);
    }

    #[test]
    fn test_starts_and_ends_with_vowel_edges() {
        assert!(!starts_and_ends_with_vowel(""));
        assert!(!starts_and_ends_with_vowel("a"));
        assert!(!starts_and_ends_with_vowel("E"));
        assert!(starts_and_ends_with_vowel("aa"));
        assert!(starts_and_ends_with_vowel("AudiO"));
        assert!(!starts_and_ends_with_vowel("b"));
    }

    #[test]
    fn test_contains_vowel() {
        assert!(contains_vowel("Hello"));
        assert!(contains_vowel("U"));
        assert!(!contains_vowel(""));
        assert!(!contains_vowel("xyz"));
    }

    #[test]
    fn test_has_more_than_chars() {
        assert!(has_more_than_chars("Selenium", 5));
        assert!(!has_more_than_chars("Java", 5));
        assert!(!has_more_than_chars("Hello", 5));
        assert!(has_more_than_chars("a", 0));
        assert!(!has_more_than_chars("", 0));
        // counts chars, not bytes
        assert!(!has_more_than_chars("ééé", 3));
    }

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("phani@gmail.com"));
        assert!(!looks_like_email("abc@gmail"));
        assert!(!looks_like_email("gmail.com"));
        assert!(!looks_like_email(""));
    }
}
