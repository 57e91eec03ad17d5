//! Locale-aware ordering of entry names
//!
//! Uses the Unicode root collation (the CLDR default table ICU applies when
//! no locale tailoring is requested) at tertiary strength with punctuation
//! non-ignorable. Accented letters sort next to their base letter, case is
//! a tertiary difference with lowercase first, and `ß` sorts with `ss`.
//! Names the collator considers equal fall back to code-point order so the
//! ordering is total.

use std::cmp::Ordering;
use std::ffi::OsStr;

use icu_collator::{Collator, CollatorOptions};

use crate::error::{BundlerError, Result};

/// Root-locale collator for directory entry names
pub struct NameCollator {
    collator: Collator,
}

impl NameCollator {
    pub fn new() -> Result<Self> {
        let collator = Collator::try_new(&Default::default(), CollatorOptions::new()).map_err(
            |e| BundlerError::CollatorUnavailable {
                reason: e.to_string(),
            },
        )?;
        Ok(Self { collator })
    }

    /// Compare two names the way a locale-aware string comparison would.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b).then_with(|| a.cmp(b))
    }

    /// Compare raw file names.
    ///
    /// Names are decoded lossily for collation. Distinct raw names that
    /// decode to the same string are ordered by their raw bytes.
    pub fn compare_os(&self, a: &OsStr, b: &OsStr) -> Ordering {
        self.compare(&a.to_string_lossy(), &b.to_string_lossy())
            .then_with(|| a.cmp(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let collator = NameCollator::new().unwrap();
        let mut v: Vec<String> = names.iter().map(|s| (*s).to_string()).collect();
        v.sort_by(|a, b| collator.compare(a, b));
        v
    }

    #[test]
    fn test_case_insensitive_with_lowercase_first() {
        assert_eq!(
            sorted(&["B", "a", "b", "A"]),
            vec!["a", "A", "b", "B"]
        );
    }

    #[test]
    fn test_punctuation_before_digits_before_letters() {
        assert_eq!(
            sorted(&["zeta", "9lives", "_private", "Alpha"]),
            vec!["_private", "9lives", "Alpha", "zeta"]
        );
    }

    #[test]
    fn test_underscore_before_hyphen_before_dot() {
        assert_eq!(
            sorted(&["a.txt", "a-b", "a_b"]),
            vec!["a_b", "a-b", "a.txt"]
        );
    }

    #[test]
    fn test_digits_are_not_numeric_ordered() {
        assert_eq!(sorted(&["9.txt", "10.txt"]), vec!["10.txt", "9.txt"]);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(sorted(&["button.js", "button"]), vec!["button", "button.js"]);
    }

    #[test]
    fn test_mixed_case_words() {
        assert_eq!(
            sorted(&["Readme.md", "index.js", "README.md", "Button"]),
            vec!["Button", "index.js", "Readme.md", "README.md"]
        );
    }

    #[test]
    fn test_accented_letters_sort_with_base_letter() {
        assert_eq!(
            sorted(&["über", "z", "é", "e", "f", "ä.txt", "a.txt", "u", "E"]),
            vec!["a.txt", "ä.txt", "e", "E", "é", "f", "u", "über", "z"]
        );
    }

    #[test]
    fn test_sharp_s_sorts_with_double_s() {
        assert_eq!(
            sorted(&["st", "ß", "sr", "ss"]),
            vec!["sr", "ss", "ß", "st"]
        );
    }

    #[test]
    fn test_non_latin_letters_sort_after_latin() {
        assert_eq!(sorted(&["ω", "z", "a"]), vec!["a", "z", "ω"]);
    }

    #[test]
    fn test_equal_names_are_equal() {
        let collator = NameCollator::new().unwrap();
        assert_eq!(collator.compare("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_ordering_is_antisymmetric() {
        let collator = NameCollator::new().unwrap();
        let names = ["a", "A", "_", "1", "é", "E", "~x", "ß", "ss"];
        for a in names {
            for b in names {
                assert_eq!(collator.compare(a, b), collator.compare(b, a).reverse());
            }
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_lossy_collisions_ordered_by_raw_bytes() {
        use std::os::unix::ffi::OsStrExt;

        let collator = NameCollator::new().unwrap();
        let low = OsStr::from_bytes(b"a\xfe");
        let high = OsStr::from_bytes(b"a\xff");
        assert_eq!(collator.compare_os(low, high), Ordering::Less);
        assert_eq!(collator.compare_os(high, low), Ordering::Greater);
    }
}
