//! String niceness classifier.
//!
//! A string is *nice* when at least two of three heuristics hold:
//!
//! - it contains none of the substrings `bu`, `ba`, `be`
//! - it contains at least three vowels (`a`, `e`, `i`, `o`, `u`, lowercase only)
//! - it contains a double letter (two equal adjacent characters)
//!
//! ```rust
//! use taxipark_analytics::nice_string::is_nice;
//!
//! assert!(is_nice("aei"));
//! assert!(is_nice("nn"));
//! assert!(!is_nice("bac"));
//! ```

const FORBIDDEN_PAIRS: [&str; 3] = ["bu", "ba", "be"];
const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];
const MIN_VOWELS: usize = 3;

/// Which of the three heuristics held for a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NicenessReport {
    /// No `bu`/`ba`/`be` substring.
    pub no_forbidden_pair: bool,
    /// At least three lowercase vowels.
    pub enough_vowels: bool,
    /// Two equal adjacent characters.
    pub double_letter: bool,
}

impl NicenessReport {
    /// Number of heuristics that held.
    pub fn passed(&self) -> usize {
        [self.no_forbidden_pair, self.enough_vowels, self.double_letter]
            .into_iter()
            .filter(|&ok| ok)
            .count()
    }

    /// Majority vote: at least two of three.
    pub fn is_nice(&self) -> bool {
        self.passed() >= 2
    }
}

/// Evaluate all three heuristics.
pub fn check(s: &str) -> NicenessReport {
    NicenessReport {
        no_forbidden_pair: has_no_forbidden_pair(s),
        enough_vowels: has_enough_vowels(s),
        double_letter: has_double_letter(s),
    }
}

/// Returns `true` if at least two of the three heuristics hold for `s`.
pub fn is_nice(s: &str) -> bool {
    check(s).is_nice()
}

/// `true` if `s` contains none of `bu`, `ba`, `be`.
pub fn has_no_forbidden_pair(s: &str) -> bool {
    !FORBIDDEN_PAIRS.iter().any(|pair| s.contains(pair))
}

/// `true` if `s` has at least three lowercase vowels, counted with repetition.
pub fn has_enough_vowels(s: &str) -> bool {
    s.chars().filter(|c| VOWELS.contains(c)).count() >= MIN_VOWELS
}

/// `true` if two adjacent characters of `s` are equal.
pub fn has_double_letter(s: &str) -> bool {
    s.chars().zip(s.chars().skip(1)).any(|(a, b)| a == b)
}
