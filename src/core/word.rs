//! Target and guess word representation
//!
//! A Word stores an uppercase ASCII word along with helpers for duplicate-letter handling.

use rustc_hash::FxHashMap;
use std::fmt;

/// Default number of letters in a word
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// An uppercase word made of ASCII letters
///
/// Words are immutable once created. Length is not fixed by the type; the
/// session configuration decides which length is playable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidLength { expected: usize, actual: usize },
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidLength { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string of any non-zero length
    ///
    /// The text is trimmed and normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if the text is empty or contains anything other
    /// than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use hinted_wordle::core::Word;
    ///
    /// let word = Word::new("kneel").unwrap();
    /// assert_eq!(word.text(), "KNEEL");
    ///
    /// assert!(Word::new("kn33l").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        // Checked before case folding: full Unicode uppercasing can change
        // the letter count ("ß" becomes "SS")
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_uppercase();

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Create a new Word that must have exactly `length` letters
    ///
    /// Length is counted in characters and checked before the character set,
    /// so a short word with a digit in it reports the length problem. Case
    /// folding is ASCII-only, so the count also holds for the normalized word.
    ///
    /// # Errors
    /// Returns `WordError::InvalidLength` on a length mismatch, or any error
    /// from [`Word::new`].
    pub fn with_length(text: impl AsRef<str>, length: usize) -> Result<Self, WordError> {
        let trimmed = text.as_ref().trim();
        let actual = trimmed.chars().count();
        if actual != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual,
            });
        }
        Self::new(trimmed)
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; a Word has at least one letter
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the count of each letter in the word
    ///
    /// Used by feedback evaluation to consume duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.letters() {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("DATES").unwrap();
        assert_eq!(word.text(), "DATES");
        assert_eq!(word.letters(), b"DATES");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        assert_eq!(Word::new("dates").unwrap().text(), "DATES");
        assert_eq!(Word::new("DaTeS").unwrap().text(), "DATES");
        assert_eq!(Word::new("  stars \n").unwrap().text(), "STARS");
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("kne3l"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("kn el"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("knee!"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("knéel"), Err(WordError::NonAscii));
        assert_eq!(Word::new("   "), Err(WordError::Empty));
    }

    #[test]
    fn word_with_length_checks_length_first() {
        assert!(Word::with_length("marry", 5).is_ok());
        assert_eq!(
            Word::with_length("mar1", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(
            Word::with_length("married", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 7
            })
        );
        assert_eq!(
            Word::with_length("mar1y", 5),
            Err(WordError::InvalidCharacters)
        );
    }

    #[test]
    fn word_with_length_counts_characters_not_bytes() {
        assert_eq!(Word::with_length("ÉCRAN", 5), Err(WordError::NonAscii));
    }

    #[test]
    fn expanding_uppercase_is_rejected_not_folded() {
        // "ß" uppercases to "SS" under full Unicode rules
        assert_eq!(Word::new("ßtars"), Err(WordError::NonAscii));
        assert_eq!(Word::with_length("ßtars", 5), Err(WordError::NonAscii));
        assert_eq!(
            Word::with_length("ﬁrst", 5),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 4
            })
        );
    }

    #[test]
    fn word_char_counts_duplicates() {
        let counts = Word::new("kneel").unwrap().char_counts();
        assert_eq!(counts.get(&b'K'), Some(&1));
        assert_eq!(counts.get(&b'N'), Some(&1));
        assert_eq!(counts.get(&b'E'), Some(&2));
        assert_eq!(counts.get(&b'L'), Some(&1));
        assert_eq!(counts.len(), 4);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "first".parse().unwrap();
        assert_eq!(format!("{word}"), "FIRST");
    }
}
