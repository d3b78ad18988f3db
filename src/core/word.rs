//! Word representation
//!
//! A Word is an immutable, lower-case, A–Z-only string of fixed length.
//! Cloning is a reference-count bump so pools and histories can share words.

use crate::error::{Result, SolverError};
use std::fmt;
use std::sync::Arc;

/// Longest word the pattern encoding supports (3^20 fits in a `u32`).
pub const MAX_WORD_LENGTH: usize = 20;

/// Number of letters in the alphabet.
pub const ALPHABET_SIZE: usize = 26;

/// A dictionary word
///
/// Ordering is lexical, which gives strategies a reproducible tie-break.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: Arc<str>,
}

impl Word {
    /// Create a new Word, normalising to lower case
    ///
    /// # Errors
    /// Returns `InvalidAlphabet` for any character outside A–Z (either case),
    /// and `InvalidLength` for an empty string or one longer than
    /// [`MAX_WORD_LENGTH`].
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    ///
    /// let word = Word::new("CRANE").unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self> {
        let text = text.trim();

        if let Some(character) = text.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(SolverError::InvalidAlphabet {
                input: text.to_string(),
                character,
            });
        }

        // All ASCII from here, so byte length == character count
        if text.is_empty() || text.len() > MAX_WORD_LENGTH {
            return Err(SolverError::InvalidLength {
                expected: if text.is_empty() { 1 } else { MAX_WORD_LENGTH },
                actual: text.len(),
            });
        }

        Ok(Self {
            text: Arc::from(text.to_ascii_lowercase()),
        })
    }

    /// Create a Word that must have exactly `length` letters
    ///
    /// # Errors
    /// As [`Word::new`], plus `InvalidLength` when the length differs.
    pub fn with_length(text: &str, length: usize) -> Result<Self> {
        let word = Self::new(text)?;
        if word.len() == length {
            Ok(word)
        } else {
            Err(SolverError::InvalidLength {
                expected: length,
                actual: word.len(),
            })
        }
    }

    /// The word as a lower-case string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The word as lower-case ASCII bytes
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

    /// Always false for a constructed word; present for clippy's `len_without_is_empty`
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Letter at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> u8 {
        self.letters()[position]
    }

    /// Occurrences of each letter, indexed `letter - b'a'`
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &letter in self.letters() {
            counts[letter_index(letter)] += 1;
        }
        counts
    }

    /// Distinct letters, in order of first appearance
    pub fn distinct_letters(&self) -> impl Iterator<Item = u8> + '_ {
        let mut seen = [false; ALPHABET_SIZE];
        self.letters().iter().copied().filter(move |&letter| {
            let idx = letter_index(letter);
            !std::mem::replace(&mut seen[idx], true)
        })
    }
}

/// Alphabet index of a lower-case ASCII letter
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(word.letters(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("CRANE").unwrap().text(), "crane");
        assert_eq!(Word::new("CrAnE").unwrap(), Word::new("crane").unwrap());
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(matches!(
            Word::new("cran3"),
            Err(SolverError::InvalidAlphabet { character: '3', .. })
        ));
        assert!(matches!(
            Word::new("cr ne"),
            Err(SolverError::InvalidAlphabet { character: ' ', .. })
        ));
        assert!(Word::new("crâne").is_err());
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new(""),
            Err(SolverError::InvalidLength { actual: 0, .. })
        ));
        assert!(Word::new(&"a".repeat(MAX_WORD_LENGTH + 1)).is_err());
        assert!(matches!(
            Word::with_length("shrt", 5),
            Err(SolverError::InvalidLength {
                expected: 5,
                actual: 4
            })
        ));
        assert!(Word::with_length("ocean", 5).is_ok());
    }

    #[test]
    fn word_letter_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.letter_at(0), b'c');
        assert_eq!(word.letter_at(4), b'e');
    }

    #[test]
    fn word_letter_counts() {
        let counts = Word::new("speed").unwrap().letter_counts();
        assert_eq!(counts[letter_index(b'e')], 2);
        assert_eq!(counts[letter_index(b's')], 1);
        assert_eq!(counts[letter_index(b'z')], 0);
    }

    #[test]
    fn word_distinct_letters() {
        let word = Word::new("speed").unwrap();
        let distinct: Vec<u8> = word.distinct_letters().collect();
        assert_eq!(distinct, b"sped");

        let word = Word::new("aaaaa").unwrap();
        assert_eq!(word.distinct_letters().count(), 1);
    }

    #[test]
    fn word_ordering_is_lexical() {
        let mut words = vec![
            Word::new("slate").unwrap(),
            Word::new("crane").unwrap(),
            Word::new("irate").unwrap(),
        ];
        words.sort();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "irate", "slate"]);
    }

    #[test]
    fn word_display_and_parse() {
        let word: Word = "Crane".parse().unwrap();
        assert_eq!(format!("{word}"), "crane");
    }
}
