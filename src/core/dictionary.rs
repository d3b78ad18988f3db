//! The word list a session draws candidates from
//!
//! Holds the ordered, de-duplicated words and an optional commonality table.
//! Without a table, earlier words count as more common.

use super::word::Word;
use crate::error::{Result, SolverError};
use rustc_hash::FxHashMap;

/// Share of the dictionary treated as "common" words
const COMMON_SHARE: f64 = 0.3;

/// Ordered fixed-length word list with optional frequencies
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
    word_length: usize,
    index: FxHashMap<Word, usize>,
    frequencies: Option<Vec<f64>>,
    max_frequency: f64,
    /// Word indices from most to least common
    by_commonness: Vec<usize>,
}

impl Dictionary {
    /// Build a dictionary from words in commonality order
    ///
    /// Duplicates keep their first position.
    ///
    /// # Errors
    /// `InvalidLength` if a word has the wrong length, `InvalidConfig` if the
    /// list is empty.
    pub fn new(words: impl IntoIterator<Item = Word>, word_length: usize) -> Result<Self> {
        let mut ordered = Vec::new();
        let mut index = FxHashMap::default();

        for word in words {
            if word.len() != word_length {
                return Err(SolverError::InvalidLength {
                    expected: word_length,
                    actual: word.len(),
                });
            }
            if !index.contains_key(&word) {
                index.insert(word.clone(), ordered.len());
                ordered.push(word);
            }
        }

        if ordered.is_empty() {
            return Err(SolverError::InvalidConfig(
                "the dictionary contains no words".to_string(),
            ));
        }

        let by_commonness = (0..ordered.len()).collect();
        Ok(Self {
            words: ordered,
            word_length,
            index,
            frequencies: None,
            max_frequency: 0.0,
            by_commonness,
        })
    }

    /// Build a dictionary from string slices
    ///
    /// # Errors
    /// Any word-validation error, or those of [`Dictionary::new`].
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Dictionary;
    ///
    /// let dictionary = Dictionary::from_strs(&["crane", "slate", "CRANE"], 5).unwrap();
    /// assert_eq!(dictionary.len(), 2);
    /// ```
    pub fn from_strs(words: &[&str], word_length: usize) -> Result<Self> {
        let words = words
            .iter()
            .map(|w| Word::with_length(w, word_length))
            .collect::<Result<Vec<_>>>()?;
        Self::new(words, word_length)
    }

    /// Attach a commonality table; words missing from it get frequency 0
    ///
    /// Entries for words outside the dictionary are ignored.
    #[must_use]
    pub fn with_frequencies(mut self, table: impl IntoIterator<Item = (Word, f64)>) -> Self {
        let mut frequencies = vec![0.0; self.words.len()];
        for (word, frequency) in table {
            if let Some(&idx) = self.index.get(&word) {
                frequencies[idx] = frequency.max(0.0);
            }
        }

        let mut by_commonness: Vec<usize> = (0..self.words.len()).collect();
        // Stable sort keeps dictionary order among equal frequencies
        by_commonness.sort_by(|&a, &b| frequencies[b].total_cmp(&frequencies[a]));

        self.max_frequency = frequencies.iter().copied().fold(0.0, f64::max);
        self.frequencies = Some(frequencies);
        self.by_commonness = by_commonness;
        self
    }

    /// All words in dictionary order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Letters per word
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains_key(word)
    }

    /// Position of the word in dictionary order
    #[must_use]
    pub fn position(&self, word: &Word) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Whether a commonality table was supplied
    #[must_use]
    pub const fn has_frequencies(&self) -> bool {
        self.frequencies.is_some()
    }

    /// Raw frequency from the table (0 without a table or for unknown words)
    #[must_use]
    pub fn frequency(&self, word: &Word) -> f64 {
        match (&self.frequencies, self.position(word)) {
            (Some(frequencies), Some(idx)) => frequencies[idx],
            _ => 0.0,
        }
    }

    /// Commonness in `[0, 1]`, 1 being the most common word
    ///
    /// Log-scaled frequency when a table exists, otherwise derived from
    /// dictionary order. Unknown words score 0.
    #[must_use]
    pub fn commonness(&self, word: &Word) -> f64 {
        let Some(idx) = self.position(word) else {
            return 0.0;
        };

        match &self.frequencies {
            Some(_) if self.max_frequency <= 0.0 => 0.0,
            Some(frequencies) => frequencies[idx].ln_1p() / self.max_frequency.ln_1p(),
            None => 1.0 - idx as f64 / self.words.len() as f64,
        }
    }

    /// The most common 30% of the dictionary (at least one word)
    #[must_use]
    pub fn common_words(&self) -> Vec<&Word> {
        let count = ((self.words.len() as f64 * COMMON_SHARE) as usize).max(1);
        self.by_commonness
            .iter()
            .take(count)
            .map(|&idx| &self.words[idx])
            .collect()
    }

    /// Words from most to least common
    pub fn by_commonness(&self) -> impl Iterator<Item = &Word> {
        self.by_commonness.iter().map(|&idx| &self.words[idx])
    }
}
