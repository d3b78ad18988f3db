//! Candidate filtering
//!
//! A candidate is any word that, taken as the hidden word, would have produced
//! every recorded pattern. Filtering only ever removes words.

use crate::core::{Dictionary, GuessRecord, History, Word};
use crate::error::{Result, SolverError};
use rayon::prelude::*;

/// Words still consistent with the history, in dictionary order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool {
    words: Vec<Word>,
}

impl CandidatePool {
    /// Every word of the dictionary
    #[must_use]
    pub fn full(dictionary: &Dictionary) -> Self {
        Self {
            words: dictionary.words().to_vec(),
        }
    }

    /// Pool over an explicit word list
    #[must_use]
    pub const fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

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

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// The only remaining word, if exactly one is left
    #[must_use]
    pub fn single(&self) -> Option<&Word> {
        match self.words.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Pool restricted to words consistent with `record`
    ///
    /// # Errors
    /// Returns `NoCandidates` if no word survives; `self` is untouched.
    pub fn narrowed(&self, record: &GuessRecord) -> Result<Self> {
        let words: Vec<Word> = self
            .words
            .par_iter()
            .filter(|candidate| record.admits(candidate))
            .cloned()
            .collect();

        if words.is_empty() {
            return Err(SolverError::NoCandidates {
                guess: record.guess.text().to_ascii_uppercase(),
                pattern: record.pattern.to_string(),
            });
        }
        Ok(Self { words })
    }

    /// Narrow in place by one record
    ///
    /// # Errors
    /// Returns `NoCandidates` if no word survives; the pool is left as it was.
    pub fn narrow(&mut self, record: &GuessRecord) -> Result<()> {
        *self = self.narrowed(record)?;
        Ok(())
    }
}

/// Keep the words of `pool` consistent with every record in `history`
///
/// # Errors
/// Returns `NoCandidates` naming the first record that leaves nothing.
///
/// # Examples
/// ```
/// use wordle_assist::core::{Dictionary, GuessRecord, History, Word};
/// use wordle_assist::solver::{CandidatePool, filter};
///
/// let dictionary = Dictionary::from_strs(&["slate", "crate", "plate", "irate"], 5).unwrap();
/// let mut history = History::new();
/// let hidden = Word::new("plate").unwrap();
/// history.push(GuessRecord::scored(Word::new("slate").unwrap(), &hidden).unwrap());
///
/// let pool = filter(&CandidatePool::full(&dictionary), &history).unwrap();
/// assert_eq!(pool.words(), &[hidden]);
/// ```
pub fn filter(pool: &CandidatePool, history: &History) -> Result<CandidatePool> {
    history
        .iter()
        .try_fold(pool.clone(), |pool, record| pool.narrowed(record))
}
