//! Guess history for one puzzle attempt

use super::pattern::{Pattern, evaluate};
use super::word::{ALPHABET_SIZE, Word, letter_index};
use crate::error::{Result, SolverError};

/// A guess and the feedback it received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub guess: Word,
    pub pattern: Pattern,
}

impl GuessRecord {
    /// Pair a guess with its feedback
    ///
    /// # Errors
    /// Returns `InvalidLength` when the pattern length differs from the guess.
    pub fn new(guess: Word, pattern: Pattern) -> Result<Self> {
        if guess.len() != pattern.len() {
            return Err(SolverError::InvalidLength {
                expected: guess.len(),
                actual: pattern.len(),
            });
        }
        Ok(Self { guess, pattern })
    }

    /// Record the feedback `guess` would receive against `hidden`
    ///
    /// # Errors
    /// Returns `InvalidLength` when the words differ in length.
    pub fn scored(guess: Word, hidden: &Word) -> Result<Self> {
        let pattern = evaluate(&guess, hidden)?;
        Ok(Self { guess, pattern })
    }

    /// Whether `candidate`, as the hidden word, would reproduce this feedback
    #[inline]
    #[must_use]
    pub fn admits(&self, candidate: &Word) -> bool {
        candidate.len() == self.guess.len()
            && Pattern::between(&self.guess, candidate) == self.pattern
    }
}

/// Ordered guesses for one attempt; only ever appended to (or truncated by undo)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    records: Vec<GuessRecord>,
}

impl History {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: GuessRecord) {
        self.records.push(record);
    }

    /// Remove and return the newest record
    pub fn pop(&mut self) -> Option<GuessRecord> {
        self.records.pop()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&GuessRecord> {
        self.records.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GuessRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn records(&self) -> &[GuessRecord] {
        &self.records
    }

    /// Whether `candidate` explains every recorded pattern
    #[must_use]
    pub fn admits(&self, candidate: &Word) -> bool {
        self.records.iter().all(|record| record.admits(candidate))
    }

    /// Letters used in any guess so far
    #[must_use]
    pub fn guessed_letters(&self) -> [bool; ALPHABET_SIZE] {
        let mut seen = [false; ALPHABET_SIZE];
        for record in &self.records {
            for &letter in record.guess.letters() {
                seen[letter_index(letter)] = true;
            }
        }
        seen
    }

    /// Share of the word's distinct letters not guessed yet (0 with no history)
    #[must_use]
    pub fn uniqueness(&self, word: &Word) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let guessed = self.guessed_letters();
        let (fresh, total) = word.distinct_letters().fold((0usize, 0usize), |(fresh, total), l| {
            (fresh + usize::from(!guessed[letter_index(l)]), total + 1)
        });
        if total == 0 { 0.0 } else { fresh as f64 / total as f64 }
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a GuessRecord;
    type IntoIter = std::slice::Iter<'a, GuessRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<GuessRecord> for History {
    fn from_iter<I: IntoIterator<Item = GuessRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn record_rejects_length_mismatch() {
        let pattern = Pattern::parse("GGG", 3).unwrap();
        assert!(matches!(
            GuessRecord::new(word("crane"), pattern),
            Err(SolverError::InvalidLength { .. })
        ));
    }

    #[test]
    fn record_admits_only_consistent_words() {
        let record = GuessRecord::scored(word("crane"), &word("slate")).unwrap();
        assert_eq!(record.pattern.to_string(), "BBGBG");
        assert!(record.admits(&word("slate")));
        assert!(record.admits(&word("plate")));
        assert!(!record.admits(&word("crate")));
        assert!(!record.admits(&word("cranes")));
    }

    #[test]
    fn history_admits_all_records() {
        let hidden = word("grate");
        let history: History = ["crane", "irate"]
            .iter()
            .map(|g| GuessRecord::scored(word(g), &hidden).unwrap())
            .collect();

        assert_eq!(history.len(), 2);
        assert!(history.admits(&hidden));
        assert!(!history.admits(&word("crate")));
    }

    #[test]
    fn uniqueness_counts_fresh_letters() {
        let mut history = History::new();
        assert!(history.uniqueness(&word("crane")).abs() < f64::EPSILON);

        history.push(GuessRecord::scored(word("crane"), &word("slate")).unwrap());
        // S, L, T are new, A and E were guessed
        assert!((history.uniqueness(&word("slate")) - 0.6).abs() < 1e-9);
        assert!(history.uniqueness(&word("crane")).abs() < f64::EPSILON);
        assert!((history.uniqueness(&word("pious")) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn pop_and_clear() {
        let mut history = History::new();
        history.push(GuessRecord::scored(word("crane"), &word("slate")).unwrap());
        assert!(history.pop().is_some());
        assert!(history.is_empty());
        history.push(GuessRecord::scored(word("crane"), &word("slate")).unwrap());
        history.clear();
        assert!(history.last().is_none());
    }
}
