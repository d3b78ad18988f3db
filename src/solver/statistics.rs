//! Letter statistics over a candidate pool
//!
//! Recomputed from scratch on every call; nothing is cached between guesses.

use crate::core::{ALPHABET_SIZE, Word, letter_index};

/// Share of pool words containing each letter, overall and per position
#[derive(Debug, Clone)]
pub struct LetterStatistics {
    pool_size: usize,
    /// Share of words containing the letter at least once
    presence: [f64; ALPHABET_SIZE],
    /// `positional[i][l]` = share of words with letter `l` at position `i`
    positional: Vec<[f64; ALPHABET_SIZE]>,
}

impl LetterStatistics {
    /// Count letters across `words`, all of which have `word_length` letters
    #[must_use]
    pub fn compute(words: &[Word], word_length: usize) -> Self {
        let mut presence = [0usize; ALPHABET_SIZE];
        let mut positional = vec![[0usize; ALPHABET_SIZE]; word_length];

        for word in words {
            for letter in word.distinct_letters() {
                presence[letter_index(letter)] += 1;
            }
            for (slot, &letter) in positional.iter_mut().zip(word.letters()) {
                slot[letter_index(letter)] += 1;
            }
        }

        let total = words.len().max(1) as f64;
        Self {
            pool_size: words.len(),
            presence: presence.map(|count| count as f64 / total),
            positional: positional
                .into_iter()
                .map(|slot| slot.map(|count| count as f64 / total))
                .collect(),
        }
    }

    #[must_use]
    pub const fn pool_size(&self) -> usize {
        self.pool_size
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.positional.len()
    }

    /// Share of pool words containing `letter` (lower-case ASCII)
    #[inline]
    #[must_use]
    pub fn presence(&self, letter: u8) -> f64 {
        self.presence[letter_index(letter)]
    }

    /// Share of pool words with `letter` at `position`
    #[inline]
    #[must_use]
    pub fn positional(&self, position: usize, letter: u8) -> f64 {
        self.positional[position][letter_index(letter)]
    }

    /// Sum of presence shares over the word's distinct letters
    #[must_use]
    pub fn coverage(&self, word: &Word) -> f64 {
        word.distinct_letters().map(|l| self.presence(l)).sum()
    }

    /// Sum of positional shares over the word's letters
    #[must_use]
    pub fn positional_fit(&self, word: &Word) -> f64 {
        word.letters()
            .iter()
            .enumerate()
            .map(|(i, &l)| self.positional(i, l))
            .sum()
    }

    /// Mean of `1 - positional share`: how much each position would still tell us
    #[must_use]
    pub fn positional_information(&self, word: &Word) -> f64 {
        if word.is_empty() {
            return 0.0;
        }
        let unknown: f64 = word
            .letters()
            .iter()
            .enumerate()
            .map(|(i, &l)| 1.0 - self.positional(i, l))
            .sum();
        unknown / word.len() as f64
    }

    /// Letters by descending presence, ties alphabetical; absent letters omitted
    #[must_use]
    pub fn ranked_letters(&self) -> Vec<(char, f64)> {
        let mut letters: Vec<(char, f64)> = (b'a'..=b'z')
            .map(|l| (char::from(l), self.presence(l)))
            .filter(|&(_, share)| share > 0.0)
            .collect();
        letters.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn presence_counts_each_word_once() {
        let stats = LetterStatistics::compute(&words(&["speed", "crane"]), 5);
        assert!((stats.presence(b'e') - 1.0).abs() < f64::EPSILON);
        assert!((stats.presence(b's') - 0.5).abs() < f64::EPSILON);
        assert!(stats.presence(b'z').abs() < f64::EPSILON);
        assert_eq!(stats.pool_size(), 2);
    }

    #[test]
    fn positional_shares() {
        let stats = LetterStatistics::compute(&words(&["slate", "crate", "grate", "crane"]), 5);
        assert!((stats.positional(4, b'e') - 1.0).abs() < f64::EPSILON);
        assert!((stats.positional(0, b'c') - 0.5).abs() < f64::EPSILON);
        assert!(stats.positional(0, b'e').abs() < f64::EPSILON);
        assert_eq!(stats.word_length(), 5);
    }

    #[test]
    fn positional_information_penalises_known_positions() {
        let pool = words(&["slate", "crate", "grate"]);
        let stats = LetterStatistics::compute(&pool, 5);
        // Every pool word ends in "ate", so those positions tell us nothing
        let info = stats.positional_information(&Word::new("slate").unwrap());
        assert!(info < 0.5);
        assert!(stats.positional_information(&Word::new("zzzzz").unwrap()) > info);
    }

    #[test]
    fn ranked_letters_orders_by_share() {
        let stats = LetterStatistics::compute(&words(&["aaaab", "aaaac"]), 5);
        let ranked = stats.ranked_letters();
        assert_eq!(ranked[0].0, 'a');
        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[1].0, 'b');
    }

    #[test]
    fn empty_pool_yields_zero_shares() {
        let stats = LetterStatistics::compute(&[], 5);
        assert!(stats.presence(b'a').abs() < f64::EPSILON);
        assert!(stats.ranked_letters().is_empty());
    }
}
