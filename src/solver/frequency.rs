//! Letter-frequency scoring
//!
//! Rewards guesses made of letters that are common across the pool, with a
//! bonus for letters sitting where pool words usually have them.

use super::statistics::LetterStatistics;
use crate::core::Word;

/// Frequency score of one word
///
/// Σ presence share over distinct letters + `positional_weight` × Σ positional
/// share over positions.
#[must_use]
pub fn score_word(word: &Word, stats: &LetterStatistics, positional_weight: f64) -> f64 {
    stats.coverage(word) + positional_weight * stats.positional_fit(word)
}

/// Frequency scores for `words`, in input order
#[must_use]
pub fn score_words<'a>(
    words: &[&'a Word],
    stats: &LetterStatistics,
    positional_weight: f64,
) -> Vec<(&'a Word, f64)> {
    words
        .iter()
        .map(|&word| (word, score_word(word, stats, positional_weight)))
        .collect()
}
