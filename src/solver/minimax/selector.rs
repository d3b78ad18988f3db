//! Minimax-based word scoring
//!
//! Scores every probe word by its worst-case partition, negated so that
//! higher is better like every other strategy.

use super::calculator::calculate_max_remaining;
use crate::core::Word;
use rayon::prelude::*;

/// `-(largest partition)` of every guess in `guess_pool`, in input order
///
/// # Examples
/// ```
/// use wordle_assist::core::Word;
/// use wordle_assist::solver::minimax::score_guesses;
///
/// let guesses = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("crane").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("crate").unwrap(),
/// ];
///
/// let guess_refs: Vec<&Word> = guesses.iter().collect();
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let scores = score_guesses(&guess_refs, &candidate_refs);
/// assert_eq!(scores[0].1, -2.0);
/// assert_eq!(scores[1].1, -1.0);
/// ```
#[must_use]
pub fn score_guesses<'a>(
    guess_pool: &[&'a Word],
    candidates: &[&Word],
) -> Vec<(&'a Word, f64)> {
    guess_pool
        .par_iter()
        .map(|&guess| (guess, -(calculate_max_remaining(guess, candidates) as f64)))
        .collect()
}
