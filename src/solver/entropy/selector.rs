//! Entropy-based word scoring
//!
//! Scores every probe word by the Shannon entropy of the pool split it produces.

use super::calculator::calculate_entropy;
use crate::core::Word;
use rayon::prelude::*;

/// Entropy of every guess in `guess_pool` against `candidates`
///
/// Output keeps the order of `guess_pool`.
///
/// # Examples
/// ```
/// use wordle_assist::core::Word;
/// use wordle_assist::solver::entropy::score_guesses;
///
/// let guesses = vec![
///     Word::new("aaaaa").unwrap(),
///     Word::new("aeros").unwrap(),
/// ];
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// let guess_refs: Vec<&Word> = guesses.iter().collect();
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let scores = score_guesses(&guess_refs, &candidate_refs);
/// assert!(scores[1].1 > scores[0].1);
/// ```
#[must_use]
pub fn score_guesses<'a>(
    guess_pool: &[&'a Word],
    candidates: &[&Word],
) -> Vec<(&'a Word, f64)> {
    guess_pool
        .par_iter()
        .map(|&guess| (guess, calculate_entropy(guess, candidates)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diverse_letters_score_higher() {
        let guesses = [
            Word::new("aaaaa").unwrap(), // Low entropy (all same letter)
            Word::new("aeros").unwrap(), // Higher entropy (diverse letters)
        ];
        let candidates = [
            Word::new("slate").unwrap(),
            Word::new("irate").unwrap(),
            Word::new("crate").unwrap(),
            Word::new("grate").unwrap(),
        ];

        let guess_refs: Vec<&Word> = guesses.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        let scores = score_guesses(&guess_refs, &candidate_refs);
        assert!(scores[1].1 > scores[0].1);
        assert!(scores[1].1 > 0.5);
    }

    #[test]
    fn scores_keep_input_order() {
        let guesses = [Word::new("crane").unwrap(), Word::new("zzzzz").unwrap()];
        let candidates = [Word::new("slate").unwrap(), Word::new("crate").unwrap()];

        let guess_refs: Vec<&Word> = guesses.iter().collect();
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        let scores = score_guesses(&guess_refs, &candidate_refs);
        assert_eq!(scores[0].0.text(), "crane");
        assert!((scores[0].1 - 1.0).abs() < 1e-9);
        assert!(scores[1].1.abs() < 1e-9);
    }

    #[test]
    fn empty_guess_pool_scores_nothing() {
        let guesses: Vec<&Word> = vec![];
        let candidates = [Word::new("slate").unwrap()];
        let candidate_refs: Vec<&Word> = candidates.iter().collect();

        assert!(score_guesses(&guesses, &candidate_refs).is_empty());
    }
}
