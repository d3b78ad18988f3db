//! Minimax worst-case calculation for Wordle patterns
//!
//! Given a guess and the candidate pool, computes how many candidates would
//! survive the least informative feedback.

use crate::core::Word;
use crate::solver::entropy::partition_sizes;

/// Calculate the maximum remaining candidates for a guess
///
/// For each pattern the guess could produce, count the candidates producing
/// it; the largest count is the worst case.
///
/// # Examples
/// ```
/// use wordle_assist::core::Word;
/// use wordle_assist::solver::minimax::calculate_max_remaining;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// assert!(calculate_max_remaining(&guess, &candidate_refs) <= 2);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Word, candidates: &[&Word]) -> usize {
    partition_sizes(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(words: &[Word]) -> Vec<&Word> {
        words.iter().collect()
    }

    #[test]
    fn max_remaining_perfect_split() {
        let guess = Word::new("slate").unwrap();
        let candidates = [Word::new("slate").unwrap(), Word::new("zzzzz").unwrap()];

        assert_eq!(calculate_max_remaining(&guess, &refs(&candidates)), 1);
    }

    #[test]
    fn max_remaining_all_same_pattern() {
        let guess = Word::new("zzzzz").unwrap();
        let candidates = [
            Word::new("aaaaa").unwrap(),
            Word::new("bbbbb").unwrap(),
            Word::new("ccccc").unwrap(),
        ];

        assert_eq!(calculate_max_remaining(&guess, &refs(&candidates)), 3);
    }

    #[test]
    fn max_remaining_skewed_distribution() {
        // CRANE: slate and plate both give BBGBG, crate gives GGGBG
        let guess = Word::new("crane").unwrap();
        let candidates = [
            Word::new("slate").unwrap(),
            Word::new("plate").unwrap(),
            Word::new("crate").unwrap(),
        ];

        assert_eq!(calculate_max_remaining(&guess, &refs(&candidates)), 2);
    }

    #[test]
    fn max_remaining_empty_candidates() {
        let guess = Word::new("crane").unwrap();
        assert_eq!(calculate_max_remaining(&guess, &[]), 0);
    }

    #[test]
    fn minimax_prefers_better_splits() {
        let candidates = [Word::new("aaaaa").unwrap(), Word::new("bbbbb").unwrap()];
        let candidate_refs = refs(&candidates);

        let bad_max = calculate_max_remaining(&Word::new("zzzzz").unwrap(), &candidate_refs);
        let good_max = calculate_max_remaining(&Word::new("aaaaa").unwrap(), &candidate_refs);

        assert_eq!(bad_max, 2);
        assert_eq!(good_max, 1);
    }
}
