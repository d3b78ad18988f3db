//! Two-step lookahead strategy
//!
//! For each shortlisted guess, split the pool by pattern and ask how well the
//! best follow-up guess would do inside each of the largest cells. Only
//! affordable for small pools; larger ones are ranked by plain entropy.

use crate::core::{Pattern, Word};
use crate::solver::entropy::{self, calculate_metrics, max_entropy, partition};
use crate::solver::ranking::ScoringContext;
use crate::solver::strategy::{Strategy, StrategyWeights};
use log::debug;
use rayon::prelude::*;

/// Follow-up guesses tried inside one cell
const FOLLOWUPS_PER_CELL: usize = 10;

#[derive(Debug, Clone)]
pub struct TwoStepStrategy {
    /// Share given to the lookahead term; entropy gets the rest
    pub lookahead_weight: f64,
    /// Pools larger than this are ranked by entropy alone
    pub pool_limit: usize,
    /// Probe words (highest entropy first) that get a lookahead
    pub guesses: usize,
    /// Largest cells explored per probe word
    pub cells: usize,
}

impl TwoStepStrategy {
    #[must_use]
    pub const fn from_weights(weights: &StrategyWeights) -> Self {
        Self {
            lookahead_weight: weights.lookahead_weight,
            pool_limit: weights.lookahead_pool_limit,
            guesses: weights.lookahead_guesses,
            cells: weights.lookahead_cells,
        }
    }

    /// Probability-weighted mean of the best follow-up score over the
    /// largest cells of `guess`'s partition
    ///
    /// A single-word cell scores 1; otherwise the best follow-up among the
    /// cell's first members scores `1 / expected remaining`.
    #[must_use]
    pub fn lookahead(&self, guess: &Word, pool: &[&Word]) -> f64 {
        let mut cells: Vec<(Pattern, Vec<&Word>)> = partition(guess, pool).into_iter().collect();
        cells.sort_by(|(pa, a), (pb, b)| b.len().cmp(&a.len()).then(pa.code().cmp(&pb.code())));
        cells.truncate(self.cells);

        let mut covered = 0.0;
        let mut total = 0.0;
        for (_, cell) in &cells {
            let weight = cell.len() as f64;
            covered += weight;
            total += weight * cell_score(cell);
        }

        if covered > 0.0 { total / covered } else { 0.0 }
    }
}

fn cell_score(cell: &[&Word]) -> f64 {
    if cell.len() <= 1 {
        return 1.0;
    }
    let best_expected = cell
        .iter()
        .take(FOLLOWUPS_PER_CELL)
        .map(|&follow_up| calculate_metrics(follow_up, cell).expected_remaining)
        .fold(f64::INFINITY, f64::min);
    1.0 / best_expected.max(1.0)
}

impl Strategy for TwoStepStrategy {
    fn score<'a>(&self, ctx: &ScoringContext<'a>) -> Vec<(&'a Word, f64)> {
        let pool = ctx.pool();
        let probes = ctx.probe_set();
        let mut by_entropy = entropy::score_guesses(&probes, &pool);

        if pool.len() > self.pool_limit {
            debug!(
                "two_step: {} candidates exceed the lookahead limit of {}, ranking by entropy",
                pool.len(),
                self.pool_limit
            );
            return by_entropy;
        }

        // Stable: equal entropies keep probe order
        by_entropy.sort_by(|(_, a), (_, b)| b.total_cmp(a));
        by_entropy.truncate(self.guesses);

        let ceiling = max_entropy(pool.len(), ctx.dictionary.word_length());
        by_entropy
            .par_iter()
            .map(|&(word, entropy)| {
                let normalised = if ceiling > 0.0 { entropy / ceiling } else { 0.0 };
                let score = self.lookahead_weight * self.lookahead(word, &pool)
                    + (1.0 - self.lookahead_weight) * normalised;
                (word, score)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dictionary, History};
    use crate::solver::CandidatePool;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn strategy() -> TwoStepStrategy {
        TwoStepStrategy::from_weights(&StrategyWeights::default())
    }

    #[test]
    fn full_split_scores_one() {
        let pool = words(&["slate", "crate"]);
        let refs: Vec<&Word> = pool.iter().collect();
        // SLATE separates both words: two singleton cells
        assert!((strategy().lookahead(&pool[0], &refs) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn useless_guess_scores_follow_up_only() {
        let pool = words(&["slate", "crate"]);
        let refs: Vec<&Word> = pool.iter().collect();
        let fuzzy = Word::new("fuzzy").unwrap();
        // One cell of two; the best follow-up (slate) leaves one word on average
        assert!((strategy().lookahead(&fuzzy, &refs) - 1.0).abs() < 1e-9);

        let pool = words(&["aaaab", "aaaac", "aaaad"]);
        let refs: Vec<&Word> = pool.iter().collect();
        // Any follow-up only separates itself from the other two: 5/3 expected
        assert!((strategy().lookahead(&fuzzy, &refs) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn cell_score_penalises_unsplittable_cells() {
        let cell = words(&["slate", "plate", "elate"]);
        let refs: Vec<&Word> = cell.iter().collect();
        // Every member gives BGGGG to both others
        assert!((cell_score(&refs) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn large_pools_fall_back_to_entropy() {
        let dictionary = Dictionary::from_strs(&["slate", "crate", "grate", "plate"], 5).unwrap();
        let pool = CandidatePool::full(&dictionary);
        let history = History::new();
        let ctx = ScoringContext::new(&pool, &dictionary, &history);
        let limited = TwoStepStrategy {
            pool_limit: 2,
            ..strategy()
        };

        let probes = ctx.probe_set();
        let entropy_scores = entropy::score_guesses(&probes, &ctx.pool());
        assert_eq!(limited.score(&ctx), entropy_scores);
    }

    #[test]
    fn shortlist_limits_scored_guesses() {
        let words = ["slate", "crate", "grate", "plate", "irate", "crane"];
        let dictionary = Dictionary::from_strs(&words, 5).unwrap();
        let pool = CandidatePool::full(&dictionary);
        let history = History::new();
        let ctx = ScoringContext::new(&pool, &dictionary, &history);
        let narrow = TwoStepStrategy {
            guesses: 2,
            ..strategy()
        };

        let scores = narrow.score(&ctx);
        assert_eq!(scores.len(), 2);
        assert!(scores.iter().all(|&(_, s)| (0.0..=1.0 + 1e-9).contains(&s)));
    }
}
