//! Hybrid frequency/entropy strategy
//!
//! `α × frequency / max frequency + (1 − α) × entropy / max entropy`, both
//! maxima taken over the probe set, plus the fresh-letter bonus.

use crate::core::Word;
use crate::solver::entropy::calculate_entropy;
use crate::solver::frequency;
use crate::solver::ranking::ScoringContext;
use crate::solver::statistics::LetterStatistics;
use crate::solver::strategy::{Strategy, StrategyWeights};
use rayon::prelude::*;

#[derive(Debug, Clone)]
pub struct HybridStrategy {
    /// Share given to frequency
    pub alpha: f64,
    pub positional_weight: f64,
    pub uniqueness_bonus: f64,
}

impl HybridStrategy {
    #[must_use]
    pub const fn from_weights(weights: &StrategyWeights) -> Self {
        Self {
            alpha: weights.hybrid_alpha,
            positional_weight: weights.positional_weight,
            uniqueness_bonus: weights.uniqueness_bonus,
        }
    }
}

impl Default for HybridStrategy {
    fn default() -> Self {
        Self::from_weights(&StrategyWeights::default())
    }
}

impl Strategy for HybridStrategy {
    fn score<'a>(&self, ctx: &ScoringContext<'a>) -> Vec<(&'a Word, f64)> {
        let pool = ctx.pool();
        let stats = LetterStatistics::compute(ctx.candidates.words(), ctx.dictionary.word_length());

        // Compute all metrics (parallelized)
        let raw: Vec<(&Word, f64, f64)> = ctx
            .probe_set()
            .par_iter()
            .map(|&word| {
                (
                    word,
                    frequency::score_word(word, &stats, self.positional_weight),
                    calculate_entropy(word, &pool),
                )
            })
            .collect();

        let max_frequency = raw.iter().map(|&(_, f, _)| f).fold(0.0, f64::max);
        let max_entropy = raw.iter().map(|&(_, _, h)| h).fold(0.0, f64::max);

        raw.into_iter()
            .map(|(word, freq, entropy)| {
                let freq = if max_frequency > 0.0 { freq / max_frequency } else { 0.0 };
                let entropy = if max_entropy > 0.0 { entropy / max_entropy } else { 0.0 };
                let score = self.alpha * freq
                    + (1.0 - self.alpha) * entropy
                    + self.uniqueness_bonus * ctx.history.uniqueness(word);
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

    fn fixture() -> (Dictionary, CandidatePool, History) {
        let dictionary = Dictionary::from_strs(
            &["crane", "slate", "irate", "crate", "grate", "plate", "fuzzy"],
            5,
        )
        .unwrap();
        let pool = CandidatePool::from_words(
            ["slate", "irate", "crate", "grate", "plate"]
                .iter()
                .map(|w| Word::new(w).unwrap())
                .collect(),
        );
        (dictionary, pool, History::new())
    }

    #[test]
    fn best_word_scores_at_most_one() {
        let (dictionary, pool, history) = fixture();
        let ctx = ScoringContext::new(&pool, &dictionary, &history);

        let scores = HybridStrategy::default().score(&ctx);
        assert!(scores.iter().all(|&(_, s)| s <= 1.0 + 1e-9));
        assert!(scores.iter().any(|&(_, s)| s > 0.5));
    }

    #[test]
    fn alpha_extremes_match_pure_components() {
        let (dictionary, pool, history) = fixture();
        let ctx = ScoringContext::new(&pool, &dictionary, &history);

        let pure_entropy = HybridStrategy {
            alpha: 0.0,
            ..HybridStrategy::default()
        };
        let fuzzy = Word::new("fuzzy").unwrap();
        let scores = pure_entropy.score(&ctx);
        let fuzzy_score = scores.iter().find(|(w, _)| **w == fuzzy).unwrap().1;
        // FUZZY shares no letter with the pool: a single all-absent cell
        assert!(fuzzy_score.abs() < 1e-9);

        let pure_frequency = HybridStrategy {
            alpha: 1.0,
            ..HybridStrategy::default()
        };
        let best = pure_frequency
            .score(&ctx)
            .into_iter()
            .map(|(_, s)| s)
            .fold(0.0, f64::max);
        assert!((best - 1.0).abs() < 1e-9);
    }
}
