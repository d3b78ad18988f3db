//! Weighted information-gain strategy
//!
//! Blends normalised entropy, positional information, and letter frequency,
//! plus a small bonus for trying letters not guessed yet. Early on, while the
//! pool is still most of the dictionary, frequency counts for more; as the
//! pool shrinks entropy takes over.

use crate::core::Word;
use crate::solver::entropy::{calculate_entropy, max_entropy};
use crate::solver::frequency;
use crate::solver::ranking::ScoringContext;
use crate::solver::statistics::LetterStatistics;
use crate::solver::strategy::{Strategy, StrategyWeights};
use rayon::prelude::*;

#[derive(Debug, Clone)]
pub struct WeightedGainStrategy {
    pub entropy_weight: f64,
    pub positional_weight: f64,
    pub frequency_weight: f64,
    pub uniqueness_bonus: f64,
    /// Positional term inside the frequency component
    pub letter_positional_weight: f64,
}

impl WeightedGainStrategy {
    #[must_use]
    pub const fn from_weights(weights: &StrategyWeights) -> Self {
        Self {
            entropy_weight: weights.entropy_weight,
            positional_weight: weights.positional_info_weight,
            frequency_weight: weights.frequency_weight,
            uniqueness_bonus: weights.uniqueness_bonus,
            letter_positional_weight: weights.positional_weight,
        }
    }

    /// Effective `(entropy, positional, frequency)` weights, summing to 1
    ///
    /// Frequency is scaled by 0.5..1.5 with the share of the dictionary still
    /// in the pool, entropy by the mirror image.
    #[must_use]
    pub fn effective_weights(&self, pool_size: usize, dictionary_size: usize) -> (f64, f64, f64) {
        let progress = if dictionary_size == 0 {
            0.0
        } else {
            (pool_size as f64 / dictionary_size as f64).clamp(0.0, 1.0)
        };

        let entropy = self.entropy_weight * (1.5 - progress);
        let positional = self.positional_weight;
        let frequency = self.frequency_weight * (0.5 + progress);
        let total = entropy + positional + frequency;

        if total <= 0.0 {
            return (1.0, 0.0, 0.0);
        }
        (entropy / total, positional / total, frequency / total)
    }
}

impl Strategy for WeightedGainStrategy {
    fn score<'a>(&self, ctx: &ScoringContext<'a>) -> Vec<(&'a Word, f64)> {
        let pool = ctx.pool();
        let probes = ctx.probe_set();
        let stats = LetterStatistics::compute(ctx.candidates.words(), ctx.dictionary.word_length());
        let entropy_ceiling = max_entropy(pool.len(), ctx.dictionary.word_length());
        let (we, wp, wf) = self.effective_weights(pool.len(), ctx.dictionary.len());

        let raw: Vec<(&Word, f64, f64)> = probes
            .par_iter()
            .map(|&word| {
                (
                    word,
                    calculate_entropy(word, &pool),
                    frequency::score_word(word, &stats, self.letter_positional_weight),
                )
            })
            .collect();

        let frequency_ceiling = raw.iter().map(|&(_, _, f)| f).fold(0.0, f64::max);
        let with_table = ctx.dictionary.has_frequencies();

        raw.into_iter()
            .map(|(word, entropy, freq)| {
                let entropy = ratio(entropy, entropy_ceiling);
                let mut freq = ratio(freq, frequency_ceiling);
                if with_table {
                    freq = (freq + ctx.dictionary.commonness(word)) / 2.0;
                }
                let score = we * entropy
                    + wp * stats.positional_information(word)
                    + wf * freq
                    + self.uniqueness_bonus * ctx.history.uniqueness(word);
                (word, score)
            })
            .collect()
    }
}

fn ratio(value: f64, ceiling: f64) -> f64 {
    if ceiling > 0.0 { value / ceiling } else { 0.0 }
}
