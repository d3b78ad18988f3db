//! Guess scoring strategies
//!
//! Defines the Strategy trait, the tuning weights, and the closed set of
//! strategies a session can switch between by name.

use super::entropy;
use super::frequency;
use super::minimax;
use super::ranking::{ScoringContext, Suggestion, rank};
use super::selection::{HybridStrategy, TwoStepStrategy, WeightedGainStrategy};
use super::statistics::LetterStatistics;
use crate::core::Word;
use crate::error::{Result, SolverError};
use serde::Deserialize;
use std::fmt;

/// A strategy for ranking guesses against the current candidate pool
pub trait Strategy {
    /// Raw `(word, score)` pairs, higher is better, for every word the strategy considers
    ///
    /// Only called with at least two candidates.
    fn score<'a>(&self, ctx: &ScoringContext<'a>) -> Vec<(&'a Word, f64)>;

    /// Top `k` suggestions
    ///
    /// An empty pool yields nothing; a single candidate is returned alone with
    /// score `+∞`.
    fn suggest(&self, ctx: &ScoringContext<'_>, k: usize) -> Vec<Suggestion> {
        if k == 0 || ctx.candidates.is_empty() {
            return Vec::new();
        }
        if let Some(only) = ctx.candidates.single() {
            return vec![Suggestion {
                word: only.clone(),
                score: f64::INFINITY,
                is_candidate: true,
            }];
        }
        rank(self.score(ctx), ctx, k)
    }
}

/// Tuning knobs shared by the strategies
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StrategyWeights {
    /// Weight of the per-position term in the frequency score
    pub positional_weight: f64,
    /// Weighted-gain base weight of normalised entropy
    pub entropy_weight: f64,
    /// Weighted-gain base weight of positional information
    pub positional_info_weight: f64,
    /// Weighted-gain base weight of the frequency component
    pub frequency_weight: f64,
    /// Bonus per share of a word's letters not guessed yet
    pub uniqueness_bonus: f64,
    /// Hybrid share given to frequency; entropy gets the rest
    pub hybrid_alpha: f64,
    /// Two-step share given to the lookahead; entropy gets the rest
    pub lookahead_weight: f64,
    /// Pools larger than this fall back to plain entropy
    pub lookahead_pool_limit: usize,
    /// Probe words scored with lookahead
    pub lookahead_guesses: usize,
    /// Largest cells explored per probe word
    pub lookahead_cells: usize,
}

impl Default for StrategyWeights {
    fn default() -> Self {
        Self {
            positional_weight: 0.5,
            entropy_weight: 0.5,
            positional_info_weight: 0.3,
            frequency_weight: 0.2,
            uniqueness_bonus: 0.1,
            hybrid_alpha: 0.4,
            lookahead_weight: 0.7,
            lookahead_pool_limit: 100,
            lookahead_guesses: 30,
            lookahead_cells: 20,
        }
    }
}

impl StrategyWeights {
    /// Check every weight is usable
    ///
    /// # Errors
    /// Returns `InvalidConfig` naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let non_negative = [
            ("positional_weight", self.positional_weight),
            ("entropy_weight", self.entropy_weight),
            ("positional_info_weight", self.positional_info_weight),
            ("frequency_weight", self.frequency_weight),
            ("uniqueness_bonus", self.uniqueness_bonus),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(SolverError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        for (name, value) in [
            ("hybrid_alpha", self.hybrid_alpha),
            ("lookahead_weight", self.lookahead_weight),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SolverError::InvalidConfig(format!(
                    "{name} must be between 0 and 1, got {value}"
                )));
            }
        }

        if self.entropy_weight + self.positional_info_weight + self.frequency_weight <= 0.0 {
            return Err(SolverError::InvalidConfig(
                "weighted-gain weights must not all be zero".to_string(),
            ));
        }
        if self.lookahead_guesses == 0 || self.lookahead_cells == 0 {
            return Err(SolverError::InvalidConfig(
                "lookahead_guesses and lookahead_cells must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// The strategies a session can use, by name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StrategyKind {
    Frequency,
    Entropy,
    #[default]
    WeightedGain,
    Minimax,
    TwoStep,
    HybridFrequencyEntropy,
}

impl StrategyKind {
    /// Every strategy, in display order
    pub const ALL: [Self; 6] = [
        Self::Frequency,
        Self::Entropy,
        Self::WeightedGain,
        Self::Minimax,
        Self::TwoStep,
        Self::HybridFrequencyEntropy,
    ];

    /// Look up a strategy by name
    ///
    /// Case-insensitive; `-` and `_` are interchangeable and `hybrid` is
    /// short for `hybrid_frequency_entropy`.
    ///
    /// # Errors
    /// Returns `StrategyUndefined` for any other name.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::solver::StrategyKind;
    ///
    /// assert_eq!(StrategyKind::from_name("two-step").unwrap(), StrategyKind::TwoStep);
    /// assert!(StrategyKind::from_name("greedy").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        let normalised = name.trim().to_ascii_lowercase().replace('-', "_");
        match normalised.as_str() {
            "frequency" => Ok(Self::Frequency),
            "entropy" => Ok(Self::Entropy),
            "weighted_gain" => Ok(Self::WeightedGain),
            "minimax" => Ok(Self::Minimax),
            "two_step" => Ok(Self::TwoStep),
            "hybrid_frequency_entropy" | "hybrid" => Ok(Self::HybridFrequencyEntropy),
            _ => Err(SolverError::StrategyUndefined(name.to_string())),
        }
    }

    /// Canonical name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Frequency => "frequency",
            Self::Entropy => "entropy",
            Self::WeightedGain => "weighted_gain",
            Self::Minimax => "minimax",
            Self::TwoStep => "two_step",
            Self::HybridFrequencyEntropy => "hybrid_frequency_entropy",
        }
    }

    /// One-line description for listings
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Frequency => "common letters in common positions, candidates only",
            Self::Entropy => "maximise expected information (bits)",
            Self::WeightedGain => "entropy, positional information and frequency combined",
            Self::Minimax => "minimise the worst-case number of remaining candidates",
            Self::TwoStep => "look one guess ahead for small pools",
            Self::HybridFrequencyEntropy => "blend of normalised frequency and entropy",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for StrategyKind {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    Frequency(FrequencyStrategy),
    Entropy(EntropyStrategy),
    WeightedGain(WeightedGainStrategy),
    Minimax(MinimaxStrategy),
    TwoStep(TwoStepStrategy),
    Hybrid(HybridStrategy),
}

impl Strategy for StrategyType {
    fn score<'a>(&self, ctx: &ScoringContext<'a>) -> Vec<(&'a Word, f64)> {
        match self {
            Self::Frequency(s) => s.score(ctx),
            Self::Entropy(s) => s.score(ctx),
            Self::WeightedGain(s) => s.score(ctx),
            Self::Minimax(s) => s.score(ctx),
            Self::TwoStep(s) => s.score(ctx),
            Self::Hybrid(s) => s.score(ctx),
        }
    }
}

impl StrategyType {
    /// Build the strategy for `kind` with the given weights
    #[must_use]
    pub fn new(kind: StrategyKind, weights: &StrategyWeights) -> Self {
        match kind {
            StrategyKind::Frequency => Self::Frequency(FrequencyStrategy {
                positional_weight: weights.positional_weight,
            }),
            StrategyKind::Entropy => Self::Entropy(EntropyStrategy),
            StrategyKind::WeightedGain => {
                Self::WeightedGain(WeightedGainStrategy::from_weights(weights))
            }
            StrategyKind::Minimax => Self::Minimax(MinimaxStrategy),
            StrategyKind::TwoStep => Self::TwoStep(TwoStepStrategy::from_weights(weights)),
            StrategyKind::HybridFrequencyEntropy => {
                Self::Hybrid(HybridStrategy::from_weights(weights))
            }
        }
    }

    /// Create strategy from name string with default weights
    ///
    /// # Errors
    /// Returns `StrategyUndefined` for an unknown name.
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(Self::new(StrategyKind::from_name(name)?, &StrategyWeights::default()))
    }

    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::Frequency(_) => StrategyKind::Frequency,
            Self::Entropy(_) => StrategyKind::Entropy,
            Self::WeightedGain(_) => StrategyKind::WeightedGain,
            Self::Minimax(_) => StrategyKind::Minimax,
            Self::TwoStep(_) => StrategyKind::TwoStep,
            Self::Hybrid(_) => StrategyKind::HybridFrequencyEntropy,
        }
    }
}

/// Letter-frequency strategy
///
/// Scores candidates only, so every suggestion could be the answer.
#[derive(Debug, Clone)]
pub struct FrequencyStrategy {
    pub positional_weight: f64,
}

impl Strategy for FrequencyStrategy {
    fn score<'a>(&self, ctx: &ScoringContext<'a>) -> Vec<(&'a Word, f64)> {
        let stats = LetterStatistics::compute(ctx.candidates.words(), ctx.dictionary.word_length());
        frequency::score_words(&ctx.pool(), &stats, self.positional_weight)
    }
}

/// Pure entropy maximization strategy
#[derive(Debug, Clone)]
pub struct EntropyStrategy;

impl Strategy for EntropyStrategy {
    fn score<'a>(&self, ctx: &ScoringContext<'a>) -> Vec<(&'a Word, f64)> {
        entropy::score_guesses(&ctx.probe_set(), &ctx.pool())
    }
}

/// Pure minimax strategy
#[derive(Debug, Clone)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn score<'a>(&self, ctx: &ScoringContext<'a>) -> Vec<(&'a Word, f64)> {
        minimax::score_guesses(&ctx.probe_set(), &ctx.pool())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dictionary, History};
    use crate::solver::CandidatePool;
    use crate::solver::entropy::calculate_entropy;
    use crate::wordlists::embedded_dictionary;
    use rand::rngs::StdRng;
    use rand::seq::IndexedRandom;
    use rand::SeedableRng;
    use rstest::rstest;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn small_dictionary() -> Dictionary {
        Dictionary::from_strs(
            &["crane", "slate", "irate", "crate", "grate", "trace", "plate", "stare", "audio"],
            5,
        )
        .unwrap()
    }

    #[rstest]
    #[case("frequency", StrategyKind::Frequency)]
    #[case("entropy", StrategyKind::Entropy)]
    #[case("weighted_gain", StrategyKind::WeightedGain)]
    #[case("weighted-gain", StrategyKind::WeightedGain)]
    #[case("minimax", StrategyKind::Minimax)]
    #[case("two_step", StrategyKind::TwoStep)]
    #[case("hybrid_frequency_entropy", StrategyKind::HybridFrequencyEntropy)]
    #[case("hybrid", StrategyKind::HybridFrequencyEntropy)]
    #[case("Entropy", StrategyKind::Entropy)]
    fn names_resolve(#[case] name: &str, #[case] expected: StrategyKind) {
        assert_eq!(StrategyKind::from_name(name).unwrap(), expected);
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(
            StrategyKind::from_name("adaptive"),
            Err(SolverError::StrategyUndefined("adaptive".to_string()))
        );
    }

    #[test]
    fn names_round_trip() {
        for kind in StrategyKind::ALL {
            assert_eq!(StrategyKind::from_name(kind.name()).unwrap(), kind);
            assert_eq!(StrategyType::new(kind, &StrategyWeights::default()).kind(), kind);
        }
        assert_eq!(StrategyKind::default(), StrategyKind::WeightedGain);
    }

    #[test]
    fn default_weights_are_valid() {
        assert!(StrategyWeights::default().validate().is_ok());

        let bad = StrategyWeights {
            hybrid_alpha: 1.5,
            ..StrategyWeights::default()
        };
        assert!(matches!(bad.validate(), Err(SolverError::InvalidConfig(_))));

        let zero = StrategyWeights {
            entropy_weight: 0.0,
            positional_info_weight: 0.0,
            frequency_weight: 0.0,
            ..StrategyWeights::default()
        };
        assert!(zero.validate().is_err());
    }

    #[rstest]
    fn every_strategy_handles_empty_and_singleton(
        #[values(
            StrategyKind::Frequency,
            StrategyKind::Entropy,
            StrategyKind::WeightedGain,
            StrategyKind::Minimax,
            StrategyKind::TwoStep,
            StrategyKind::HybridFrequencyEntropy
        )]
        kind: StrategyKind,
    ) {
        let dictionary = small_dictionary();
        let history = History::new();
        let strategy = StrategyType::new(kind, &StrategyWeights::default());

        let empty = CandidatePool::from_words(vec![]);
        let ctx = ScoringContext::new(&empty, &dictionary, &history);
        assert!(strategy.suggest(&ctx, 5).is_empty());

        let single = CandidatePool::from_words(vec![word("grate")]);
        let ctx = ScoringContext::new(&single, &dictionary, &history);
        let suggestions = strategy.suggest(&ctx, 5);
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].word, word("grate"));
        assert!(suggestions[0].is_certain());
    }

    #[rstest]
    fn every_strategy_ranks_top_k(
        #[values(
            StrategyKind::Frequency,
            StrategyKind::Entropy,
            StrategyKind::WeightedGain,
            StrategyKind::Minimax,
            StrategyKind::TwoStep,
            StrategyKind::HybridFrequencyEntropy
        )]
        kind: StrategyKind,
    ) {
        let dictionary = small_dictionary();
        let history = History::new();
        let pool = CandidatePool::full(&dictionary);
        let ctx = ScoringContext::new(&pool, &dictionary, &history);
        let strategy = StrategyType::new(kind, &StrategyWeights::default());

        let suggestions = strategy.suggest(&ctx, 3);
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions.windows(2).all(|w| w[0].score >= w[1].score));

        // Same input, same output
        assert_eq!(strategy.suggest(&ctx, 3), suggestions);
    }

    #[test]
    fn frequency_suggests_candidates_only() {
        let dictionary = small_dictionary();
        let history = History::new();
        let pool = CandidatePool::from_words(vec![word("slate"), word("plate"), word("crate")]);
        let ctx = ScoringContext::new(&pool, &dictionary, &history);

        let suggestions = StrategyType::from_name("frequency").unwrap().suggest(&ctx, 10);
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions.iter().all(|s| s.is_candidate));
    }

    #[test]
    fn minimax_prefers_full_split() {
        let dictionary = small_dictionary();
        let history = History::new();
        let pool = CandidatePool::from_words(vec![word("slate"), word("plate"), word("crate")]);
        let ctx = ScoringContext::new(&pool, &dictionary, &history);

        let best = &MinimaxStrategy.suggest(&ctx, 1)[0];
        assert!((best.score + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_top_pick_beats_random_pool_member() {
        let dictionary = embedded_dictionary().unwrap();
        let history = History::new();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..10 {
            // A pool of up to 40 random words stands in for a mid-game state
            let sample: Vec<Word> = dictionary
                .words()
                .choose_multiple(&mut rng, 40)
                .cloned()
                .collect();
            let pool = CandidatePool::from_words(sample);
            let pool_refs: Vec<&Word> = pool.words().iter().collect();
            let ctx = ScoringContext::new(&pool, &dictionary, &history).with_probe_sample(50);

            let best = &EntropyStrategy.suggest(&ctx, 1)[0];
            let random_member = pool.words().choose(&mut rng).unwrap();
            assert!(best.score + 1e-9 >= calculate_entropy(random_member, &pool_refs));
            assert!((best.score - calculate_entropy(&best.word, &pool_refs)).abs() < 1e-9);
        }
    }
}
