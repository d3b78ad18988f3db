//! Candidate filtering and guess scoring
//!
//! The filter narrows the pool after each guess; the strategies rank the
//! next guess against whatever is left.

pub mod entropy;
mod filter;
pub mod frequency;
pub mod minimax;
mod ranking;
pub mod selection;
pub mod statistics;
pub mod strategy;

pub use filter::{CandidatePool, filter};
pub use ranking::{DEFAULT_PROBE_SAMPLE, ScoringContext, Suggestion, rank};
pub use selection::{HybridStrategy, TwoStepStrategy, WeightedGainStrategy};
pub use statistics::LetterStatistics;
pub use strategy::{
    EntropyStrategy, FrequencyStrategy, MinimaxStrategy, Strategy, StrategyKind, StrategyType,
    StrategyWeights,
};
