//! Entropy-based scoring
//!
//! Shannon entropy of the pattern distribution a guess induces on the pool.
//! Every information strategy builds on these helpers.

mod calculator;
mod selector;

pub use calculator::{
    GuessMetrics, calculate_entropy, calculate_metrics, max_entropy, partition, partition_sizes,
    shannon_entropy,
};
pub use selector::score_guesses;
