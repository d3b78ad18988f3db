//! Word analysis command
//!
//! How much a single guess would tell us against a candidate pool.

use crate::core::{Dictionary, Word};
use crate::error::{Result, SolverError};
use crate::solver::entropy::{calculate_metrics, partition_sizes};
use crate::solver::{CandidatePool, LetterStatistics, frequency};

/// Result of analyzing a word
#[derive(Debug, Clone)]
pub struct AnalysisResult {
    pub word: Word,
    pub entropy: f64,
    pub expected_reduction: f64,
    pub expected_remaining: f64,
    pub max_partition: usize,
    /// Distinct feedback patterns the guess can produce
    pub pattern_count: usize,
    pub frequency_score: f64,
    pub commonness: f64,
    pub total_candidates: usize,
    pub is_candidate: bool,
}

/// Analyze a word against a candidate pool
///
/// # Errors
///
/// `InvalidLength` / `InvalidAlphabet` for a malformed word, `UnknownWord`
/// when it is not in the dictionary.
pub fn analyze_word(
    word: &str,
    dictionary: &Dictionary,
    candidates: &CandidatePool,
    positional_weight: f64,
) -> Result<AnalysisResult> {
    let word = Word::with_length(word, dictionary.word_length())?;
    if !dictionary.contains(&word) {
        return Err(SolverError::UnknownWord(word.text().to_string()));
    }

    let pool: Vec<&Word> = candidates.words().iter().collect();
    let metrics = calculate_metrics(&word, &pool);
    let stats = LetterStatistics::compute(candidates.words(), dictionary.word_length());

    Ok(AnalysisResult {
        entropy: metrics.entropy,
        expected_reduction: metrics.entropy.exp2(),
        expected_remaining: metrics.expected_remaining,
        max_partition: metrics.max_partition,
        pattern_count: partition_sizes(&word, &pool).len(),
        frequency_score: frequency::score_word(&word, &stats, positional_weight),
        commonness: dictionary.commonness(&word),
        total_candidates: candidates.len(),
        is_candidate: candidates.contains(&word),
        word,
    })
}
