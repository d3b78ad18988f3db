//! Shannon entropy calculation for Wordle patterns
//!
//! Given a guess and the candidate pool, computes how the pool splits by
//! feedback pattern and the expected information gain of that split.

use crate::core::{Pattern, Word};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the share of candidates producing pattern x.
///
/// # Examples
/// ```
/// use wordle_assist::core::Word;
/// use wordle_assist::solver::entropy::calculate_entropy;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let entropy = calculate_entropy(&guess, &candidate_refs);
/// assert!(entropy > 0.0 && entropy <= 1.0); // log2(2) = 1 bit max
/// ```
#[must_use]
pub fn calculate_entropy(guess: &Word, candidates: &[&Word]) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }
    shannon_entropy(&partition_sizes(guess, candidates))
}

/// Count candidates per pattern they produce with the guess
#[must_use]
pub fn partition_sizes(guess: &Word, candidates: &[&Word]) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();
    for &candidate in candidates {
        *counts.entry(Pattern::between(guess, candidate)).or_insert(0) += 1;
    }
    counts
}

/// Group candidates by the pattern they produce with the guess
///
/// Each group keeps pool order.
#[must_use]
pub fn partition<'a>(guess: &Word, candidates: &[&'a Word]) -> FxHashMap<Pattern, Vec<&'a Word>> {
    let mut groups: FxHashMap<Pattern, Vec<&'a Word>> = FxHashMap::default();
    for &candidate in candidates {
        groups
            .entry(Pattern::between(guess, candidate))
            .or_default()
            .push(candidate);
    }
    groups
}

/// Calculate Shannon entropy from pattern distribution
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one pattern with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n patterns
///
/// # Examples
/// ```
/// use rustc_hash::FxHashMap;
/// use wordle_assist::core::Pattern;
/// use wordle_assist::solver::entropy::shannon_entropy;
///
/// let mut uniform = FxHashMap::default();
/// for symbols in ["BBBBB", "GBBBB", "YBBBB", "BGBBB"] {
///     uniform.insert(Pattern::parse(symbols, 5).unwrap(), 25);
/// }
///
/// let entropy = shannon_entropy(&uniform);
/// assert!((entropy - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate entropy, expected remaining candidates, and max partition size
#[must_use]
pub fn calculate_metrics(guess: &Word, candidates: &[&Word]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let sizes = partition_sizes(guess, candidates);
    let total = candidates.len() as f64;

    // Σ p * |cell| = Σ |cell|² / n
    let expected_remaining = sizes
        .values()
        .map(|&size| size as f64 * size as f64 / total)
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&sizes),
        expected_remaining,
        max_partition: sizes.values().copied().max().unwrap_or(0),
    }
}

/// Largest entropy achievable against `pool_size` candidates with words of
/// `word_length` letters: log₂ of the smaller of the pool and the pattern space
#[must_use]
pub fn max_entropy(pool_size: usize, word_length: usize) -> f64 {
    let patterns = 3f64.powi(i32::try_from(word_length).unwrap_or(i32::MAX));
    (pool_size as f64).min(patterns).max(1.0).log2()
}
