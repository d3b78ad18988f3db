//! Benchmark command
//!
//! Solves a batch of target words and summarises the guess counts.

use super::solve::solve_in_session;
use crate::core::{Dictionary, Word};
use crate::error::Result;
use crate::session::{Session, SessionConfig};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub strategy: String,
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    /// Mean guesses over solved words
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count -> number of words solved in that many guesses
    pub distribution: FxHashMap<usize, usize>,
    pub failures: Vec<Word>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Up to `count` distinct random words from the dictionary
pub fn sample_targets<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    count: usize,
    rng: &mut R,
) -> Vec<Word> {
    dictionary
        .words()
        .choose_multiple(rng, count)
        .cloned()
        .collect()
}

/// Run benchmark on a set of target words
///
/// If `forced_first` is provided, it is used as the first guess instead of
/// letting the strategy choose.
///
/// # Errors
///
/// Any session construction error, then the first error from
/// [`solve_in_session`].
pub fn run_benchmark(
    dictionary: &Dictionary,
    config: &SessionConfig,
    targets: &[Word],
    forced_first: Option<&Word>,
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let mut session = Session::new(dictionary.clone(), config.clone())?;
    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut failures = Vec::new();

    for (idx, target) in targets.iter().enumerate() {
        let result = solve_in_session(&mut session, target.text(), forced_first)?;
        let guesses = result.guesses.len();

        if result.success {
            solved += 1;
            total_guesses += guesses;
            min_guesses = min_guesses.min(guesses);
            max_guesses = max_guesses.max(guesses);
            *distribution.entry(guesses).or_insert(0) += 1;
        } else {
            failures.push(target.clone());
        }

        if idx % 10 == 0 && solved > 0 {
            pb.set_message(format!("Avg: {:.2}", total_guesses as f64 / solved as f64));
        }
        pb.inc(1);
    }

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    Ok(BenchmarkResult {
        strategy: config.strategy.clone(),
        total_words: targets.len(),
        solved,
        total_guesses,
        average_guesses: if solved == 0 { 0.0 } else { total_guesses as f64 / solved as f64 },
        min_guesses: if solved == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        failures,
        duration,
        words_per_second: targets.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::embedded_dictionary;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn benchmark_runs() {
        let dictionary = embedded_dictionary().unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let targets = sample_targets(&dictionary, 8, &mut rng);
        let config = SessionConfig {
            strategy: "entropy".to_string(),
            ..SessionConfig::default()
        };

        let result = run_benchmark(&dictionary, &config, &targets, None, false).unwrap();

        assert_eq!(result.total_words, 8);
        assert_eq!(result.solved + result.failures.len(), 8);
        assert_eq!(result.distribution.values().sum::<usize>(), result.solved);
        assert!(result.max_guesses <= config.max_attempts);
        assert!(result.solved == 0 || result.min_guesses >= 1);
    }

    #[test]
    fn repeated_target_solves_the_same_each_time() {
        let dictionary = embedded_dictionary().unwrap();
        let target = Word::new("grate").unwrap();
        let targets = vec![target.clone(), target.clone(), target];

        let result =
            run_benchmark(&dictionary, &SessionConfig::default(), &targets, None, false).unwrap();

        assert_eq!(result.solved, 3);
        assert_eq!(result.min_guesses, result.max_guesses);
        assert_eq!(result.distribution.len(), 1);
    }

    #[test]
    fn sample_targets_are_distinct() {
        let dictionary = embedded_dictionary().unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let mut targets = sample_targets(&dictionary, 20, &mut rng);
        targets.sort();
        targets.dedup();
        assert_eq!(targets.len(), 20);
    }

    #[test]
    fn empty_batch() {
        let dictionary = embedded_dictionary().unwrap();
        let result =
            run_benchmark(&dictionary, &SessionConfig::default(), &[], None, false).unwrap();
        assert_eq!(result.total_words, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }
}
