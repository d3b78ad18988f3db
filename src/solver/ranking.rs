//! Suggestions and the shared ranking step
//!
//! Strategies only produce raw `(word, score)` pairs; ordering, the
//! deterministic tie-break, and truncation to `k` happen here.

use super::filter::CandidatePool;
use crate::core::{Dictionary, History, Word};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Non-pool dictionary words added to the probe set by default
pub const DEFAULT_PROBE_SAMPLE: usize = 200;

/// A ranked guess
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub word: Word,
    /// Strategy-specific score, higher is better; `+∞` means certain
    pub score: f64,
    /// Whether the word could still be the answer
    pub is_candidate: bool,
}

impl Suggestion {
    /// True when this is the only remaining candidate
    #[must_use]
    pub fn is_certain(&self) -> bool {
        self.score == f64::INFINITY
    }
}

/// Everything a strategy may read while scoring
///
/// Strategies never mutate any of it.
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    pub candidates: &'a CandidatePool,
    pub dictionary: &'a Dictionary,
    pub history: &'a History,
    pub probe_sample: usize,
}

impl<'a> ScoringContext<'a> {
    #[must_use]
    pub const fn new(
        candidates: &'a CandidatePool,
        dictionary: &'a Dictionary,
        history: &'a History,
    ) -> Self {
        Self {
            candidates,
            dictionary,
            history,
            probe_sample: DEFAULT_PROBE_SAMPLE,
        }
    }

    #[must_use]
    pub const fn with_probe_sample(mut self, probe_sample: usize) -> Self {
        self.probe_sample = probe_sample;
        self
    }

    /// Pool words as references
    #[must_use]
    pub fn pool(&self) -> Vec<&'a Word> {
        self.candidates.words().iter().collect()
    }

    /// Guesses worth scoring: the pool plus the most common non-pool words
    ///
    /// Non-pool words can split the pool better than any candidate, so the
    /// information strategies consider them too.
    #[must_use]
    pub fn probe_set(&self) -> Vec<&'a Word> {
        let in_pool: FxHashSet<&Word> = self.candidates.words().iter().collect();
        let mut probes = self.pool();
        probes.extend(
            self.dictionary
                .by_commonness()
                .filter(|word| !in_pool.contains(word))
                .take(self.probe_sample),
        );
        probes
    }
}

/// Order scored words and keep the best `k`
///
/// Ties on score go to candidate answers, then to more common words, then to
/// the lexically smaller word.
#[must_use]
pub fn rank(scored: Vec<(&Word, f64)>, ctx: &ScoringContext<'_>, k: usize) -> Vec<Suggestion> {
    let in_pool: FxHashSet<&Word> = ctx.candidates.words().iter().collect();

    let mut keyed: Vec<(Suggestion, f64)> = scored
        .into_iter()
        .map(|(word, score)| {
            let suggestion = Suggestion {
                word: word.clone(),
                score,
                is_candidate: in_pool.contains(word),
            };
            (suggestion, ctx.dictionary.commonness(word))
        })
        .collect();

    keyed.sort_by(|(a, common_a), (b, common_b)| compare(a, *common_a, b, *common_b));
    keyed.dedup_by(|(a, _), (b, _)| a.word == b.word);
    keyed.truncate(k);
    keyed.into_iter().map(|(suggestion, _)| suggestion).collect()
}

fn compare(a: &Suggestion, common_a: f64, b: &Suggestion, common_b: f64) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then(b.is_candidate.cmp(&a.is_candidate))
        .then(common_b.total_cmp(&common_a))
        .then_with(|| a.word.cmp(&b.word))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn fixture() -> (Dictionary, CandidatePool, History) {
        let dictionary =
            Dictionary::from_strs(&["crane", "slate", "irate", "crate", "zesty"], 5).unwrap();
        let pool = CandidatePool::from_words(vec![word("irate"), word("crate")]);
        (dictionary, pool, History::new())
    }

    #[test]
    fn probe_set_adds_common_outsiders() {
        let (dictionary, pool, history) = fixture();
        let ctx = ScoringContext::new(&pool, &dictionary, &history).with_probe_sample(2);
        let probes: Vec<&str> = ctx.probe_set().iter().map(|w| w.text()).collect();
        assert_eq!(probes, ["irate", "crate", "crane", "slate"]);

        let ctx = ctx.with_probe_sample(0);
        assert_eq!(ctx.probe_set().len(), 2);
    }

    #[test]
    fn rank_breaks_ties_deterministically() {
        let (dictionary, pool, history) = fixture();
        let ctx = ScoringContext::new(&pool, &dictionary, &history);
        let (zesty, crane) = (word("zesty"), word("crane"));
        let (crate_, irate) = (word("crate"), word("irate"));

        let ranked = rank(
            vec![(&zesty, 1.0), (&crane, 1.0), (&crate_, 1.0), (&irate, 2.0)],
            &ctx,
            10,
        );
        let order: Vec<&str> = ranked.iter().map(|s| s.word.text()).collect();
        // irate wins on score; crate is a candidate; crane is more common than zesty
        assert_eq!(order, ["irate", "crate", "crane", "zesty"]);
        assert!(ranked[0].is_candidate);
        assert!(!ranked[2].is_candidate);
    }

    #[test]
    fn rank_truncates_to_k() {
        let (dictionary, pool, history) = fixture();
        let ctx = ScoringContext::new(&pool, &dictionary, &history);
        let scored: Vec<(&Word, f64)> = dictionary.words().iter().map(|w| (w, 0.5)).collect();
        assert_eq!(rank(scored.clone(), &ctx, 3).len(), 3);
        assert!(rank(scored, &ctx, 0).is_empty());
    }

    #[test]
    fn certainty_is_infinite_score() {
        let suggestion = Suggestion {
            word: word("crane"),
            score: f64::INFINITY,
            is_candidate: true,
        };
        assert!(suggestion.is_certain());
    }
}
