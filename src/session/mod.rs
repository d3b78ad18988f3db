//! Assisted-game session
//!
//! Owns the history, the candidate pool, and the active strategy for one
//! attempt. States:
//!
//! ```text
//! Active --record(all Correct)--------> Terminal(Solved)
//! Active --record(attempts exhausted)--> Terminal(Exhausted)
//! any    --reset----------------------> Active (empty history, full pool)
//! ```
//!
//! A rejected record leaves the session exactly as it was.

mod config;

pub use config::SessionConfig;

use crate::core::{Dictionary, GuessRecord, History, Pattern, Word};
use crate::error::{Result, SolverError};
use crate::solver::{
    CandidatePool, LetterStatistics, ScoringContext, Strategy, StrategyKind, StrategyType,
    Suggestion, filter,
};
use log::{debug, info};
use std::fmt;

/// How a finished attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved,
    Exhausted,
}

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Active,
    Terminal(Outcome),
}

impl SessionState {
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("active"),
            Self::Terminal(Outcome::Solved) => f.write_str("solved"),
            Self::Terminal(Outcome::Exhausted) => f.write_str("out of attempts"),
        }
    }
}

/// One assisted attempt at a puzzle
#[derive(Debug, Clone)]
pub struct Session {
    dictionary: Dictionary,
    config: SessionConfig,
    strategy: StrategyType,
    history: History,
    candidates: CandidatePool,
    state: SessionState,
}

impl Session {
    /// Start a session over `dictionary`
    ///
    /// # Errors
    /// Any [`SessionConfig::validate`] error, or `InvalidLength` when the
    /// dictionary's word length differs from the configured one.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Dictionary;
    /// use wordle_assist::session::{Session, SessionConfig, SessionState};
    ///
    /// let dictionary = Dictionary::from_strs(&["crane", "slate", "plate", "crate"], 5).unwrap();
    /// let mut session = Session::new(dictionary, SessionConfig::default()).unwrap();
    ///
    /// session.record_guess("crane", "BBGBG").unwrap();
    /// assert_eq!(session.candidates().len(), 2);
    ///
    /// let state = session.record_guess("plate", "GGGGG").unwrap();
    /// assert!(!state.is_active());
    /// ```
    pub fn new(dictionary: Dictionary, config: SessionConfig) -> Result<Self> {
        config.validate()?;
        if dictionary.word_length() != config.word_length {
            return Err(SolverError::InvalidLength {
                expected: config.word_length,
                actual: dictionary.word_length(),
            });
        }

        let strategy = StrategyType::new(config.strategy_kind()?, &config.weights);
        let candidates = CandidatePool::full(&dictionary);
        info!(
            "new session: {} words, strategy {}, {} attempts",
            dictionary.len(),
            strategy.kind(),
            config.max_attempts
        );

        Ok(Self {
            dictionary,
            config,
            strategy,
            history: History::new(),
            candidates,
            state: SessionState::Active,
        })
    }

    /// Record a guess and its feedback from their text forms
    ///
    /// # Errors
    /// `SessionFinished` once the attempt is over, `InvalidAlphabet` /
    /// `InvalidLength` for malformed input, `NoCandidates` when the feedback
    /// rules out every word.
    pub fn record_guess(&mut self, guess: &str, pattern: &str) -> Result<SessionState> {
        self.ensure_active()?;
        let length = self.config.word_length;
        let guess = Word::with_length(guess, length)?;
        let pattern = Pattern::parse(pattern, length)?;
        self.record(GuessRecord::new(guess, pattern)?)
    }

    /// Record a typed guess and its feedback
    ///
    /// # Errors
    /// As [`Session::record_guess`].
    pub fn record(&mut self, record: GuessRecord) -> Result<SessionState> {
        self.ensure_active()?;
        if record.guess.len() != self.config.word_length {
            return Err(SolverError::InvalidLength {
                expected: self.config.word_length,
                actual: record.guess.len(),
            });
        }

        let narrowed = self.candidates.narrowed(&record)?;
        debug!(
            "{} -> {}: {} -> {} candidates",
            record.guess,
            record.pattern,
            self.candidates.len(),
            narrowed.len()
        );

        let solved = record.pattern.is_solved();
        self.candidates = narrowed;
        self.history.push(record);

        if solved {
            self.state = SessionState::Terminal(Outcome::Solved);
            info!("solved in {} guesses", self.history.len());
        } else if self.history.len() >= self.config.max_attempts {
            self.state = SessionState::Terminal(Outcome::Exhausted);
            info!("out of attempts after {} guesses", self.history.len());
        }
        Ok(self.state)
    }

    /// Top `k` guesses from the active strategy
    ///
    /// # Errors
    /// `SessionFinished` once the attempt is over.
    pub fn next_suggestions(&self, k: usize) -> Result<Vec<Suggestion>> {
        self.ensure_active()?;
        let ctx = ScoringContext::new(&self.candidates, &self.dictionary, &self.history)
            .with_probe_sample(self.config.probe_sample);
        let suggestions = self.strategy.suggest(&ctx, k);
        debug!(
            "{} produced {} suggestions over {} candidates",
            self.strategy.kind(),
            suggestions.len(),
            self.candidates.len()
        );
        Ok(suggestions)
    }

    /// [`Session::next_suggestions`] with the configured count
    ///
    /// # Errors
    /// `SessionFinished` once the attempt is over.
    pub fn suggestions(&self) -> Result<Vec<Suggestion>> {
        self.next_suggestions(self.config.suggestions)
    }

    /// Start a fresh attempt: empty history, full pool, Active
    pub fn reset(&mut self) {
        self.history.clear();
        self.candidates = CandidatePool::full(&self.dictionary);
        self.state = SessionState::Active;
        info!("session reset: {} candidates", self.candidates.len());
    }

    /// Drop the latest record and recompute the pool
    ///
    /// Returns the removed record, or `None` with an empty history.
    ///
    /// # Errors
    /// `SessionFinished` once the attempt is over.
    pub fn undo(&mut self) -> Result<Option<GuessRecord>> {
        self.ensure_active()?;
        let Some(record) = self.history.pop() else {
            return Ok(None);
        };

        match filter(&CandidatePool::full(&self.dictionary), &self.history) {
            Ok(pool) => {
                self.candidates = pool;
                info!("undid {}: {} candidates", record.guess, self.candidates.len());
                Ok(Some(record))
            }
            Err(err) => {
                self.history.push(record);
                Err(err)
            }
        }
    }

    /// Switch strategy mid-game
    ///
    /// # Errors
    /// `StrategyUndefined` for an unknown name; the current strategy is kept.
    pub fn set_strategy(&mut self, name: &str) -> Result<()> {
        let kind = StrategyKind::from_name(name)?;
        self.strategy = StrategyType::new(kind, &self.config.weights);
        self.config.strategy = kind.name().to_string();
        info!("strategy set to {kind}");
        Ok(())
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub const fn candidates(&self) -> &CandidatePool {
        &self.candidates
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub const fn strategy_kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.history.len())
    }

    /// Letter statistics over the current pool
    #[must_use]
    pub fn statistics(&self) -> LetterStatistics {
        LetterStatistics::compute(self.candidates.words(), self.config.word_length)
    }

    fn ensure_active(&self) -> Result<()> {
        if self.state.is_active() {
            Ok(())
        } else {
            Err(SolverError::SessionFinished)
        }
    }
}
