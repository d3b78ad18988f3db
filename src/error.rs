//! Error type shared by the whole library
//!
//! Every failure is a caller-input condition: the core never retries and never
//! exits, it reports one of these variants and lets the caller decide whether
//! to re-prompt or abandon the attempt.

use thiserror::Error;

const KNOWN_STRATEGIES: &str =
    "frequency, entropy, weighted_gain, minimax, two_step, hybrid_frequency_entropy";

/// Errors produced by the feedback evaluator, the candidate filter, the
/// strategies, and the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolverError {
    /// A word or pattern does not have the configured length.
    #[error("expected {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// A word contains a non-letter, or a pattern a symbol other than G/Y/B.
    #[error("'{input}' contains invalid character '{character}'")]
    InvalidAlphabet { input: String, character: char },

    /// Filtering left no word that explains the recorded feedback.
    #[error("no candidates remain after {guess} -> {pattern}; check the feedback or the word list")]
    NoCandidates { guess: String, pattern: String },

    /// The requested strategy name is not one of the known strategies.
    #[error("unknown strategy '{0}' (expected one of: {known})", known = KNOWN_STRATEGIES)]
    StrategyUndefined(String),

    /// A guess that is not in the dictionary (game mode only).
    #[error("'{0}' is not in the word list")]
    UnknownWord(String),

    /// The attempt is over; call `reset` to start again.
    #[error("the game is over, start a new one")]
    SessionFinished,

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the library.
pub type Result<T> = std::result::Result<T, SolverError>;
