//! Session configuration
//!
//! A plain value handed to [`Session::new`](super::Session::new). Missing
//! fields take their defaults, so a JSON file only needs the keys it changes.

use crate::core::MAX_WORD_LENGTH;
use crate::error::{Result, SolverError};
use crate::solver::{DEFAULT_PROBE_SAMPLE, StrategyKind, StrategyWeights};
use serde::Deserialize;

/// Settings for one assisted game
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Letters per word
    pub word_length: usize,
    /// Guesses allowed before the attempt is lost
    pub max_attempts: usize,
    /// Strategy name, see [`StrategyKind::from_name`]
    #[serde(alias = "default_strategy")]
    pub strategy: String,
    /// Suggestions shown per turn
    #[serde(alias = "suggestions_count")]
    pub suggestions: usize,
    /// Non-candidate words the information strategies may also suggest
    pub probe_sample: usize,
    pub weights: StrategyWeights,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            max_attempts: 6,
            strategy: StrategyKind::default().name().to_string(),
            suggestions: 10,
            probe_sample: DEFAULT_PROBE_SAMPLE,
            weights: StrategyWeights::default(),
        }
    }
}

impl SessionConfig {
    /// Check every setting
    ///
    /// # Errors
    /// `InvalidConfig` for an out-of-range value, `StrategyUndefined` for an
    /// unknown strategy name.
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_WORD_LENGTH).contains(&self.word_length) {
            return Err(SolverError::InvalidConfig(format!(
                "word_length must be between 1 and {MAX_WORD_LENGTH}, got {}",
                self.word_length
            )));
        }
        if self.max_attempts == 0 {
            return Err(SolverError::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        if self.suggestions == 0 {
            return Err(SolverError::InvalidConfig(
                "suggestions must be at least 1".to_string(),
            ));
        }
        self.strategy_kind()?;
        self.weights.validate()
    }

    /// The configured strategy
    ///
    /// # Errors
    /// `StrategyUndefined` for an unknown name.
    pub fn strategy_kind(&self) -> Result<StrategyKind> {
        StrategyKind::from_name(&self.strategy)
    }
}
