//! Composite scoring strategies
//!
//! Pure algorithms live in their own modules (`entropy`, `minimax`,
//! `frequency`); these strategies combine several of them.

pub mod hybrid;
pub mod two_step;
pub mod weighted;

pub use hybrid::HybridStrategy;
pub use two_step::TwoStepStrategy;
pub use weighted::WeightedGainStrategy;
