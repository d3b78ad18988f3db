//! Minimax scoring
//!
//! Worst-case minimization: prefer the guess whose largest partition is smallest.

mod calculator;
mod selector;

pub use calculator::calculate_max_remaining;
pub use selector::score_guesses;
