//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    write_analysis_result, write_benchmark_result, write_history, write_solve_result,
    write_strategies, write_suggestions,
};
