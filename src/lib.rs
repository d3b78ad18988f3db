//! Wordle Assistant
//!
//! Exact Wordle feedback scoring, candidate filtering, and ranked guess
//! suggestions from six interchangeable strategies.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::core::{Word, evaluate};
//! use wordle_assist::session::{Session, SessionConfig};
//! use wordle_assist::wordlists::embedded_dictionary;
//!
//! // Score a guess
//! let guess = Word::new("crane").unwrap();
//! let hidden = Word::new("slate").unwrap();
//! assert_eq!(evaluate(&guess, &hidden).unwrap().to_string(), "BBGBG");
//!
//! // Ask for help with a real game
//! let dictionary = embedded_dictionary().unwrap();
//! let mut session = Session::new(dictionary, SessionConfig::default()).unwrap();
//! session.record_guess("crane", "BBGBG").unwrap();
//! for suggestion in session.next_suggestions(3).unwrap() {
//!     println!("{} {:.3}", suggestion.word, suggestion.score);
//! }
//! ```

// Words, patterns, dictionaries
pub mod core;

// Library error type
pub mod error;

// Filtering and scoring strategies
pub mod solver;

// Assisted-game state machine
pub mod session;

// Computer-hosted games
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Stderr logger
pub mod logging;

pub use error::{Result, SolverError};
