//! Core domain types for Wordle
//!
//! Words, feedback patterns, the dictionary, and the guess history. Everything
//! here is pure and immutable once built.

mod dictionary;
mod history;
mod pattern;
mod word;

pub use dictionary::Dictionary;
pub use history::{GuessRecord, History};
pub use pattern::{Feedback, Pattern, evaluate};
pub use word::{ALPHABET_SIZE, MAX_WORD_LENGTH, Word, letter_index};
