//! Formatting utilities for terminal output

use crate::core::{Feedback, Pattern, Word};
use colored::{ColoredString, Colorize};

/// Word rendered as coloured tiles, one per letter
#[must_use]
pub fn pattern_tiles(word: &Word, pattern: Pattern) -> String {
    word.text()
        .to_ascii_uppercase()
        .chars()
        .zip(pattern.symbols())
        .map(|(letter, feedback)| tile(letter, feedback).to_string())
        .collect()
}

fn tile(letter: char, feedback: Feedback) -> ColoredString {
    let cell = format!(" {letter} ");
    match feedback {
        Feedback::Correct => cell.black().on_green().bold(),
        Feedback::Present => cell.black().on_yellow().bold(),
        Feedback::Absent => cell.white().on_bright_black(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max).clamp(0.0, 1.0) * width as f64).round() as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Entropy as a bar scaled to the pattern space of the word length
#[must_use]
pub fn entropy_bar(entropy: f64, word_length: usize, width: usize) -> String {
    let max_entropy = word_length as f64 * 3f64.log2();
    create_progress_bar(entropy, max_entropy, width)
}

/// Score for display; infinite scores read "certain"
#[must_use]
pub fn format_score(score: f64) -> String {
    if score == f64::INFINITY {
        "certain".to_string()
    } else {
        format!("{score:.3}")
    }
}
