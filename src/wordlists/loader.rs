//! Word list loading utilities
//!
//! Plain-text format: one word per line, optionally followed by whitespace and
//! a frequency. Blank lines and `#` comments are skipped; lines that do not
//! hold a valid word of the requested length are skipped with a warning.

use crate::core::{Dictionary, Word};
use crate::error::SolverError;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Failure to produce a dictionary from a file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read word list: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dictionary(#[from] SolverError),
}

/// Load a dictionary of `word_length`-letter words from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, and
/// `LoadError::Dictionary` if no usable word remains.
///
/// # Examples
/// ```no_run
/// use wordle_assist::wordlists::loader::load_dictionary;
///
/// let dictionary = load_dictionary("words.txt", 5).unwrap();
/// println!("Loaded {} words", dictionary.len());
/// ```
pub fn load_dictionary<P: AsRef<Path>>(
    path: P,
    word_length: usize,
) -> Result<Dictionary, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    debug!("read word list {}", path.display());
    Ok(parse_word_list(&content, word_length)?)
}

/// Build a dictionary from word-list text
///
/// The frequency table is attached only if at least one line carries a
/// frequency; words without one then count as frequency 0.
///
/// # Errors
///
/// Returns `InvalidConfig` when no valid word is found.
///
/// # Examples
/// ```
/// use wordle_assist::wordlists::loader::parse_word_list;
///
/// let dictionary = parse_word_list("# demo\ncrane 120\nslate 300\nno\n", 5).unwrap();
/// assert_eq!(dictionary.len(), 2);
/// assert!(dictionary.has_frequencies());
/// ```
pub fn parse_word_list(content: &str, word_length: usize) -> Result<Dictionary, SolverError> {
    let mut words = Vec::new();
    let mut frequencies = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let Some(text) = fields.next() else { continue };

        let word = match Word::with_length(text, word_length) {
            Ok(word) => word,
            Err(err) => {
                warn!("skipping line {}: {err}", line_no + 1);
                continue;
            }
        };

        if let Some(field) = fields.next() {
            match field.parse::<f64>() {
                Ok(frequency) if frequency.is_finite() && frequency >= 0.0 => {
                    frequencies.push((word.clone(), frequency));
                }
                _ => {
                    warn!("skipping line {}: bad frequency '{field}'", line_no + 1);
                    continue;
                }
            }
        }
        words.push(word);
    }

    if words.is_empty() {
        return Err(SolverError::InvalidConfig(format!(
            "no valid {word_length}-letter words in the word list"
        )));
    }

    let dictionary = Dictionary::new(words, word_length)?;
    debug!("loaded {} words ({} with frequencies)", dictionary.len(), frequencies.len());

    if frequencies.is_empty() {
        Ok(dictionary)
    } else {
        Ok(dictionary.with_frequencies(frequencies))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_skips_comments_and_bad_lines() {
        let text = "# header\n\ncrane\nslate\ncranes\nab3de\n  irate  \n";
        let dictionary = parse_word_list(text, 5).unwrap();
        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["crane", "slate", "irate"]);
        assert!(!dictionary.has_frequencies());
    }

    #[test]
    fn parse_reads_frequency_column() {
        let text = "crane 10\nslate 5000\nirate\nplate abc\n";
        let dictionary = parse_word_list(text, 5).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.has_frequencies());
        assert_eq!(dictionary.by_commonness().next().unwrap().text(), "slate");
        assert!(dictionary.frequency(&Word::new("irate").unwrap()).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_other_lengths() {
        let dictionary = parse_word_list("tea\nate\ncrane\n", 3).unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.word_length(), 3);
    }

    #[test]
    fn parse_rejects_empty_list() {
        assert!(matches!(
            parse_word_list("# nothing\n", 5),
            Err(SolverError::InvalidConfig(_))
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load_dictionary("/nonexistent/words.txt", 5).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir()
            .join(format!("wordle_assist_loader_{}.txt", std::process::id()));
        fs::write(&path, "crane 3\nslate 9\n").unwrap();

        let dictionary = load_dictionary(&path, 5).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.has_frequencies());
    }
}
