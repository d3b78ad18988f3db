//! Word lists
//!
//! The embedded dictionary compiled into the binary, and a loader for
//! user-supplied lists.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Dictionary;
use crate::error::Result;

/// Word length of the embedded list
pub const EMBEDDED_WORD_LENGTH: usize = 5;

/// Dictionary built from the embedded list, most common word first
///
/// # Errors
/// Only if the embedded list itself is malformed.
///
/// # Examples
/// ```
/// use wordle_assist::wordlists::{WORDS_COUNT, embedded_dictionary};
///
/// let dictionary = embedded_dictionary().unwrap();
/// assert_eq!(dictionary.len(), WORDS_COUNT);
/// ```
pub fn embedded_dictionary() -> Result<Dictionary> {
    Dictionary::from_strs(WORDS, EMBEDDED_WORD_LENGTH)
}
