//! Feedback evaluation and pattern representation
//!
//! A pattern encodes the feedback for one guess as a base-3 number:
//! - 0 = Absent (black)
//! - 1 = Present (yellow)
//! - 2 = Correct (green)
//!
//! Position `i` contributes `digit × 3^i`. The length is stored alongside the
//! code so patterns of different word lengths never compare equal.

use super::word::{MAX_WORD_LENGTH, Word};
use crate::error::{Result, SolverError};
use std::fmt;

/// Feedback for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feedback {
    /// Letter not in the hidden word (or all its instances already used)
    Absent = 0,
    /// Letter in the hidden word at another position
    Present = 1,
    /// Letter in the correct position
    Correct = 2,
}

impl Feedback {
    /// Wire character: `G`, `Y` or `B`
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'B',
        }
    }

    /// Parse a single feedback character
    ///
    /// Accepts `G`/`Y`/`B` in either case, the coloured square emoji, and
    /// `-`/`_` for absent.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            'B' | 'b' | '⬛' | '⬜' | '-' | '_' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Square emoji used when sharing results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }

    const fn from_digit(digit: u32) -> Self {
        match digit {
            2 => Self::Correct,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// Feedback pattern for one (guess, hidden word) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    code: u32,
    len: u8,
}

/// Compute the feedback pattern for `guess` against `hidden`
///
/// # Errors
/// Returns `InvalidLength` when the two words differ in length.
///
/// # Examples
/// ```
/// use wordle_assist::core::{Word, evaluate};
///
/// let guess = Word::new("annal").unwrap();
/// let hidden = Word::new("banal").unwrap();
/// assert_eq!(evaluate(&guess, &hidden).unwrap().to_string(), "YBGGG");
/// ```
pub fn evaluate(guess: &Word, hidden: &Word) -> Result<Pattern> {
    if guess.len() != hidden.len() {
        return Err(SolverError::InvalidLength {
            expected: hidden.len(),
            actual: guess.len(),
        });
    }
    Ok(Pattern::between(guess, hidden))
}

impl Pattern {
    /// All-correct pattern for words of `len` letters
    ///
    /// # Panics
    /// Panics in debug mode if `len` is 0 or exceeds [`MAX_WORD_LENGTH`]
    #[must_use]
    pub fn solved(len: usize) -> Self {
        Self::from_symbols(&vec![Feedback::Correct; len])
    }

    /// Build a pattern from per-position feedback
    ///
    /// # Panics
    /// Panics in debug mode if the slice is empty or longer than [`MAX_WORD_LENGTH`]
    #[must_use]
    pub fn from_symbols(symbols: &[Feedback]) -> Self {
        debug_assert!(!symbols.is_empty() && symbols.len() <= MAX_WORD_LENGTH);

        let mut code = 0u32;
        let mut multiplier = 1u32;
        for &symbol in symbols {
            code += symbol as u32 * multiplier;
            multiplier = multiplier.wrapping_mul(3);
        }

        Self {
            code,
            len: symbols.len() as u8,
        }
    }

    /// Compute the pattern for two words of equal length
    ///
    /// # Algorithm
    /// 1. Exact matches are Correct and consume that hidden letter instance.
    /// 2. Left to right over the remaining guess positions, a letter matching
    ///    the earliest unconsumed hidden instance is Present and consumes it;
    ///    anything else is Absent.
    ///
    /// A letter repeated in the guess therefore earns at most as many
    /// non-Absent marks as it has instances in the hidden word, greens first,
    /// then yellows in guess order.
    pub(crate) fn between(guess: &Word, hidden: &Word) -> Self {
        debug_assert_eq!(guess.len(), hidden.len());

        let guess = guess.letters();
        let hidden = hidden.letters();
        let len = guess.len();

        let mut result = [Feedback::Absent; MAX_WORD_LENGTH];
        let mut consumed = [false; MAX_WORD_LENGTH];

        // First pass: greens
        for i in 0..len {
            if guess[i] == hidden[i] {
                result[i] = Feedback::Correct;
                consumed[i] = true;
            }
        }

        // Second pass: yellows from the earliest unconsumed instance
        for i in 0..len {
            if result[i] == Feedback::Correct {
                continue;
            }
            if let Some(j) = (0..len).find(|&j| !consumed[j] && hidden[j] == guess[i]) {
                result[i] = Feedback::Present;
                consumed[j] = true;
            }
        }

        Self::from_symbols(&result[..len])
    }

    /// Parse a wire-format pattern that must have `expected_len` positions
    ///
    /// # Errors
    /// `InvalidLength` on a length mismatch or when `expected_len` is 0 or
    /// above [`MAX_WORD_LENGTH`], `InvalidAlphabet` on any character that is
    /// not a feedback symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Pattern;
    ///
    /// let pattern = Pattern::parse("gybbg", 5).unwrap();
    /// assert_eq!(pattern.to_string(), "GYBBG");
    /// assert!(Pattern::parse("GYB", 5).is_err());
    /// ```
    pub fn parse(s: &str, expected_len: usize) -> Result<Self> {
        if !(1..=MAX_WORD_LENGTH).contains(&expected_len) {
            return Err(SolverError::InvalidLength {
                expected: expected_len.clamp(1, MAX_WORD_LENGTH),
                actual: expected_len,
            });
        }

        let input = s.trim();
        let mut symbols = Vec::with_capacity(expected_len);
        for ch in input.chars() {
            let symbol = Feedback::from_symbol(ch).ok_or_else(|| SolverError::InvalidAlphabet {
                input: input.to_string(),
                character: ch,
            })?;
            symbols.push(symbol);
        }

        if symbols.len() != expected_len {
            return Err(SolverError::InvalidLength {
                expected: expected_len,
                actual: symbols.len(),
            });
        }

        Ok(Self::from_symbols(&symbols))
    }

    /// Raw base-3 code
    #[inline]
    #[must_use]
    pub const fn code(self) -> u32 {
        self.code
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Always false for a constructed pattern
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Feedback at `position`
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[must_use]
    pub fn get(self, position: usize) -> Feedback {
        assert!(position < self.len(), "position {position} out of range");
        Feedback::from_digit(self.code / 3u32.pow(position as u32) % 3)
    }

    /// Per-position feedback, left to right
    pub fn symbols(self) -> impl Iterator<Item = Feedback> {
        let mut rest = self.code;
        (0..self.len()).map(move |_| {
            let digit = rest % 3;
            rest /= 3;
            Feedback::from_digit(digit)
        })
    }

    /// Check if every position is Correct
    #[must_use]
    pub fn is_solved(self) -> bool {
        self.symbols().all(|s| s == Feedback::Correct)
    }

    /// Count positions with the given feedback
    #[must_use]
    pub fn count(self, feedback: Feedback) -> usize {
        self.symbols().filter(|&s| s == feedback).count()
    }

    /// Emoji rendering, e.g. "🟩🟨⬛⬛🟩"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.symbols().map(Feedback::emoji).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in self.symbols() {
            write!(f, "{}", symbol.symbol())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        let len = s.trim().chars().count();
        if len == 0 || len > MAX_WORD_LENGTH {
            return Err(SolverError::InvalidLength {
                expected: MAX_WORD_LENGTH.min(len.max(1)),
                actual: len,
            });
        }
        Self::parse(s, len)
    }
}
