//! Play mode: the computer hides a word and scores the player's guesses

use crate::core::{Dictionary, Feedback, GuessRecord, History, Word};
use crate::error::{Result, SolverError};
use log::info;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Chance of drawing the hidden word from the common words
const COMMON_WORD_CHANCE: f64 = 0.7;

/// Result of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub record: GuessRecord,
    pub won: bool,
    pub remaining_attempts: usize,
}

/// A letter of the hidden word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub position: usize,
    pub letter: char,
}

/// One game against a hidden word
#[derive(Debug, Clone)]
pub struct Game<'a> {
    dictionary: &'a Dictionary,
    hidden: Word,
    history: History,
    max_attempts: usize,
    won: bool,
}

impl<'a> Game<'a> {
    /// Start a game with a randomly chosen hidden word
    ///
    /// With a commonality table the word is drawn from the common words 70%
    /// of the time; otherwise uniformly from the whole dictionary.
    ///
    /// # Errors
    /// `InvalidConfig` if `max_attempts` is 0.
    pub fn start<R: Rng + ?Sized>(
        dictionary: &'a Dictionary,
        max_attempts: usize,
        rng: &mut R,
    ) -> Result<Self> {
        let common = dictionary.common_words();
        let from_common = dictionary.has_frequencies() && rng.random_bool(COMMON_WORD_CHANCE);

        let hidden = if from_common {
            common.choose(rng).map(|&word| word.clone())
        } else {
            dictionary.words().choose(rng).cloned()
        };
        let hidden = hidden.ok_or_else(|| {
            SolverError::InvalidConfig("the dictionary contains no words".to_string())
        })?;

        Self::with_hidden(dictionary, hidden, max_attempts)
    }

    /// Start a game against a known word
    ///
    /// # Errors
    /// `InvalidLength` if the word does not fit the dictionary, `InvalidConfig`
    /// if `max_attempts` is 0.
    pub fn with_hidden(
        dictionary: &'a Dictionary,
        hidden: Word,
        max_attempts: usize,
    ) -> Result<Self> {
        if hidden.len() != dictionary.word_length() {
            return Err(SolverError::InvalidLength {
                expected: dictionary.word_length(),
                actual: hidden.len(),
            });
        }
        if max_attempts == 0 {
            return Err(SolverError::InvalidConfig(
                "max_attempts must be at least 1".to_string(),
            ));
        }

        info!("new game: {max_attempts} attempts");
        Ok(Self {
            dictionary,
            hidden,
            history: History::new(),
            max_attempts,
            won: false,
        })
    }

    /// Score a guess
    ///
    /// # Errors
    /// `SessionFinished` once the game is over; `InvalidAlphabet` /
    /// `InvalidLength` for malformed words; `UnknownWord` for words outside
    /// the dictionary. Rejected guesses do not use up an attempt.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Dictionary, Word};
    /// use wordle_assist::game::Game;
    ///
    /// let dictionary = Dictionary::from_strs(&["crane", "slate"], 5).unwrap();
    /// let mut game = Game::with_hidden(&dictionary, Word::new("slate").unwrap(), 6).unwrap();
    ///
    /// let outcome = game.guess("crane").unwrap();
    /// assert_eq!(outcome.record.pattern.to_string(), "BBGBG");
    /// assert!(game.guess("slate").unwrap().won);
    /// ```
    pub fn guess(&mut self, guess: &str) -> Result<GuessOutcome> {
        if self.is_over() {
            return Err(SolverError::SessionFinished);
        }

        let guess = Word::with_length(guess, self.dictionary.word_length())?;
        if !self.dictionary.contains(&guess) {
            return Err(SolverError::UnknownWord(guess.text().to_string()));
        }

        let record = GuessRecord::scored(guess, &self.hidden)?;
        self.won = record.pattern.is_solved();
        self.history.push(record.clone());

        if self.won {
            info!("game won in {} guesses", self.history.len());
        } else if self.is_over() {
            info!("game lost");
        }

        Ok(GuessOutcome {
            record,
            won: self.won,
            remaining_attempts: self.remaining_attempts(),
        })
    }

    /// A letter of the hidden word at a position not yet solved
    ///
    /// Returns `None` once the game is over.
    pub fn hint<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Hint> {
        if self.is_over() {
            return None;
        }

        let solved = self.solved_positions();
        let open: Vec<usize> = (0..self.hidden.len()).filter(|&i| !solved[i]).collect();
        let &position = open.choose(rng)?;

        Some(Hint {
            position,
            letter: char::from(self.hidden.letter_at(position)),
        })
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts.saturating_sub(self.history.len())
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.won || self.history.len() >= self.max_attempts
    }

    /// The hidden word, revealed only once the game is over
    #[must_use]
    pub fn hidden(&self) -> Option<&Word> {
        self.is_over().then_some(&self.hidden)
    }

    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Shareable emoji grid of the guesses so far
    #[must_use]
    pub fn share_grid(&self) -> String {
        self.history
            .iter()
            .map(|record| record.pattern.to_emoji())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn solved_positions(&self) -> Vec<bool> {
        let mut solved = vec![false; self.hidden.len()];
        for record in &self.history {
            for (slot, feedback) in solved.iter_mut().zip(record.pattern.symbols()) {
                *slot |= feedback == Feedback::Correct;
            }
        }
        solved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> Dictionary {
        Dictionary::from_strs(&["crane", "slate", "plate", "crate", "audio"], 5).unwrap()
    }

    #[test]
    fn start_picks_a_dictionary_word() {
        let dictionary = dictionary();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..20 {
            let game = Game::start(&dictionary, 6, &mut rng).unwrap();
            assert!(dictionary.contains(&game.hidden));
            assert!(game.hidden().is_none());
        }
    }

    #[test]
    fn start_with_table_still_picks_dictionary_words() {
        let dictionary = dictionary().with_frequencies([(Word::new("audio").unwrap(), 100.0)]);
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            let game = Game::start(&dictionary, 6, &mut rng).unwrap();
            assert!(dictionary.contains(&game.hidden));
        }
    }

    #[test]
    fn win_ends_game_and_reveals_word() {
        let dictionary = dictionary();
        let mut game = Game::with_hidden(&dictionary, Word::new("plate").unwrap(), 6).unwrap();

        let outcome = game.guess("slate").unwrap();
        assert_eq!(outcome.record.pattern.to_string(), "BGGGG");
        assert!(!outcome.won);
        assert_eq!(outcome.remaining_attempts, 5);

        assert!(game.guess("PLATE").unwrap().won);
        assert!(game.is_won());
        assert_eq!(game.hidden().map(Word::text), Some("plate"));
        assert_eq!(game.guess("crane"), Err(SolverError::SessionFinished));
        assert_eq!(game.share_grid(), "⬛🟩🟩🟩🟩\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn loss_after_max_attempts() {
        let dictionary = dictionary();
        let mut game = Game::with_hidden(&dictionary, Word::new("plate").unwrap(), 2).unwrap();
        game.guess("crane").unwrap();
        game.guess("audio").unwrap();

        assert!(game.is_over());
        assert!(!game.is_won());
        assert_eq!(game.remaining_attempts(), 0);
        assert!(game.hidden().is_some());
    }

    #[test]
    fn invalid_guesses_cost_nothing() {
        let dictionary = dictionary();
        let mut game = Game::with_hidden(&dictionary, Word::new("plate").unwrap(), 6).unwrap();

        assert_eq!(game.guess("zzzzz"), Err(SolverError::UnknownWord("zzzzz".to_string())));
        assert!(matches!(game.guess("cran"), Err(SolverError::InvalidLength { .. })));
        assert!(matches!(game.guess("cr4ne"), Err(SolverError::InvalidAlphabet { .. })));
        assert_eq!(game.remaining_attempts(), 6);
    }

    #[test]
    fn hint_skips_solved_positions() {
        let dictionary = dictionary();
        let mut game = Game::with_hidden(&dictionary, Word::new("plate").unwrap(), 6).unwrap();
        game.guess("slate").unwrap();

        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            assert_eq!(game.hint(&mut rng), Some(Hint { position: 0, letter: 'p' }));
        }
    }

    #[test]
    fn with_hidden_validates_input() {
        let dictionary = dictionary();
        assert!(Game::with_hidden(&dictionary, Word::new("cranes").unwrap(), 6).is_err());
        assert!(Game::with_hidden(&dictionary, Word::new("crane").unwrap(), 0).is_err());
    }
}
