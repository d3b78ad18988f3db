//! Interactive play mode
//!
//! The computer hides a word and colours each of the player's guesses. A
//! solver session follows the game so `hint` can show its suggestions.

use crate::core::Dictionary;
use crate::error::SolverError;
use crate::game::Game;
use crate::output::formatters::pattern_tiles;
use crate::output::write_suggestions;
use crate::session::{Session, SessionConfig};
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run games until `quit` or end of input
///
/// Each guess may also be one of `hint` (solver suggestions for the current
/// position), `reveal` (uncover one letter), `new` (abandon and start over)
/// or `quit`.
///
/// # Errors
///
/// I/O errors on `input` or `out`, and the library error if the game or its
/// session cannot be started (an invalid `config`), converted to
/// `InvalidInput`.
pub fn run_play<R: BufRead, W: Write, G: Rng + ?Sized>(
    dictionary: &Dictionary,
    config: &SessionConfig,
    rng: &mut G,
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    let invalid = |e: SolverError| io::Error::new(io::ErrorKind::InvalidInput, e);
    let start = |rng: &mut G| Game::start(dictionary, config.max_attempts, rng).map_err(invalid);

    let mut session = Session::new(dictionary.clone(), config.clone()).map_err(invalid)?;

    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                  Wordle Assistant - Play Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(
        out,
        "I'm thinking of a {}-letter word. You have {} guesses.",
        dictionary.word_length(),
        config.max_attempts
    )?;
    writeln!(
        out,
        "Commands: 'hint' for suggestions, 'reveal' for a letter, 'new' for a new word, \
         'quit' to exit"
    )?;

    let mut game = start(rng)?;
    let mut line = String::new();

    loop {
        write!(
            out,
            "\n{} ",
            format!("Guess {}/{}:", game.history().len() + 1, game.max_attempts()).bright_cyan()
        )?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }

        match line.trim().to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                game = start(rng)?;
                session.reset();
                writeln!(out, "\n🔄 New word chosen!")?;
            }
            "hint" | "h" => match session.suggestions() {
                Ok(suggestions) => {
                    write_suggestions(out, &suggestions, session.candidates().len())?;
                }
                Err(err) => writeln!(out, "{} {err}", "❌".red())?,
            },
            "reveal" => match game.hint(rng) {
                Some(hint) => writeln!(
                    out,
                    "💡 Letter {} is {}",
                    hint.position + 1,
                    hint.letter.to_ascii_uppercase().to_string().bright_yellow().bold()
                )?,
                None => writeln!(out, "Every letter is already solved!")?,
            },
            guess => match game.guess(guess) {
                Ok(outcome) => {
                    let record = outcome.record;
                    writeln!(out, "  {}", pattern_tiles(&record.guess, record.pattern))?;
                    if let Err(err) = session.record(record) {
                        writeln!(out, "{} {err}", "❌".red())?;
                    }
                    if game.is_over() {
                        write_result(&game, out)?;
                        writeln!(out, "\nPlay again? (yes/no)")?;
                        line.clear();
                        input.read_line(&mut line)?;
                        if !matches!(line.trim().to_lowercase().as_str(), "yes" | "y") {
                            writeln!(out, "\n👋 Thanks for playing!\n")?;
                            return Ok(());
                        }
                        game = start(rng)?;
                        session.reset();
                        writeln!(out, "\n🔄 New word chosen!")?;
                    }
                }
                Err(err) => writeln!(out, "{} {err}", "❌".red())?,
            },
        }
    }
}

fn write_result<W: Write>(game: &Game<'_>, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    if game.is_won() {
        let turns = game.history().len();
        writeln!(
            out,
            "{}",
            format!("🎉 You got it in {turns} {}!", if turns == 1 { "guess" } else { "guesses" })
                .bright_green()
                .bold()
        )?;
    } else if let Some(hidden) = game.hidden() {
        writeln!(
            out,
            "{} {}",
            "❌ Out of guesses. The word was".red().bold(),
            hidden.text().to_uppercase().bright_yellow().bold()
        )?;
    }
    writeln!(out, "\n{}/{}", game.history().len(), game.max_attempts())?;
    writeln!(out, "{}", game.share_grid())?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn play(words: &[&str], max_attempts: usize, script: &str) -> String {
        let dictionary = Dictionary::from_strs(words, 5).unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let mut out = Vec::new();
        let config = SessionConfig {
            max_attempts,
            ..SessionConfig::default()
        };
        run_play(&dictionary, &config, &mut rng, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn winning_prints_share_grid() {
        let text = play(&["plate"], 6, "plate\nno\n");
        assert!(text.contains("You got it in 1 guess!"));
        assert!(text.contains("1/6\n🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn rejected_words_do_not_use_a_guess() {
        let text = play(&["plate", "crane"], 6, "zzzzz\ncran\nquit\n");
        assert!(text.contains("'zzzzz' is not in the word list"));
        assert!(text.contains("expected 5 letters, got 4"));
        assert_eq!(text.matches("Guess 1/6").count(), 3);
    }

    #[test]
    fn reveal_names_a_letter() {
        let text = play(&["plate"], 6, "reveal\nquit\n");
        assert!(text.contains("💡 Letter"));
    }

    #[test]
    fn hint_follows_the_guesses_made() {
        let text = play(&["plate", "slate", "crate", "grate"], 6, "hint\ncrane\nhint\nquit\n");
        assert!(text.contains("(4 candidates remaining)"));
        assert!(!text.contains("💡 Letter"));
        let after_guess = text.rsplit("Suggestions").next().unwrap();
        assert!(!after_guess.contains("(4 candidates remaining)"));
    }
}
