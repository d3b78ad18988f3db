//! Word solving command
//!
//! Plays a session against a known target, taking the top suggestion each
//! turn, and reports the path.

use crate::core::{Dictionary, GuessRecord, Pattern, Word, evaluate};
use crate::error::{Result, SolverError};
use crate::session::{Outcome, Session, SessionConfig, SessionState};
use crate::solver::entropy::calculate_metrics;

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Word,
    pub success: bool,
    pub guesses: Vec<GuessStep>,
}

/// A single guess step in the solution
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Entropy and expected remaining candidates, when more than one candidate was left
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Solve `target` with the configured strategy
///
/// `first_guess` replaces the strategy's opening move.
///
/// # Errors
///
/// Any session construction error, `InvalidLength` / `InvalidAlphabet` for a
/// malformed target, and `UnknownWord` when the target is not in the
/// dictionary.
///
/// # Examples
/// ```
/// use wordle_assist::commands::solve_word;
/// use wordle_assist::core::Dictionary;
/// use wordle_assist::session::SessionConfig;
///
/// let dictionary = Dictionary::from_strs(&["crane", "slate", "plate", "crate"], 5).unwrap();
/// let result = solve_word(&dictionary, &SessionConfig::default(), "plate", None).unwrap();
/// assert!(result.success);
/// assert_eq!(result.guesses.last().unwrap().word.text(), "plate");
/// ```
pub fn solve_word(
    dictionary: &Dictionary,
    config: &SessionConfig,
    target: &str,
    first_guess: Option<&Word>,
) -> Result<SolveResult> {
    let mut session = Session::new(dictionary.clone(), config.clone())?;
    solve_in_session(&mut session, target, first_guess)
}

/// Solve `target` in an existing session, resetting it first
///
/// Lets batch runs reuse one session (and its dictionary) across targets.
///
/// # Errors
///
/// `InvalidLength` / `InvalidAlphabet` for a malformed target, `UnknownWord`
/// when the target is not in the session's dictionary, and any error the
/// session raises while recording.
pub fn solve_in_session(
    session: &mut Session,
    target: &str,
    first_guess: Option<&Word>,
) -> Result<SolveResult> {
    let dictionary = session.dictionary();
    let target = Word::with_length(target, dictionary.word_length())?;
    if !dictionary.contains(&target) {
        return Err(SolverError::UnknownWord(target.text().to_string()));
    }

    session.reset();
    let mut guesses = Vec::new();

    while session.state() == SessionState::Active {
        let candidates_before = session.candidates().len();

        let guess = match (guesses.is_empty(), first_guess) {
            (true, Some(forced)) => forced.clone(),
            _ => match session.next_suggestions(1)?.into_iter().next() {
                Some(suggestion) => suggestion.word,
                None => break,
            },
        };

        let (entropy, expected_remaining) = if candidates_before > 1 {
            let pool: Vec<&Word> = session.candidates().words().iter().collect();
            let metrics = calculate_metrics(&guess, &pool);
            (Some(metrics.entropy), Some(metrics.expected_remaining))
        } else {
            (None, None)
        };

        let pattern = evaluate(&guess, &target)?;
        session.record(GuessRecord::new(guess.clone(), pattern)?)?;

        guesses.push(GuessStep {
            word: guess,
            pattern,
            candidates_before,
            candidates_after: session.candidates().len(),
            entropy,
            expected_remaining,
        });
    }

    Ok(SolveResult {
        target,
        success: session.state() == SessionState::Terminal(Outcome::Solved),
        guesses,
    })
}
