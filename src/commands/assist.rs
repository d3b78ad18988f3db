//! Interactive assist mode
//!
//! The player types each guess with the feedback the real game gave it and
//! gets ranked suggestions for the next move.

use crate::core::Pattern;
use crate::output::{formatters::format_score, write_history, write_strategies, write_suggestions};
use crate::session::{Outcome, Session, SessionState};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Candidates are listed in full up to this many
const LIST_LIMIT: usize = 30;

/// One line of assist-mode input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistCommand {
    /// `<guess> <pattern>`
    Record { guess: String, pattern: String },
    /// `win [guess]`: the guess (top suggestion by default) was correct
    Win(Option<String>),
    Suggest,
    Candidates,
    Stats,
    Undo,
    Reset,
    Strategy(String),
    Strategies,
    Help,
    Quit,
    Unknown(String),
}

/// Parse a line of input; `None` for a blank line
#[must_use]
pub fn parse_command(line: &str) -> Option<AssistCommand> {
    let mut parts = line.split_whitespace();
    let head = parts.next()?;
    let rest: Vec<&str> = parts.collect();

    let command = match (head.to_lowercase().as_str(), rest.as_slice()) {
        ("quit" | "q" | "exit", []) => AssistCommand::Quit,
        ("help" | "h" | "?", []) => AssistCommand::Help,
        ("new" | "n" | "reset", []) => AssistCommand::Reset,
        ("undo" | "u", []) => AssistCommand::Undo,
        ("suggest" | "s", []) => AssistCommand::Suggest,
        ("candidates" | "list" | "c", []) => AssistCommand::Candidates,
        ("stats", []) => AssistCommand::Stats,
        ("strategy", []) | ("strategies", []) => AssistCommand::Strategies,
        ("strategy", [name]) => AssistCommand::Strategy((*name).to_string()),
        ("win" | "solved", []) => AssistCommand::Win(None),
        ("win" | "solved", [guess]) => AssistCommand::Win(Some((*guess).to_string())),
        (_, [pattern]) => AssistCommand::Record {
            guess: head.to_string(),
            pattern: (*pattern).to_string(),
        },
        _ => AssistCommand::Unknown(line.trim().to_string()),
    };
    Some(command)
}

/// Run the assist loop until `quit` or end of input
///
/// Library errors are printed and the loop re-prompts; the session is left
/// as it was.
///
/// # Errors
///
/// Only I/O errors on `input` or `out`.
pub fn run_assist<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Wordle Assistant - Assist Mode                 ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    write_help(out)?;

    let mut refresh = true;
    let mut line = String::new();

    loop {
        if refresh && session.state().is_active() {
            show_suggestions(session, out)?;
        }
        refresh = false;

        write!(out, "\n{} ", ">".bright_cyan().bold())?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        let Some(command) = parse_command(&line) else {
            continue;
        };

        match command {
            AssistCommand::Quit => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            AssistCommand::Help => write_help(out)?,
            AssistCommand::Reset => {
                session.reset();
                writeln!(out, "\n🔄 New game started!")?;
                refresh = true;
            }
            AssistCommand::Undo => match session.undo() {
                Ok(Some(record)) => {
                    writeln!(out, "✓ Undid {}", record.guess.text().to_uppercase())?;
                    refresh = true;
                }
                Ok(None) => writeln!(out, "Nothing to undo!")?,
                Err(err) => report(out, &err)?,
            },
            AssistCommand::Suggest => refresh = true,
            AssistCommand::Candidates => write_candidates(session, out)?,
            AssistCommand::Stats => write_stats(session, out)?,
            AssistCommand::Strategies => write_strategies(out, session.strategy_kind())?,
            AssistCommand::Strategy(name) => match session.set_strategy(&name) {
                Ok(()) => {
                    writeln!(out, "✓ Strategy: {}", session.strategy_kind())?;
                    refresh = true;
                }
                Err(err) => report(out, &err)?,
            },
            AssistCommand::Win(guess) => {
                let guess = guess.or_else(|| {
                    session
                        .next_suggestions(1)
                        .ok()
                        .and_then(|s| s.into_iter().next())
                        .map(|s| s.word.text().to_string())
                });
                match guess {
                    Some(guess) => {
                        let solved = Pattern::solved(session.config().word_length).to_string();
                        refresh = record(session, &guess, &solved, out)?;
                    }
                    None => writeln!(out, "{}", "Nothing to mark as solved".red())?,
                }
            }
            AssistCommand::Record { guess, pattern } => {
                refresh = record(session, &guess, &pattern, out)?;
            }
            AssistCommand::Unknown(text) => {
                writeln!(
                    out,
                    "{} '{text}'. Enter a guess and its feedback, e.g. 'crane BYBBG', or 'help'.",
                    "❌ Not understood:".red()
                )?;
            }
        }
    }
}

/// Record one guess; returns whether suggestions should be refreshed
fn record<W: Write>(
    session: &mut Session,
    guess: &str,
    pattern: &str,
    out: &mut W,
) -> io::Result<bool> {
    match session.record_guess(guess, pattern) {
        Ok(SessionState::Active) => {
            writeln!(out)?;
            write_history(out, session.history())?;
            Ok(true)
        }
        Ok(SessionState::Terminal(outcome)) => {
            writeln!(out)?;
            write_history(out, session.history())?;
            write_outcome(session, outcome, out)?;
            Ok(false)
        }
        Err(err) => {
            report(out, &err)?;
            Ok(false)
        }
    }
}

fn show_suggestions<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60))?;
    writeln!(
        out,
        "Turn {} of {} ({})",
        session.attempts_used() + 1,
        session.config().max_attempts,
        session.strategy_kind()
    )?;
    match session.suggestions() {
        Ok(suggestions) => write_suggestions(out, &suggestions, session.candidates().len()),
        Err(err) => report(out, &err),
    }
}

fn write_outcome<W: Write>(session: &Session, outcome: Outcome, out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    match outcome {
        Outcome::Solved => {
            let turns = session.attempts_used();
            writeln!(
                out,
                "{}",
                format!(
                    "🎉 Solved in {turns} {}!",
                    if turns == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            )?;
        }
        Outcome::Exhausted => {
            writeln!(out, "{}", "❌ Out of attempts.".red().bold())?;
            if session.candidates().len() <= LIST_LIMIT {
                write_candidates(session, out)?;
            }
        }
    }
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "Type 'new' to start again or 'quit' to exit.")
}

fn write_candidates<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    let pool = session.candidates();
    writeln!(out, "\n{} candidates:", pool.len())?;
    let shown: Vec<String> = pool
        .words()
        .iter()
        .take(LIST_LIMIT)
        .map(|w| w.text().to_uppercase())
        .collect();
    writeln!(out, "  {}", shown.join(" "))?;
    if pool.len() > LIST_LIMIT {
        writeln!(out, "  … and {} more", pool.len() - LIST_LIMIT)?;
    }
    Ok(())
}

fn write_stats<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    let stats = session.statistics();
    writeln!(out, "\n📈 Letter presence over {} candidates:", stats.pool_size())?;
    for (letter, share) in stats.ranked_letters().into_iter().take(10) {
        writeln!(out, "  {}  {}", letter.to_ascii_uppercase(), format_score(share))?;
    }
    Ok(())
}

fn write_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "After each guess, enter the word and its feedback:")?;
    writeln!(out, "  crane BYBBG     G/🟩 correct, Y/🟨 present, B/-/⬛ absent")?;
    writeln!(out, "  win [word]      the word (top suggestion by default) was right")?;
    writeln!(out, "Commands: suggest, candidates, stats, undo, new, strategy [name], help, quit")
}

fn report<W: Write>(out: &mut W, err: &crate::error::SolverError) -> io::Result<()> {
    writeln!(out, "{} {err}", "❌".red())
}
