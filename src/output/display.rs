//! Display functions for command results
//!
//! Every function writes to a caller-supplied sink so the interactive loops
//! can be driven from tests.

use super::formatters::{entropy_bar, format_score, pattern_tiles};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::History;
use crate::solver::{StrategyKind, Suggestion};
use colored::Colorize;
use std::io::{self, Write};

/// Ranked suggestions, candidates marked with a bullet
///
/// # Errors
/// Any write error.
pub fn write_suggestions<W: Write>(
    out: &mut W,
    suggestions: &[Suggestion],
    remaining: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "\n📊 {} ({remaining} candidates remaining)",
        "Suggestions".bright_cyan().bold()
    )?;
    if suggestions.is_empty() {
        writeln!(out, "   (none)")?;
    }
    for (i, suggestion) in suggestions.iter().enumerate() {
        let marker = if suggestion.is_candidate { "•" } else { " " };
        writeln!(
            out,
            "  {:>2}. {marker} {}  {}",
            i + 1,
            suggestion.word.text().to_uppercase().bright_white().bold(),
            format_score(suggestion.score).bright_yellow()
        )?;
    }
    Ok(())
}

/// Guesses so far as coloured tiles
///
/// # Errors
/// Any write error.
pub fn write_history<W: Write>(out: &mut W, history: &History) -> io::Result<()> {
    for (i, record) in history.iter().enumerate() {
        writeln!(
            out,
            "  {}. {}",
            (i + 1).to_string().bright_black(),
            pattern_tiles(&record.guess, record.pattern)
        )?;
    }
    Ok(())
}

/// Print the result of solving a word
///
/// # Errors
/// Any write error.
pub fn write_solve_result<W: Write>(
    out: &mut W,
    result: &SolveResult,
    verbose: bool,
) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;

    for (i, step) in result.guesses.iter().enumerate() {
        writeln!(
            out,
            "\nTurn {}: {} {}",
            i + 1,
            pattern_tiles(&step.word, step.pattern),
            step.pattern.to_emoji()
        )?;

        if verbose {
            writeln!(
                out,
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            )?;
            if let (Some(entropy), Some(expected)) = (step.entropy, step.expected_remaining) {
                writeln!(out, "  Entropy:    {entropy:.3} bits")?;
                writeln!(out, "  Expected:   {expected:.1} candidates")?;
                if step.candidates_after > 0 {
                    let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                    writeln!(
                        out,
                        "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                        reduction.log2()
                    )?;
                }
            }
        }
    }

    writeln!(out)?;
    if result.success {
        writeln!(
            out,
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        )
    } else {
        writeln!(
            out,
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        )
    }
}

/// Print the result of word analysis
///
/// # Errors
/// Any write error.
pub fn write_analysis_result<W: Write>(out: &mut W, result: &AnalysisResult) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        " {} {} ",
        "ANALYSIS:".bright_cyan().bold(),
        result.word.text().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    let bar = entropy_bar(result.entropy, result.word.len(), 30);
    writeln!(out, "\n📊 Against {} possible answers:", result.total_candidates)?;
    writeln!(
        out,
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    )?;
    writeln!(out, "   Info gain:   {:.1}x reduction", result.expected_reduction)?;
    writeln!(out, "   Expected:    {:.1} candidates remain", result.expected_remaining)?;
    writeln!(out, "   Worst case:  {} candidates", result.max_partition)?;
    writeln!(out, "   Patterns:    {}", result.pattern_count)?;
    writeln!(out, "   Frequency:   {:.3}", result.frequency_score)?;
    writeln!(out, "   Commonness:  {:.2}", result.commonness)?;
    writeln!(
        out,
        "   Candidate:   {}",
        if result.is_candidate { "yes".green() } else { "no".yellow() }
    )
}

/// Print the result of a benchmark
///
/// # Errors
/// Any write error.
pub fn write_benchmark_result<W: Write>(
    out: &mut W,
    result: &BenchmarkResult,
    max_attempts: usize,
) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).cyan())?;
    writeln!(
        out,
        " {} {} ",
        "BENCHMARK RESULTS".bright_cyan().bold(),
        result.strategy.bright_yellow()
    )?;
    writeln!(out, "{}", "═".repeat(60).cyan())?;

    writeln!(out, "\n📊 {}", "Performance:".bright_cyan().bold())?;
    writeln!(out, "   Words tested:     {}", result.total_words)?;
    writeln!(out, "   Solved:           {}", result.solved)?;
    writeln!(
        out,
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses).bright_yellow().bold()
    )?;
    writeln!(out, "   Best case:        {}", result.min_guesses.to_string().green())?;
    writeln!(out, "   Worst case:       {}", result.max_guesses.to_string().yellow())?;
    writeln!(out, "   Time taken:       {:.2}s", result.duration.as_secs_f64())?;
    writeln!(out, "   Words/second:     {:.1}", result.words_per_second)?;

    writeln!(out, "\n📈 {}", "Distribution:".bright_cyan().bold())?;
    for guess_count in 1..=max_attempts {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            writeln!(out, "   {guess_count}: {bar} {count:4} ({pct:5.1}%)")?;
        }
    }

    if !result.failures.is_empty() {
        let failed: Vec<String> = result.failures.iter().map(|w| w.text().to_uppercase()).collect();
        writeln!(out, "\n❌ {} {}", "Failed:".red().bold(), failed.join(", "))?;
    }
    Ok(())
}

/// List every strategy, marking the active one
///
/// # Errors
/// Any write error.
pub fn write_strategies<W: Write>(out: &mut W, active: StrategyKind) -> io::Result<()> {
    for kind in StrategyKind::ALL {
        let marker = if kind == active { "*" } else { " " };
        writeln!(
            out,
            " {marker} {:<26} {}",
            kind.name().bright_white().bold(),
            kind.description()
        )?;
    }
    Ok(())
}
