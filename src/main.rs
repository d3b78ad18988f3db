//! Wordle Assistant - CLI
//!
//! Suggests guesses for a game in progress, solves known words, hosts games,
//! and benchmarks the strategies.

mod config;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{self, Write};
use std::path::PathBuf;
use wordle_assist::{
    commands::{analyze_word, run_assist, run_benchmark, run_play, sample_targets, solve_word},
    core::{Dictionary, Word},
    logging,
    output::{write_analysis_result, write_benchmark_result, write_solve_result, write_strategies},
    session::{Session, SessionConfig},
    solver::StrategyKind,
    wordlists::{embedded_dictionary, loader::load_dictionary},
};

#[derive(Parser)]
#[command(
    name = "wordle_assist",
    about = "Wordle assistant: exact feedback scoring and ranked guess suggestions",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: frequency, entropy, weighted_gain (default), minimax, two_step,
    /// hybrid_frequency_entropy
    #[arg(short, long, global = true)]
    strategy: Option<String>,

    /// Word list file (one word per line, optional frequency column); embedded list if omitted
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Number of suggestions shown per turn
    #[arg(short = 'k', long, global = true)]
    suggestions: Option<usize>,

    /// Guesses allowed per game
    #[arg(short = 'm', long, global = true)]
    max_attempts: Option<usize>,

    /// Letters per word (must match the word list)
    #[arg(short = 'l', long, global = true)]
    word_length: Option<usize>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant for a game you are playing elsewhere (default)
    Assist,

    /// Play a game against a hidden word
    Play,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and entropy per turn
        #[arg(short = 'd', long)]
        details: bool,

        /// Force the first guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,
    },

    /// Analyze how informative a guess is
    Analyze {
        /// Word to analyze
        word: String,

        /// Earlier guesses as GUESS:PATTERN, narrowing the pool first
        #[arg(short, long = "after", value_name = "GUESS:PATTERN")]
        after: Vec<String>,
    },

    /// Benchmark a strategy on random words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Test every word in the list instead of a sample
        #[arg(short, long)]
        all: bool,

        /// Force the first guess
        #[arg(short = 'f', long)]
        first_word: Option<String>,

        /// Seed for the random sample
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the available strategies
    Strategies,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(logging::level_for(cli.verbose))
        .map_err(|e| anyhow::anyhow!("cannot install logger: {e}"))?;

    let config = build_config(&cli)?;
    let dictionary = load_words(cli.wordlist.as_deref(), config.word_length)?;

    match cli.command.unwrap_or(Commands::Assist) {
        Commands::Assist => {
            let mut session = Session::new(dictionary, config).context("cannot start session")?;
            run_assist(&mut session, io::stdin().lock(), &mut io::stdout())?;
        }
        Commands::Play => {
            run_play(
                &dictionary,
                &config,
                &mut rand::rng(),
                io::stdin().lock(),
                &mut io::stdout(),
            )?;
        }
        Commands::Solve {
            word,
            details,
            first_word,
        } => {
            let first = parse_first_word(first_word.as_deref(), &dictionary)?;
            let result = solve_word(&dictionary, &config, &word, first.as_ref())
                .with_context(|| format!("cannot solve '{word}'"))?;
            write_solve_result(&mut io::stdout(), &result, details)?;
        }
        Commands::Analyze { word, after } => run_analyze(dictionary, config, &word, &after)?,
        Commands::Benchmark {
            count,
            all,
            first_word,
            seed,
        } => run_benchmark_command(&dictionary, &config, count, all, first_word.as_deref(), seed)?,
        Commands::Strategies => {
            let mut out = io::stdout();
            writeln!(out, "\n{}", "Strategies".bright_cyan().bold())?;
            write_strategies(&mut out, config.strategy_kind()?)?;
        }
    }
    Ok(())
}

/// Config file (or defaults) with command-line overrides applied
fn build_config(cli: &Cli) -> Result<SessionConfig> {
    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => SessionConfig::default(),
    };

    if let Some(strategy) = &cli.strategy {
        config.strategy.clone_from(strategy);
    }
    if let Some(suggestions) = cli.suggestions {
        config.suggestions = suggestions;
    }
    if let Some(max_attempts) = cli.max_attempts {
        config.max_attempts = max_attempts;
    }
    if let Some(word_length) = cli.word_length {
        config.word_length = word_length;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn load_words(path: Option<&std::path::Path>, word_length: usize) -> Result<Dictionary> {
    match path {
        Some(path) => load_dictionary(path, word_length)
            .with_context(|| format!("cannot load {}", path.display())),
        None => {
            let dictionary = embedded_dictionary()?;
            if dictionary.word_length() != word_length {
                bail!(
                    "the embedded word list has {}-letter words; \
                     pass --wordlist for length {word_length}",
                    dictionary.word_length()
                );
            }
            Ok(dictionary)
        }
    }
}

fn parse_first_word(first_word: Option<&str>, dictionary: &Dictionary) -> Result<Option<Word>> {
    let Some(text) = first_word else {
        return Ok(None);
    };
    let word = Word::with_length(text, dictionary.word_length())
        .with_context(|| format!("bad first word '{text}'"))?;
    if !dictionary.contains(&word) {
        bail!("first word '{text}' is not in the word list");
    }
    Ok(Some(word))
}

fn run_analyze(
    dictionary: Dictionary,
    config: SessionConfig,
    word: &str,
    after: &[String],
) -> Result<()> {
    let positional_weight = config.weights.positional_weight;
    let mut session = Session::new(dictionary, config)?;
    for entry in after {
        let (guess, pattern) = entry
            .split_once(':')
            .with_context(|| format!("expected GUESS:PATTERN, got '{entry}'"))?;
        session
            .record_guess(guess, pattern)
            .with_context(|| format!("cannot apply '{entry}'"))?;
    }

    let result = analyze_word(word, session.dictionary(), session.candidates(), positional_weight)
        .with_context(|| format!("cannot analyze '{word}'"))?;
    write_analysis_result(&mut io::stdout(), &result)?;
    Ok(())
}

fn run_benchmark_command(
    dictionary: &Dictionary,
    config: &SessionConfig,
    count: usize,
    all: bool,
    first_word: Option<&str>,
    seed: Option<u64>,
) -> Result<()> {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    let forced_first = parse_first_word(first_word, dictionary)?;
    let targets = if all {
        dictionary.words().to_vec()
    } else {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        sample_targets(dictionary, count, &mut rng)
    };

    let kind = config.strategy_kind()?;
    match &forced_first {
        Some(word) => println!(
            "Running {kind} on {} words with forced first word: {}...",
            targets.len(),
            word.text().to_uppercase()
        ),
        None => println!("Running {kind} on {} words...", targets.len()),
    }
    if kind == StrategyKind::TwoStep && targets.len() > 100 {
        println!("{}", "two_step is slow on large runs; consider --count".yellow());
    }

    let result = run_benchmark(dictionary, config, &targets, forced_first.as_ref(), true)?;
    write_benchmark_result(&mut io::stdout(), &result, config.max_attempts)?;
    Ok(())
}
