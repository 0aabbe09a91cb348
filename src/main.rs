//! Wordle Index - CLI
//!
//! Builds the word index from the embedded dictionary, a file or a directory
//! of word sources, then searches it, plays self-play rounds against it or
//! compares identity hashers.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wordle_index::{
    commands::{Feedback, Shell, run_compare, run_compile, run_search, run_shell, run_simulation},
    config::EngineConfig,
    index::WordIndex,
    output::{
        print_compare_report, print_compile_summary, print_index_summary, print_match_result,
        print_simulation_report,
    },
    search::MatchEngine,
    wordlists::{DictionarySource, WordList},
};

#[derive(Parser)]
#[command(
    name = "wordle-index",
    about = "Dictionary index and knowledge matcher for Wordle guesses",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default), a line file, or a directory of sources
    #[arg(
        short = 'w',
        long,
        global = true,
        env = "DICTIONARY_DIR",
        default_value = "embedded"
    )]
    wordlist: String,

    #[command(flatten)]
    engine: EngineConfig,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive shell (default)
    Shell,

    /// Search once for a guess
    Search {
        /// The guessed word
        guess: String,

        /// Derive knowledge by scoring the guess against this secret
        #[arg(short, long, conflicts_with = "pattern")]
        secret: Option<String>,

        /// Feedback pattern, e.g. GY--- or 🟩🟨⬜⬜⬜
        #[arg(short, long)]
        pattern: Option<String>,
    },

    /// Self-play: random secrets and guesses, verifying every search
    Simulate {
        /// Number of rounds
        #[arg(short = 'n', long, default_value = "1000")]
        rounds: usize,
    },

    /// Build the index with both hashers and cross-check searches
    Compare {
        /// Number of sampled searches
        #[arg(short = 'n', long, default_value = "500")]
        searches: usize,
    },

    /// Compile a directory of word sources into one dictionary file
    Compile {
        /// Directory holding .txt and wordset .json files
        dir: PathBuf,

        /// Output file
        #[arg(short, long, default_value = "dictionary.txt")]
        output: PathBuf,
    },
}

fn init_logging() {
    // WORDLE_LOG_FORMAT=json switches to machine-readable output
    let log_format = std::env::var("WORDLE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "wordle_index=info".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                .init();
        }
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    // Default to the shell if no command given
    let command = cli.command.unwrap_or(Commands::Shell);
    let source = DictionarySource::parse(&cli.wordlist);

    match command {
        Commands::Shell => run_shell_command(&cli.engine, &source),
        Commands::Search {
            guess,
            secret,
            pattern,
        } => run_search_command(
            &cli.engine,
            &source,
            &guess,
            secret.as_deref(),
            pattern.as_deref(),
        ),
        Commands::Simulate { rounds } => run_simulate_command(&cli.engine, &source, rounds),
        Commands::Compare { searches } => run_compare_command(&cli.engine, &source, searches),
        Commands::Compile { dir, output } => {
            let summary = run_compile(&dir, &output)
                .with_context(|| format!("compiling dictionaries from {}", dir.display()))?;
            print_compile_summary(&summary);
            Ok(())
        }
    }
}

fn load_words(source: &DictionarySource) -> Result<WordList> {
    let words = source
        .load()
        .with_context(|| format!("loading dictionary from {source}"))?;
    if words.is_empty() {
        bail!("no words found in {source}");
    }
    Ok(words)
}

fn build_index(config: &EngineConfig, source: &DictionarySource) -> Result<WordIndex> {
    let words = load_words(source)?;
    let hasher = config.hasher();
    WordIndex::build(&words.words, hasher.as_ref()).context("building word index")
}

fn run_shell_command(config: &EngineConfig, source: &DictionarySource) -> Result<()> {
    let index = build_index(config, source)?;
    print_index_summary(&index, source);

    let engine = MatchEngine::new(&index).with_policy(config.match_policy());
    let mut shell = Shell::new(engine, config.sampler(), config.rng());
    run_shell(&mut shell, io::stdin().lock()).context("reading from stdin")
}

fn run_search_command(
    config: &EngineConfig,
    source: &DictionarySource,
    guess: &str,
    secret: Option<&str>,
    pattern: Option<&str>,
) -> Result<()> {
    let feedback = match (secret, pattern) {
        (Some(secret), _) => Feedback::Secret(secret),
        (None, Some(pattern)) => Feedback::Pattern(pattern),
        (None, None) => bail!("search needs --secret or --pattern"),
    };

    let index = build_index(config, source)?;
    let engine = MatchEngine::new(&index).with_policy(config.match_policy());
    let result = run_search(&engine, guess, feedback, config.knowledge_rule)?;
    print_match_result(&result);
    Ok(())
}

fn run_simulate_command(config: &EngineConfig, source: &DictionarySource, rounds: usize) -> Result<()> {
    let index = build_index(config, source)?;
    println!("Simulating {rounds} rounds over {} words...", index.len());

    let report = run_simulation(&index, config, rounds, true);
    print_simulation_report(&report);
    if !report.passed() {
        bail!("{} rounds failed verification", report.failures.len());
    }
    Ok(())
}

fn run_compare_command(config: &EngineConfig, source: &DictionarySource, searches: usize) -> Result<()> {
    let words = load_words(source)?;
    println!("Comparing hashers over {} words...", words.len());

    let report = run_compare(&words.words, config, searches)
        .context("building indexes for comparison")?;
    print_compare_report(&report);
    if !report.agreed() {
        bail!("hashers disagree");
    }
    Ok(())
}
