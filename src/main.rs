//! Hinted Wordle - CLI
//!
//! Play a sequence of hinted word puzzles in a TUI or a plain line-based mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hinted_wordle::{
    commands::{check_guess, run_simple},
    logging::{self, output_for},
    output::print_check_result,
    session::{DEFAULT_MAX_ATTEMPTS, DictionaryMode, GameConfig, Session},
    wordlists::{
        ACCEPTED, default_word_set,
        loader::{load_word_list, load_word_set},
        shuffle_word_set,
    },
};
use log::info;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hinted_wordle",
    about = "Guess a sequence of hidden words, one hint at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word set file with one WORD:Hint per line (default: embedded set)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Dictionary gate: strict (default) or off
    #[arg(short, long, global = true, default_value_t = DictionaryMode::Strict)]
    dictionary: DictionaryMode,

    /// Extra accepted-guess file, one word per line (adds to the embedded list)
    #[arg(short, long, global = true)]
    accepted: Option<PathBuf>,

    /// Guesses allowed per word
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Shuffle the play order
    #[arg(long, global = true)]
    shuffle: bool,

    /// Seed for --shuffle, for a repeatable order
    #[arg(long, global = true, requires = "shuffle")]
    seed: Option<u64>,

    /// Write logs to this file (the TUI logs nowhere otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line-based mode without the TUI
    Simple,

    /// Score a single guess against a target word
    Check {
        /// The hidden word
        target: String,

        /// The guess to score
        guess: String,
    },
}

/// Build the session config from the CLI flags
fn build_config(cli: &Cli) -> Result<GameConfig> {
    let mut entries = match &cli.words {
        Some(path) => load_word_set(path)
            .with_context(|| format!("Failed to load word set from {}", path.display()))?,
        None => default_word_set(),
    };

    if cli.shuffle {
        shuffle_word_set(&mut entries, cli.seed);
    }

    let mut accepted: Vec<String> = ACCEPTED.iter().map(ToString::to_string).collect();
    if let Some(path) = &cli.accepted {
        accepted.extend(
            load_word_list(path)
                .with_context(|| format!("Failed to load accepted words from {}", path.display()))?,
        );
    }

    let config = GameConfig::builder()
        .words(entries)
        .max_attempts(cli.max_attempts)
        .dictionary(accepted)
        .dictionary_mode(cli.dictionary)
        .build()
        .context("Invalid game configuration")?;

    info!(
        "Loaded {} words, dictionary {}, {} attempts",
        config.word_set().len(),
        config.dictionary_mode(),
        config.max_attempts()
    );
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.clone().unwrap_or(Commands::Play);

    let uses_tui = matches!(command, Commands::Play);
    logging::init(output_for(cli.log_file.as_deref(), uses_tui))
        .context("Failed to set up logging")?;

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple => run_simple_command(&cli),
        Commands::Check { target, guess } => run_check_command(&target, &guess),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use hinted_wordle::interactive::{App, run_tui};

    let app = App::new(build_config(cli)?);
    run_tui(app)
}

fn run_simple_command(cli: &Cli) -> Result<()> {
    let mut session = Session::new(build_config(cli)?);
    let summary = run_simple(&mut session, io::stdin().lock()).map_err(|e| anyhow::anyhow!(e))?;
    info!("Simple mode finished: {summary:?}");
    Ok(())
}

fn run_check_command(target: &str, guess: &str) -> Result<()> {
    let result = check_guess(target, guess).context("Cannot score guess")?;
    print_check_result(&result.target, &result.guess, &result.feedback);
    Ok(())
}
