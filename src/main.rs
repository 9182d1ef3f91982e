//! Wordle Tiles - CLI
//!
//! Terminal Wordle with TUI and line-based modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_tiles::{
    commands::{check_guess, run_simple, summarize_word_list},
    config::GameConfig,
    game::RoundController,
    output::{print_check_result, print_word_list_summary},
    wordlists::{SOLUTION_COUNT, WORDS, WordStore, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_tiles",
    about = "Guess the hidden word in six tries, in your terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, embedded list) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Number of leading words that can be picked as the answer (default: embedded split, or the whole file)
    #[arg(long, global = true)]
    split: Option<usize>,

    /// Number of guesses per round
    #[arg(short = 'g', long, global = true, default_value_t = GameConfig::DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value_t = GameConfig::DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Seed for choosing answers (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Show the feedback a guess would get against a target
    Check {
        /// The guessed word
        guess: String,

        /// The word being guessed
        target: String,
    },

    /// Show word list statistics
    Words,
}

/// Load the word store based on the -w and --split flags
///
/// - "all": the embedded list, split after its solution words
/// - "<path>": a custom list; every word is a solution unless --split is given
fn load_store(wordlist: &str, split: Option<usize>, length: usize) -> Result<WordStore> {
    let store = match wordlist {
        "all" => WordStore::new(WORDS, split.unwrap_or(SOLUTION_COUNT), length)?,
        path => {
            let words = load_from_file(path)
                .map_err(|e| anyhow::anyhow!("Failed to read word list {path}: {e}"))?;
            WordStore::new(words.as_slice(), split.unwrap_or(words.len()), length)?
        }
    };
    Ok(store)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = GameConfig::new(cli.length, cli.max_guesses).map_err(|e| anyhow::anyhow!(e))?;
    let store = load_store(&cli.wordlist, cli.split, config.word_length)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config, &store, cli.seed),
        Commands::Simple => run_simple_command(&config, &store, cli.seed),
        Commands::Check { guess, target } => run_check_command(&guess, &target, &store),
        Commands::Words => {
            print_word_list_summary(&summarize_word_list(&store));
            Ok(())
        }
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    if let Some(seed) = seed {
        debug!("Using fixed seed {seed}");
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_os_rng()
    }
}

fn run_check_command(guess: &str, target: &str, store: &WordStore) -> Result<()> {
    let result = check_guess(guess, target, store).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_simple_command(config: &GameConfig, store: &WordStore, seed: Option<u64>) -> Result<()> {
    let mut controller =
        RoundController::new(config, store, make_rng(seed)).map_err(|e| anyhow::anyhow!(e))?;
    run_simple(&mut controller).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(config: &GameConfig, store: &WordStore, seed: Option<u64>) -> Result<()> {
    use wordle_tiles::interactive::{App, run_tui};

    let controller =
        RoundController::new(config, store, make_rng(seed)).map_err(|e| anyhow::anyhow!(e))?;
    run_tui(App::new(controller))
}
