//! Hangman - CLI
//!
//! Draws one word from a dictionary file and plays a single game in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use hangman::{
    config::Config,
    core::{GameStatus, MAX_ATTEMPTS},
    interactive::run_tui,
    logging,
    output::print_result,
    wordlists::{DEFAULT_DICTIONARY, WordList},
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit code when the player quits before the game is decided
const INTERRUPTED: u8 = 130;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the hidden word before the gallows is complete",
    version,
    author
)]
struct Cli {
    /// Word list with one word per line
    #[arg(default_value = DEFAULT_DICTIONARY)]
    dictionary: PathBuf,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env(cli.dictionary)?;
    logging::init(&config.log)?;

    let mut rng = rand::rng();
    let mut word_list = WordList::open(&config.dictionary)
        .context("no usable dictionary, specify the path: hangman <path to dictionary>")?;
    let word = word_list.random_word(&mut rng)?;

    let outcome = run_tui(word);
    word_list.close();
    let (game, status) = outcome?;

    let wrong_guesses = MAX_ATTEMPTS - game.remaining_attempts();
    match status {
        Some(status) => {
            print_result(game.word(), status, wrong_guesses);
            Ok(ExitCode::SUCCESS)
        }
        None => {
            print_result(game.word(), GameStatus::Playing, wrong_guesses);
            Ok(ExitCode::from(INTERRUPTED))
        }
    }
}
