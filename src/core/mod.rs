//! Core domain types for hangman
//!
//! This module contains the game rules with no terminal or file dependencies.
//! All types here are pure and testable without a display.

mod gallows;
mod game;
mod letters;
mod word;

pub use gallows::{GALLOWS_HEIGHT, GALLOWS_WIDTH, GallowsStage};
pub use game::{Game, GameStatus, GuessOutcome, GuessRejection, GuessState, MAX_ATTEMPTS};
pub use letters::{ALPHABET_SIZE, UsedLetters};
pub use word::{Word, WordError};
