//! Hangman
//!
//! A terminal word-guessing game: uncover the hidden word one letter at a time
//! before the gallows is complete.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Game, GameStatus, Word};
//!
//! let mut game = Game::new(Word::new("cat").unwrap());
//! for letter in ['c', 'a', 't'] {
//!     game.guess(letter);
//! }
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Startup errors
pub mod error;

// Configuration and logging
pub mod config;
pub mod logging;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
