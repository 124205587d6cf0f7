//! Word lists for hangman
//!
//! Words are read from a plain text file, one per line.

pub mod dictionary;

pub use dictionary::{DEFAULT_DICTIONARY, WordList};
