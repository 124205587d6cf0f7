//! Startup failures
//!
//! Everything here is fatal: the game never starts. Recoverable guess
//! problems live in [`crate::core::GuessRejection`].

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HangmanError {
    #[error("could not open dictionary {}: {source}", .path.display())]
    DictionaryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dictionary {} is empty", .path.display())]
    EmptyDictionary { path: PathBuf },

    #[error("dictionary line {line} is empty")]
    EmptyWord { line: usize },

    #[error("could not initialize the terminal: {0}")]
    DisplayInit(#[source] io::Error),

    #[error("need a bigger terminal: {width}x{height}, at least {min_width}x{min_height} required")]
    TerminalTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_small_names_both_sizes() {
        let err = HangmanError::TerminalTooSmall {
            width: 20,
            height: 10,
            min_width: 32,
            min_height: 14,
        };
        assert_eq!(
            err.to_string(),
            "need a bigger terminal: 20x10, at least 32x14 required"
        );
    }

    #[test]
    fn unavailable_keeps_source() {
        let err = HangmanError::DictionaryUnavailable {
            path: PathBuf::from("dict.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            err.to_string(),
            "could not open dictionary dict.txt: no such file"
        );
        assert!(std::error::Error::source(&err).is_some());
    }
}
