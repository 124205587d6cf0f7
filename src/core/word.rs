//! Hidden word representation
//!
//! A Word stores the target word along with letter position indices for guess matching.

use rustc_hash::FxHashMap;
use std::fmt;

/// The word the player has to guess
///
/// Keeps the original spelling for display and a map from lowercase letter to
/// every position it occupies, so a guess is answered without rescanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    chars: Vec<char>,
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must contain at least one character"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a dictionary line
    ///
    /// A single trailing line terminator (`\n` or `\r\n`) is removed. Any other
    /// content is kept as-is; only ASCII letters can ever be matched by a guess.
    ///
    /// # Errors
    /// Returns `WordError::Empty` if nothing is left after the terminator is stripped.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Word;
    ///
    /// let word = Word::new("cat\n").unwrap();
    /// assert_eq!(word.text(), "cat");
    /// assert_eq!(word.len(), 3);
    ///
    /// assert!(Word::new("\n").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let mut text: String = text.into();
        if text.ends_with('\n') {
            text.pop();
            if text.ends_with('\r') {
                text.pop();
            }
        }

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        let chars: Vec<char> = text.chars().collect();

        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, &ch) in chars.iter().enumerate() {
            char_positions
                .entry(ch.to_ascii_lowercase())
                .or_default()
                .push(i);
        }

        Ok(Self {
            text,
            chars,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letter positions on the board
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; an empty word cannot be constructed
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the character at a specific position, in its original case
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Get all positions where a letter appears, ignoring ASCII case
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter.to_ascii_lowercase())
            .map_or(&[], Vec::as_slice)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
