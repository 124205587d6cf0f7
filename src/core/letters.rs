//! Letters guessed so far
//!
//! An insertion-ordered set: the order is what the board shows, the hash set
//! answers "already used?" in constant time.

use rustc_hash::FxHashSet;
use std::fmt;

/// Number of distinct letters a player can guess (a-z)
pub const ALPHABET_SIZE: usize = 26;

/// Ordered set of guessed letters
///
/// Only lowercase ASCII letters are stored, which bounds the set at
/// [`ALPHABET_SIZE`] entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsedLetters {
    order: Vec<char>,
    seen: FxHashSet<char>,
}

impl UsedLetters {
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: Vec::with_capacity(ALPHABET_SIZE),
            seen: FxHashSet::default(),
        }
    }

    /// Record a letter
    ///
    /// Returns `false` without changing anything if the letter is not a
    /// lowercase ASCII letter or has already been recorded.
    pub fn insert(&mut self, letter: char) -> bool {
        if !letter.is_ascii_lowercase() || !self.seen.insert(letter) {
            return false;
        }
        self.order.push(letter);
        debug_assert!(self.order.len() <= ALPHABET_SIZE);
        true
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.seen.contains(&letter)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Letters in the order they were guessed
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.order.iter().copied()
    }
}

/// Formats as `a,b,c,` like the used-letters row on the board
impl fmt::Display for UsedLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in &self.order {
            write!(f, "{letter},")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_order() {
        let mut used = UsedLetters::new();
        assert!(used.insert('q'));
        assert!(used.insert('a'));
        assert!(used.insert('m'));
        assert_eq!(used.iter().collect::<String>(), "qam");
    }

    #[test]
    fn insert_rejects_duplicates() {
        let mut used = UsedLetters::new();
        assert!(used.insert('e'));
        assert!(!used.insert('e'));
        assert_eq!(used.len(), 1);
    }

    #[test]
    fn insert_rejects_non_letters() {
        let mut used = UsedLetters::new();
        assert!(!used.insert('1'));
        assert!(!used.insert('A'));
        assert!(!used.insert('é'));
        assert!(used.is_empty());
    }

    #[test]
    fn whole_alphabet_fits() {
        let mut used = UsedLetters::new();
        for letter in 'a'..='z' {
            assert!(used.insert(letter));
        }
        assert_eq!(used.len(), ALPHABET_SIZE);
        assert!(('a'..='z').all(|l| !used.insert(l)));
    }

    #[test]
    fn display_matches_board_row() {
        let mut used = UsedLetters::new();
        assert_eq!(used.to_string(), "");
        used.insert('x');
        used.insert('y');
        assert_eq!(used.to_string(), "x,y,");
    }
}
