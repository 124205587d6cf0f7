//! Round state machine
//!
//! A game starts in [`GameStatus::Playing`] and ends in `Won` once every
//! position is revealed or `Lost` once the attempts run out. Rejected guesses
//! never touch the state.

use super::gallows::GallowsStage;
use super::letters::UsedLetters;
use super::word::Word;
use thiserror::Error;

/// Wrong guesses allowed before the game is lost
pub const MAX_ATTEMPTS: u8 = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// A guess that was refused without costing a turn
///
/// The display text doubles as the status line shown to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessRejection {
    #[error("Only letters allowed!")]
    NotALetter(char),
    #[error("Already used!")]
    AlreadyUsed(char),
}

/// What a single guess did to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Rejected(GuessRejection),
    /// Letter found at one or more positions
    Hit { letter: char, positions: Vec<usize> },
    /// Letter not in the word; one attempt spent
    Miss { letter: char, stage: GallowsStage },
    /// The game had already ended
    Finished,
}

/// Mutable part of a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessState {
    pub used: UsedLetters,
    pub found: usize,
    pub remaining: u8,
}

impl Default for GuessState {
    fn default() -> Self {
        Self {
            used: UsedLetters::new(),
            found: 0,
            remaining: MAX_ATTEMPTS,
        }
    }
}

/// One game of hangman over a single target word
#[derive(Debug, Clone)]
pub struct Game {
    word: Word,
    state: GuessState,
    status: GameStatus,
}

impl Game {
    #[must_use]
    pub fn new(word: Word) -> Self {
        Self {
            word,
            state: GuessState::default(),
            status: GameStatus::Playing,
        }
    }

    /// Apply one character of player input
    ///
    /// Input is lowercased first, so `'A'` and `'a'` are the same guess. A
    /// letter matching several positions counts every one of them; only a
    /// letter matching nothing costs an attempt.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Game, GameStatus, GuessOutcome, Word};
    ///
    /// let mut game = Game::new(Word::new("aaa").unwrap());
    /// let outcome = game.guess('A');
    /// assert!(matches!(outcome, GuessOutcome::Hit { .. }));
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    pub fn guess(&mut self, input: char) -> GuessOutcome {
        if self.status.is_finished() {
            return GuessOutcome::Finished;
        }

        let letter = input.to_ascii_lowercase();
        if !letter.is_ascii_alphabetic() {
            return GuessOutcome::Rejected(GuessRejection::NotALetter(input));
        }
        if !self.state.used.insert(letter) {
            return GuessOutcome::Rejected(GuessRejection::AlreadyUsed(letter));
        }

        let positions = self.word.positions_of(letter).to_vec();
        if positions.is_empty() {
            self.state.remaining -= 1;
            if self.state.remaining == 0 {
                self.status = GameStatus::Lost;
            }
            return GuessOutcome::Miss {
                letter,
                stage: self.stage(),
            };
        }

        self.state.found += positions.len();
        if self.state.found == self.word.len() {
            self.status = GameStatus::Won;
        }
        GuessOutcome::Hit { letter, positions }
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> &GuessState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn remaining_attempts(&self) -> u8 {
        self.state.remaining
    }

    #[inline]
    #[must_use]
    pub fn found_letters(&self) -> usize {
        self.state.found
    }

    #[inline]
    #[must_use]
    pub fn used_letters(&self) -> &UsedLetters {
        &self.state.used
    }

    #[inline]
    #[must_use]
    pub fn stage(&self) -> GallowsStage {
        GallowsStage::from_remaining(self.state.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(word: &str) -> Game {
        Game::new(Word::new(word).unwrap())
    }

    #[test]
    fn cat_won_in_three() {
        let mut game = game("cat\n");
        let mut found = Vec::new();
        let mut statuses = Vec::new();

        for letter in ['c', 'a', 't'] {
            assert!(matches!(game.guess(letter), GuessOutcome::Hit { .. }));
            found.push(game.found_letters());
            statuses.push(game.status());
            assert_eq!(game.remaining_attempts(), MAX_ATTEMPTS);
        }

        assert_eq!(found, vec![1, 2, 3]);
        assert_eq!(
            statuses,
            vec![GameStatus::Playing, GameStatus::Playing, GameStatus::Won]
        );
    }

    #[test]
    fn dog_lost_after_seven_misses() {
        let mut game = game("dog\n");
        let mut remaining = vec![game.remaining_attempts()];

        for letter in ['x', 'y', 'z', 'q', 'w', 'e', 'r'] {
            assert!(matches!(game.guess(letter), GuessOutcome::Miss { .. }));
            remaining.push(game.remaining_attempts());
        }

        assert_eq!(remaining, vec![7, 6, 5, 4, 3, 2, 1, 0]);
        assert_eq!(game.status(), GameStatus::Lost);
        assert!(game.stage().is_complete());
    }

    #[test]
    fn miss_reports_new_stage() {
        let mut game = game("dog");
        assert_eq!(
            game.guess('x'),
            GuessOutcome::Miss {
                letter: 'x',
                stage: GallowsStage::from_remaining(6)
            }
        );
    }

    #[test]
    fn hit_reports_every_position() {
        let mut game = game("banana");
        assert_eq!(
            game.guess('a'),
            GuessOutcome::Hit {
                letter: 'a',
                positions: vec![1, 3, 5]
            }
        );
        assert_eq!(game.found_letters(), 3);
    }

    #[test]
    fn repeated_letter_word_won_in_one() {
        let mut game = game("aaa");
        game.guess('a');
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.found_letters(), 3);
    }

    #[test]
    fn one_letter_word() {
        let mut game = game("i");
        game.guess('i');
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn non_letter_rejected_without_cost() {
        let mut game = game("cat");
        let before = game.state().clone();

        for input in ['1', ' ', '-', 'é', '\n'] {
            assert!(matches!(
                game.guess(input),
                GuessOutcome::Rejected(GuessRejection::NotALetter(_))
            ));
        }

        assert_eq!(game.state(), &before);
        assert_eq!(game.status(), GameStatus::Playing);
    }

    #[test]
    fn duplicate_rejected_without_cost() {
        let mut game = game("cat");
        game.guess('x');
        game.guess('c');
        let before = game.state().clone();

        assert_eq!(
            game.guess('x'),
            GuessOutcome::Rejected(GuessRejection::AlreadyUsed('x'))
        );
        assert_eq!(
            game.guess('C'),
            GuessOutcome::Rejected(GuessRejection::AlreadyUsed('c'))
        );
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn uppercase_guess_matches_lowercase_word() {
        let mut game = game("cat");
        assert!(matches!(game.guess('C'), GuessOutcome::Hit { .. }));
        assert_eq!(game.used_letters().iter().collect::<String>(), "c");
    }

    #[test]
    fn mixed_case_word_matches_either_case() {
        let mut game = game("Rust");
        assert_eq!(
            game.guess('r'),
            GuessOutcome::Hit {
                letter: 'r',
                positions: vec![0]
            }
        );
    }

    #[test]
    fn guess_after_end_is_ignored() {
        let mut game = game("a");
        game.guess('a');
        let before = game.state().clone();

        assert_eq!(game.guess('b'), GuessOutcome::Finished);
        assert_eq!(game.state(), &before);
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(
            GuessRejection::NotALetter('1').to_string(),
            "Only letters allowed!"
        );
        assert_eq!(GuessRejection::AlreadyUsed('a').to_string(), "Already used!");
    }
}
