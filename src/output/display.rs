//! Display functions for the end of a game

use crate::core::{GameStatus, Word};
use colored::Colorize;

/// One-line summary of a finished game, uncolored
#[must_use]
pub fn result_line(word: &Word, status: GameStatus, wrong_guesses: u8) -> String {
    match status {
        GameStatus::Won if wrong_guesses == 0 => {
            format!("You won without a single miss! The word was {word}.")
        }
        GameStatus::Won => format!(
            "You won with {wrong_guesses} {}! The word was {word}.",
            if wrong_guesses == 1 { "miss" } else { "misses" }
        ),
        GameStatus::Lost => format!("You lost! The word was {word}."),
        GameStatus::Playing => format!("Game abandoned. The word was {word}."),
    }
}

/// Print the result of a game
pub fn print_result(word: &Word, status: GameStatus, wrong_guesses: u8) {
    let line = result_line(word, status, wrong_guesses);
    match status {
        GameStatus::Won => println!("{}", line.green().bold()),
        GameStatus::Lost => println!("{}", line.red().bold()),
        GameStatus::Playing => println!("{}", line.yellow()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn won_clean() {
        assert_eq!(
            result_line(&word("cat"), GameStatus::Won, 0),
            "You won without a single miss! The word was cat."
        );
    }

    #[test]
    fn won_with_misses() {
        assert_eq!(
            result_line(&word("cat"), GameStatus::Won, 1),
            "You won with 1 miss! The word was cat."
        );
        assert_eq!(
            result_line(&word("cat"), GameStatus::Won, 4),
            "You won with 4 misses! The word was cat."
        );
    }

    #[test]
    fn lost() {
        assert_eq!(
            result_line(&word("dog"), GameStatus::Lost, 7),
            "You lost! The word was dog."
        );
    }

    #[test]
    fn abandoned() {
        assert_eq!(
            result_line(&word("cat"), GameStatus::Playing, 2),
            "Game abandoned. The word was cat."
        );
    }
}
