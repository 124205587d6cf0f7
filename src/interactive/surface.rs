//! Drawing operations the game loop relies on
//!
//! The loop only talks to this trait, so it runs the same against the real
//! terminal and against a scripted surface in tests.

use crate::core::{GallowsStage, UsedLetters, Word};
use anyhow::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageStyle {
    #[default]
    Info,
    Success,
    Error,
}

pub trait Surface {
    /// Show `len` hidden positions
    fn draw_hidden_word(&mut self, len: usize);

    /// Uncover one position of the word
    fn reveal_letter_at(&mut self, position: usize, glyph: char);

    fn draw_used_letters(&mut self, letters: &UsedLetters);

    /// Replace the status line; an empty `text` clears it
    fn draw_status(&mut self, text: &str, style: MessageStyle);

    fn draw_gallows(&mut self, stage: GallowsStage);

    /// Uncover every position at once
    fn draw_full_word(&mut self, word: &Word);

    /// Block until the player types something
    ///
    /// Returns `None` when the player asks to quit.
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read or the screen cannot be drawn.
    fn read_letter(&mut self) -> Result<Option<char>>;

    /// Block until any key is pressed
    ///
    /// # Errors
    ///
    /// Returns an error if input cannot be read or the screen cannot be drawn.
    fn wait_for_key(&mut self) -> Result<()>;
}
