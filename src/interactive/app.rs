//! Game loop and terminal lifecycle

use super::rendering::{Board, MIN_HEIGHT, MIN_WIDTH, ui};
use super::surface::{MessageStyle, Surface};
use crate::core::{Game, GameStatus, GallowsStage, GuessOutcome, UsedLetters, Word};
use crate::error::HangmanError;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, info, warn};

/// Play one game to the end on the given surface
///
/// Returns `None` if the player quit before the game was decided.
///
/// # Errors
///
/// Returns an error if the surface fails to read input or draw.
pub fn run_game<S: Surface + ?Sized>(
    game: &mut Game,
    surface: &mut S,
) -> Result<Option<GameStatus>> {
    surface.draw_hidden_word(game.word().len());
    surface.draw_gallows(game.stage());

    while !game.status().is_finished() {
        let Some(input) = surface.read_letter()? else {
            info!("game interrupted");
            return Ok(None);
        };

        surface.draw_status("", MessageStyle::Info);

        match game.guess(input) {
            GuessOutcome::Rejected(rejection) => {
                debug!(?rejection, "guess rejected");
                surface.draw_status(&rejection.to_string(), MessageStyle::Error);
            }
            GuessOutcome::Hit { letter, positions } => {
                debug!(%letter, hits = positions.len(), "hit");
                surface.draw_used_letters(game.used_letters());
                for position in positions {
                    surface.reveal_letter_at(position, game.word().char_at(position));
                }
                if game.status() == GameStatus::Won {
                    surface.draw_status("You have won!", MessageStyle::Success);
                }
            }
            GuessOutcome::Miss { letter, stage } => {
                debug!(%letter, remaining = game.remaining_attempts(), "miss");
                surface.draw_used_letters(game.used_letters());
                surface.draw_gallows(stage);
                if game.status() == GameStatus::Lost {
                    surface.draw_status("You have lost!", MessageStyle::Error);
                    surface.draw_full_word(game.word());
                }
            }
            GuessOutcome::Finished => break,
        }
    }

    info!(
        status = ?game.status(),
        guesses = game.used_letters().len(),
        "game finished"
    );

    surface.wait_for_key()?;
    Ok(Some(game.status()))
}

/// Raw mode plus alternate screen, undone on drop
///
/// Dropping restores the terminal on every path out of [`run_tui`], including
/// errors and panics that unwind.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

/// Fail unless the terminal is at least the board's minimum size
///
/// # Errors
///
/// Returns `TerminalTooSmall` below the minimum and `DisplayInit` if the
/// size cannot be queried.
pub fn check_size<B: Backend>(terminal: &Terminal<B>) -> Result<(), HangmanError> {
    let size = terminal.size().map_err(HangmanError::DisplayInit)?;
    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        return Err(HangmanError::TerminalTooSmall {
            width: size.width,
            height: size.height,
            min_width: MIN_WIDTH,
            min_height: MIN_HEIGHT,
        });
    }
    Ok(())
}

/// What a key press means to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Quit,
    Letter(char),
}

/// Translate a key press into game input
///
/// Ctrl-C and Esc quit. Keys held with Ctrl or Alt are ignored, so only plain
/// (or shifted) characters become guesses.
#[must_use]
pub fn key_input(key: KeyEvent) -> Option<KeyInput> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let chord = key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyInput::Quit)
        }
        KeyCode::Esc => Some(KeyInput::Quit),
        _ if chord => None,
        KeyCode::Char(c) => Some(KeyInput::Letter(c)),
        KeyCode::Enter => Some(KeyInput::Letter('\n')),
        KeyCode::Tab => Some(KeyInput::Letter('\t')),
        _ => None,
    }
}

impl TerminalGuard {
    /// Take over the terminal
    ///
    /// # Errors
    ///
    /// Returns `DisplayInit` if raw mode, the alternate screen or the backend
    /// cannot be set up. Anything already switched on is switched off again.
    pub fn acquire() -> Result<Self, HangmanError> {
        enable_raw_mode().map_err(HangmanError::DisplayInit)?;

        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(HangmanError::DisplayInit(err));
        }

        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(HangmanError::DisplayInit(err))
            }
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            warn!(%err, "failed to disable raw mode");
        }
        if let Err(err) = execute!(self.terminal.backend_mut(), LeaveAlternateScreen) {
            warn!(%err, "failed to leave alternate screen");
        }
        if let Err(err) = self.terminal.show_cursor() {
            warn!(%err, "failed to show cursor");
        }
    }
}

/// [`Surface`] backed by a ratatui terminal and crossterm key events
pub struct TerminalSurface<'t, B: Backend> {
    terminal: &'t mut Terminal<B>,
    board: Board,
}

impl<'t, B: Backend> TerminalSurface<'t, B> {
    pub fn new(terminal: &'t mut Terminal<B>) -> Self {
        Self {
            terminal,
            board: Board::new(),
        }
    }

    fn redraw(&mut self) -> Result<()> {
        let board = &self.board;
        self.terminal
            .draw(|f| ui(f, board))
            .context("failed to draw board")?;
        Ok(())
    }
}

impl<B: Backend> Surface for TerminalSurface<'_, B> {
    fn draw_hidden_word(&mut self, len: usize) {
        self.board.hide_word(len);
    }

    fn reveal_letter_at(&mut self, position: usize, glyph: char) {
        self.board.reveal(position, glyph);
    }

    fn draw_used_letters(&mut self, letters: &UsedLetters) {
        self.board.set_used(letters);
    }

    fn draw_status(&mut self, text: &str, style: MessageStyle) {
        self.board.set_status(text, style);
    }

    fn draw_gallows(&mut self, stage: GallowsStage) {
        self.board.set_stage(stage);
    }

    fn draw_full_word(&mut self, word: &Word) {
        self.board.reveal_all(word);
    }

    fn read_letter(&mut self) -> Result<Option<char>> {
        loop {
            self.redraw()?;

            if let Event::Key(key) = event::read().context("failed to read input")? {
                match key_input(key) {
                    Some(KeyInput::Quit) => return Ok(None),
                    Some(KeyInput::Letter(c)) => return Ok(Some(c)),
                    None => {}
                }
            }
        }
    }

    fn wait_for_key(&mut self) -> Result<()> {
        self.board.finish();
        loop {
            self.redraw()?;

            if let Event::Key(key) = event::read().context("failed to read input")?
                && key.kind == KeyEventKind::Press
            {
                return Ok(());
            }
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, is too small, or fails
/// during the game. The terminal is restored before this returns.
///
/// The game is only created once the terminal has passed the size check.
pub fn run_tui(word: Word) -> Result<(Game, Option<GameStatus>)> {
    let mut guard = TerminalGuard::acquire()?;
    check_size(&guard.terminal)?;

    let mut game = Game::new(word);
    let mut surface = TerminalSurface::new(&mut guard.terminal);
    let status = run_game(&mut game, &mut surface)?;
    Ok((game, status))
}
