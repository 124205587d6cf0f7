//! TUI rendering with ratatui
//!
//! The board is a plain view model updated through [`Surface`]-style calls and
//! redrawn in full every frame.

use super::surface::MessageStyle;
use crate::core::{GALLOWS_HEIGHT, GallowsStage, UsedLetters, Word};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

/// Smallest terminal the board fits in
pub const MIN_WIDTH: u16 = 32;
pub const MIN_HEIGHT: u16 = 14;

const PROMPT: &str = "Enter a letter: ";

/// Everything currently shown on screen
#[derive(Debug, Clone)]
pub struct Board {
    cells: Vec<Option<char>>,
    used: String,
    status: String,
    status_style: MessageStyle,
    stage: GallowsStage,
    finished: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: Vec::new(),
            used: String::new(),
            status: String::new(),
            status_style: MessageStyle::Info,
            stage: GallowsStage::EMPTY,
            finished: false,
        }
    }
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hide_word(&mut self, len: usize) {
        self.cells = vec![None; len];
    }

    pub fn reveal(&mut self, position: usize, glyph: char) {
        if let Some(cell) = self.cells.get_mut(position) {
            *cell = Some(glyph);
        }
    }

    pub fn reveal_all(&mut self, word: &Word) {
        self.cells = word.text().chars().map(Some).collect();
    }

    pub fn set_used(&mut self, letters: &UsedLetters) {
        self.used = letters.to_string();
    }

    pub fn set_status(&mut self, text: &str, style: MessageStyle) {
        self.status = text.to_string();
        self.status_style = style;
    }

    pub fn set_stage(&mut self, stage: GallowsStage) {
        self.stage = stage;
    }

    /// Switch the prompt to "press any key"
    pub fn finish(&mut self) {
        self.finished = true;
    }

    /// Word row as shown: `c _ t`
    #[must_use]
    pub fn word_line(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.unwrap_or('_').to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, board: &Board) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                     // Header
            Constraint::Length(1),                     // Word
            Constraint::Length(1),                     // Input
            Constraint::Length(2),                     // Used letters
            Constraint::Length(1),                     // Status
            Constraint::Length(GALLOWS_HEIGHT as u16), // Gallows
            Constraint::Min(0),
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_word(f, board, chunks[1]);
    render_input(f, board, chunks[2]);
    render_used(f, board, chunks[3]);
    render_status(f, board, chunks[4]);
    render_gallows(f, board, chunks[5]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("-- HANGMAN --")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

fn render_word(f: &mut Frame, board: &Board, area: Rect) {
    let word = Paragraph::new(board.word_line())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    f.render_widget(word, area);
}

fn render_input(f: &mut Frame, board: &Board, area: Rect) {
    if board.finished {
        let hint = Paragraph::new("Press any key to exit")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(hint, area);
        return;
    }

    f.render_widget(Paragraph::new(PROMPT), area);
    let x = area.x.saturating_add(PROMPT.len() as u16);
    if x < area.right() {
        f.set_cursor_position((x, area.y));
    }
}

fn render_used(f: &mut Frame, board: &Board, area: Rect) {
    let used = Paragraph::new(board.used.as_str())
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: false });
    f.render_widget(used, area);
}

fn render_status(f: &mut Frame, board: &Board, area: Rect) {
    let style = match board.status_style {
        MessageStyle::Info => Style::default().fg(Color::White),
        MessageStyle::Success => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        MessageStyle::Error => Style::default().fg(Color::Red),
    };
    f.render_widget(Paragraph::new(board.status.as_str()).style(style), area);
}

fn render_gallows(f: &mut Frame, board: &Board, area: Rect) {
    let color = if board.stage.is_complete() {
        Color::Red
    } else {
        Color::White
    };

    let lines: Vec<Line> = board
        .stage
        .lines()
        .into_iter()
        .map(|row| Line::from(Span::styled(row, Style::default().fg(color))))
        .collect();

    f.render_widget(Paragraph::new(lines), area);
}
