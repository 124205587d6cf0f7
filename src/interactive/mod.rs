//! Interactive TUI interface

mod app;
mod rendering;
mod surface;

pub use app::{
    KeyInput, TerminalGuard, TerminalSurface, check_size, key_input, run_game, run_tui,
};
pub use rendering::{Board, MIN_HEIGHT, MIN_WIDTH, ui};
pub use surface::{MessageStyle, Surface};
