//! Terminal output formatting
//!
//! Plain text printed once the TUI has handed the terminal back.

pub mod display;

pub use display::{print_result, result_line};
