//! Gallows figure
//!
//! ```text
//!  ________
//!  |      |
//!  |      O
//!  |     /|\
//!  |     / \
//!  |
//!  A
//! AAA
//! ```
//!
//! The figure is built from one part per wrong guess. A stage is nothing more
//! than the number of parts drawn, derived from the remaining attempts.

use super::game::MAX_ATTEMPTS;

/// Rows of the rendered figure
pub const GALLOWS_HEIGHT: usize = 8;

/// Columns of the rendered figure
pub const GALLOWS_WIDTH: usize = 10;

/// One piece of the figure: its top-left cell and the rows it occupies
struct Part {
    row: usize,
    col: usize,
    rows: &'static [&'static str],
}

/// Parts in the order they appear, one per wrong guess
const PARTS: [Part; 7] = [
    // hill
    Part { row: 6, col: 0, rows: &[" A ", "AAA"] },
    // post
    Part { row: 1, col: 1, rows: &["|", "|", "|", "|", "|"] },
    // beam
    Part { row: 0, col: 1, rows: &["________"] },
    // rope
    Part { row: 1, col: 8, rows: &["|"] },
    // head
    Part { row: 2, col: 8, rows: &["O"] },
    // body
    Part { row: 3, col: 7, rows: &["/|\\"] },
    // legs
    Part { row: 4, col: 7, rows: &["/ \\"] },
];

const _: () = assert!(PARTS.len() == MAX_ATTEMPTS as usize);

/// How much of the gallows is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GallowsStage(u8);

impl GallowsStage {
    /// Nothing drawn yet
    pub const EMPTY: Self = Self(0);

    /// Fully hanged figure
    pub const COMPLETE: Self = Self(MAX_ATTEMPTS);

    /// Stage shown when `remaining` attempts are left
    ///
    /// Values above the starting budget map to the empty stage.
    #[must_use]
    pub const fn from_remaining(remaining: u8) -> Self {
        Self(MAX_ATTEMPTS.saturating_sub(remaining))
    }

    /// Number of figure parts drawn (0-7)
    #[inline]
    #[must_use]
    pub const fn parts(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_complete(self) -> bool {
        self.0 >= MAX_ATTEMPTS
    }

    /// Render the stage as text rows, trailing blanks trimmed
    ///
    /// Always returns [`GALLOWS_HEIGHT`] rows so the layout never shifts.
    #[must_use]
    pub fn lines(self) -> Vec<String> {
        let mut canvas = [[' '; GALLOWS_WIDTH]; GALLOWS_HEIGHT];

        for part in &PARTS[..usize::from(self.0)] {
            for (dy, text) in part.rows.iter().enumerate() {
                for (dx, ch) in text.chars().enumerate() {
                    canvas[part.row + dy][part.col + dx] = ch;
                }
            }
        }

        canvas
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_attempts_is_empty_stage() {
        let stage = GallowsStage::from_remaining(MAX_ATTEMPTS);
        assert_eq!(stage, GallowsStage::EMPTY);
        assert!(stage.lines().iter().all(String::is_empty));
    }

    #[test]
    fn zero_attempts_is_complete() {
        let stage = GallowsStage::from_remaining(0);
        assert_eq!(stage, GallowsStage::COMPLETE);
        assert!(stage.is_complete());
    }

    #[test]
    fn overflowing_budget_saturates() {
        assert_eq!(GallowsStage::from_remaining(200), GallowsStage::EMPTY);
    }

    #[test]
    fn first_wrong_guess_draws_hill() {
        let lines = GallowsStage::from_remaining(6).lines();
        assert_eq!(lines[6], " A");
        assert_eq!(lines[7], "AAA");
        assert!(lines[..6].iter().all(String::is_empty));
    }

    #[test]
    fn stages_only_add_parts() {
        for remaining in 1..=MAX_ATTEMPTS {
            let before = GallowsStage::from_remaining(remaining).lines();
            let after = GallowsStage::from_remaining(remaining - 1).lines();
            for (old, new) in before.iter().zip(&after) {
                for (a, b) in old.chars().zip(new.chars()) {
                    if a != ' ' {
                        assert_eq!(a, b);
                    }
                }
            }
            assert_ne!(before, after);
        }
    }

    #[test]
    fn complete_figure() {
        let lines = GallowsStage::COMPLETE.lines();
        assert_eq!(
            lines,
            vec![
                " ________",
                " |      |",
                " |      O",
                " |     /|\\",
                " |     / \\",
                " |",
                " A",
                "AAA",
            ]
        );
    }

    #[test]
    fn always_same_height() {
        for remaining in 0..=MAX_ATTEMPTS {
            assert_eq!(
                GallowsStage::from_remaining(remaining).lines().len(),
                GALLOWS_HEIGHT
            );
        }
    }
}
