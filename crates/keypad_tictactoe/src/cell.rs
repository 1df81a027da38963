//! Keypad-addressed cells of the 3x3 board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the board, named after its place on a numeric keypad.
///
/// Board indices run row-major from the bottom-left corner, so the
/// index of a cell is always its keypad key minus one.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Cell {
    /// Key 1 (index 0)
    BottomLeft,
    /// Key 2 (index 1)
    BottomCenter,
    /// Key 3 (index 2)
    BottomRight,
    /// Key 4 (index 3)
    MiddleLeft,
    /// Key 5 (index 4)
    Center,
    /// Key 6 (index 5)
    MiddleRight,
    /// Key 7 (index 6)
    TopLeft,
    /// Key 8 (index 7)
    TopCenter,
    /// Key 9 (index 8)
    TopRight,
}

impl Cell {
    /// All 9 cells in board index order.
    pub const ALL: [Cell; 9] = [
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
    ];

    /// Converts the cell to its board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Creates a cell from a board index.
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the keypad key (1-9) that addresses this cell.
    pub fn key(self) -> u8 {
        self as u8 + 1
    }

    /// Creates a cell from a keypad key (1-9).
    #[instrument]
    pub fn from_key(key: u8) -> Option<Self> {
        match key {
            1..=9 => Self::from_index(usize::from(key - 1)),
            _ => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
