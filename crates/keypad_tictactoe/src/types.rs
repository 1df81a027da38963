//! Core domain types for keypad tic-tac-toe.

use super::cell::Cell;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    ///
    /// This is the only way the mover changes: X, O, X, O, ...
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Mark written to the board for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character drawn for this square; a space when empty.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(player) => player.symbol(),
        }
    }
}

/// Error returned when a mark cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PlaceError {
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Cell),
}

impl std::error::Error for PlaceError {}

/// 3x3 board stored row-major from the bottom-left cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given cell.
    pub fn get(&self, cell: Cell) -> Square {
        self.squares[cell.index()]
    }

    /// Places a player's mark on an empty cell.
    ///
    /// A non-empty cell is never overwritten.
    #[instrument(skip(self))]
    pub fn place(&mut self, cell: Cell, player: Player) -> Result<(), PlaceError> {
        if !self.is_empty(cell) {
            return Err(PlaceError::Occupied(cell));
        }
        self.squares[cell.index()] = Square::Occupied(player);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn force(&mut self, cell: Cell, square: Square) {
        self.squares[cell.index()] = square;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Square::Empty
    }

    /// Returns all squares in index order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Cells currently holding a mark.
    pub fn occupied_cells(&self) -> Vec<Cell> {
        Cell::ALL
            .into_iter()
            .filter(|cell| !self.is_empty(*cell))
            .collect()
    }

    /// Cells still open for play.
    pub fn empty_cells(&self) -> Vec<Cell> {
        Cell::ALL
            .into_iter()
            .filter(|cell| self.is_empty(*cell))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&super::render::render(self))
    }
}

/// Current status of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Round is ongoing.
    InProgress,
    /// Round ended in a win.
    Won(Player),
    /// Round ended in a draw.
    Draw,
}

impl GameStatus {
    /// True once the round has been won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}
