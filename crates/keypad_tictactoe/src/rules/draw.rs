//! Draw detection logic for tic-tac-toe.

use crate::{Board, Square};
use tracing::instrument;

/// Number of moves that fill the board.
const FULL_BOARD: usize = 9;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Declares a draw iff the ninth move has been played and it did not win.
#[instrument]
pub fn is_draw(move_count: usize, won: bool) -> bool {
    move_count == FULL_BOARD && !won
}
