//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Player, Square};
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const WINNING_LINES: [[Cell; 3]; 8] = [
    // Rows
    [Cell::BottomLeft, Cell::BottomCenter, Cell::BottomRight],
    [Cell::MiddleLeft, Cell::Center, Cell::MiddleRight],
    [Cell::TopLeft, Cell::TopCenter, Cell::TopRight],
    // Columns
    [Cell::BottomLeft, Cell::MiddleLeft, Cell::TopLeft],
    [Cell::BottomCenter, Cell::Center, Cell::TopCenter],
    [Cell::BottomRight, Cell::MiddleRight, Cell::TopRight],
    // Diagonals
    [Cell::BottomLeft, Cell::Center, Cell::TopRight],
    [Cell::BottomRight, Cell::Center, Cell::TopLeft],
];

/// Earliest global move count at which a line can be complete.
///
/// X places its third mark on move 5.
pub const WIN_THRESHOLD: usize = 5;

/// Checks whether `player` has just won.
///
/// Returns false for move counts below [`WIN_THRESHOLD`] without looking
/// at the board; otherwise true iff some line is fully held by `player`.
#[instrument(skip(board))]
pub fn is_winner(player: Player, board: &Board, move_count: usize) -> bool {
    if move_count < WIN_THRESHOLD {
        return false;
    }
    let mark = Square::Occupied(player);
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|cell| board.get(*cell) == mark))
}

/// Checks if there is a winner anywhere on the board.
///
/// Ignores the move count; used where no mover is known.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in WINNING_LINES {
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some(player);
        }
    }
    None
}
