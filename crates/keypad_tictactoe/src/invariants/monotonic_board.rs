//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Verified by replaying the move history onto an empty board: no move
/// may land on an occupied cell, and the result must equal the board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            if reconstructed.place(mov.cell, mov.player).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
