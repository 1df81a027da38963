//! History consistency invariant: every counter agrees with the board.

use super::Invariant;
use crate::{GameState, Square};

/// Invariant: move count, history, used cells and filled squares agree.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let filled = game
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();
        let used_match = game
            .history()
            .iter()
            .all(|mov| game.used().contains(&mov.cell));

        game.move_count() == game.history().len()
            && game.move_count() == game.used().len()
            && game.move_count() == filled
            && used_match
    }

    fn description() -> &'static str {
        "Move count, history, used cells and board agree"
    }
}
