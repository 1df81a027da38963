//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: Players alternate turns, starting with X.
///
/// While the round is in progress the mover matches the parity of the
/// move count; once it is over the mover is whoever played last.
pub struct AlternatingTurnInvariant;

fn expected_for(move_index: usize) -> Player {
    if move_index % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        let alternating = history
            .iter()
            .enumerate()
            .all(|(i, mov)| mov.player == expected_for(i));
        if !alternating {
            return false;
        }

        match history.last() {
            Some(last) if game.status().is_over() => game.mover() == last.player,
            _ => game.mover() == expected_for(history.len()),
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
