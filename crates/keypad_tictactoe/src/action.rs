//! Moves, move errors, and round outcomes.
//!
//! Moves are domain events, not side effects. They are recorded in the
//! round history and replayed by the invariants.

use super::{Cell, Player};
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell receiving the mark.
    pub cell: Cell,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, cell: Cell) -> Self {
        Self { player, cell }
    }
}

/// Error that can occur when applying a move to a round.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Cell),

    /// The round is already over.
    #[display("Round is already over")]
    GameOver,

    /// An invariant was violated after the move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the round.
    Winner(Player),
    /// Round ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }
}
