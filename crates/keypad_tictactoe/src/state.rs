//! Per-round game state.

use super::action::{Move, MoveError};
use super::invariants::{GameInvariants, InvariantSet};
use super::rules::{is_draw, is_winner};
use super::types::{Board, GameStatus, PlaceError, Player};
use super::{Cell, Outcome};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, instrument, warn};

/// Cells already played in a round.
pub type UsedCells = BTreeSet<Cell>;

/// Complete state of one round.
///
/// Created fresh at the start of a round and mutated exactly once per
/// accepted move. Nothing carries over between rounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    mover: Player,
    move_count: usize,
    used: UsedCells,
    history: Vec<Move>,
    status: GameStatus,
}

impl GameState {
    /// Creates a round with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            mover: Player::X,
            move_count: 0,
            used: UsedCells::new(),
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose mark goes down on the next move.
    ///
    /// Once the round is over this stays on the player who made the
    /// last move.
    pub fn mover(&self) -> Player {
        self.mover
    }

    /// Number of accepted moves (0-9).
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Cells played so far.
    pub fn used(&self) -> &UsedCells {
        &self.used
    }

    /// Moves in the order they were played.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the round status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// The outcome, once the round is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(Outcome::Winner(player)),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }

    /// Places the mover's mark on `cell` and advances the round.
    ///
    /// Evaluates the win check, then the draw check. The mover only
    /// changes if the round continues.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the round has already ended
    /// - [`MoveError::CellOccupied`] if the cell already holds a mark
    #[instrument(skip(self), fields(mover = %self.mover, move_count = self.move_count))]
    pub fn apply(&mut self, cell: Cell) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        let mover = self.mover;
        self.board.place(cell, mover).map_err(|e| match e {
            PlaceError::Occupied(cell) => MoveError::CellOccupied(cell),
        })?;
        self.used.insert(cell);
        self.history.push(Move::new(mover, cell));
        self.move_count += 1;

        let won = is_winner(mover, &self.board, self.move_count);
        if won {
            self.status = GameStatus::Won(mover);
        } else if is_draw(self.move_count, won) {
            self.status = GameStatus::Draw;
        } else {
            self.mover = mover.opponent();
        }
        debug!(%cell, status = ?self.status, "Move applied");

        // Postcondition: verified in debug builds only
        #[cfg(debug_assertions)]
        self.check_invariants()?;

        Ok(self.status)
    }

    /// Checks every round invariant.
    #[instrument(skip(self))]
    pub fn check_invariants(&self) -> Result<(), MoveError> {
        GameInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Invariant violated");
            MoveError::InvariantViolation(descriptions)
        })
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_mover(&mut self, mover: Player) {
        self.mover = mover;
    }

    /// Replays a sequence of cells from a fresh round.
    #[instrument]
    pub fn replay(cells: &[Cell]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for cell in cells {
            game.apply(*cell)?;
        }
        Ok(game)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(keys: &[u8]) -> Vec<Cell> {
        keys.iter().filter_map(|k| Cell::from_key(*k)).collect()
    }

    #[test]
    fn test_new_round() {
        let game = GameState::new();
        assert_eq!(game.mover(), Player::X);
        assert_eq!(game.move_count(), 0);
        assert!(game.used().is_empty());
        assert_eq!(game.status(), &GameStatus::InProgress);
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn test_movers_alternate() {
        let mut game = GameState::new();
        let mut expected = Player::X;
        for cell in cells(&[1, 2, 3, 5, 4, 6]) {
            assert_eq!(game.mover(), expected);
            game.apply(cell).unwrap();
            expected = expected.opponent();
        }
        assert_eq!(game.move_count(), 6);
    }

    #[test]
    fn test_occupied_cell_rejected_without_change() {
        let mut game = GameState::replay(&cells(&[5])).unwrap();
        let before = game.clone();
        assert_eq!(
            game.apply(Cell::Center),
            Err(MoveError::CellOccupied(Cell::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_win_freezes_round() {
        let mut game = GameState::replay(&cells(&[5, 1, 6, 2, 4])).unwrap();
        assert_eq!(game.status(), &GameStatus::Won(Player::X));
        assert_eq!(game.mover(), Player::X);
        assert_eq!(game.apply(Cell::TopRight), Err(MoveError::GameOver));
        assert_eq!(game.move_count(), 5);
    }

    #[test]
    fn test_o_can_win() {
        let game = GameState::replay(&cells(&[1, 7, 2, 8, 6, 9])).unwrap();
        assert_eq!(game.outcome(), Some(Outcome::Winner(Player::O)));
    }

    #[test]
    fn test_draw_on_ninth_move() {
        let game = GameState::replay(&cells(&[7, 8, 9, 5, 4, 6, 2, 1, 3])).unwrap();
        assert_eq!(game.status(), &GameStatus::Draw);
        assert_eq!(game.move_count(), 9);
        assert_eq!(game.used().len(), 9);
    }
}
