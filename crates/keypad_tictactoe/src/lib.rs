//! Pure tic-tac-toe game logic on a numeric keypad board.
//!
//! Cells are addressed 1-9 the way a numeric keypad lays them out:
//!
//! ```text
//! |7|8|9|
//! |4|5|6|
//! |1|2|3|
//! ```
//!
//! # Architecture
//!
//! - **Types**: [`Player`], [`Square`], [`Cell`], [`Board`]
//! - **State**: [`GameState`] owns one round from empty board to outcome
//! - **Validation**: ordered [`ValidationRule`]s turn a raw token into a [`Cell`]
//! - **Rules**: win and draw evaluators over the 8 [`WINNING_LINES`]
//! - **Render**: text grid in keypad orientation
//! - **Invariants**: properties re-checked after every move in debug builds
//!
//! # Example
//!
//! ```
//! use keypad_tictactoe::{GameState, GameStatus, Player, validate_token};
//!
//! let mut game = GameState::new();
//! for token in ["5", "1", "6", "2", "4"] {
//!     let cell = validate_token(token, game.used()).unwrap();
//!     game.apply(cell).unwrap();
//! }
//! assert_eq!(game.status(), &GameStatus::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod cell;
mod invariants;
mod render;
mod rules;
mod state;
mod types;
mod validation;

pub use action::{Move, MoveError, Outcome};
pub use cell::Cell;
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};
pub use render::{render, render_keypad};
pub use rules::{WIN_THRESHOLD, WINNING_LINES, check_winner, is_draw, is_full, is_winner};
pub use state::{GameState, UsedCells};
pub use types::{Board, GameStatus, PlaceError, Player, Square};
pub use validation::{
    CellVacant, DecimalDigits, KeypadRange, MoveInputError, MoveRules, RuleSet, ValidationRule,
    validate_token,
};
