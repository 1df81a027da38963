//! Game rules for tic-tac-toe.
//!
//! Pure functions over the board and the move count. Rules are kept
//! apart from board storage so the round state and the invariants can
//! both use them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_THRESHOLD, WINNING_LINES, check_winner, is_winner};
