//! Text rendering of the board in keypad orientation.

use crate::{Board, Cell};
use tracing::instrument;

/// Renders one row of three symbols as `|a|b|c|`.
fn render_row(symbols: [char; 3]) -> String {
    let mut line = String::from("|");
    for symbol in symbols {
        line.push(symbol);
        line.push('|');
    }
    line
}

/// Symbols for board row `row` (0 = bottom) produced by `symbol`.
fn row_symbols(row: usize, symbol: impl Fn(Cell) -> char) -> [char; 3] {
    let mut symbols = [' '; 3];
    for (col, slot) in symbols.iter_mut().enumerate() {
        if let Some(cell) = Cell::from_index(row * 3 + col) {
            *slot = symbol(cell);
        }
    }
    symbols
}

/// Renders the board as a multi-line grid.
///
/// Rows are printed top-to-bottom (index rows 2, 1, 0) so the layout
/// matches the keypad. Each row ends with a newline.
///
/// ```
/// use keypad_tictactoe::{Board, Cell, Player, render};
///
/// let mut board = Board::new();
/// board.place(Cell::TopLeft, Player::X).unwrap();
/// board.place(Cell::BottomRight, Player::O).unwrap();
/// assert_eq!(render(&board), "|X| | |\n| | | |\n| | |O|\n");
/// ```
#[instrument(skip(board))]
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    for row in (0..3).rev() {
        out.push_str(&render_row(row_symbols(row, |cell| {
            board.get(cell).symbol()
        })));
        out.push('\n');
    }
    out
}

/// Renders the keypad legend (`|7|8|9|` over `|1|2|3|`).
pub fn render_keypad() -> String {
    let mut out = String::new();
    for row in (0..3).rev() {
        out.push_str(&render_row(row_symbols(row, |cell| {
            char::from(b'0' + cell.key())
        })));
        out.push('\n');
    }
    out
}
