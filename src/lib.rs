//! Keypad Games - console tic-tac-toe on the numeric keypad layout.
//!
//! Two humans share one terminal. Cells are chosen by typing the keypad
//! digit that sits where the cell sits on the board.
//!
//! # Architecture
//!
//! - **Engine**: pure game logic in the `keypad_tictactoe` crate
//! - **IO**: [`LineReader`] abstracts blocking line input
//! - **Console**: round controller, rematch loop and session tally
//! - **Config**: optional TOML [`Settings`]
//!
//! # Example
//!
//! ```
//! use keypad_games::{Console, ScriptedReader, Settings};
//!
//! let reader = ScriptedReader::new(["5", "1", "6", "2", "4", "н"]);
//! let mut console = Console::new(reader, Vec::new(), Settings::default());
//! let summary = console.run_session().unwrap();
//! assert_eq!(*summary.x_wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod io;
mod messages;

// Crate-level exports - Configuration
pub use config::{ConfigError, Settings};

// Crate-level exports - Console
pub use console::{Console, ConsoleError, SessionSummary};

// Crate-level exports - Line input
pub use io::{BufLineReader, LineReader, ScriptedReader, StdinReader};

// Crate-level exports - Player-facing text
pub use messages::{DRAW, REMATCH_PROMPT, RETRY_PROMPT, move_prompt, rules_banner, winner};

// Crate-level exports - Game types
pub use keypad_tictactoe::{Board, Cell, GameState, GameStatus, Outcome, Player};
