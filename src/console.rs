//! Console round controller.
//!
//! Drives one or more rounds over a [`LineReader`] and a writer:
//! prompt the mover, validate, apply, render, evaluate, then either
//! swap movers or end the round and ask for a rematch.

use crate::config::Settings;
use crate::io::LineReader;
use crate::messages;
use derive_getters::Getters;
use derive_more::{Display, Error};
use keypad_tictactoe::{Cell, GameState, GameStatus, MoveError, Outcome, Player, UsedCells, validate_token};
use std::io::{self, Write};
use tracing::{debug, info, instrument};

/// Error that ends a console session.
///
/// Invalid move input is not among them; it is always answered with a
/// re-prompt.
#[derive(Debug, Display, Error)]
pub enum ConsoleError {
    /// Input ended while a move was awaited.
    #[display("Input closed while waiting for a move")]
    InputClosed,

    /// Reading or writing the console failed.
    #[display("Console I/O failed: {}", _0)]
    Io(io::Error),

    /// The engine refused a move that passed validation.
    #[display("Engine rejected move: {}", _0)]
    Engine(MoveError),
}

impl From<io::Error> for ConsoleError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<MoveError> for ConsoleError {
    fn from(err: MoveError) -> Self {
        Self::Engine(err)
    }
}

/// Tally of the rounds played in one session.
///
/// Kept in memory only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SessionSummary {
    rounds: usize,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

impl SessionSummary {
    /// Records the outcome of a finished round.
    pub fn record(&mut self, outcome: Outcome) {
        self.rounds += 1;
        match outcome.winner() {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
    }
}

impl std::fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rounds: X {} / O {} / draws {}",
            self.rounds, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Interactive console bound to a line reader and an output stream.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    settings: Settings,
}

impl<R: LineReader, W: Write> Console<R, W> {
    /// Creates a console.
    pub fn new(reader: R, writer: W, settings: Settings) -> Self {
        Self {
            reader,
            writer,
            settings,
        }
    }

    /// Releases the reader and writer.
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    /// Flushes pending output and blocks for the next line.
    fn read_token(&mut self) -> Result<Option<String>, ConsoleError> {
        self.writer.flush()?;
        Ok(self.reader.read_line()?)
    }

    /// Asks `mover` for a cell until an acceptable token arrives.
    ///
    /// Rejected tokens are re-prompted indefinitely; only the end of
    /// input or an I/O failure stops the loop.
    #[instrument(skip(self, used), fields(used_cells = used.len()))]
    pub fn prompt_move(&mut self, mover: Player, used: &UsedCells) -> Result<Cell, ConsoleError> {
        write!(self.writer, "{}", messages::move_prompt(mover))?;
        loop {
            let token = self.read_token()?.ok_or(ConsoleError::InputClosed)?;
            match validate_token(&token, used) {
                Ok(cell) => return Ok(cell),
                Err(e) => {
                    debug!(%mover, error = %e, "Move input rejected");
                    write!(self.writer, "{}", messages::RETRY_PROMPT)?;
                }
            }
        }
    }

    /// Plays one round from an empty board to a win or a draw.
    #[instrument(skip(self))]
    pub fn play_round(&mut self) -> Result<Outcome, ConsoleError> {
        let mut game = GameState::new();
        loop {
            let mover = game.mover();
            let cell = self.prompt_move(mover, game.used())?;
            let status = game.apply(cell)?;
            writeln!(self.writer, "\n{}", game.board())?;

            match status {
                GameStatus::InProgress => continue,
                GameStatus::Won(player) => {
                    writeln!(self.writer, "\n{}\n", messages::winner(player))?;
                    info!(winner = %player, moves = game.move_count(), "Round won");
                    return Ok(Outcome::Winner(player));
                }
                GameStatus::Draw => {
                    writeln!(self.writer, "{}\n", messages::DRAW)?;
                    info!("Round drawn");
                    return Ok(Outcome::Draw);
                }
            }
        }
    }

    /// Asks whether to play again.
    ///
    /// Only the configured rematch token starts another round; anything
    /// else, including the end of input, declines.
    #[instrument(skip(self))]
    pub fn ask_rematch(&mut self) -> Result<bool, ConsoleError> {
        write!(self.writer, "{}", messages::REMATCH_PROMPT)?;
        let answer = self.read_token()?;
        let again = answer.is_some_and(|a| a.trim() == self.settings.rematch_token().as_str());
        debug!(again, "Rematch answered");
        Ok(again)
    }

    /// Prints the rules, then plays rounds until a rematch is declined.
    #[instrument(skip(self))]
    pub fn run_session(&mut self) -> Result<SessionSummary, ConsoleError> {
        if *self.settings.show_rules() {
            writeln!(self.writer, "{}", messages::rules_banner())?;
        }

        let mut summary = SessionSummary::default();
        loop {
            let outcome = self.play_round()?;
            summary.record(outcome);
            if !self.ask_rematch()? {
                break;
            }
        }

        self.writer.flush()?;
        info!(%summary, "Session finished");
        Ok(summary)
    }
}
