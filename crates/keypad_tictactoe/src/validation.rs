//! Move input validation.
//!
//! A raw token typed by the mover is checked by an ordered list of
//! named rules. The first rule that fails rejects the token; nothing
//! is mutated, so a rejected token can be re-entered any number of
//! times without changing the round.

use crate::{Cell, UsedCells};
use tracing::{debug, instrument};

/// Why a typed token is not an acceptable move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveInputError {
    /// The token is not a decimal integer.
    #[display("{:?} is not a number", _0)]
    NotANumber(String),

    /// The number is outside the keypad range 1-9.
    #[display("{} is not between 1 and 9", _0)]
    OutOfRange(String),

    /// The cell has already been played this round.
    #[display("Cell {} is already occupied", _0)]
    Occupied(Cell),
}

impl std::error::Error for MoveInputError {}

/// A single named check applied to a typed token.
pub trait ValidationRule {
    /// Short rule name, used in logs.
    fn name() -> &'static str;

    /// Checks the token against this rule.
    fn check(token: &str, used: &UsedCells) -> Result<(), MoveInputError>;
}

/// Rule: the token is a non-empty run of ASCII decimal digits.
pub struct DecimalDigits;

impl ValidationRule for DecimalDigits {
    fn name() -> &'static str {
        "decimal-digits"
    }

    fn check(token: &str, _used: &UsedCells) -> Result<(), MoveInputError> {
        if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
            Ok(())
        } else {
            Err(MoveInputError::NotANumber(token.to_string()))
        }
    }
}

/// Rule: the number addresses a keypad cell (1-9).
///
/// Numbers too large to parse are out of range, not malformed.
pub struct KeypadRange;

impl ValidationRule for KeypadRange {
    fn name() -> &'static str {
        "keypad-range"
    }

    fn check(token: &str, _used: &UsedCells) -> Result<(), MoveInputError> {
        parse_cell(token)
            .map(|_| ())
            .ok_or_else(|| MoveInputError::OutOfRange(token.to_string()))
    }
}

/// Rule: the addressed cell has not been played this round.
pub struct CellVacant;

impl ValidationRule for CellVacant {
    fn name() -> &'static str {
        "cell-vacant"
    }

    fn check(token: &str, used: &UsedCells) -> Result<(), MoveInputError> {
        match parse_cell(token) {
            Some(cell) if used.contains(&cell) => Err(MoveInputError::Occupied(cell)),
            _ => Ok(()),
        }
    }
}

fn parse_cell(token: &str) -> Option<Cell> {
    token.parse::<u8>().ok().and_then(Cell::from_key)
}

/// An ordered set of rules evaluated with early rejection.
///
/// Implemented for tuples; rules run left to right.
pub trait RuleSet {
    /// Runs every rule in order, stopping at the first failure.
    fn check_all(token: &str, used: &UsedCells) -> Result<(), MoveInputError>;
}

fn run_rule<R: ValidationRule>(token: &str, used: &UsedCells) -> Result<(), MoveInputError> {
    R::check(token, used).inspect_err(|e| {
        debug!(rule = R::name(), token, error = %e, "Token rejected");
    })
}

impl<R1, R2> RuleSet for (R1, R2)
where
    R1: ValidationRule,
    R2: ValidationRule,
{
    fn check_all(token: &str, used: &UsedCells) -> Result<(), MoveInputError> {
        run_rule::<R1>(token, used)?;
        run_rule::<R2>(token, used)
    }
}

impl<R1, R2, R3> RuleSet for (R1, R2, R3)
where
    R1: ValidationRule,
    R2: ValidationRule,
    R3: ValidationRule,
{
    fn check_all(token: &str, used: &UsedCells) -> Result<(), MoveInputError> {
        run_rule::<R1>(token, used)?;
        run_rule::<R2>(token, used)?;
        run_rule::<R3>(token, used)
    }
}

/// The rules a move token must pass, in order.
pub type MoveRules = (DecimalDigits, KeypadRange, CellVacant);

/// Validates a typed token against the cells already used this round.
///
/// Surrounding whitespace is ignored. On success the returned cell is
/// guaranteed to be unoccupied.
#[instrument(skip(used))]
pub fn validate_token(token: &str, used: &UsedCells) -> Result<Cell, MoveInputError> {
    let token = token.trim();
    MoveRules::check_all(token, used)?;
    parse_cell(token).ok_or_else(|| MoveInputError::OutOfRange(token.to_string()))
}
