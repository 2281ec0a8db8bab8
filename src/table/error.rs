use super::action::Action;
use crate::{Chips, Position};
use thiserror::Error;

/// Everything that can go wrong at the table.
///
/// The first three are recoverable rejections: the submission is
/// refused, state is untouched, and the same actor may retry. The
/// last two are invariant violations that should be unreachable
/// under correct dealing and fold handling; they abort the session
/// rather than the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("seat {actual} acted out of turn, seat {expected} to act")]
    OutOfTurn { expected: Position, actual: Position },

    #[error("illegal action: {action}")]
    InvalidAction { action: Action },

    #[error("amount {amount} below the minimum of {minimum}")]
    BelowMinimum { amount: Chips, minimum: Chips },

    #[error("deck exhausted mid-hand")]
    DeckExhausted,

    #[error("no eligible players at showdown")]
    NoEligiblePlayers,
}
