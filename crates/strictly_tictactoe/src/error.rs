//! Error types for the game engine.

use super::{Mark, Turn};
use derive_more::{Display, Error};

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum UnplayableReason {
    /// The board already has a winner or is full.
    #[display("the game is already decided")]
    GameDecided,

    /// The target square is occupied or does not exist.
    #[display("square {_0} is not available")]
    SquareUnavailable(usize),

    /// The mark does not belong to the player whose turn it is.
    #[display("{played} cannot move, {expected}")]
    WrongMark {
        /// Turn indicator at the time of the move.
        expected: Turn,
        /// Mark that was submitted.
        played: Mark,
    },
}

/// Error returned by fallible game operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// A position index outside 0-8 was requested.
    #[display("Unknown position {_0} (must be 0-8)")]
    InvalidPosition(#[error(not(source))] usize),

    /// A move failed a legality check. The game is unchanged.
    #[display("Unplayable turn: {_0}")]
    UnplayableTurn(#[error(not(source))] UnplayableReason),

    /// Text could not be read as a position.
    #[display("Cannot parse position {_0:?}")]
    ParsePosition(#[error(not(source))] String),

    /// Text could not be read as a move.
    #[display("Cannot parse move {_0:?} (expected <mark>@<position>, e.g. X@4)")]
    ParseMove(#[error(not(source))] String),
}
