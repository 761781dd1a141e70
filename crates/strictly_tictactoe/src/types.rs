//! Core domain types for tic-tac-toe.

use super::{GameError, Position};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A player's mark.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Mark {
    /// First player's mark.
    #[display("X")]
    X,
    /// Second player's mark.
    #[display("O")]
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl FromStr for Mark {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Mark::X),
            "O" | "o" => Ok(Mark::O),
            other => Err(GameError::ParseMove(other.to_string())),
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[display(" ")]
    Empty,
    /// Square holding a mark.
    #[display("{_0}")]
    Occupied(Mark),
}

/// 3x3 board, squares in row-major order (0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at a position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Gets the square at a raw index, `None` outside 0-8.
    pub fn get_index(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at a position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.index()] = square;
    }

    /// Checks if the square at a position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Whose move is next, or that the game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Turn {
    /// X to move.
    #[display("X to move")]
    PlayerX,
    /// O to move.
    #[display("O to move")]
    PlayerO,
    /// No further moves are accepted.
    #[display("game over")]
    GameOver,
}

impl Turn {
    /// Turn belonging to the player holding `mark`.
    pub fn of(mark: Mark) -> Self {
        match mark {
            Mark::X => Turn::PlayerX,
            Mark::O => Turn::PlayerO,
        }
    }

    /// Mark the current player must play, `None` once the game is over.
    pub fn expected_mark(self) -> Option<Mark> {
        match self {
            Turn::PlayerX => Some(Mark::X),
            Turn::PlayerO => Some(Mark::O),
            Turn::GameOver => None,
        }
    }
}

/// Result of evaluating a board.
///
/// The `Display` form is the status line of the rendered game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Outcome {
    /// No winning line and at least one empty square.
    #[display("Game in progress.")]
    InProgress,
    /// The mark occupies a full winning line.
    #[display("Winner: {_0}!")]
    Winner(Mark),
    /// Full board, no winning line.
    #[display("Tie Game.")]
    Tie,
}

impl Outcome {
    /// Returns true once the game has a winner or is tied.
    pub fn is_decided(self) -> bool {
        self != Outcome::InProgress
    }

    /// Returns the winning mark if there is one.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(mark),
            Outcome::InProgress | Outcome::Tie => None,
        }
    }
}
