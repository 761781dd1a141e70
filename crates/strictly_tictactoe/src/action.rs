//! Moves as first-class values.

use super::{GameError, Mark, Position};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A mark placed at a position.
///
/// The text form is `<mark>@<position>`, e.g. `X@4` or `o@center`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it is placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.mark, self.position.index())
    }
}

impl FromStr for Move {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (mark, position) = s
            .trim()
            .split_once('@')
            .ok_or_else(|| GameError::ParseMove(s.to_string()))?;
        let mark = mark
            .parse::<Mark>()
            .map_err(|_| GameError::ParseMove(s.to_string()))?;
        Ok(Self::new(mark, position.parse()?))
    }
}
