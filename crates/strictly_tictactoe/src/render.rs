//! Text rendering of boards and games.
//!
//! The layout is fixed. Every board row is ` a | b | c ` with a space on
//! both sides, so rows end in a trailing space:
//!
//! ```text
//! " X | O |   "
//! "---+---+---"
//! "   | X |   "
//! "---+---+---"
//! " O |   | X "
//! ""
//! "Winner: X!"
//! ```
//!
//! Each quoted line is followed by `\n`.

use super::{Board, Game};
use std::fmt;
use std::io;
use tracing::instrument;

const DIVIDER: &str = "---+---+---";

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares().chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "{DIVIDER}")?;
            }
            writeln!(f, " {} | {} | {} ", cells[0], cells[1], cells[2])?;
        }
        Ok(())
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}\n", self.board(), self.winner())
    }
}

impl Game {
    /// Writes the rendered game to `out` and hands the game back unchanged.
    ///
    /// # Errors
    ///
    /// Propagates write failures from `out`.
    #[instrument(skip(self, out))]
    pub fn draw<W: io::Write>(self, out: &mut W) -> io::Result<Game> {
        write!(out, "{self}")?;
        Ok(self)
    }
}
