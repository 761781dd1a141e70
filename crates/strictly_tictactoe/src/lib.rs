//! Strictly tic-tac-toe - pure game logic for a 3x3 board.
//!
//! A [`Game`] is an immutable value. Moves never modify the game they are
//! played on; [`Game::play_turn`] hands back a new value or a [`GameError`],
//! and the caller threads the returned game forward.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Game, Mark, Outcome, Turn};
//!
//! # fn main() -> Result<(), strictly_tictactoe::GameError> {
//! let game = Game::new()
//!     .play_turn(0, Mark::X)?
//!     .play_turn(3, Mark::O)?
//!     .play_turn(1, Mark::X)?
//!     .play_turn(4, Mark::O)?
//!     .play_turn(2, Mark::X)?;
//!
//! assert_eq!(game.winner(), Outcome::Winner(Mark::X));
//! assert_eq!(game.next_turn(), Turn::GameOver);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod game;
mod position;
mod render;
mod types;

pub mod rules;

pub use action::Move;
pub use error::{GameError, UnplayableReason};
pub use game::Game;
pub use position::Position;
pub use types::{Board, Mark, Outcome, Square, Turn};
