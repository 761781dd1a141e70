//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here tracks turns or move
//! counts; the outcome is always recomputed from the squares.

pub mod draw;
pub mod win;

pub use draw::{is_full, is_tie};
pub use win::{LINES, check_winner, has_line};

use super::{Board, Outcome};
use tracing::instrument;

/// Evaluates a board: X win, then O win, then tie, else in progress.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_winner(board) {
        Outcome::Winner(mark)
    } else if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position, Square};

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_win_checked_before_fullness() {
        let mut board = Board::new();
        // X X X / O O X / X O O
        #[rustfmt::skip]
        let marks = [
            Mark::X, Mark::X, Mark::X,
            Mark::O, Mark::O, Mark::X,
            Mark::X, Mark::O, Mark::O,
        ];
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Square::Occupied(mark));
        }
        assert!(is_full(&board));
        assert_eq!(evaluate(&board), Outcome::Winner(Mark::X));
    }
}
