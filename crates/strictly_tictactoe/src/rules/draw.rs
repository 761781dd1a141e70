//! Tie detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winning line.
pub fn is_tie(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Position};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Mark::X));
        assert!(!is_full(&board));
        assert!(!is_tie(&board));
    }

    #[test]
    fn test_tie_detection() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        board.set(Position::TopLeft, Square::Occupied(Mark::X));
        board.set(Position::TopCenter, Square::Occupied(Mark::O));
        board.set(Position::TopRight, Square::Occupied(Mark::X));
        board.set(Position::MiddleLeft, Square::Occupied(Mark::O));
        board.set(Position::Center, Square::Occupied(Mark::X));
        board.set(Position::MiddleRight, Square::Occupied(Mark::X));
        board.set(Position::BottomLeft, Square::Occupied(Mark::O));
        board.set(Position::BottomCenter, Square::Occupied(Mark::X));
        board.set(Position::BottomRight, Square::Occupied(Mark::O));

        assert!(is_tie(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_tie() {
        let mut board = Board::new();
        for pos in Position::ALL {
            board.set(pos, Square::Occupied(Mark::O));
        }
        assert!(is_full(&board));
        assert!(!is_tie(&board));
    }
}
