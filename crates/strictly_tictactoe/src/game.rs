//! The game value and its move transition.

use super::rules;
use super::{Board, GameError, Mark, Move, Outcome, Position, Square, Turn, UnplayableReason};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// An immutable tic-tac-toe game: the board plus whose turn is next.
///
/// Moves return a new `Game`; the value they were played on is left as it
/// was, so earlier states stay valid for as long as the caller keeps them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Game {
    board: Board,
    turn: Turn,
}

impl Game {
    /// Creates a game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Turn::PlayerX,
        }
    }

    /// Returns whose move is next.
    pub fn next_turn(&self) -> Turn {
        self.turn
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the square at a named position.
    pub fn square(&self, pos: Position) -> Square {
        self.board.get(pos)
    }

    /// Returns the square at a raw index.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidPosition`] for indices outside 0-8.
    #[instrument(skip(self))]
    pub fn position_value(&self, index: usize) -> Result<Square, GameError> {
        self.board
            .get_index(index)
            .ok_or(GameError::InvalidPosition(index))
    }

    /// Evaluates the board.
    pub fn winner(&self) -> Outcome {
        rules::evaluate(&self.board)
    }

    /// Positions a move could currently target. Empty once the game is decided.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.winner().is_decided() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }

    /// Plays `mark` at board index `index`, returning the resulting game.
    ///
    /// Checks run in order and the first failure wins:
    /// 1. the game must still be in progress,
    /// 2. the square must exist and be empty,
    /// 3. the mark must belong to the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnplayableTurn`] with the failing check. `self`
    /// is never modified.
    #[instrument(skip(self), fields(turn = %self.turn))]
    pub fn play_turn(&self, index: usize, mark: Mark) -> Result<Game, GameError> {
        let position = self.check_turn(index, mark).map_err(|reason| {
            debug!(%reason, "Move rejected");
            GameError::UnplayableTurn(reason)
        })?;

        let mut board = self.board;
        board.set(position, Square::Occupied(mark));

        let turn = match rules::evaluate(&board) {
            Outcome::InProgress => Turn::of(mark.opponent()),
            outcome => {
                info!(%outcome, "Game decided");
                Turn::GameOver
            }
        };

        Ok(Game { board, turn })
    }

    /// Typed form of [`Game::play_turn`].
    ///
    /// # Errors
    ///
    /// Same as [`Game::play_turn`].
    pub fn place(&self, action: Move) -> Result<Game, GameError> {
        self.play_turn(action.position.index(), action.mark)
    }

    fn check_turn(&self, index: usize, mark: Mark) -> Result<Position, UnplayableReason> {
        if self.winner().is_decided() {
            return Err(UnplayableReason::GameDecided);
        }

        let position = Position::from_index(index)
            .filter(|pos| self.board.is_empty(*pos))
            .ok_or(UnplayableReason::SquareUnavailable(index))?;

        if self.turn.expected_mark() != Some(mark) {
            return Err(UnplayableReason::WrongMark {
                expected: self.turn,
                played: mark,
            });
        }

        Ok(position)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(moves: &[(usize, Mark)]) -> Game {
        moves
            .iter()
            .fold(Game::new(), |game, &(index, mark)| {
                game.play_turn(index, mark).unwrap()
            })
    }

    #[test]
    fn test_new_game_is_empty() {
        let game = Game::new();
        assert_eq!(game.next_turn(), Turn::PlayerX);
        for index in 0..9 {
            assert_eq!(game.position_value(index), Ok(Square::Empty));
        }
        assert_eq!(game.winner(), Outcome::InProgress);
    }

    #[test]
    fn test_unknown_positions_rejected() {
        let game = Game::new();
        for index in [9, 10, 42, usize::MAX] {
            assert_eq!(
                game.position_value(index),
                Err(GameError::InvalidPosition(index))
            );
        }
    }

    #[test]
    fn test_center_move_flips_turn() {
        let game = Game::new().play_turn(4, Mark::X).unwrap();
        assert_eq!(game.position_value(4), Ok(Square::Occupied(Mark::X)));
        assert_eq!(game.next_turn(), Turn::PlayerO);
    }

    #[test]
    fn test_original_value_untouched() {
        let before = Game::new();
        let after = before.play_turn(0, Mark::X).unwrap();
        assert_eq!(before, Game::new());
        assert_ne!(before, after);
    }

    #[test]
    fn test_wrong_mark_rejected() {
        let game = Game::new();
        let result = game.play_turn(4, Mark::O);
        assert_eq!(
            result,
            Err(GameError::UnplayableTurn(UnplayableReason::WrongMark {
                expected: Turn::PlayerX,
                played: Mark::O,
            }))
        );
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_occupied_square_rejected() {
        let game = Game::new().play_turn(4, Mark::X).unwrap();
        assert_eq!(
            game.play_turn(4, Mark::O),
            Err(GameError::UnplayableTurn(
                UnplayableReason::SquareUnavailable(4)
            ))
        );
    }

    #[test]
    fn test_unknown_index_is_unplayable() {
        assert_eq!(
            Game::new().play_turn(9, Mark::X),
            Err(GameError::UnplayableTurn(
                UnplayableReason::SquareUnavailable(9)
            ))
        );
    }

    #[test]
    fn test_square_checked_before_mark() {
        let game = Game::new().play_turn(4, Mark::X).unwrap();
        // Wrong mark on an occupied square reports the square.
        assert_eq!(
            game.play_turn(4, Mark::X),
            Err(GameError::UnplayableTurn(
                UnplayableReason::SquareUnavailable(4)
            ))
        );
    }

    #[test]
    fn test_decided_checked_first() {
        let game = play_all(&[(0, Mark::X), (3, Mark::O), (1, Mark::X), (4, Mark::O), (2, Mark::X)]);
        assert_eq!(
            game.play_turn(0, Mark::O),
            Err(GameError::UnplayableTurn(UnplayableReason::GameDecided))
        );
    }

    #[test]
    fn test_game_over_after_o_wins() {
        let game = play_all(&[
            (0, Mark::X),
            (3, Mark::O),
            (1, Mark::X),
            (4, Mark::O),
            (8, Mark::X),
            (5, Mark::O),
        ]);
        assert_eq!(game.winner(), Outcome::Winner(Mark::O));
        assert_eq!(game.next_turn(), Turn::GameOver);
        assert!(game.valid_moves().is_empty());
    }

    #[test]
    fn test_valid_moves_shrink() {
        let game = play_all(&[(0, Mark::X), (4, Mark::O)]);
        let moves = game.valid_moves();
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Position::TopLeft));
        assert!(!moves.contains(&Position::Center));
    }

    #[test]
    fn test_place_matches_play_turn() {
        let by_move = Game::new()
            .place(Move::new(Mark::X, Position::BottomRight))
            .unwrap();
        let by_index = Game::new().play_turn(8, Mark::X).unwrap();
        assert_eq!(by_move, by_index);
    }
}
