//! The game facade: the operations a front end drives.

use tracing::{debug, warn};

use crate::attacks::AttackDetector;
use crate::board::Board;
use crate::color::Color;
use crate::error::MoveError;
use crate::movegen::legal_destinations;
use crate::outcome::{TurnResult, evaluate};
use crate::square::Square;
use crate::square_list::SquareList;

/// A game in progress: the board plus the last evaluated result.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    outcome: TurnResult,
}

impl Game {
    /// Start a game from the standard starting position.
    pub fn new() -> Game {
        Game::from_board(Board::starting_position())
    }

    /// Start a game from an arbitrary position.
    ///
    /// The position is evaluated immediately, so a game can begin already over.
    pub fn from_board(board: Board) -> Game {
        let outcome = evaluate(&board);
        Game { board, outcome }
    }

    /// Read-only view of the current position.
    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    /// Number of moves applied so far.
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.board.move_count()
    }

    /// The result of the most recent evaluation.
    #[inline]
    pub fn outcome(&self) -> TurnResult {
        self.outcome
    }

    /// Return `true` if the side to move is in check.
    pub fn is_in_check(&self) -> bool {
        AttackDetector::new(&self.board, self.side_to_move()).is_own_king_attacked()
    }

    /// Legal destinations of the piece on `sq`.
    ///
    /// Empty for an empty square or a piece of the side not to move.
    pub fn select_square(&self, sq: Square) -> SquareList {
        legal_destinations(&self.board, sq)
    }

    /// Apply `from` → `to` without validation.
    ///
    /// The move should come from [`select_square`](Game::select_square). Call
    /// [`evaluate_state`](Game::evaluate_state) afterwards to refresh the outcome.
    pub fn apply_move(&mut self, from: Square, to: Square) {
        self.board.apply_move(from, to);
    }

    /// Evaluate the position for the side to move and remember the result.
    pub fn evaluate_state(&mut self) -> TurnResult {
        self.outcome = evaluate(&self.board);
        self.outcome
    }

    /// Validate, apply and evaluate one move.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game has ended,
    /// [`MoveError::NoPieceToMove`] if `from` holds no piece of the side to
    /// move, and [`MoveError::IllegalMove`] if `to` is not a legal destination.
    pub fn play(&mut self, from: Square, to: Square) -> Result<TurnResult, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let side = self.side_to_move();
        if !self.board.is_occupied_by(from, side) {
            warn!(%from, %side, "no piece of the side to move");
            return Err(MoveError::NoPieceToMove { side, square: from });
        }
        if !self.select_square(from).contains(to) {
            warn!(%from, %to, "illegal move rejected");
            return Err(MoveError::IllegalMove { from, to });
        }

        self.apply_move(from, to);
        let result = self.evaluate_state();
        debug!(%from, %to, ?result, "played");
        Ok(result)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Game;
    use crate::board::BoardBuilder;
    use crate::color::Color;
    use crate::error::MoveError;
    use crate::outcome::TurnResult;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn new_game_is_white_to_move() {
        let game = Game::new();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.outcome(), TurnResult::Continue);
        assert!(!game.is_in_check());
    }

    #[test]
    fn play_alternates_sides() {
        let mut game = Game::new();
        assert_eq!(game.play(Square::E2, Square::E4), Ok(TurnResult::Continue));
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.play(Square::E7, Square::E5), Ok(TurnResult::Continue));
        assert_eq!(game.move_count(), 2);
    }

    #[test]
    fn play_rejects_wrong_side() {
        let mut game = Game::new();
        assert_eq!(
            game.play(Square::E7, Square::E5),
            Err(MoveError::NoPieceToMove { side: Color::White, square: Square::E7 })
        );
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn play_rejects_illegal_destination() {
        let mut game = Game::new();
        assert_eq!(
            game.play(Square::E2, Square::E5),
            Err(MoveError::IllegalMove { from: Square::E2, to: Square::E5 })
        );
    }

    #[test]
    fn play_refuses_after_mate() {
        let mut game = Game::new();
        for (from, to) in [
            (Square::F2, Square::F3),
            (Square::E7, Square::E5),
            (Square::G2, Square::G4),
        ] {
            game.play(from, to).unwrap();
        }
        let result = game.play(Square::D8, Square::H4).unwrap();
        assert_eq!(result, TurnResult::Checkmate { winner: Color::Black });
        assert!(game.is_in_check());
        assert_eq!(game.play(Square::A2, Square::A3), Err(MoveError::GameOver));
    }

    #[test]
    fn from_board_evaluates_immediately() {
        let board = BoardBuilder::new()
            .piece(Square::A8, Piece::BLACK_KING)
            .piece(Square::C7, Piece::WHITE_QUEEN)
            .piece(Square::C6, Piece::WHITE_KING)
            .side_to_move(Color::Black)
            .build()
            .unwrap();
        let game = Game::from_board(board);
        assert_eq!(game.outcome(), TurnResult::Stalemate { stalemated: Color::Black });
    }

    #[test]
    fn apply_then_evaluate() {
        let mut game = Game::new();
        let dests = game.select_square(Square::B1);
        assert!(dests.contains(Square::C3));
        game.apply_move(Square::B1, Square::C3);
        assert_eq!(game.board().piece_on(Square::C3), Some(Piece::WHITE_KNIGHT));
        assert_eq!(game.evaluate_state(), TurnResult::Continue);
    }
}
