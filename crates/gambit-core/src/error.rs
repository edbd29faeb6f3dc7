//! Error types for position construction and validated move play.

use crate::color::Color;
use crate::square::Square;

/// Errors from building a [`Board`](crate::board::Board) by hand.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: u32,
    },
    /// Two pieces were placed on the same square.
    #[error("square {square} is already occupied")]
    SquareOccupied {
        /// The contested square.
        square: Square,
    },
}

/// Errors from [`Game::play`](crate::game::Game::play).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The game already ended in checkmate or stalemate.
    #[error("the game is over")]
    GameOver,
    /// The source square holds no piece of the side to move.
    #[error("no {side} piece on {square}")]
    NoPieceToMove {
        /// The side to move.
        side: Color,
        /// The selected square.
        square: Square,
    },
    /// The destination is not among the legal destinations of the piece.
    #[error("{from} to {to} is not a legal move")]
    IllegalMove {
        /// Source square.
        from: Square,
        /// Requested destination.
        to: Square,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, MoveError};
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn board_error_display() {
        let err = BoardError::InvalidKingCount { color: Color::Black, count: 0 };
        assert_eq!(format!("{err}"), "expected 1 king for Black, found 0");

        let err = BoardError::SquareOccupied { square: Square::D4 };
        assert_eq!(format!("{err}"), "square d4 is already occupied");
    }

    #[test]
    fn move_error_display() {
        let err = MoveError::IllegalMove { from: Square::E2, to: Square::E5 };
        assert_eq!(format!("{err}"), "e2 to e5 is not a legal move");

        let err = MoveError::NoPieceToMove { side: Color::White, square: Square::E7 };
        assert_eq!(format!("{err}"), "no White piece on e7");
    }
}
