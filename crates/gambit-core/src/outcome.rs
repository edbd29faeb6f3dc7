//! Terminal-state evaluation: checkmate, stalemate, or play on.

use std::fmt;

use tracing::info;

use crate::attacks::AttackDetector;
use crate::board::Board;
use crate::color::Color;
use crate::movegen::has_legal_move;

/// The state of the game for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// The side to move has at least one legal move.
    Continue,
    /// The side to move is in check with no legal move.
    Checkmate {
        /// The side that delivered mate.
        winner: Color,
    },
    /// The side to move is not in check but has no legal move.
    Stalemate {
        /// The side left without a move.
        stalemated: Color,
    },
}

impl TurnResult {
    /// Return `true` for checkmate or stalemate.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, TurnResult::Continue)
    }
}

impl fmt::Display for TurnResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnResult::Continue => f.write_str("game in progress"),
            TurnResult::Checkmate { winner } => write!(f, "checkmate, {winner} wins"),
            TurnResult::Stalemate { stalemated } => write!(f, "stalemate, {stalemated} cannot move"),
        }
    }
}

/// Evaluate the position for the side to move.
///
/// Stops at the first piece found with a legal destination.
pub fn evaluate(board: &Board) -> TurnResult {
    if has_legal_move(board) {
        return TurnResult::Continue;
    }

    let us = board.side_to_move();
    let result = if AttackDetector::new(board, us).is_own_king_attacked() {
        TurnResult::Checkmate { winner: us.flip() }
    } else {
        TurnResult::Stalemate { stalemated: us }
    };
    info!(move_count = board.move_count(), %result, "game over");
    result
}
