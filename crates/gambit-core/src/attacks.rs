//! Attack detection by reverse geometry.
//!
//! To ask whether a square is attacked, the piece geometry is cast outward
//! from the square itself and the landing squares are checked for an enemy
//! piece of the matching kind.

use crate::address::{Axis, king_addresses, knight_addresses, nearest_blockers, pawn_addresses};
use crate::board::Board;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Answers attack queries against one board on behalf of a defending side.
#[derive(Clone, Copy)]
pub struct AttackDetector<'a> {
    board: &'a Board,
    defender: Color,
}

impl<'a> AttackDetector<'a> {
    /// Create a detector for `defender`; attackers are the other color.
    #[inline]
    pub fn new(board: &'a Board, defender: Color) -> AttackDetector<'a> {
        AttackDetector { board, defender }
    }

    /// The side whose pieces are being attacked.
    #[inline]
    pub fn defender(&self) -> Color {
        self.defender
    }

    /// Return `true` if `sq` holds an attacking piece of `kind`.
    #[inline]
    fn holds_enemy(&self, sq: Square, kind: PieceKind) -> bool {
        self.board
            .piece_on(sq)
            .is_some_and(|piece| piece.is(kind, self.defender.flip()))
    }

    /// Return `true` if an enemy pawn or knight attacks `sq`.
    pub fn attacked_by_non_sliding(&self, sq: Square) -> bool {
        let pawn_sources = pawn_addresses(sq, self.defender).captures;
        if pawn_sources.iter().any(|&from| self.holds_enemy(from, PieceKind::Pawn)) {
            return true;
        }

        knight_addresses(sq)
            .iter()
            .any(|&from| self.holds_enemy(from, PieceKind::Knight))
    }

    /// Return `true` if an enemy rook, bishop or queen attacks `sq`.
    ///
    /// Only the nearest occupied square in each direction can attack.
    pub fn attacked_by_sliding(&self, sq: Square) -> bool {
        let orthogonal = nearest_blockers(sq, self.board, Axis::Orthogonal)
            .any(|from| self.holds_enemy(from, PieceKind::Rook) || self.holds_enemy(from, PieceKind::Queen));
        if orthogonal {
            return true;
        }

        nearest_blockers(sq, self.board, Axis::Diagonal)
            .any(|from| self.holds_enemy(from, PieceKind::Bishop) || self.holds_enemy(from, PieceKind::Queen))
    }

    /// Return `true` if the enemy king is adjacent to `sq`.
    pub fn attacked_by_king(&self, sq: Square) -> bool {
        king_addresses(sq)
            .iter()
            .any(|&from| self.holds_enemy(from, PieceKind::King))
    }

    /// Return `true` if no enemy piece of any kind attacks `sq`.
    ///
    /// This is the safety test for king destinations and castling transit squares.
    pub fn is_square_safe(&self, sq: Square) -> bool {
        !self.attacked_by_king(sq) && !self.attacked_by_non_sliding(sq) && !self.attacked_by_sliding(sq)
    }

    /// Return `true` if the defender's king is in check.
    ///
    /// The enemy king is not considered: two kings never stand adjacent in a
    /// position reached through legal moves.
    pub fn is_own_king_attacked(&self) -> bool {
        let king_sq = self.board.king_square(self.defender);
        self.attacked_by_non_sliding(king_sq) || self.attacked_by_sliding(king_sq)
    }
}
