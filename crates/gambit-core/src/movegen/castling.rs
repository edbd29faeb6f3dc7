//! Castling availability and geometry.

use crate::attacks::AttackDetector;
use crate::board::Board;
use crate::castle_rights::CastleSide;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_list::SquareList;

/// Fixed squares involved in one castle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CastlePath {
    pub(crate) side: CastleSide,
    pub(crate) king_from: Square,
    pub(crate) king_to: Square,
    pub(crate) rook_from: Square,
    pub(crate) rook_to: Square,
    /// Squares strictly between king and rook; all must be empty.
    pub(crate) between: &'static [Square],
    /// The king's start, crossed and landing squares; all must be safe.
    pub(crate) king_walk: [Square; 3],
}

impl CastlePath {
    /// Geometry of castling toward `side` for `color`.
    pub(crate) const fn of(color: Color, side: CastleSide) -> CastlePath {
        match (color, side) {
            (Color::White, CastleSide::Short) => CastlePath {
                side,
                king_from: Square::E1,
                king_to: Square::G1,
                rook_from: Square::H1,
                rook_to: Square::F1,
                between: &[Square::F1, Square::G1],
                king_walk: [Square::E1, Square::F1, Square::G1],
            },
            (Color::White, CastleSide::Long) => CastlePath {
                side,
                king_from: Square::E1,
                king_to: Square::C1,
                rook_from: Square::A1,
                rook_to: Square::D1,
                between: &[Square::D1, Square::C1, Square::B1],
                king_walk: [Square::E1, Square::D1, Square::C1],
            },
            (Color::Black, CastleSide::Short) => CastlePath {
                side,
                king_from: Square::E8,
                king_to: Square::G8,
                rook_from: Square::H8,
                rook_to: Square::F8,
                between: &[Square::F8, Square::G8],
                king_walk: [Square::E8, Square::F8, Square::G8],
            },
            (Color::Black, CastleSide::Long) => CastlePath {
                side,
                king_from: Square::E8,
                king_to: Square::C8,
                rook_from: Square::A8,
                rook_to: Square::D8,
                between: &[Square::D8, Square::C8, Square::B8],
                king_walk: [Square::E8, Square::D8, Square::C8],
            },
        }
    }

    /// Recognize a king move from `from` to `to` as a castle.
    pub(crate) fn for_king_move(color: Color, from: Square, to: Square) -> Option<CastlePath> {
        CastleSide::ALL
            .into_iter()
            .map(|side| CastlePath::of(color, side))
            .find(|path| path.king_from == from && path.king_to == to)
    }
}

/// Castled king squares currently available to the `color` king on `king_sq`.
///
/// A castle needs its right, the king and rook on their home squares, empty
/// squares between them, and a king walk that no enemy piece attacks.
pub(crate) fn castling_destinations(board: &Board, king_sq: Square, color: Color) -> SquareList {
    let rights = board.castling();
    let rook = Piece::new(PieceKind::Rook, color);
    let detector = AttackDetector::new(board, color);

    CastleSide::ALL
        .into_iter()
        .filter(|&side| rights.has(color, side))
        .map(|side| CastlePath::of(color, side))
        .filter(|path| {
            path.king_from == king_sq
                && board.piece_on(path.rook_from) == Some(rook)
                && path.between.iter().all(|&sq| !board.is_occupied(sq))
                && path.king_walk.iter().all(|&sq| detector.is_square_safe(sq))
        })
        .map(|path| path.king_to)
        .collect()
}
