//! Legal destination generation, one piece at a time.

pub(crate) mod castling;
mod filter;
mod king;
mod knights;
mod pawns;
mod sliders;

use tracing::debug;

use crate::address::Axis;
use crate::board::Board;
use crate::piece_kind::PieceKind;
use crate::square::Square;
use crate::square_list::SquareList;

use self::king::king_destinations;
use self::knights::knight_destinations;
use self::pawns::pawn_destinations;
use self::sliders::slider_destinations;

/// Return the legal destinations of the piece on `sq`.
///
/// The list is empty if `sq` is empty, holds a piece of the side not to
/// move, or the piece has nowhere legal to go.
pub fn legal_destinations(board: &Board, sq: Square) -> SquareList {
    let us = board.side_to_move();
    let Some(piece) = board.piece_on(sq).filter(|piece| piece.color() == us) else {
        return SquareList::new();
    };

    let destinations = match piece.kind() {
        PieceKind::Pawn => pawn_destinations(board, sq, us),
        PieceKind::Knight => knight_destinations(board, sq, us),
        PieceKind::Bishop => slider_destinations(board, sq, us, &[Axis::Diagonal]),
        PieceKind::Rook => slider_destinations(board, sq, us, &[Axis::Orthogonal]),
        PieceKind::Queen => slider_destinations(board, sq, us, &[Axis::Orthogonal, Axis::Diagonal]),
        PieceKind::King => king_destinations(board, sq, us),
    };
    debug!(%sq, piece = %piece.kind(), count = destinations.len(), "destinations");
    destinations
}

/// Return `true` if any piece of the side to move has a legal destination.
pub fn has_legal_move(board: &Board) -> bool {
    let us = board.side_to_move();
    board
        .pieces_of(us)
        .any(|(sq, _)| !legal_destinations(board, sq).is_empty())
}
