//! Pawn destinations.

use crate::address::pawn_addresses;
use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_list::SquareList;

use super::filter::retain_legal;

/// Legal destinations of the `color` pawn on `sq`.
///
/// Pushes need empty squares (both of them for the double step, which is only
/// offered from the starting rank); captures need an enemy piece.
pub(super) fn pawn_destinations(board: &Board, sq: Square, color: Color) -> SquareList {
    let addresses = pawn_addresses(sq, color);

    let mut pushes = SquareList::new();
    if let Some(&one) = addresses.moves.as_slice().first()
        && !board.is_occupied(one)
    {
        pushes.push(one);
        if sq.rank() == color.pawn_rank()
            && let Some(&two) = addresses.moves.as_slice().get(1)
            && !board.is_occupied(two)
        {
            pushes.push(two);
        }
    }

    let mut captures = addresses.captures;
    captures.retain(|to| board.is_occupied_by(to, color.flip()));

    let mut destinations = retain_legal(board, sq, pushes, color);
    destinations.extend_from(&retain_legal(board, sq, captures, color));
    destinations
}
