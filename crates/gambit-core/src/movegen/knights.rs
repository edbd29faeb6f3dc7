//! Knight destinations.

use crate::address::knight_addresses;
use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_list::SquareList;

use super::filter::retain_legal;

/// Legal destinations of the `color` knight on `sq`.
pub(super) fn knight_destinations(board: &Board, sq: Square, color: Color) -> SquareList {
    let mut targets = knight_addresses(sq);
    targets.retain(|to| !board.is_occupied_by(to, color));
    retain_legal(board, sq, targets, color)
}
