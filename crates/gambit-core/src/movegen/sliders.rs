//! Sliding piece (bishop, rook, queen) destinations.

use crate::address::{Axis, sliding_addresses};
use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_list::SquareList;

use super::filter::retain_legal;

/// Legal destinations of the `color` slider on `sq`, moving along each of `axes`.
///
/// Every axis is generated and filtered on its own, then concatenated; a
/// queen passes both axes.
pub(super) fn slider_destinations(
    board: &Board,
    sq: Square,
    color: Color,
    axes: &[Axis],
) -> SquareList {
    let mut destinations = SquareList::new();
    for &axis in axes {
        let mut targets = sliding_addresses(sq, board, axis);
        targets.retain(|to| !board.is_occupied_by(to, color));
        destinations.extend_from(&retain_legal(board, sq, targets, color));
    }
    destinations
}
