//! King destinations.

use crate::address::king_addresses;
use crate::attacks::AttackDetector;
use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_list::SquareList;

use super::castling::castling_destinations;

/// Legal destinations of the `color` king on `sq`, castling included.
///
/// Adjacent squares are tested directly for safety instead of by simulation.
/// The king is lifted off the board for the test so that a slider checking
/// along a line still covers the square behind the king.
pub(super) fn king_destinations(board: &Board, sq: Square, color: Color) -> SquareList {
    let mut lifted = board.clone();
    lifted.take(sq);
    let detector = AttackDetector::new(&lifted, color);

    let mut destinations = king_addresses(sq);
    destinations.retain(|to| !board.is_occupied_by(to, color) && detector.is_square_safe(to));
    destinations.extend_from(&castling_destinations(board, sq, color));
    destinations
}
