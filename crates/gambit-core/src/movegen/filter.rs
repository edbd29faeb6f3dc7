//! Check-legality filtering by simulated moves.

use tracing::trace;

use crate::attacks::AttackDetector;
use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_list::SquareList;

/// Drop every candidate destination that would leave `color`'s king attacked.
///
/// Each candidate is tried on its own scratch copy of the board (copy-make),
/// so no probe can leak into `board` or into the next probe.
pub(crate) fn retain_legal(
    board: &Board,
    from: Square,
    mut candidates: SquareList,
    color: Color,
) -> SquareList {
    candidates.retain(|to| {
        let mut probe = board.clone();
        probe.relocate(from, to);
        let exposed = AttackDetector::new(&probe, color).is_own_king_attacked();
        if exposed {
            trace!(%from, %to, "rejected: exposes own king");
        }
        !exposed
    });
    candidates
}
