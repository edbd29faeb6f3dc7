//! Move application.

use tracing::debug;

use crate::board::Board;
use crate::movegen::castling::CastlePath;
use crate::piece_kind::PieceKind;
use crate::square::Square;

impl Board {
    /// Apply the move `from` → `to` in place.
    ///
    /// The move is not validated: callers draw it from the legal destinations
    /// of `from`. An empty source square leaves the board untouched. A king
    /// stepping from its home square onto a castled square also brings its
    /// rook across.
    pub(crate) fn apply_move(&mut self, from: Square, to: Square) {
        let Some(piece) = self.piece_on(from) else {
            debug!(%from, %to, "no piece on source square, move ignored");
            return;
        };
        let mover = piece.color();
        let captured = self.relocate(from, to);

        // Moving from or onto a king or rook home square revokes its rights,
        // which also covers a rook captured in its corner.
        let mut rights = self.castling().revoke_square(from).revoke_square(to);

        if piece.kind() == PieceKind::King
            && let Some(path) = CastlePath::for_king_move(mover, from, to)
        {
            self.relocate(path.rook_from, path.rook_to);
            rights = rights.remove_color(mover);
            debug!(color = %mover, side = ?path.side, "castled");
        }

        self.set_castling(rights);
        self.advance_turn();
        debug!(
            %from,
            %to,
            piece = %piece.kind(),
            captured = ?captured.map(|p| p.kind()),
            move_count = self.move_count(),
            "move applied"
        );
    }

    /// Return the board after `from` → `to`. Copy-make: `self` is not modified.
    pub fn make_move(&self, from: Square, to: Square) -> Board {
        let mut next = self.clone();
        next.apply_move(from, to);
        next
    }
}
