//! Piece geometry: the squares each piece kind can reach, ignoring king safety.
//!
//! Pawn, knight and king geometry is symmetric between "can move to" and
//! "is attacked from", so the attack detector reuses these functions in the
//! reverse direction.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;
use crate::square_list::SquareList;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (-1, 2),
    (1, -2),
    (-1, -2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, -1),
    (-1, -1),
    (-1, 1),
    (1, 1),
];

/// The two line families a sliding piece moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Ranks and files (rook, queen).
    Orthogonal,
    /// Diagonals (bishop, queen).
    Diagonal,
}

impl Axis {
    /// The four unit steps of this axis.
    pub const fn directions(self) -> [(i8, i8); 4] {
        match self {
            Axis::Orthogonal => [(1, 0), (-1, 0), (0, 1), (0, -1)],
            Axis::Diagonal => [(1, 1), (1, -1), (-1, 1), (-1, -1)],
        }
    }
}

/// Forward moves and diagonal captures of a pawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PawnAddresses {
    /// One step forward, then two steps if the pawn is on its starting rank.
    pub moves: SquareList,
    /// Both forward diagonals, regardless of occupancy.
    pub captures: SquareList,
}

/// Squares a pawn of `color` on `sq` could advance to or capture on.
///
/// Read backwards, `captures` lists the squares from which an enemy pawn
/// attacks `sq` when `color` is the defending side.
pub fn pawn_addresses(sq: Square, color: Color) -> PawnAddresses {
    let forward = color.forward();

    let mut moves = SquareList::new();
    if let Some(one) = sq.offset(0, forward) {
        moves.push(one);
        if sq.rank() == color.pawn_rank()
            && let Some(two) = sq.offset(0, 2 * forward)
        {
            moves.push(two);
        }
    }

    let captures = [1, -1]
        .into_iter()
        .filter_map(|df| sq.offset(df, forward))
        .collect();

    PawnAddresses { moves, captures }
}

/// Squares a knight on `sq` jumps to.
pub fn knight_addresses(sq: Square) -> SquareList {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(|(df, dr)| sq.offset(df, dr))
        .collect()
}

/// Squares adjacent to `sq`. Castling destinations are not included.
pub fn king_addresses(sq: Square) -> SquareList {
    KING_OFFSETS
        .into_iter()
        .filter_map(|(df, dr)| sq.offset(df, dr))
        .collect()
}

/// Walk from a square in one direction, stopping after the first occupied square.
///
/// The starting square itself is never yielded.
#[derive(Clone)]
pub struct Ray<'a> {
    board: &'a Board,
    current: Square,
    step: (i8, i8),
    blocked: bool,
}

impl<'a> Ray<'a> {
    /// Start a ray from `origin` along `step`.
    pub fn new(board: &'a Board, origin: Square, step: (i8, i8)) -> Ray<'a> {
        Ray {
            board,
            current: origin,
            step,
            blocked: false,
        }
    }
}

impl Iterator for Ray<'_> {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.blocked {
            return None;
        }
        let next = self.current.offset(self.step.0, self.step.1)?;
        self.current = next;
        self.blocked = self.board.is_occupied(next);
        Some(next)
    }
}

/// Squares a slider on `sq` reaches along `axis`.
///
/// Each direction runs to the first occupied square inclusive (it may be a
/// capture), or to the board edge. The source square is excluded.
pub fn sliding_addresses(sq: Square, board: &Board, axis: Axis) -> SquareList {
    axis.directions()
        .into_iter()
        .flat_map(|step| Ray::new(board, sq, step))
        .collect()
}

/// The first occupied square in each direction of `axis`, seen from `sq`.
pub fn nearest_blockers(sq: Square, board: &Board, axis: Axis) -> impl Iterator<Item = Square> + '_ {
    axis.directions()
        .into_iter()
        .filter_map(move |step| Ray::new(board, sq, step).last())
        .filter(move |&end| board.is_occupied(end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;
    use crate::piece::Piece;

    fn sorted(list: SquareList) -> Vec<Square> {
        let mut v = list.as_slice().to_vec();
        v.sort();
        v
    }

    fn kings_only() -> Board {
        BoardBuilder::new()
            .piece(Square::A1, Piece::WHITE_KING)
            .piece(Square::H8, Piece::BLACK_KING)
            .build()
            .unwrap()
    }

    #[test]
    fn white_pawn_on_start_rank() {
        let addr = pawn_addresses(Square::E2, Color::White);
        assert_eq!(addr.moves.as_slice(), &[Square::E3, Square::E4]);
        assert_eq!(sorted(addr.captures), vec![Square::D3, Square::F3]);
    }

    #[test]
    fn black_pawn_on_start_rank() {
        let addr = pawn_addresses(Square::D7, Color::Black);
        assert_eq!(addr.moves.as_slice(), &[Square::D6, Square::D5]);
        assert_eq!(sorted(addr.captures), vec![Square::C6, Square::E6]);
    }

    #[test]
    fn pawn_off_start_rank_single_step() {
        let addr = pawn_addresses(Square::E3, Color::White);
        assert_eq!(addr.moves.as_slice(), &[Square::E4]);
    }

    #[test]
    fn pawn_on_edge_file_has_one_capture() {
        let addr = pawn_addresses(Square::A2, Color::White);
        assert_eq!(addr.captures.as_slice(), &[Square::B3]);
    }

    #[test]
    fn pawn_on_last_rank_has_nothing() {
        let addr = pawn_addresses(Square::C8, Color::White);
        assert!(addr.moves.is_empty());
        assert!(addr.captures.is_empty());
    }

    #[test]
    fn knight_counts() {
        assert_eq!(knight_addresses(Square::E4).len(), 8);
        assert_eq!(knight_addresses(Square::A1).len(), 2);
        assert_eq!(knight_addresses(Square::B1).len(), 3);
        assert_eq!(sorted(knight_addresses(Square::G1)), vec![Square::E2, Square::F3, Square::H3]);
    }

    #[test]
    fn king_counts() {
        assert_eq!(king_addresses(Square::E4).len(), 8);
        assert_eq!(king_addresses(Square::A1).len(), 3);
        assert_eq!(king_addresses(Square::E1).len(), 5);
    }

    #[test]
    fn rook_on_open_board_reaches_fourteen() {
        let board = BoardBuilder::new()
            .piece(Square::A1, Piece::WHITE_KING)
            .piece(Square::H8, Piece::BLACK_KING)
            .build()
            .unwrap();
        let list = sliding_addresses(Square::D4, &board, Axis::Orthogonal);
        assert_eq!(list.len(), 14);
        assert!(!list.contains(Square::D4));
    }

    #[test]
    fn bishop_ray_stops_at_blockers_inclusive() {
        let board = kings_only();
        // The a1 king and h8 king both sit on the long diagonal through d4.
        let list = sliding_addresses(Square::D4, &board, Axis::Diagonal);
        assert!(list.contains(Square::A1));
        assert!(list.contains(Square::H8));
        assert_eq!(list.len(), 13);

        let blocked = BoardBuilder::new()
            .piece(Square::A1, Piece::WHITE_KING)
            .piece(Square::H8, Piece::BLACK_KING)
            .piece(Square::F6, Piece::BLACK_PAWN)
            .build()
            .unwrap();
        let list = sliding_addresses(Square::D4, &blocked, Axis::Diagonal);
        assert!(list.contains(Square::E5));
        assert!(list.contains(Square::F6));
        assert!(!list.contains(Square::G7));
        assert!(!list.contains(Square::H8));
    }

    #[test]
    fn sliding_from_start_position_rook_is_boxed_in() {
        let board = Board::starting_position();
        let list = sliding_addresses(Square::A1, &board, Axis::Orthogonal);
        assert_eq!(sorted(list), vec![Square::B1, Square::A2]);
    }

    #[test]
    fn ray_stops_after_first_occupied() {
        let board = Board::starting_position();
        let squares: Vec<_> = Ray::new(&board, Square::E4, (0, 1)).collect();
        assert_eq!(squares, vec![Square::E5, Square::E6, Square::E7]);
    }

    #[test]
    fn nearest_blockers_only_reports_occupied_ends() {
        let board = kings_only();
        let found: Vec<_> = nearest_blockers(Square::D4, &board, Axis::Diagonal).collect();
        assert_eq!(found.len(), 2);
        assert!(found.contains(&Square::A1));
        assert!(found.contains(&Square::H8));
        assert_eq!(nearest_blockers(Square::D4, &board, Axis::Orthogonal).count(), 0);
    }
}
