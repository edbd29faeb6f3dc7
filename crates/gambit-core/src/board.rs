//! The board state: piece placement, cached king squares, castling rights, and move count.

use std::cell::Cell;
use std::fmt;

use tracing::warn;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank layout from the a-file to the h-file.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete game position.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    /// Mailbox: the piece on each square, indexed by [`Square::index()`].
    squares: [Option<Piece>; Square::COUNT],
    /// Cached king square per color, indexed by [`Color::index()`].
    ///
    /// Kept in step with `squares` by every mutation; repaired by a scan in
    /// [`Board::king_square`] if it is ever found stale.
    kings: [Cell<Square>; Color::COUNT],
    /// Current castling rights.
    castling: CastleRights,
    /// Number of completed moves; its parity gives the side to move.
    move_count: u32,
}

impl Board {
    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut squares = [None; Square::COUNT];
        for color in Color::ALL {
            for (file, kind) in (0u8..).zip(BACK_RANK) {
                let back = file as usize + color.back_rank() as usize * 8;
                let pawn = file as usize + color.pawn_rank() as usize * 8;
                squares[back] = Some(Piece::new(kind, color));
                squares[pawn] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }

        Board {
            squares,
            kings: [Cell::new(Square::E1), Cell::new(Square::E8)],
            castling: CastleRights::ALL,
            move_count: 0,
        }
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    /// Return the color of the piece on the given square, if any.
    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_on(sq).map(Piece::color)
    }

    /// Return `true` if the given square is occupied.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_some()
    }

    /// Return `true` if `sq` holds a piece of `color`.
    #[inline]
    pub fn is_occupied_by(&self, sq: Square, color: Color) -> bool {
        self.color_on(sq) == Some(color)
    }

    /// Iterate over every occupied square and its piece, a1 first.
    pub fn occupancy(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_on(sq).map(|piece| (sq, piece)))
    }

    /// Iterate over the squares holding pieces of `color`.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupancy().filter(move |(_, piece)| piece.color() == color)
    }

    /// Return the square of the king for the given side.
    ///
    /// The cached square is trusted only if the map agrees with it; otherwise
    /// the board is scanned and the cache refreshed before returning.
    pub fn king_square(&self, color: Color) -> Square {
        let cached = self.kings[color.index()].get();
        let king = Piece::new(PieceKind::King, color);
        if self.piece_on(cached) == Some(king) {
            return cached;
        }

        match self.occupancy().find(|&(_, piece)| piece == king) {
            Some((found, _)) => {
                warn!(%color, stale = %cached, %found, "king cache out of date, repaired by scan");
                self.kings[color.index()].set(found);
                found
            }
            None => {
                warn!(%color, "no king on the board");
                cached
            }
        }
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        Color::from_move_count(self.move_count)
    }

    /// Return the number of completed moves.
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Return the current castling rights.
    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// Place `piece` on `sq`, replacing any occupant.
    #[inline]
    pub(crate) fn put(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index()] = Some(piece);
        if piece.kind() == PieceKind::King {
            self.kings[piece.color().index()].set(sq);
        }
    }

    /// Empty `sq`, returning what stood there.
    #[inline]
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()].take()
    }

    /// Move whatever stands on `from` to `to`, capturing any occupant of `to`.
    ///
    /// Returns the captured piece. Does nothing if `from` is empty.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) -> Option<Piece> {
        let piece = self.take(from)?;
        let captured = self.take(to);
        self.put(to, piece);
        captured
    }

    /// Set the castling rights.
    #[inline]
    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    /// Advance the move counter, handing the turn to the other side.
    #[inline]
    pub(crate) fn advance_turn(&mut self) {
        self.move_count += 1;
    }

    /// Overwrite the cached king square without touching the map.
    #[cfg(test)]
    pub(crate) fn corrupt_king_cache(&self, color: Color, sq: Square) {
        self.kings[color.index()].set(sq);
    }

    /// Validate that each side has exactly one king.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind() == PieceKind::King)
                .count() as u32;
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("move_count", &self.move_count)
            .field("castling", &self.castling)
            .field("pieces", &self.occupancy().collect::<Vec<_>>())
            .finish()
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid, rank 8 at the top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank in (0u8..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0u8..8 {
                let c = Square::new(file, rank)
                    .and_then(|sq| board.piece_on(sq))
                    .map_or('.', Piece::symbol);
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

/// Builds arbitrary positions piece by piece.
///
/// ```
/// use gambit_core::{BoardBuilder, Color, Piece, Square};
///
/// let board = BoardBuilder::new()
///     .piece(Square::E1, Piece::WHITE_KING)
///     .piece(Square::E8, Piece::BLACK_KING)
///     .side_to_move(Color::Black)
///     .build()
///     .unwrap();
/// assert_eq!(board.side_to_move(), Color::Black);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BoardBuilder {
    placements: Vec<(Square, Piece)>,
    castling: Option<CastleRights>,
    move_count: u32,
}

impl BoardBuilder {
    /// Start from an empty board with no castling rights and White to move.
    pub fn new() -> BoardBuilder {
        BoardBuilder::default()
    }

    /// Place `piece` on `sq`.
    pub fn piece(mut self, sq: Square, piece: Piece) -> BoardBuilder {
        self.placements.push((sq, piece));
        self
    }

    /// Set the castling rights (default: none).
    pub fn castling(mut self, rights: CastleRights) -> BoardBuilder {
        self.castling = Some(rights);
        self
    }

    /// Set the move count directly.
    pub fn move_count(mut self, move_count: u32) -> BoardBuilder {
        self.move_count = move_count;
        self
    }

    /// Set the side to move, keeping the move count's magnitude.
    pub fn side_to_move(mut self, color: Color) -> BoardBuilder {
        if Color::from_move_count(self.move_count) != color {
            self.move_count += 1;
        }
        self
    }

    /// Validate and produce the board.
    pub fn build(self) -> Result<Board, BoardError> {
        let mut board = Board {
            squares: [None; Square::COUNT],
            kings: [Cell::new(Square::E1), Cell::new(Square::E8)],
            castling: self.castling.unwrap_or(CastleRights::NONE),
            move_count: self.move_count,
        };

        for (square, piece) in self.placements {
            if board.is_occupied(square) {
                return Err(BoardError::SquareOccupied { square });
            }
            board.put(square, piece);
        }

        board.validate()?;
        Ok(board)
    }
}
