//! Castling rights stored as a 4-bit field within a `u8`.

use std::fmt;
use std::ops::{BitAnd, BitOr, Not};

use crate::color::Color;
use crate::square::Square;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Toward the h-file rook.
    Short,
    /// Toward the a-file rook.
    Long,
}

impl CastleSide {
    /// Both sides, short first.
    pub const ALL: [CastleSide; 2] = [CastleSide::Short, CastleSide::Long];
}

/// Castling rights encoded as a 4-bit field: bit 0 = W short, 1 = W long, 2 = B short, 3 = B long.
///
/// Rights are only ever removed during a game.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

/// Rights lost when a piece leaves or lands on a square, indexed by square.
const REVOKED_BY_SQUARE: [CastleRights; 64] = {
    let mut table = [CastleRights::NONE; 64];
    table[Square::E1.index()] = CastleRights::WHITE_BOTH;
    table[Square::A1.index()] = CastleRights::WHITE_LONG;
    table[Square::H1.index()] = CastleRights::WHITE_SHORT;
    table[Square::E8.index()] = CastleRights::BLACK_BOTH;
    table[Square::A8.index()] = CastleRights::BLACK_LONG;
    table[Square::H8.index()] = CastleRights::BLACK_SHORT;
    table
};

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);
    /// All castling rights.
    pub const ALL: CastleRights = CastleRights(0b1111);

    /// White short castling.
    pub const WHITE_SHORT: CastleRights = CastleRights(0b0001);
    /// White long castling.
    pub const WHITE_LONG: CastleRights = CastleRights(0b0010);
    /// Black short castling.
    pub const BLACK_SHORT: CastleRights = CastleRights(0b0100);
    /// Black long castling.
    pub const BLACK_LONG: CastleRights = CastleRights(0b1000);

    /// Both white castling rights.
    pub const WHITE_BOTH: CastleRights = CastleRights(0b0011);
    /// Both black castling rights.
    pub const BLACK_BOTH: CastleRights = CastleRights(0b1100);

    /// Return `true` if no castling rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Return new rights with all bits from `other` added.
    #[inline]
    pub const fn insert(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    /// Return new rights with all bits from `other` removed.
    #[inline]
    pub const fn remove(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    /// Check whether a specific color and side may still castle.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        let bit = Self::flag(color, side).0;
        (self.0 & bit) != 0
    }

    /// Remove all castling rights for the given color.
    #[inline]
    pub const fn remove_color(self, color: Color) -> CastleRights {
        match color {
            Color::White => self.remove(Self::WHITE_BOTH),
            Color::Black => self.remove(Self::BLACK_BOTH),
        }
    }

    /// Remove the rights tied to `sq`: a king home square or a rook corner.
    #[inline]
    pub const fn revoke_square(self, sq: Square) -> CastleRights {
        self.remove(REVOKED_BY_SQUARE[sq.index()])
    }

    /// Return the single-bit flag for a color and side.
    #[inline]
    pub const fn flag(color: Color, side: CastleSide) -> CastleRights {
        match (color, side) {
            (Color::White, CastleSide::Short) => Self::WHITE_SHORT,
            (Color::White, CastleSide::Long) => Self::WHITE_LONG,
            (Color::Black, CastleSide::Short) => Self::BLACK_SHORT,
            (Color::Black, CastleSide::Long) => Self::BLACK_LONG,
        }
    }
}

impl BitAnd for CastleRights {
    type Output = CastleRights;
    #[inline]
    fn bitand(self, rhs: CastleRights) -> CastleRights {
        CastleRights(self.0 & rhs.0)
    }
}

impl BitOr for CastleRights {
    type Output = CastleRights;
    #[inline]
    fn bitor(self, rhs: CastleRights) -> CastleRights {
        CastleRights(self.0 | rhs.0)
    }
}

impl Not for CastleRights {
    type Output = CastleRights;
    #[inline]
    fn not(self) -> CastleRights {
        CastleRights(!self.0 & 0b1111)
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        let letters = [
            (Self::WHITE_SHORT, 'K'),
            (Self::WHITE_LONG, 'Q'),
            (Self::BLACK_SHORT, 'k'),
            (Self::BLACK_LONG, 'q'),
        ];
        for (flag, c) in letters {
            if self.contains(flag) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({})", self)
    }
}
