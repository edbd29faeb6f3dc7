//! Stack-allocated list of squares.

use std::fmt;

use crate::square::Square;

/// Stack-allocated buffer for destination squares.
///
/// Capacity 32 covers the largest single-piece set (a queen reaches at most 27).
#[derive(Clone, Copy)]
pub struct SquareList {
    squares: [Square; 32],
    len: u8,
}

impl SquareList {
    /// Maximum number of squares the list holds.
    pub const CAPACITY: usize = 32;

    /// Create an empty list.
    pub const fn new() -> SquareList {
        SquareList {
            squares: [Square::A1; 32],
            len: 0,
        }
    }

    /// Push a square onto the list.
    #[inline]
    pub fn push(&mut self, sq: Square) {
        debug_assert!((self.len as usize) < Self::CAPACITY);
        self.squares[self.len as usize] = sq;
        self.len += 1;
    }

    /// Append every square of `other`.
    pub fn extend_from(&mut self, other: &SquareList) {
        for &sq in other {
            self.push(sq);
        }
    }

    /// Keep only the squares for which `keep` returns `true`, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(Square) -> bool) {
        let mut kept = 0;
        for i in 0..self.len as usize {
            let sq = self.squares[i];
            if keep(sq) {
                self.squares[kept] = sq;
                kept += 1;
            }
        }
        self.len = kept as u8;
    }

    /// Remove every square.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Return the number of squares in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return `true` if `sq` is in the list.
    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }

    /// Return a slice of the squares.
    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len as usize]
    }

    /// Iterate over the squares in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.as_slice().iter()
    }
}

impl Default for SquareList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for SquareList {
    fn eq(&self, other: &SquareList) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for SquareList {}

impl fmt::Debug for SquareList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for SquareList {
    type Output = Square;
    #[inline]
    fn index(&self, index: usize) -> &Square {
        &self.as_slice()[index]
    }
}

impl FromIterator<Square> for SquareList {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> SquareList {
        let mut list = SquareList::new();
        for sq in iter {
            list.push(sq);
        }
        list
    }
}

impl<'a> IntoIterator for &'a SquareList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

#[cfg(test)]
mod tests {
    use super::SquareList;
    use crate::square::Square;

    #[test]
    fn push_and_contains() {
        let mut list = SquareList::new();
        assert!(list.is_empty());
        list.push(Square::E4);
        list.push(Square::D5);
        assert_eq!(list.len(), 2);
        assert!(list.contains(Square::D5));
        assert!(!list.contains(Square::A1));
        assert_eq!(list[0], Square::E4);
    }

    #[test]
    fn retain_preserves_order() {
        let mut list: SquareList = [Square::A1, Square::B2, Square::C3, Square::D4]
            .into_iter()
            .collect();
        list.retain(|sq| sq.file() % 2 == 0);
        assert_eq!(list.as_slice(), &[Square::A1, Square::C3]);
    }

    #[test]
    fn equality_ignores_spare_capacity() {
        let mut a = SquareList::new();
        a.push(Square::H8);
        a.clear();
        a.push(Square::G7);
        let b: SquareList = std::iter::once(Square::G7).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn extend_from_appends() {
        let mut a: SquareList = std::iter::once(Square::A1).collect();
        let b: SquareList = [Square::B1, Square::C1].into_iter().collect();
        a.extend_from(&b);
        assert_eq!(a.as_slice(), &[Square::A1, Square::B1, Square::C1]);
    }
}
