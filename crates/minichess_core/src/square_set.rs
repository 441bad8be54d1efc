//! Compact set of board squares.
//!
//! Squares are packed on an 8-wide grid (bit = y * 8 + x), so one `u64`
//! covers any board up to 8x8 regardless of its actual width.

use std::ops::{BitAnd, BitOr, BitOrAssign};

use crate::types::Square;

/// Maximum width and height a `SquareSet` can address.
pub const MAX_DIMENSION: u8 = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SquareSet(pub u64);

impl SquareSet {
    pub const EMPTY: SquareSet = SquareSet(0);

    #[inline(always)]
    const fn bit(sq: Square) -> u64 {
        1u64 << (sq.y as u32 * MAX_DIMENSION as u32 + sq.x as u32)
    }

    #[inline(always)]
    pub const fn from_square(sq: Square) -> Self {
        SquareSet(Self::bit(sq))
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & Self::bit(sq)) != 0
    }

    #[inline(always)]
    pub fn insert(&mut self, sq: Square) {
        self.0 |= Self::bit(sq);
    }

    #[inline(always)]
    pub fn remove(&mut self, sq: Square) {
        self.0 &= !Self::bit(sq);
    }

    #[inline(always)]
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate squares in ascending (rank, file) order.
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter(self.0)
    }
}

impl FromIterator<Square> for SquareSet {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

impl Extend<Square> for SquareSet {
    fn extend<I: IntoIterator<Item = Square>>(&mut self, iter: I) {
        for sq in iter {
            self.insert(sq);
        }
    }
}

impl BitAnd for SquareSet {
    type Output = Self;
    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 & rhs.0)
    }
}

impl BitOr for SquareSet {
    type Output = Self;
    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        SquareSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for SquareSet {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

pub struct SquareSetIter(u64);

impl Iterator for SquareSetIter {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as u8;
        self.0 &= self.0 - 1;
        Some(Square::new(idx % MAX_DIMENSION, idx / MAX_DIMENSION))
    }
}

#[cfg(test)]
#[path = "square_set_tests.rs"]
mod square_set_tests;
