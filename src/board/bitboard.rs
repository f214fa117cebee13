//! Bitboard implementation for fast occupancy and connectivity checks

use super::{Pos, TOTAL_CELLS};

const NOT_FILE_A: u64 = 0xfefe_fefe_fefe_fefe;
const NOT_FILE_H: u64 = 0x7f7f_7f7f_7f7f_7f7f;

/// Bitboard representation of an 8x8 board.
/// Bit `y * 8 + x` is square (x, y); the whole board fits in one u64.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard(u64);

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self(0)
    }

    /// Set a bit at position
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.0 |= 1u64 << pos.to_index();
    }

    /// Clear a bit at position
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.0 &= !(1u64 << pos.to_index());
    }

    /// Check if bit is set at position
    #[inline]
    pub fn get(self, pos: Pos) -> bool {
        (self.0 >> pos.to_index()) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Check if empty
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The set squares plus every square a king step away from one.
    #[inline]
    pub fn dilate(self) -> Self {
        let b = self.0;
        let horizontal = b | ((b << 1) & NOT_FILE_A) | ((b >> 1) & NOT_FILE_H);
        Self(horizontal | (horizontal << 8) | (horizontal >> 8))
    }

    /// True when the set squares form a single king-adjacency group.
    /// Empty and single-square boards are trivially connected.
    pub fn is_connected(self) -> bool {
        if self.0.count_ones() <= 1 {
            return true;
        }

        // Flood fill from the lowest set square
        let mut group = self.0 & self.0.wrapping_neg();
        loop {
            let grown = Self(group).dilate().0 & self.0;
            if grown == group {
                break;
            }
            group = grown;
        }
        group == self.0
    }

    /// Iterate over set bit positions in ascending square order
    pub fn iter_ones(self) -> BitboardIter {
        BitboardIter { bits: self.0 }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;
        debug_assert!(idx < TOTAL_CELLS);
        Some(Pos::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.bits.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for BitboardIter {}
