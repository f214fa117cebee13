//! Static tables and weights for Lines of Action evaluation

use crate::board::{Pos, BOARD_SIZE, MAX_PIECES_PER_SIDE};

/// Score constants
pub struct Score;

impl Score {
    /// A connected side. Divided by the distance from the search root.
    pub const WIN: i32 = 1_000_000;

    // Sub-score weights for the composite evaluation
    pub const CONCENTRATION: f64 = 30.0;
    pub const MOBILITY: f64 = 25.0;
    pub const QUADS: f64 = 20.0;
    pub const CENTRALIZATION: f64 = 10.0;
    pub const UNIFORMITY: f64 = 7.0;
    pub const CONNECTEDNESS: f64 = 7.0;
    /// Bonus for being the side to move
    pub const TEMPO: f64 = 1.0;
    /// Spreads the weighted sum over a wider integer range
    pub const SCALE: f64 = 10.0;
}

/// Positional value of a piece on each square, indexed `[x][y]`.
/// Symmetric under every reflection of the board.
pub const CELL_VALUES: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [-80, -25, -20, -20, -20, -20, -25, -80],
    [-25, 10, 10, 10, 10, 10, 10, -25],
    [-20, 10, 25, 25, 25, 25, 10, -20],
    [-20, 10, 25, 50, 50, 25, 10, -20],
    [-20, 10, 25, 50, 50, 25, 10, -20],
    [-20, 10, 25, 25, 25, 25, 10, -20],
    [-25, 10, 10, 10, 10, 10, 10, -25],
    [-80, -25, -20, -20, -20, -20, -25, -80],
];

/// Largest entry of [`CELL_VALUES`], used to normalise centralization
pub const MAX_CELL_VALUE: i32 = 50;

#[inline]
pub fn cell_value(pos: Pos) -> i32 {
    CELL_VALUES[pos.x as usize][pos.y as usize]
}

/// Piece totals of the optimal square packings: a centre square, then rings
/// of 8 and 16 around it.
const RING_TOTALS: [usize; 4] = [0, 1, 9, 25];

/// Minimum possible sum of king distances from each piece to the centre
/// of mass, for every piece count from 1 to [`MAX_PIECES_PER_SIDE`].
///
/// The tightest packing fills concentric square rings: one piece at distance
/// 0, then eight at distance 1, then sixteen at distance 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    sums: [u32; MAX_PIECES_PER_SIDE + 1],
}

impl DistanceTable {
    pub fn new() -> Self {
        let mut sums = [0u32; MAX_PIECES_PER_SIDE + 1];
        for ring in 2..RING_TOTALS.len() {
            let previous = RING_TOTALS[ring - 1];
            let base = sums[previous];
            for count in previous + 1..=RING_TOTALS[ring] {
                sums[count] = base + (ring as u32 - 1) * (count - previous) as u32;
            }
        }
        Self { sums }
    }

    /// Minimum sum for `count` pieces, `None` outside `1..=MAX_PIECES_PER_SIDE`
    #[inline]
    pub fn get(&self, count: usize) -> Option<u32> {
        if count == 0 {
            return None;
        }
        self.sums.get(count).copied()
    }

    /// Minimum sum for `count` pieces.
    ///
    /// Boards never hold more than [`MAX_PIECES_PER_SIDE`] pieces per side,
    /// so an out-of-range count is a broken invariant and panics.
    #[inline]
    pub(crate) fn min_sum(&self, count: usize) -> u32 {
        self.sums[count]
    }
}

impl Default for DistanceTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_table_closed_form() {
        let table = DistanceTable::new();
        assert_eq!(table.get(1), Some(0));
        // Filled 3x3: eight pieces at distance 1
        assert_eq!(table.get(9), Some(8));
        // Filled 5x5: eight at distance 1, sixteen at distance 2
        assert_eq!(table.get(25), Some(40));
        assert_eq!(table.get(2), Some(1));
        assert_eq!(table.get(10), Some(10));
        assert_eq!(table.get(12), Some(14));
    }

    #[test]
    fn test_distance_table_monotonic() {
        let table = DistanceTable::new();
        for n in 2..=MAX_PIECES_PER_SIDE {
            let prev = table.get(n - 1).unwrap();
            let cur = table.get(n).unwrap();
            assert!(cur >= prev, "table not monotonic at {}: {} < {}", n, cur, prev);
        }
    }

    #[test]
    fn test_distance_table_bounds() {
        let table = DistanceTable::new();
        assert_eq!(table.get(0), None);
        assert_eq!(table.get(MAX_PIECES_PER_SIDE + 1), None);
    }

    #[test]
    fn test_cell_values_symmetric() {
        for x in 0..BOARD_SIZE {
            for y in 0..BOARD_SIZE {
                let v = CELL_VALUES[x][y];
                assert_eq!(v, CELL_VALUES[BOARD_SIZE - 1 - x][y]);
                assert_eq!(v, CELL_VALUES[x][BOARD_SIZE - 1 - y]);
                assert_eq!(v, CELL_VALUES[y][x]);
            }
        }
        let max = CELL_VALUES.iter().flatten().max().copied();
        assert_eq!(max, Some(MAX_CELL_VALUE));
        assert_eq!(cell_value(Pos::new(3, 4)), MAX_CELL_VALUE);
        assert_eq!(cell_value(Pos::new(0, 7)), -80);
    }
}
