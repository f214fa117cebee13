//! Board representation for Lines of Action

pub mod bitboard;
pub mod board;


use std::fmt;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (8x8)
pub const BOARD_SIZE: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 64

/// Highest coordinate on either axis
pub const LAST_INDEX: u8 = BOARD_SIZE as u8 - 1;

/// Upper bound on pieces per side accepted by the board.
/// The evaluator's distance table is sized to this.
pub const MAX_PIECES_PER_SIDE: usize = 25;

/// The two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Black,
    White,
}

impl Side {
    /// Get opponent side
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Black => Side::White,
            Side::White => Side::Black,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Black => write!(f, "Black"),
            Side::White => write!(f, "White"),
        }
    }
}

/// Position on the board: `x` is the column (a-h), `y` the row (1-8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: u8,
    pub y: u8,
}

impl Pos {
    #[inline]
    pub fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < BOARD_SIZE as u8 && y < BOARD_SIZE as u8);
        Self { x, y }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.y as usize * BOARD_SIZE + self.x as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            x: (idx % BOARD_SIZE) as u8,
            y: (idx / BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(x: i32, y: i32) -> bool {
        x >= 0 && x < BOARD_SIZE as i32 && y >= 0 && y < BOARD_SIZE as i32
    }

    /// King-move distance between two squares
    #[inline]
    pub fn chebyshev(self, other: Pos) -> u8 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// True for squares on the outer ring of the board
    #[inline]
    pub fn is_border(self) -> bool {
        self.x == 0 || self.x == LAST_INDEX || self.y == 0 || self.y == LAST_INDEX
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.x) as char, self.y + 1)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

/// A piece moving from one square to another, possibly capturing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
    /// An enemy piece stood on `to` when the move was generated
    pub captures: bool,
}

impl Move {
    #[inline]
    pub fn new(from: Pos, to: Pos, captures: bool) -> Self {
        Self { from, to, captures }
    }

    /// The move slides along the border line it started on
    #[inline]
    pub fn is_along_edge(self) -> bool {
        ((self.to.x == 0 || self.to.x == LAST_INDEX) && self.to.x == self.from.x)
            || ((self.to.y == 0 || self.to.y == LAST_INDEX) && self.to.y == self.from.y)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.captures { 'x' } else { '-' };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}
