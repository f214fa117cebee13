//! Board structure with incremental line counts

use super::bitboard::Bitboard;
use super::{Move, Pos, Side, BOARD_SIZE, LAST_INDEX, MAX_PIECES_PER_SIDE};
use crate::error::BoardError;

/// Number of diagonals in one direction on an 8x8 board
const DIAGONALS: usize = 2 * BOARD_SIZE - 1;

/// Game board.
///
/// Besides occupancy it keeps the number of pieces (both colours) on every
/// row, column and diagonal, because Lines of Action move distances are
/// exactly those counts. `apply_move` and `undo_move` keep them in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Black pieces bitboard
    pub black: Bitboard,
    /// White pieces bitboard
    pub white: Bitboard,
    side_to_move: Side,
    /// Pieces per row, indexed by y
    row_count: [u8; BOARD_SIZE],
    /// Pieces per column, indexed by x
    col_count: [u8; BOARD_SIZE],
    /// Pieces per (1, -1) diagonal, indexed by x + y
    sum_diag_count: [u8; DIAGONALS],
    /// Pieces per (1, 1) diagonal, indexed by x - y + 7
    diff_diag_count: [u8; DIAGONALS],
}

impl Board {
    /// Standard opening position: Black on the first and last rows,
    /// White on the first and last columns, corners empty. Black moves first.
    pub fn new() -> Self {
        let mut board = Self::empty(Side::Black);
        for i in 1..LAST_INDEX {
            board.put(Pos::new(i, 0), Side::Black);
            board.put(Pos::new(i, LAST_INDEX), Side::Black);
            board.put(Pos::new(0, i), Side::White);
            board.put(Pos::new(LAST_INDEX, i), Side::White);
        }
        board
    }

    /// Board with no pieces
    pub fn empty(side_to_move: Side) -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
            side_to_move,
            row_count: [0; BOARD_SIZE],
            col_count: [0; BOARD_SIZE],
            sum_diag_count: [0; DIAGONALS],
            diff_diag_count: [0; DIAGONALS],
        }
    }

    /// Build a custom position from `(x, y)` coordinates.
    ///
    /// Rejects off-board squares, squares used twice and sides with more
    /// pieces than [`MAX_PIECES_PER_SIDE`].
    pub fn from_pieces(
        black: &[(u8, u8)],
        white: &[(u8, u8)],
        side_to_move: Side,
    ) -> Result<Self, BoardError> {
        let mut board = Self::empty(side_to_move);
        for (side, squares) in [(Side::Black, black), (Side::White, white)] {
            if squares.len() > MAX_PIECES_PER_SIDE {
                return Err(BoardError::TooManyPieces {
                    side,
                    count: squares.len(),
                });
            }
            for &(x, y) in squares {
                if !Pos::is_valid(i32::from(x), i32::from(y)) {
                    return Err(BoardError::OffBoard { x, y });
                }
                let pos = Pos::new(x, y);
                if board.side_at(pos).is_some() {
                    return Err(BoardError::Overlap(pos));
                }
                board.put(pos, side);
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn set_side_to_move(&mut self, side: Side) {
        self.side_to_move = side;
    }

    /// Run `f` as if `side` were to move, then restore the real side to move.
    pub fn with_side_to_move<R>(&mut self, side: Side, f: impl FnOnce(&Self) -> R) -> R {
        let saved = self.side_to_move;
        self.side_to_move = side;
        let result = f(self);
        self.side_to_move = saved;
        result
    }

    /// Bitboard of one side
    #[inline]
    pub fn bitboard(&self, side: Side) -> Bitboard {
        match side {
            Side::Black => self.black,
            Side::White => self.white,
        }
    }

    #[inline]
    fn bits_mut(&mut self, side: Side) -> &mut Bitboard {
        match side {
            Side::Black => &mut self.black,
            Side::White => &mut self.white,
        }
    }

    /// Iterate over every piece of a side exactly once
    #[inline]
    pub fn pieces(&self, side: Side) -> impl ExactSizeIterator<Item = Pos> {
        self.bitboard(side).iter_ones()
    }

    #[inline]
    pub fn piece_count(&self, side: Side) -> usize {
        self.bitboard(side).count() as usize
    }

    /// Side owning the piece on `pos`, if any
    #[inline]
    pub fn side_at(&self, pos: Pos) -> Option<Side> {
        if self.black.get(pos) {
            Some(Side::Black)
        } else if self.white.get(pos) {
            Some(Side::White)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.side_at(pos).is_none()
    }

    /// True when `side` has a piece on (x, y); off-board squares are never occupied
    #[inline]
    pub fn is_occupied_by(&self, side: Side, x: i32, y: i32) -> bool {
        Pos::is_valid(x, y) && self.bitboard(side).get(Pos::new(x as u8, y as u8))
    }

    /// Number of `side`'s pieces in the 2x2 window with top-left corner (x, y).
    /// Cells of the window that fall off the board count as empty.
    pub fn quad_value(&self, x: i32, y: i32, side: Side) -> u32 {
        let mut count = 0;
        for (dx, dy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            if self.is_occupied_by(side, x + dx, y + dy) {
                count += 1;
            }
        }
        count
    }

    /// True when all of `side`'s pieces form one king-adjacency group
    #[inline]
    pub fn connected(&self, side: Side) -> bool {
        self.bitboard(side).is_connected()
    }

    /// Pieces (both colours) on the line through `pos` in direction (dx, dy)
    #[inline]
    pub fn line_count(&self, pos: Pos, dx: i32, dy: i32) -> u8 {
        match (dx, dy) {
            (0, _) => self.col_count[pos.x as usize],
            (_, 0) => self.row_count[pos.y as usize],
            (1, 1) | (-1, -1) => self.diff_diag_count[Self::diff_diag_index(pos)],
            _ => self.sum_diag_count[Self::sum_diag_index(pos)],
        }
    }

    /// Apply a move: capture if needed, relocate the piece, pass the turn.
    pub fn apply_move(&mut self, mv: Move) {
        let Some(mover) = self.side_at(mv.from) else {
            debug_assert!(false, "no piece on {} for move {}", mv.from, mv);
            return;
        };
        let enemy = mover.opponent();

        if self.bitboard(enemy).get(mv.to) {
            debug_assert!(mv.captures, "capture flag missing on {}", mv);
            // Destination stays occupied, so its lines keep their counts
            self.bits_mut(enemy).clear(mv.to);
        } else {
            self.update_lines(mv.to, 1);
        }

        self.bits_mut(mover).clear(mv.from);
        self.bits_mut(mover).set(mv.to);
        self.update_lines(mv.from, -1);
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Exact inverse of [`Board::apply_move`] for the same move.
    pub fn undo_move(&mut self, mv: Move) {
        let Some(mover) = self.side_at(mv.to) else {
            debug_assert!(false, "no piece on {} to undo {}", mv.to, mv);
            return;
        };

        self.bits_mut(mover).clear(mv.to);
        self.bits_mut(mover).set(mv.from);
        self.update_lines(mv.from, 1);

        if mv.captures {
            self.bits_mut(mover.opponent()).set(mv.to);
        } else {
            self.update_lines(mv.to, -1);
        }
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Pieces of both sides
    #[inline]
    pub fn total_pieces(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    fn put(&mut self, pos: Pos, side: Side) {
        self.bits_mut(side).set(pos);
        self.update_lines(pos, 1);
    }

    fn update_lines(&mut self, pos: Pos, delta: i8) {
        let apply = |count: &mut u8| *count = count.wrapping_add_signed(delta);
        apply(&mut self.row_count[pos.y as usize]);
        apply(&mut self.col_count[pos.x as usize]);
        apply(&mut self.sum_diag_count[Self::sum_diag_index(pos)]);
        apply(&mut self.diff_diag_count[Self::diff_diag_index(pos)]);
    }

    #[inline]
    fn sum_diag_index(pos: Pos) -> usize {
        pos.x as usize + pos.y as usize
    }

    #[inline]
    fn diff_diag_index(pos: Pos) -> usize {
        pos.x as usize + LAST_INDEX as usize - pos.y as usize
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
