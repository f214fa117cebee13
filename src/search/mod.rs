//! Search module for Lines of Action
//!
//! Contains:
//! - The [`SearchBoard`] seam the search drives (moves, apply/undo, connectivity)
//! - Alpha-beta with iterative deepening over odd depths

pub mod alphabeta;

pub use alphabeta::{DepthReport, SearchResult, Searcher};

use crate::board::{Board, Move, Side};
use crate::rules;

/// What alpha-beta needs from a game position.
///
/// The search never copies the position. Every `apply_move` is paired with
/// one `undo_move` of the same move, so implementors only need those two to
/// be exact inverses.
pub trait SearchBoard {
    type Move: Copy;

    fn side_to_move(&self) -> Side;

    /// True when all of `side`'s pieces form one group
    fn connected(&self, side: Side) -> bool;

    /// Legal moves for the side to move
    fn generate_moves(&self) -> Vec<Self::Move>;

    /// Reorder `moves` for `side`. Only affects pruning, never the result.
    fn order_moves(&self, moves: Vec<Self::Move>, _side: Side, _depth: u32) -> Vec<Self::Move> {
        moves
    }

    fn apply_move(&mut self, mv: Self::Move);

    fn undo_move(&mut self, mv: Self::Move);
}

impl SearchBoard for Board {
    type Move = Move;

    #[inline]
    fn side_to_move(&self) -> Side {
        Board::side_to_move(self)
    }

    #[inline]
    fn connected(&self, side: Side) -> bool {
        Board::connected(self, side)
    }

    fn generate_moves(&self) -> Vec<Move> {
        rules::generate_moves(self)
    }

    fn order_moves(&self, moves: Vec<Move>, side: Side, depth: u32) -> Vec<Move> {
        rules::order_moves(self, moves, side, depth)
    }

    #[inline]
    fn apply_move(&mut self, mv: Move) {
        Board::apply_move(self, mv)
    }

    #[inline]
    fn undo_move(&mut self, mv: Move) {
        Board::undo_move(self, mv)
    }
}
