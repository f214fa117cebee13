//! Evaluation module for Lines of Action positions
//!
//! This module provides static scoring of board positions:
//! - Terminal scores for connected groups
//! - Six weighted positional sub-scores (see [`heuristic`])
//! - The cell-value and minimum-distance tables they read

pub mod heuristic;
pub mod tables;

pub use heuristic::{Components, Evaluator};
pub use tables::{cell_value, DistanceTable, Score};

use crate::board::Side;

/// Leaf scorer used by the search.
///
/// `evaluate` may temporarily change the board (the side to move) but must
/// leave it exactly as it found it.
pub trait Evaluate<B> {
    /// Score `board` for `side`, higher is better. `ply` is the node's
    /// distance from the search root and is 0 at the root itself.
    fn evaluate(&self, board: &mut B, side: Side, ply: u32, is_root: bool) -> i32;
}
