//! Win condition checking for Lines of Action
//!
//! A side wins when all of its pieces form one group under king-move
//! adjacency. A side reduced to a single piece is connected. A side to move
//! with no legal move loses.

use crate::board::{Board, Side};

use super::movegen::has_legal_move;

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinType {
    /// All of the winner's pieces are connected
    Connection,
    /// The loser had no legal move
    Immobilization,
}

/// Check if either side has connected after `last_mover` moved.
///
/// When one move connects both groups the side that moved wins.
pub fn check_winner(board: &Board, last_mover: Side) -> Option<Side> {
    if board.connected(last_mover) {
        Some(last_mover)
    } else if board.connected(last_mover.opponent()) {
        Some(last_mover.opponent())
    } else {
        None
    }
}

/// Full game-over test for the position after `last_mover` moved.
pub fn game_result(board: &Board, last_mover: Side) -> Option<(Side, WinType)> {
    if let Some(winner) = check_winner(board, last_mover) {
        return Some((winner, WinType::Connection));
    }
    let to_move = board.side_to_move();
    if !has_legal_move(board, to_move) {
        return Some((to_move.opponent(), WinType::Immobilization));
    }
    None
}
