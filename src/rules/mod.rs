//! Game rules for Lines of Action
//!
//! This module implements the rule set the search engine plays by:
//! - Move generation (line-count distances, jumping, captures)
//! - Move ordering for alpha-beta
//! - Win conditions (connection, immobilization)

pub mod movegen;
pub mod ordering;
pub mod win;

// Re-exports for convenient access
pub use movegen::{generate_moves, has_legal_move, moves_from, DIRECTIONS};
pub use ordering::{centroid, order_moves};
pub use win::{check_winner, game_result, WinType};
