//! Error types for the engine, board construction and game play

use thiserror::Error;

use crate::board::{Pos, Side};

/// Errors returned by the search engine
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Search was started on a position where the side to move cannot play.
    /// The caller's game loop should have stopped at the terminal position.
    #[error("no legal move available for {side}")]
    NoLegalMove { side: Side },
}

/// Errors raised while building a custom board
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("square ({x}, {y}) is off the board")]
    OffBoard { x: u8, y: u8 },

    #[error("square {0} holds more than one piece")]
    Overlap(Pos),

    #[error("{side} has {count} pieces, more than the supported maximum")]
    TooManyPieces { side: Side, count: usize },
}

/// Errors for user intents in an interactive game
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("game is over")]
    GameOver,

    #[error("AI is thinking")]
    AiThinking,

    #[error("not your turn")]
    NotYourTurn,

    #[error("illegal move")]
    IllegalMove,

    #[error("cannot move while reviewing history")]
    Reviewing,
}
