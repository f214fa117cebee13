//! Lines of Action AI engine
//!
//! Lines of Action is played on an 8x8 board by Black and White, twelve
//! pieces each. A piece moves in a straight line exactly as many squares as
//! there are pieces on that line, may jump its own pieces but not the
//! enemy's, and captures by landing on an enemy piece. The first side to
//! gather all of its pieces into one connected group wins.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards and incremental line counts
//! - [`rules`]: Move generation, move ordering and win detection
//! - [`eval`]: Six-factor heuristic evaluation
//! - [`search`]: Iterative-deepening alpha-beta
//! - [`engine`]: AI engine facade and configuration
//! - [`ui`]: egui front-end
//!
//! # Quick Start
//!
//! ```
//! use loa::{AIEngine, Board};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_config(1, 200);
//!
//! // AI plays Black's first move
//! let result = engine.get_move(&board).unwrap();
//! board.apply_move(result.best_move);
//! println!("AI plays {}", result.best_move);
//! ```

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Pos, Side, BOARD_SIZE};
pub use engine::{AIEngine, EngineConfig, MoveResult};
pub use error::{BoardError, EngineError, GameError};
pub use eval::Evaluator;
