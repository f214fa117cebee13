//! Main AI engine wrapping the evaluator and the alpha-beta searcher
//!
//! The engine owns its configuration and searches a private copy of the
//! caller's board, so a position handed to [`AIEngine::get_move`] is never
//! touched.
//!
//! # Example
//!
//! ```
//! use loa::{AIEngine, Board};
//!
//! // Shallow search for a fast doc test
//! let mut engine = AIEngine::with_config(1, 200);
//! let board = Board::new();
//!
//! let result = engine.get_move(&board).expect("the opening has moves");
//! println!("Best move: {}", result.best_move);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Duration;

use crate::board::{Board, Move};
use crate::error::EngineError;
use crate::eval::Evaluator;
use crate::search::{SearchResult, Searcher};

/// Default maximum search depth
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// Default time budget per move in milliseconds
pub const DEFAULT_TIME_LIMIT_MS: u64 = 1000;

/// Search limits for one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Deepest iterative-deepening pass, at least 1
    pub max_depth: u32,
    /// Soft time budget; checked only between passes
    pub time_limit_ms: u64,
}

impl EngineConfig {
    #[must_use]
    pub fn new(max_depth: u32, time_limit_ms: u64) -> Self {
        Self {
            max_depth: max_depth.max(1),
            time_limit_ms,
        }
    }

    #[inline]
    pub fn time_budget(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH, DEFAULT_TIME_LIMIT_MS)
    }
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    pub best_move: Move,
    /// Score from the mover's point of view
    pub score: i32,
    /// Deepest completed iterative-deepening pass
    pub depth: u32,
    /// Nodes expanded over all passes
    pub nodes: u64,
    /// Leaf positions scored over all passes
    pub leaf_nodes: u64,
    /// Time taken in milliseconds
    pub time_ms: u64,
    pub nodes_per_second: f64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: &SearchResult) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            depth: result.depth,
            nodes: result.nodes,
            leaf_nodes: result.leaf_nodes,
            time_ms: result.elapsed.as_millis() as u64,
            nodes_per_second: result.nodes_per_second(),
        }
    }
}

/// Main AI engine for Lines of Action.
///
/// # Example
///
/// ```
/// use loa::AIEngine;
///
/// let mut engine = AIEngine::new();
/// engine.set_max_depth(3);
/// assert_eq!(engine.config().max_depth, 3);
/// ```
pub struct AIEngine {
    searcher: Searcher<Evaluator>,
    config: EngineConfig,
}

impl AIEngine {
    /// Create a new AI engine with default settings.
    ///
    /// Default configuration:
    /// - Maximum depth of 5
    /// - 1000ms time limit
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(EngineConfig::default())
    }

    /// Create an AI engine with custom limits. A depth of 0 is raised to 1.
    ///
    /// # Example
    ///
    /// ```
    /// use loa::AIEngine;
    ///
    /// let engine = AIEngine::with_config(7, 5000);
    /// assert_eq!(engine.config().time_limit_ms, 5000);
    /// ```
    #[must_use]
    pub fn with_config(max_depth: u32, time_limit_ms: u64) -> Self {
        Self::from_config(EngineConfig::new(max_depth, time_limit_ms))
    }

    #[must_use]
    pub fn from_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::new(Evaluator::new()),
            config: EngineConfig::new(config.max_depth, config.time_limit_ms),
        }
    }

    /// Pick a move for the side to move on `board`.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoLegalMove`] when the side to move cannot move or the
    /// game is already over.
    pub fn get_move(&mut self, board: &Board) -> Result<MoveResult, EngineError> {
        let mut work_board = board.clone();
        let result = self.searcher.search(
            &mut work_board,
            self.config.max_depth,
            self.config.time_budget(),
        )?;
        Ok(MoveResult::from_search(&result))
    }

    /// Set the maximum search depth. A depth of 0 is raised to 1.
    pub fn set_max_depth(&mut self, depth: u32) {
        self.config.max_depth = depth.max(1);
    }

    /// Set the time limit per move.
    pub fn set_time_limit(&mut self, time_ms: u64) {
        self.config.time_limit_ms = time_ms;
    }

    #[must_use]
    pub fn config(&self) -> EngineConfig {
        self.config
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}
