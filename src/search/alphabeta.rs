//! Alpha-beta search with iterative deepening
//!
//! Scores are always from the root player's point of view: nodes where the
//! root player is to move maximize, the others minimize.
//!
//! # Features
//!
//! - Iterative deepening over odd depths (1, 3, 5, ...) so every pass ends on
//!   the same player's reply and consecutive results stay comparable
//! - Time management between passes by extrapolating the last increment
//! - Node and leaf counters per pass for diagnostics
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use loa::board::Board;
//! use loa::eval::Evaluator;
//! use loa::search::Searcher;
//!
//! let mut searcher = Searcher::new(Evaluator::new());
//! let mut board = Board::new();
//!
//! let result = searcher.search(&mut board, 1, Duration::from_millis(200)).unwrap();
//! println!("Best move: {}", result.best_move);
//! ```

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::board::{Move, Side};
use crate::error::EngineError;
use crate::eval::{Evaluate, Score};

use super::SearchBoard;

/// Infinity score for alpha-beta bounds, beyond any evaluation
const INF: i32 = Score::WIN + 1;

/// Increments shorter than this are too noisy to extrapolate from
const NOISE_FLOOR: Duration = Duration::from_millis(50);

/// Statistics of one completed iterative-deepening pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthReport {
    pub depth: u32,
    /// Nodes expanded during this pass
    pub nodes: u64,
    /// Positions scored by the evaluator (or as immobilized) during this pass
    pub leaf_nodes: u64,
    /// Time since the search started
    pub elapsed: Duration,
    /// Time spent on this pass alone
    pub increment: Duration,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult<M = Move> {
    /// Best move of the deepest completed pass
    pub best_move: M,
    /// Score of the best move, from the root player's point of view
    pub score: i32,
    /// Deepest completed pass
    pub depth: u32,
    /// Nodes expanded over all passes
    pub nodes: u64,
    /// Leaf nodes over all passes
    pub leaf_nodes: u64,
    pub elapsed: Duration,
    pub depth_reports: Vec<DepthReport>,
}

impl<M> SearchResult<M> {
    /// Nodes per second over the whole search
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.nodes as f64 / secs
        } else {
            0.0
        }
    }
}

/// Iterative-deepening alpha-beta searcher.
///
/// Generic over the evaluator so the search can be driven with a synthetic
/// scorer, and over the board through [`SearchBoard`].
pub struct Searcher<E> {
    evaluator: E,
    nodes: u64,
    leaf_nodes: u64,
}

impl<E> Searcher<E> {
    /// Create a searcher around `evaluator`.
    ///
    /// # Example
    ///
    /// ```
    /// use loa::eval::Evaluator;
    /// use loa::search::Searcher;
    ///
    /// let searcher = Searcher::new(Evaluator::new());
    /// ```
    #[must_use]
    pub fn new(evaluator: E) -> Self {
        Self {
            evaluator,
            nodes: 0,
            leaf_nodes: 0,
        }
    }

    #[inline]
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Search for the side to move with iterative deepening.
    ///
    /// Runs passes at depths 1, 3, 5, ... up to `max_depth` (0 is treated as
    /// 1). The first pass always runs; later passes only start while the
    /// extrapolated cost of the next one still fits in `time_budget`. A pass
    /// is never interrupted, so a single expensive pass can overrun.
    ///
    /// The board is mutated during the search and restored before returning.
    ///
    /// # Errors
    ///
    /// [`EngineError::NoLegalMove`] when no pass produced a move, i.e. the
    /// side to move is immobilized or the game is already decided.
    pub fn search<B>(
        &mut self,
        board: &mut B,
        max_depth: u32,
        time_budget: Duration,
    ) -> Result<SearchResult<B::Move>, EngineError>
    where
        B: SearchBoard,
        E: Evaluate<B>,
    {
        let player = board.side_to_move();
        let max_depth = max_depth.max(1);
        let start = Instant::now();

        let mut best: Option<(B::Move, i32, u32)> = None;
        let mut reports = Vec::new();
        let mut total_nodes = 0u64;
        let mut total_leaves = 0u64;
        let mut prev_increment = Duration::ZERO;
        let mut elapsed = Duration::ZERO;

        let mut depth = 1;
        while depth <= max_depth {
            self.nodes = 0;
            self.leaf_nodes = 0;

            let mut root_move = None;
            let score = self.alpha_beta(board, depth, 0, -INF, INF, player, true, &mut root_move);
            if let Some(mv) = root_move {
                best = Some((mv, score, depth));
            }

            let now = start.elapsed();
            let increment = now - elapsed;
            elapsed = now;
            total_nodes += self.nodes;
            total_leaves += self.leaf_nodes;

            debug!(
                depth,
                elapsed_ms = elapsed.as_millis() as u64,
                nodes = self.nodes,
                leaf_nodes = self.leaf_nodes,
                score,
                "depth complete"
            );
            reports.push(DepthReport {
                depth,
                nodes: self.nodes,
                leaf_nodes: self.leaf_nodes,
                elapsed,
                increment,
            });

            // Growth of the last increment over the one before it
            let rate = if depth > 3 && prev_increment > NOISE_FLOOR {
                (increment.as_secs_f64() - prev_increment.as_secs_f64())
                    / prev_increment.as_secs_f64()
            } else {
                0.0
            };
            prev_increment = increment;

            let estimated = elapsed.as_secs_f64() + (rate + 1.0) * increment.as_secs_f64();
            if estimated >= time_budget.as_secs_f64() {
                break;
            }
            depth += 2;
        }

        let Some((best_move, score, depth)) = best else {
            warn!(side = %player, "search finished without a legal move");
            return Err(EngineError::NoLegalMove { side: player });
        };

        let result = SearchResult {
            best_move,
            score,
            depth,
            nodes: total_nodes,
            leaf_nodes: total_leaves,
            elapsed,
            depth_reports: reports,
        };
        info!(
            side = %player,
            score,
            depth,
            nodes = result.nodes,
            nps = result.nodes_per_second() as u64,
            "search finished"
        );
        Ok(result)
    }

    /// Depth-limited alpha-beta from `player`'s point of view.
    ///
    /// `depth` is the remaining depth and `ply` the distance from the root;
    /// decided positions are scaled by `ply` so nearer wins score higher.
    ///
    /// Fail-hard: a cutoff returns the child value that caused it. The root
    /// move is recorded in `root_move` whenever the root's best value improves.
    #[allow(clippy::too_many_arguments)]
    fn alpha_beta<B>(
        &mut self,
        board: &mut B,
        depth: u32,
        ply: u32,
        mut alpha: i32,
        mut beta: i32,
        player: Side,
        is_root: bool,
        root_move: &mut Option<B::Move>,
    ) -> i32
    where
        B: SearchBoard,
        E: Evaluate<B>,
    {
        self.nodes += 1;

        if depth == 0 || board.connected(player) || board.connected(player.opponent()) {
            self.leaf_nodes += 1;
            return self.evaluator.evaluate(board, player, ply, is_root);
        }

        let to_move = board.side_to_move();
        let moves = board.generate_moves();
        let moves = board.order_moves(moves, to_move, depth);

        // Immobilized: the side to move loses
        if moves.is_empty() {
            self.leaf_nodes += 1;
            let score = Score::WIN / ply.max(1) as i32;
            return if to_move == player { -score } else { score };
        }

        if to_move == player {
            let mut best_value = -INF;
            for mv in moves {
                board.apply_move(mv);
                let value = self.alpha_beta(board, depth - 1, ply + 1, alpha, beta, player, false, root_move);
                board.undo_move(mv);

                if value > best_value {
                    best_value = value;
                    if is_root {
                        *root_move = Some(mv);
                    }
                }
                if value >= beta {
                    return value;
                }
                alpha = alpha.max(best_value);
            }
            best_value
        } else {
            let mut best_value = INF;
            for mv in moves {
                board.apply_move(mv);
                let value = self.alpha_beta(board, depth - 1, ply + 1, alpha, beta, player, false, root_move);
                board.undo_move(mv);

                if value < best_value {
                    best_value = value;
                    if is_root {
                        *root_move = Some(mv);
                    }
                }
                if value <= alpha {
                    return value;
                }
                beta = beta.min(best_value);
            }
            best_value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::eval::Evaluator;

    /// A uniform game tree walked by pushing and popping node indices.
    /// Players alternate by ply, Black at the root.
    struct TreeBoard {
        children: Vec<Vec<usize>>,
        values: Vec<i32>,
        path: Vec<usize>,
        applied: usize,
    }

    impl TreeBoard {
        fn uniform(branching: usize, height: u32, seed: u64) -> Self {
            let mut children = vec![Vec::new()];
            let mut frontier = vec![0usize];
            for _ in 0..height {
                let mut next = Vec::new();
                for &node in &frontier {
                    for _ in 0..branching {
                        let id = children.len();
                        children.push(Vec::new());
                        children[node].push(id);
                        next.push(id);
                    }
                }
                frontier = next;
            }

            let mut state = seed;
            let values = (0..children.len())
                .map(|_| {
                    state = state
                        .wrapping_mul(6364136223846793005)
                        .wrapping_add(1442695040888963407);
                    ((state >> 33) % 201) as i32 - 100
                })
                .collect();

            Self {
                children,
                values,
                path: vec![0],
                applied: 0,
            }
        }

        fn current(&self) -> usize {
            *self.path.last().unwrap()
        }
    }

    impl SearchBoard for TreeBoard {
        type Move = usize;

        fn side_to_move(&self) -> Side {
            if self.path.len() % 2 == 1 {
                Side::Black
            } else {
                Side::White
            }
        }

        fn connected(&self, _side: Side) -> bool {
            false
        }

        fn generate_moves(&self) -> Vec<usize> {
            self.children[self.current()].clone()
        }

        fn apply_move(&mut self, mv: usize) {
            self.applied += 1;
            self.path.push(mv);
        }

        fn undo_move(&mut self, mv: usize) {
            assert_eq!(self.path.pop(), Some(mv));
        }
    }

    struct NodeValue;

    impl Evaluate<TreeBoard> for NodeValue {
        fn evaluate(&self, board: &mut TreeBoard, _side: Side, _ply: u32, _is_root: bool) -> i32 {
            board.values[board.current()]
        }
    }

    /// Unpruned minimax; returns the value and the first root child reaching it
    fn minimax(tree: &TreeBoard, node: usize, depth: u32, maximizing: bool) -> (i32, Option<usize>) {
        if depth == 0 || tree.children[node].is_empty() {
            return (tree.values[node], None);
        }
        let mut best: Option<(i32, usize)> = None;
        for &child in &tree.children[node] {
            let (value, _) = minimax(tree, child, depth - 1, !maximizing);
            let better = match best {
                None => true,
                Some((b, _)) if maximizing => value > b,
                Some((b, _)) => value < b,
            };
            if better {
                best = Some((value, child));
            }
        }
        let (value, child) = best.unwrap();
        (value, Some(child))
    }

    #[test]
    fn test_alpha_beta_matches_minimax() {
        for seed in 1..=20 {
            let mut tree = TreeBoard::uniform(3, 3, seed);
            let (expected, expected_move) = minimax(&tree, 0, 3, true);

            let mut searcher = Searcher::new(NodeValue);
            let result = searcher
                .search(&mut tree, 3, Duration::from_secs(60))
                .expect("tree has moves");

            assert_eq!(result.depth, 3, "seed {}", seed);
            assert_eq!(result.score, expected, "seed {}", seed);
            assert_eq!(Some(result.best_move), expected_move, "seed {}", seed);
            assert_eq!(tree.path, vec![0], "board not restored for seed {}", seed);
        }
    }

    #[test]
    fn test_pruning_expands_fewer_nodes() {
        let mut tree = TreeBoard::uniform(4, 3, 7);
        let mut searcher = Searcher::new(NodeValue);
        let result = searcher
            .search(&mut tree, 3, Duration::from_secs(60))
            .expect("tree has moves");
        // Full trees of height 1 and 3 hold 5 + 85 nodes
        assert!(result.nodes <= 90);
        assert_eq!(result.depth_reports.len(), 2);
        assert_eq!(result.depth_reports[0].nodes, 5);
    }

    #[test]
    fn test_zero_budget_still_completes_depth_one() {
        let mut tree = TreeBoard::uniform(3, 5, 3);
        let mut searcher = Searcher::new(NodeValue);
        let result = searcher
            .search(&mut tree, 5, Duration::ZERO)
            .expect("tree has moves");
        assert_eq!(result.depth, 1);
        assert_eq!(result.depth_reports.len(), 1);
        let (expected, expected_move) = minimax(&tree, 0, 1, true);
        assert_eq!(result.score, expected);
        assert_eq!(Some(result.best_move), expected_move);
    }

    #[test]
    fn test_never_exceeds_max_depth() {
        let mut tree = TreeBoard::uniform(2, 6, 11);
        let mut searcher = Searcher::new(NodeValue);
        let result = searcher
            .search(&mut tree, 4, Duration::from_secs(60))
            .expect("tree has moves");
        assert_eq!(result.depth, 3);
        let depths: Vec<u32> = result.depth_reports.iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![1, 3]);
    }

    #[test]
    fn test_zero_max_depth_searches_one_ply() {
        let mut tree = TreeBoard::uniform(2, 2, 5);
        let mut searcher = Searcher::new(NodeValue);
        let result = searcher
            .search(&mut tree, 0, Duration::from_secs(60))
            .expect("tree has moves");
        assert_eq!(result.depth, 1);
    }

    #[test]
    fn test_no_legal_move_is_an_error() {
        let mut tree = TreeBoard::uniform(3, 0, 1);
        let mut searcher = Searcher::new(NodeValue);
        let err = searcher
            .search(&mut tree, 3, Duration::from_secs(1))
            .unwrap_err();
        assert_eq!(err, EngineError::NoLegalMove { side: Side::Black });
    }

    #[test]
    fn test_every_apply_is_undone() {
        let mut tree = TreeBoard::uniform(3, 3, 9);
        let mut searcher = Searcher::new(NodeValue);
        let result = searcher
            .search(&mut tree, 3, Duration::from_secs(60))
            .expect("tree has moves");
        assert!(tree.applied > 0);
        assert_eq!(tree.path, vec![0]);
        assert_eq!(result.nodes as usize, tree.applied + result.depth_reports.len());
    }

    #[test]
    fn test_finds_connecting_move() {
        // Several single diagonal steps bring d4 and f4 together
        let mut board = Board::from_pieces(&[(3, 3), (5, 3)], &[(0, 7), (7, 7)], Side::Black)
            .expect("valid position");
        let before = board.clone();
        let mut searcher = Searcher::new(Evaluator::new());
        let result = searcher
            .search(&mut board, 1, Duration::from_secs(10))
            .expect("black has moves");

        assert_eq!(result.depth, 1);
        assert_eq!(result.score, Score::WIN);
        assert_eq!(board, before);

        board.apply_move(result.best_move);
        assert!(board.connected(Side::Black), "{} does not connect", result.best_move);
    }

    #[test]
    fn test_prefers_immediate_connection_at_depth_three() {
        let mut board = Board::from_pieces(&[(3, 3), (5, 3)], &[(0, 7), (7, 7)], Side::Black)
            .expect("valid position");
        let mut searcher = Searcher::new(Evaluator::new());
        let result = searcher
            .search(&mut board, 3, Duration::from_secs(60))
            .expect("black has moves");

        assert_eq!(result.depth, 3);
        assert_eq!(result.score, Score::WIN);
        board.apply_move(result.best_move);
        assert!(board.connected(Side::Black), "{} does not connect", result.best_move);
    }

    #[test]
    fn test_board_search_restores_position() {
        let mut board = Board::new();
        let before = board.clone();
        let mut searcher = Searcher::new(Evaluator::new());
        let result = searcher
            .search(&mut board, 3, Duration::from_secs(30))
            .expect("opening has moves");
        assert_eq!(board, before);
        assert_eq!(result.depth, 3);
        assert_eq!(board.side_at(result.best_move.from), Some(Side::Black));
    }
}
