//! Heuristic evaluation function for Lines of Action positions
//!
//! Terminal positions score `±Score::WIN / ply`. Everything else is a
//! weighted sum of six sub-scores for the evaluated side:
//! - Concentration: distance to the centre of mass beyond the ideal packing
//! - Mobility: weighted count of legal moves per piece
//! - Quads: 2x2 windows near the centre of mass holding 3+ pieces
//! - Centralization: average square value
//! - Uniformity: inverse area of the bounding rectangle
//! - Connectedness: average number of touching neighbours

use crate::board::{Board, Pos, Side, BOARD_SIZE};
use crate::rules::generate_moves;

use super::tables::{cell_value, DistanceTable, Score, MAX_CELL_VALUE};
use super::Evaluate;

/// Raw sub-scores of one side, before weighting
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Components {
    pub concentration: f64,
    pub mobility: f64,
    pub quads: f64,
    pub centralization: f64,
    pub uniformity: f64,
    pub connectedness: f64,
}

impl Components {
    /// Weighted sum, without the tempo bonus or scaling
    pub fn weighted(&self) -> f64 {
        Score::CONCENTRATION * self.concentration
            + Score::MOBILITY * self.mobility
            + Score::QUADS * self.quads
            + Score::CENTRALIZATION * self.centralization
            + Score::UNIFORMITY * self.uniformity
            + Score::CONNECTEDNESS * self.connectedness
    }
}

/// Static evaluator. Holds only the distance table, built once.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    distances: DistanceTable,
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            distances: DistanceTable::new(),
        }
    }

    #[inline]
    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    /// Evaluate the board from `side`'s perspective.
    ///
    /// `ply` is the distance from the search root; 0 is scored like 1, so a
    /// connection one move away is worth the full `Score::WIN`.
    /// With `is_root` set, the opponent's own (non-root) evaluation of the
    /// same position is subtracted.
    ///
    /// The side to move may be overridden while mobility is measured but is
    /// always restored before returning.
    pub fn evaluate(&self, board: &mut Board, side: Side, ply: u32, is_root: bool) -> i32 {
        let divisor = ply.max(1) as i32;
        if board.connected(side) {
            return Score::WIN / divisor;
        }
        if board.connected(side.opponent()) {
            return -Score::WIN / divisor;
        }

        let is_moving = side == board.side_to_move();
        let components = self.components(board, side);

        let tempo = if is_moving { Score::TEMPO } else { 0.0 };
        let mut h = (components.weighted() + tempo) * Score::SCALE;

        if is_root {
            h -= f64::from(self.evaluate(board, side.opponent(), ply, false));
        }

        h as i32
    }

    /// Compute the six sub-scores of a side. A side without pieces scores
    /// zero everywhere.
    pub fn components(&self, board: &mut Board, side: Side) -> Components {
        let pieces: Vec<Pos> = board.pieces(side).collect();
        let n = pieces.len();
        if n == 0 {
            return Components::default();
        }
        let nf = n as f64;

        // One pass: coordinate sums, square values, bounding rectangle, neighbour pairs
        let mut sum_x = 0i32;
        let mut sum_y = 0i32;
        let mut sum_cells = 0i32;
        let (mut min_x, mut min_y) = (i32::MAX, i32::MAX);
        let (mut max_x, mut max_y) = (i32::MIN, i32::MIN);
        let mut connections = 0usize;

        for &p in &pieces {
            let (x, y) = (i32::from(p.x), i32::from(p.y));
            sum_x += x;
            sum_y += y;
            sum_cells += cell_value(p);
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
            // Includes the piece itself
            connections += pieces.iter().filter(|&&o| p.chebyshev(o) <= 1).count();
        }

        let center_x = sum_x / n as i32;
        let center_y = sum_y / n as i32;
        let center = Pos::new(center_x as u8, center_y as u8);

        Components {
            concentration: self.concentration(&pieces, center),
            mobility: mobility(board, side, n),
            quads: quads(board, side, center_x, center_y),
            centralization: f64::from(sum_cells) / nf / f64::from(MAX_CELL_VALUE),
            uniformity: {
                let area = f64::from((max_x - min_x + 1) * (max_y - min_y + 1));
                (BOARD_SIZE * BOARD_SIZE) as f64 / area
            },
            connectedness: (connections - n) as f64 / nf / 8.0,
        }
    }

    /// 1 / surplus of king distances over the ideal packing (surplus floored at 1)
    fn concentration(&self, pieces: &[Pos], center: Pos) -> f64 {
        let sum: u32 = pieces.iter().map(|p| u32::from(p.chebyshev(center))).sum();
        let surplus = sum.saturating_sub(self.distances.min_sum(pieces.len())).max(1);
        1.0 / f64::from(surplus)
    }
}

impl Evaluate<Board> for Evaluator {
    #[inline]
    fn evaluate(&self, board: &mut Board, side: Side, ply: u32, is_root: bool) -> i32 {
        Evaluator::evaluate(self, board, side, ply, is_root)
    }
}

/// Weighted legal move count per piece, scaled to roughly 0..1.
///
/// Captures count double. Landing on the border halves a move, and sliding
/// along the border halves it again. Each move's weight is truncated, so
/// quiet border moves count for nothing.
fn mobility(board: &mut Board, side: Side, piece_count: usize) -> f64 {
    let enemy = side.opponent();
    let total: u32 = board.with_side_to_move(side, |b| {
        generate_moves(b)
            .into_iter()
            .map(|mv| {
                let mut value = 1.0;
                if b.is_occupied_by(enemy, i32::from(mv.to.x), i32::from(mv.to.y)) {
                    value *= 2.0;
                }
                if mv.to.is_border() {
                    value /= 2.0;
                }
                if mv.is_along_edge() {
                    value /= 2.0;
                }
                value as u32
            })
            .sum()
    });
    f64::from(total) / piece_count as f64 / 8.0
}

/// Dense 2x2 windows around the centre of mass, in whole tens.
///
/// Only windows fully on the board are scanned, and only those whose centre
/// lies within two and a half squares of the centre of mass.
fn quads(board: &Board, side: Side, center_x: i32, center_y: i32) -> f64 {
    let last = BOARD_SIZE as i32 - 1;
    let mut count = 0u32;
    for x in (center_x - 3).max(0)..=(center_x + 2).min(last - 1) {
        for y in (center_y - 3).max(0)..=(center_y + 2).min(last - 1) {
            if board.quad_value(x, y, side) >= 3 {
                count += 1;
            }
        }
    }
    f64::from(count / 10)
}
