//! Move ordering
//!
//! Ordering only changes how early alpha-beta finds cutoffs, never the
//! value it returns. Cheap priorities that tend to be right in Lines of Action:
//! 1. Captures
//! 2. Moves that land closer to the mover's centre of mass
//! 3. Moves that land on more valuable squares

use crate::board::{Board, Move, Pos, Side};
use crate::eval::tables::cell_value;

/// Integer centre of mass of a side's pieces, or `None` when it has none
pub fn centroid(board: &Board, side: Side) -> Option<Pos> {
    let pieces = board.pieces(side);
    let n = pieces.len() as u32;
    if n == 0 {
        return None;
    }
    let (sx, sy) = pieces.fold((0u32, 0u32), |(sx, sy), p| {
        (sx + u32::from(p.x), sy + u32::from(p.y))
    });
    Some(Pos::new((sx / n) as u8, (sy / n) as u8))
}

/// Priority of a single move, higher is searched first
#[inline]
fn score_move(mv: Move, center: Option<Pos>) -> i32 {
    let mut score = 0;
    if mv.captures {
        score += 1_000;
    }
    if let Some(c) = center {
        // Reward closing in on the group, 0..=7 squares
        let before = i32::from(mv.from.chebyshev(c));
        let after = i32::from(mv.to.chebyshev(c));
        score += (before - after) * 100;
    }
    score + cell_value(mv.to)
}

/// Reorder `moves` for `side`. The sort is stable so equal moves keep
/// generation order. `depth` is accepted for callers that want to vary
/// ordering with remaining depth; the static ordering ignores it.
pub fn order_moves(board: &Board, mut moves: Vec<Move>, side: Side, _depth: u32) -> Vec<Move> {
    let center = centroid(board, side);
    moves.sort_by_cached_key(|&mv| -score_move(mv, center));
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::generate_moves;

    #[test]
    fn test_centroid() {
        let board = Board::from_pieces(&[(0, 0), (2, 2), (4, 1)], &[(7, 7)], Side::Black)
            .expect("valid position");
        assert_eq!(centroid(&board, Side::Black), Some(Pos::new(2, 1)));
        assert_eq!(centroid(&Board::empty(Side::Black), Side::White), None);
    }

    #[test]
    fn test_captures_first() {
        // Row 4 holds three pieces, so a4 jumps b4 and captures on d4
        let board = Board::from_pieces(&[(0, 3), (1, 3), (5, 6)], &[(3, 3), (6, 0)], Side::Black)
            .expect("valid position");
        let moves = order_moves(&board, generate_moves(&board), Side::Black, 1);
        assert!(moves[0].captures, "first move should capture, got {}", moves[0]);
    }

    #[test]
    fn test_ordering_is_permutation() {
        let board = Board::new();
        let generated = generate_moves(&board);
        let mut ordered = order_moves(&board, generated.clone(), Side::Black, 3);
        assert_eq!(ordered.len(), generated.len());
        let mut sorted = generated;
        sorted.sort_by_key(|m| (m.from, m.to));
        ordered.sort_by_key(|m| (m.from, m.to));
        assert_eq!(ordered, sorted);
    }
}
