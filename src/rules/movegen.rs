//! Move generation for Lines of Action
//!
//! A piece moves in a straight line (orthogonal or diagonal) exactly as many
//! squares as there are pieces of either colour on that line. It may jump
//! over its own pieces but never over an enemy piece, and it may not land on
//! its own piece. Landing on an enemy piece captures it.

use crate::board::{Board, Move, Pos, Side};

/// All 8 move directions
pub const DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
];

/// Generate all legal moves for the side to move
pub fn generate_moves(board: &Board) -> Vec<Move> {
    let side = board.side_to_move();
    let mut moves = Vec::with_capacity(64);
    for from in board.pieces(side) {
        push_destinations(board, from, side, &mut moves);
    }
    moves
}

/// Legal moves of the piece on `from`, whoever owns it
pub fn moves_from(board: &Board, from: Pos) -> Vec<Move> {
    let mut moves = Vec::new();
    if let Some(side) = board.side_at(from) {
        push_destinations(board, from, side, &mut moves);
    }
    moves
}

/// True when `side` has at least one legal move
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    let mut scratch = Vec::with_capacity(8);
    board.pieces(side).any(|from| {
        scratch.clear();
        push_destinations(board, from, side, &mut scratch);
        !scratch.is_empty()
    })
}

fn push_destinations(board: &Board, from: Pos, side: Side, moves: &mut Vec<Move>) {
    let enemy = side.opponent();
    for &(dx, dy) in &DIRECTIONS {
        let distance = i32::from(board.line_count(from, dx, dy));
        let tx = i32::from(from.x) + dx * distance;
        let ty = i32::from(from.y) + dy * distance;
        if !Pos::is_valid(tx, ty) || board.is_occupied_by(side, tx, ty) {
            continue;
        }

        // No enemy piece may be jumped
        let blocked = (1..distance).any(|step| {
            board.is_occupied_by(enemy, i32::from(from.x) + dx * step, i32::from(from.y) + dy * step)
        });
        if blocked {
            continue;
        }

        moves.push(Move::new(
            from,
            Pos::new(tx as u8, ty as u8),
            board.is_occupied_by(enemy, tx, ty),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_move_count() {
        // 12 pieces, the standard opening has 36 legal moves for each side
        let board = Board::new();
        assert_eq!(generate_moves(&board).len(), 36);
    }

    #[test]
    fn test_distance_matches_line_count() {
        // b1 (x=1, y=0): column b holds 2 pieces, so it moves two squares up
        let board = Board::new();
        let moves = moves_from(&board, Pos::new(1, 0));
        assert!(moves.iter().any(|m| m.to == Pos::new(1, 2)));
        assert!(moves.iter().all(|m| !m.captures));
    }

    #[test]
    fn test_cannot_jump_enemy() {
        // Black a piece on row 0 must travel 3 to the right but an enemy sits in between
        let board = Board::from_pieces(&[(0, 0), (5, 5)], &[(1, 0), (7, 7)], Side::Black)
            .expect("valid position");
        let moves = moves_from(&board, Pos::new(0, 0));
        // Row 0 has 2 pieces: the move to (2, 0) would jump the white piece on (1, 0)
        assert!(!moves.iter().any(|m| m.to == Pos::new(2, 0)));
    }

    #[test]
    fn test_jump_own_piece_and_capture() {
        let board = Board::from_pieces(&[(0, 3), (1, 3)], &[(3, 3), (7, 7)], Side::Black)
            .expect("valid position");
        // Row 3 holds 3 pieces: a4 jumps b4 and lands on d4, capturing
        let moves = moves_from(&board, Pos::new(0, 3));
        let capture = moves
            .iter()
            .find(|m| m.to == Pos::new(3, 3))
            .expect("capture should be generated");
        assert!(capture.captures);
    }

    #[test]
    fn test_cannot_land_on_own_piece() {
        let board = Board::from_pieces(&[(0, 0), (2, 0)], &[(7, 7)], Side::Black)
            .expect("valid position");
        let moves = moves_from(&board, Pos::new(0, 0));
        assert!(!moves.iter().any(|m| m.to == Pos::new(2, 0)));
    }

    #[test]
    fn test_has_legal_move() {
        let board = Board::new();
        assert!(has_legal_move(&board, Side::Black));
        assert!(has_legal_move(&board, Side::White));

        let empty = Board::empty(Side::Black);
        assert!(!has_legal_move(&empty, Side::Black));
    }
}
