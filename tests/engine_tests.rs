//! End-to-end tests through the public API

use std::time::Duration;

use loa::eval::{Evaluator, Score};
use loa::rules::{check_winner, game_result, generate_moves, WinType};
use loa::search::Searcher;
use loa::{AIEngine, Board, EngineError, Move, Pos, Side};

#[test]
fn test_engine_plays_legal_moves() {
    let mut board = Board::new();
    let mut engine = AIEngine::with_config(1, 200);

    for ply in 0..6 {
        let result = engine.get_move(&board).expect("game is still running");
        assert!(
            generate_moves(&board).contains(&result.best_move),
            "ply {}: {} is not legal",
            ply,
            result.best_move
        );
        let mover = board.side_to_move();
        board.apply_move(result.best_move);
        if game_result(&board, mover).is_some() {
            break;
        }
    }
}

#[test]
fn test_depth_one_connection_scores_win() {
    let board = Board::from_pieces(&[(3, 3), (5, 3)], &[(0, 7), (7, 7)], Side::Black)
        .expect("valid position");
    let mut engine = AIEngine::with_config(1, 1000);
    let result = engine.get_move(&board).expect("black has moves");

    assert_eq!(result.score, Score::WIN);
    assert_eq!(result.depth, 1);

    let mut after = board.clone();
    after.apply_move(result.best_move);
    assert_eq!(check_winner(&after, Side::Black), Some(Side::Black));
}

#[test]
fn test_white_connects_too() {
    let board = Board::from_pieces(&[(0, 0), (7, 7)], &[(2, 5), (4, 5)], Side::White)
        .expect("valid position");
    let mut engine = AIEngine::with_config(1, 1000);
    let result = engine.get_move(&board).expect("white has moves");
    assert_eq!(result.score, Score::WIN);

    let mut after = board;
    after.apply_move(result.best_move);
    assert!(after.connected(Side::White));
}

#[test]
fn test_zero_budget_returns_depth_one() {
    let mut board = Board::new();
    let mut searcher = Searcher::new(Evaluator::new());
    let result = searcher
        .search(&mut board, 7, Duration::ZERO)
        .expect("opening has moves");
    assert_eq!(result.depth, 1);
    assert_eq!(result.depth_reports.len(), 1);
    assert_eq!(board, Board::new());
}

#[test]
fn test_search_reports_statistics() {
    let mut engine = AIEngine::with_config(3, 60_000);
    let result = engine.get_move(&Board::new()).expect("opening has moves");
    assert_eq!(result.depth, 3);
    assert!(result.nodes > result.leaf_nodes);
    assert!(result.leaf_nodes > 0);
    assert!(result.nodes_per_second >= 0.0);
}

#[test]
fn test_immobilized_root_is_an_error() {
    let board = Board::from_pieces(
        &[(1, 0), (0, 1), (1, 1), (6, 7), (7, 6), (6, 6)],
        &[(0, 0), (7, 7)],
        Side::White,
    )
    .expect("valid position");
    assert_eq!(
        game_result(&board, Side::Black),
        Some((Side::Black, WinType::Immobilization))
    );

    let mut engine = AIEngine::new();
    let err = engine.get_move(&board).unwrap_err();
    assert_eq!(err, EngineError::NoLegalMove { side: Side::White });
    assert_eq!(err.to_string(), "no legal move available for White");
}

#[test]
fn test_capture_that_connects_is_found() {
    // a4 jumps c4 and captures d4, bridging c4 and e5
    let board = Board::from_pieces(&[(0, 3), (2, 3), (4, 4)], &[(3, 3), (6, 0), (7, 6)], Side::Black)
        .expect("valid position");
    let mut engine = AIEngine::with_config(1, 1000);
    let result = engine.get_move(&board).expect("black has moves");

    assert_eq!(result.best_move, Move::new(Pos::new(0, 3), Pos::new(3, 3), true));
    assert_eq!(result.best_move.to_string(), "a4xd4");
    assert_eq!(result.score, Score::WIN);
}
