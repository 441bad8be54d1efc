//! End-to-end searches through the public engine API.

use std::time::Duration;

use alphabeta_engine::{agent, AlphaBetaEngine, EngineConfig, Evaluator};
use minichess_core::{Board, Engine, PieceKind, Player, SearchLimits, Square};

fn engine() -> AlphaBetaEngine {
    AlphaBetaEngine::new(EngineConfig {
        key_seed: Some(42),
        ..Default::default()
    })
}

#[test]
fn lone_kings_return_a_safe_king_move() {
    let board = Board::from_layout("4k/5/5/5/K4 w").unwrap();
    let result = engine()
        .best_move(&board, Player::White, SearchLimits::depth(2))
        .unwrap();

    let mv = result.best_move.clone().expect("white king can move");
    assert!(board.legal_moves().contains(&mv));
    let mut after = board.clone();
    after.apply_move(&mv.piece, &mv.option).unwrap();
    assert!(!after.in_check(Player::White));
}

#[test]
fn kings_facing_each_other_only_step_to_safe_squares() {
    let board = Board::from_layout("5/5/k4/5/K4 w").unwrap();
    let (piece, option) = engine()
        .best_move(&board, Player::White, SearchLimits::depth(2))
        .unwrap()
        .into_pair();
    assert_eq!(piece.map(|p| p.kind), Some(PieceKind::King));
    assert_eq!(option.map(|o| o.position), Some(Square::new(1, 0)));
}

#[test]
fn no_legal_move_returns_none() {
    let board = Board::from_layout("k4/5/1Q3/5/4K b").unwrap();
    let pair = engine()
        .best_move(&board, Player::Black, SearchLimits::depth(2))
        .unwrap()
        .into_pair();
    assert_eq!(pair, (None, None));
}

#[test]
fn symmetric_start_has_zero_material() {
    let eval = Evaluator::default();
    let board = Board::standard();
    assert_eq!(eval.material(&board, Player::White), 0.0);
    assert_eq!(eval.material(&board, Player::Black), 0.0);
}

#[test]
fn mating_capture_is_chosen() {
    let board = Board::from_layout("k1K2/bp3/5/5/1Q3 w").unwrap();
    for depth in 1..=2 {
        let result = engine()
            .best_move(&board, Player::White, SearchLimits::depth(depth))
            .unwrap();
        let mv = result.best_move.expect("white has moves");
        assert_eq!(mv.piece.kind, PieceKind::Queen);
        assert_eq!(mv.to(), Square::new(1, 3));
        assert!(mv.option.is_capture());
        assert_eq!(result.score, f64::INFINITY);
    }
}

#[test]
fn iterative_search_stops_at_proven_mate() {
    let board = Board::from_layout("k1K2/bp3/5/5/1Q3 w").unwrap();
    let result = engine()
        .best_move(&board, Player::White, SearchLimits::iterative(4))
        .unwrap();
    assert_eq!(result.depth, 1);
    assert_eq!(result.best_move.unwrap().to(), Square::new(1, 3));
}

#[test]
fn black_can_be_the_optimizing_player() {
    // Mirror of the mating position with colours swapped.
    let board = Board::from_layout("1q3/5/5/BP3/K1k2 b").unwrap();
    let result = engine()
        .best_move(&board, Player::Black, SearchLimits::depth(1))
        .unwrap();
    assert_eq!(result.best_move.unwrap().to(), Square::new(1, 1));
    assert_eq!(result.score, f64::INFINITY);
}

#[test]
fn engine_trait_plays_for_side_to_move() {
    let mut engine = engine();
    let board = Board::from_layout("1q3/5/5/BP3/K1k2 b").unwrap();
    let result = engine.search(&board, SearchLimits::depth(1)).unwrap();
    assert_eq!(result.best_move.unwrap().to(), Square::new(1, 1));
    assert_eq!(engine.name(), "AlphaBeta");
}

#[test]
fn agent_returns_a_legal_pair_within_budget() {
    let board = Board::standard();
    let (piece, option) = agent(&board, Player::White, 0, Duration::from_millis(500)).unwrap();
    let piece = piece.expect("start position has moves");
    let option = option.expect("piece comes with an option");
    assert!(board
        .legal_moves()
        .iter()
        .any(|mv| mv.piece == piece && mv.option == option));
}

#[test]
fn parallel_engine_finds_the_same_mate() {
    let mut engine = AlphaBetaEngine::new(EngineConfig {
        key_seed: Some(42),
        parallel_threshold: Some(2),
        ..Default::default()
    });
    let board = Board::from_layout("k1K2/bp3/5/5/1Q3 w").unwrap();
    let result = engine
        .best_move(&board, Player::White, SearchLimits::depth(2))
        .unwrap();
    assert_eq!(result.best_move.unwrap().to(), Square::new(1, 3));
}

#[test]
fn keys_are_reused_across_searches() {
    let mut engine = engine();
    let board = Board::standard();
    let a = engine
        .best_move(&board, Player::White, SearchLimits::depth(2))
        .unwrap();
    let b = engine
        .best_move(&board, Player::White, SearchLimits::depth(2))
        .unwrap();
    assert_eq!(a.best_move, b.best_move);
    assert_eq!(a.score, b.score);
    assert_eq!(a.nodes, b.nodes);
}
