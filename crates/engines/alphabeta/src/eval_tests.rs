use super::*;
use crate::keys::PositionKeyTable;
use crate::node::NodeId;
use crate::tree::GameTree;
use crate::tt::TranspositionTable;
use minichess_core::{Board, STANDARD_LAYOUT};

fn node(layout: &str) -> GameNode<Board> {
    let keys = PositionKeyTable::with_seed(5, 5, 3);
    GameNode::root(Board::from_layout(layout).unwrap(), &keys).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_symmetric_start_has_equal_material() {
    let eval = Evaluator::default();
    let board = Board::standard();
    assert_eq!(eval.material(&board, Player::White), 0.0);
    assert_eq!(eval.material(&board, Player::Black), 0.0);
}

#[test]
fn test_material_counts_for_the_agent() {
    let eval = Evaluator::default();
    let board = Board::from_layout("rnb1k/ppppp/5/PPPPP/RNBQK w").unwrap();
    assert_eq!(eval.material(&board, Player::White), 9.0);
    assert_eq!(eval.material(&board, Player::Black), -9.0);
}

#[test]
fn test_terminal_scores() {
    let eval = Evaluator::default();
    let mate = node("k4/1Q3/2K2/5/5 b");
    assert_eq!(eval.evaluate(&mate, Player::White), f64::INFINITY);
    assert_eq!(eval.evaluate(&mate, Player::Black), f64::NEG_INFINITY);

    let stalemate = node("k4/5/1Q3/5/4K b");
    assert_eq!(eval.evaluate(&stalemate, Player::White), 0.0);
    assert_eq!(eval.evaluate(&stalemate, Player::Black), 0.0);
}

#[test]
fn test_non_terminal_scores_are_finite() {
    let eval = Evaluator::default();
    let start = node(STANDARD_LAYOUT);
    assert!(eval.evaluate(&start, Player::White).is_finite());
    assert!(eval.evaluate(&start, Player::Black).is_finite());
}

#[test]
fn test_mobility_is_signed_by_side_to_move() {
    let eval = Evaluator::default();
    let start = node(STANDARD_LAYOUT);
    assert!(approx(eval.mobility(&start, Player::White), 0.4));
    assert!(approx(eval.mobility(&start, Player::Black), -0.4));
}

#[test]
fn test_attacked_pieces_cost_safety() {
    let eval = Evaluator::default();
    let n = node("4k/5/1p3/2P2/K4 w");
    assert!(approx(eval.safety(&n, Player::White), -0.45));
}

#[test]
fn test_trapped_enemy_king_scores_checkmate_weight() {
    let eval = Evaluator::default();
    let n = node("k1K2/4R/2Q2/5/1n3 b");
    assert!(!n.is_terminal());
    assert_eq!(eval.king_safety(&n, Player::White), 500.0);
    assert_eq!(eval.king_safety(&n, Player::Black), -3.0);
}

#[test]
fn test_square_behind_king_on_checking_ray_is_no_escape() {
    let eval = Evaluator::default();
    // The Right on e5 checks along the fifth rank; a5 sits behind the king.
    let n = node("1k2R/ppp2/1n3/5/4K b");
    assert!(!n.is_terminal());
    assert_eq!(n.legal_moves().len(), 1);
    assert!(n.legal_moves().iter().all(|m| m.piece.kind != PieceKind::King));
    assert_eq!(eval.king_safety(&n, Player::White), 500.0);
}

#[test]
fn test_enemy_king_with_escape_scores_smaller_bonus() {
    let eval = Evaluator::default();
    let n = node("k4/1Q3/5/5/4K b");
    assert_eq!(eval.king_safety(&n, Player::White), 2.0);
}

#[test]
fn test_move_terms_for_capture_with_promotion() {
    let eval = Evaluator::default();
    let keys = PositionKeyTable::with_seed(5, 5, 3);
    let mut tt = TranspositionTable::new();
    let root = GameNode::root(Board::from_layout("1r2k/P4/5/5/K4 w").unwrap(), &keys).unwrap();
    let mut tree = GameTree::new(root, &mut tt);
    tree.expand(NodeId(0), &keys, &mut tt).unwrap();

    let capture = *tree
        .node(NodeId(0))
        .children()
        .iter()
        .find(|&&c| !tree.node(c).captured().is_empty())
        .unwrap();
    let child = tree.node(capture);
    let terms = eval.move_terms(child).unwrap();
    assert!(approx(terms.capture_delta, 7.0));
    assert!(terms.promotion);
    assert!(terms.check);
    assert!(!terms.protected);
    assert_eq!(terms.unsafe_value, 0.0);

    assert!(approx(eval.move_bonus(child, Player::White), 10.15));
    assert!(approx(eval.move_bonus(child, Player::Black), -10.15));
}

#[test]
fn test_root_has_no_move_bonus() {
    let eval = Evaluator::default();
    let start = node(STANDARD_LAYOUT);
    assert!(eval.move_terms(&start).is_none());
    assert_eq!(eval.move_bonus(&start, Player::White), 0.0);
}
