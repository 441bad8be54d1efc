use super::*;
use minichess_core::Board;

fn node(layout: &str) -> GameNode<Board> {
    let keys = PositionKeyTable::with_seed(5, 5, 11);
    GameNode::root(Board::from_layout(layout).unwrap(), &keys).unwrap()
}

#[test]
fn test_legal_moves_match_board() {
    for layout in [
        minichess_core::STANDARD_LAYOUT,
        "k3r/5/5/4N/4K w",
        "k4/5/2b2/1N3/K3r w",
        "4k/1q3/5/3B1/K4 w",
        "2k2/5/2r2/5/1PKP1 w",
    ] {
        let n = node(layout);
        assert_eq!(n.legal_moves(), n.board().legal_moves().as_slice(), "{layout}");
    }
}

#[test]
fn test_pinned_knight_cannot_move() {
    let n = node("k3r/5/5/4N/4K w");
    assert!(n.legal_moves().iter().all(|mv| mv.piece.kind == PieceKind::King));
    assert_eq!(n.legal_moves().len(), 2);
}

#[test]
fn test_kings_are_located() {
    let n = node(minichess_core::STANDARD_LAYOUT);
    assert_eq!(n.king_square(Player::White), Some(Square::new(4, 0)));
    assert_eq!(n.king_square(Player::Black), Some(Square::new(4, 4)));
    assert_eq!(n.current_player(), Player::White);
    assert_eq!(n.previous_player(), Player::Black);
    assert!(n.move_played().is_none());
}

#[test]
fn test_attacked_squares_cover_moves_and_captures() {
    let n = node("4k/5/1p3/2P2/K4 w");
    let white = n.attacked_squares(Player::White);
    // pawn push, pawn capture, king steps
    assert!(white.contains(Square::new(2, 2)));
    assert!(white.contains(Square::new(1, 2)));
    assert!(white.contains(Square::new(0, 1)));
    assert!(!white.contains(Square::new(4, 4)));
    assert_eq!(n.attacked_squares(Player::White), white);
}

#[test]
fn test_terminal_positions() {
    assert!(node("k4/1Q3/2K2/5/5 b").is_terminal());
    assert!(node("k4/5/1Q3/5/4K b").is_terminal());
    assert!(!node(minichess_core::STANDARD_LAYOUT).is_terminal());
}

#[test]
fn test_king_attacked() {
    let n = node("k4/1Q3/2K2/5/5 b");
    assert!(n.king_attacked(Player::Black));
    assert!(!n.king_attacked(Player::White));
}

#[test]
fn test_shares_line() {
    assert!(shares_line(Square::new(0, 0), Square::new(3, 3)));
    assert!(shares_line(Square::new(2, 0), Square::new(2, 4)));
    assert!(!shares_line(Square::new(0, 0), Square::new(1, 2)));
    assert!(!shares_line(Square::new(1, 1), Square::new(1, 1)));
}
