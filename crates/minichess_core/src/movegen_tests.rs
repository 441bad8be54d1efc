use super::*;

#[test]
fn test_standard_layout_moves() {
    let board = Board::standard();
    let moves = legal_moves(&board);
    // Five pawn pushes, two knight jumps and the right's knight jump.
    assert_eq!(moves.len(), 8);
}

#[test]
fn test_right_moves_like_rook_and_knight() {
    let board = Board::from_layout("4k/5/2R2/5/K4 w").unwrap();
    let right = board.piece_at(Square::new(2, 2)).unwrap();
    let options = move_options(&board, &right);
    assert_eq!(options.len(), 16);
    assert!(options.iter().any(|o| o.position == Square::new(2, 4)));
    assert!(options.iter().any(|o| o.position == Square::new(3, 4)));
}

#[test]
fn test_pawn_single_step_and_diagonal_capture() {
    let board = Board::from_layout("4k/5/1p3/2P2/K4 w").unwrap();
    let pawn = board.piece_at(Square::new(2, 1)).unwrap();
    let options = move_options(&board, &pawn);
    assert_eq!(options.len(), 2);
    assert!(options.contains(&MoveOption::quiet(Square::new(2, 2))));
    assert!(options.contains(&MoveOption::capture(Square::new(1, 2))));
}

#[test]
fn test_pinned_piece_cannot_move() {
    // The knight shields its king from the black right on the e-file.
    let board = Board::from_layout("k3r/5/5/4N/4K w").unwrap();
    let moves = legal_moves(&board);
    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(|mv| mv.piece.kind == PieceKind::King));
}
