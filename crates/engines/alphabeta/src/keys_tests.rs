use super::*;
use minichess_core::{Board, MoveOption, BOARD_HEIGHT, BOARD_WIDTH};

fn table() -> PositionKeyTable {
    PositionKeyTable::with_seed(BOARD_WIDTH, BOARD_HEIGHT, 7)
}

#[test]
fn test_keys_are_unique() {
    let keys = table();
    let mut seen = HashSet::new();
    for owner in Player::ALL {
        for kind in PieceKind::ALL {
            for y in 0..BOARD_HEIGHT {
                for x in 0..BOARD_WIDTH {
                    let key = keys.key_for(kind, owner, Square::new(x, y)).unwrap();
                    assert!(seen.insert(key), "duplicate piece key");
                }
            }
        }
    }
    for player in Player::ALL {
        assert!(seen.insert(keys.turn_key(player)), "turn key collision");
    }
    assert_eq!(seen.len(), 2 * 6 * 25 + 2);
}

#[test]
fn test_seeded_tables_match() {
    let a = table();
    let b = table();
    let sq = Square::new(3, 1);
    assert_eq!(
        a.key_for(PieceKind::Right, Player::Black, sq).unwrap(),
        b.key_for(PieceKind::Right, Player::Black, sq).unwrap()
    );
    assert_eq!(a.turn_key(Player::White), b.turn_key(Player::White));
}

#[test]
fn test_missing_key_is_an_error() {
    let keys = table();
    let err = keys
        .key_for(PieceKind::Pawn, Player::White, Square::new(5, 0))
        .unwrap_err();
    assert_eq!(
        err,
        SearchError::MissingKey {
            kind: PieceKind::Pawn,
            owner: Player::White,
            square: Square::new(5, 0),
        }
    );
}

#[test]
fn test_geometry_mismatch_is_an_error() {
    let keys = PositionKeyTable::with_seed(4, 4, 1);
    assert!(matches!(
        keys.signature(&Board::standard()),
        Err(SearchError::GeometryMismatch { .. })
    ));
}

#[test]
fn test_side_to_move_changes_signature() {
    let keys = table();
    let white = Board::from_layout("4k/5/5/5/K4 w").unwrap();
    let black = Board::from_layout("4k/5/5/5/K4 b").unwrap();
    assert_ne!(
        keys.signature(&white).unwrap(),
        keys.signature(&black).unwrap()
    );
}

#[test]
fn test_child_signature_matches_scratch_after_capture_and_promotion() {
    let keys = table();
    let parent = Board::from_layout("1r2k/P4/5/5/K4 w").unwrap();
    let pawn = parent.piece_at(Square::new(0, 3)).unwrap();
    let mv = PieceMove::new(pawn, MoveOption::capture(Square::new(1, 4)));

    let mut child = parent.clone();
    child.apply_move(&mv.piece, &mv.option).unwrap();
    let landed = child.piece_at(mv.to()).unwrap();
    assert_eq!(landed.kind, PieceKind::Queen);

    let parent_sig = keys.signature(&parent).unwrap();
    let incremental = keys
        .child_signature(parent_sig, &parent, &mv, &landed, child.side_to_move())
        .unwrap();
    assert_eq!(incremental, keys.signature(&child).unwrap());
}
