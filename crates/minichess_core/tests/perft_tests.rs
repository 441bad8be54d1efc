//! Move generation node counts for the 5x5 variant.

use rayon::prelude::*;

use minichess_core::{perft, Board};

#[test]
fn perft_standard_layout_depth_one() {
    assert_eq!(perft(&Board::standard(), 1), 8);
}

#[test]
fn perft_standard_layout_depth_two() {
    // Each white advance onto the middle rank adds diagonal captures for the
    // black pawns beside it and blocks the pawn in front of it.
    assert_eq!(perft(&Board::standard(), 2), 69);
}

#[test]
fn perft_depth_zero_is_one() {
    assert_eq!(perft(&Board::standard(), 0), 1);
}

#[test]
fn perft_mated_position_has_no_children() {
    let board = Board::from_layout("k4/1Q3/2K2/5/5 b").unwrap();
    assert_eq!(perft(&board, 1), 0);
    assert_eq!(perft(&board, 3), 0);
}

#[test]
fn perft_divide_matches_total() {
    let layouts = [
        "rnbqk/ppppp/5/PPPPP/RNBQK w",
        "k1K2/bp3/5/5/1Q3 w",
        "1r2k/P4/5/5/K4 w",
        "4k/5/5/5/K4 w",
    ];

    layouts.par_iter().for_each(|layout| {
        let board = Board::from_layout(layout).unwrap();
        let divided: u64 = board
            .legal_moves()
            .par_iter()
            .map(|mv| {
                let mut child = board.clone();
                child.apply_move(&mv.piece, &mv.option).unwrap();
                perft(&child, 2)
            })
            .sum();
        assert_eq!(divided, perft(&board, 3), "layout {layout}");
    });
}
