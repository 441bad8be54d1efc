use crate::board::{Board, DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS};
use crate::types::*;

/// Pseudo-legal move options for a single piece.
pub fn move_options(board: &Board, piece: &Piece) -> Vec<MoveOption> {
    let mut out = Vec::with_capacity(16);
    match piece.kind {
        PieceKind::Pawn => gen_pawn(board, piece, &mut out),
        PieceKind::Knight => gen_steps(board, piece, &KNIGHT_DELTAS, &mut out),
        PieceKind::King => gen_steps(board, piece, &KING_DELTAS, &mut out),
        PieceKind::Bishop => gen_slider(board, piece, &DIAGONALS, &mut out),
        PieceKind::Queen => {
            gen_slider(board, piece, &DIAGONALS, &mut out);
            gen_slider(board, piece, &ORTHOGONALS, &mut out);
        }
        PieceKind::Right => {
            gen_slider(board, piece, &ORTHOGONALS, &mut out);
            gen_steps(board, piece, &KNIGHT_DELTAS, &mut out);
        }
    }
    out
}

/// Generate all legal moves for the side to move, returning a fresh vector.
pub fn legal_moves(board: &Board) -> Vec<PieceMove> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(board, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(board: &Board, out: &mut Vec<PieceMove>) {
    out.clear();
    let mover = board.side_to_move();
    for piece in board.player_pieces(mover) {
        for option in move_options(board, &piece) {
            let mut scratch = board.clone();
            if scratch.apply_move(&piece, &option).is_err() {
                continue;
            }
            if !scratch.in_check(mover) {
                out.push(PieceMove::new(piece, option));
            }
        }
    }
}

fn push_target(board: &Board, piece: &Piece, to: Square, out: &mut Vec<MoveOption>) -> bool {
    match board.piece_at(to) {
        None => {
            out.push(MoveOption::quiet(to));
            true
        }
        Some(pc) if pc.owner != piece.owner => {
            out.push(MoveOption::capture(to));
            false
        }
        _ => false,
    }
}

fn gen_pawn(board: &Board, piece: &Piece, out: &mut Vec<MoveOption>) {
    let dir = piece.owner.forward();
    if let Some(to) = piece.square.offset(0, dir, BOARD_WIDTH, BOARD_HEIGHT) {
        if board.piece_at(to).is_none() {
            out.push(MoveOption::quiet(to));
        }
    }
    for dx in [-1, 1] {
        if let Some(to) = piece.square.offset(dx, dir, BOARD_WIDTH, BOARD_HEIGHT) {
            if let Some(target) = board.piece_at(to) {
                if target.owner != piece.owner {
                    out.push(MoveOption::capture(to));
                }
            }
        }
    }
}

fn gen_steps(board: &Board, piece: &Piece, deltas: &[(i8, i8)], out: &mut Vec<MoveOption>) {
    for &(dx, dy) in deltas {
        if let Some(to) = piece.square.offset(dx, dy, BOARD_WIDTH, BOARD_HEIGHT) {
            push_target(board, piece, to, out);
        }
    }
}

fn gen_slider(board: &Board, piece: &Piece, dirs: &[(i8, i8)], out: &mut Vec<MoveOption>) {
    for &(dx, dy) in dirs {
        let mut cur = piece.square.offset(dx, dy, BOARD_WIDTH, BOARD_HEIGHT);
        while let Some(to) = cur {
            if !push_target(board, piece, to, out) {
                break;
            }
            cur = to.offset(dx, dy, BOARD_WIDTH, BOARD_HEIGHT);
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
