use crate::{board::Board, movegen::legal_moves_into, types::PieceMove};

/// Pure perft node count.
/// Counts all legal positions reachable from `board` in exactly `depth` plies.
pub fn perft(board: &Board, depth: u8) -> u64 {
    fn inner(board: &Board, depth: u8, layers: &mut [Vec<PieceMove>]) -> u64 {
        if depth == 0 {
            return 1;
        }
        let Some((buf, rest)) = layers.split_first_mut() else {
            return 1;
        };

        legal_moves_into(board, buf);

        let mut nodes = 0u64;
        for mv in buf.iter() {
            let mut child = board.clone();
            if child.apply_move(&mv.piece, &mv.option).is_ok() {
                nodes += inner(&child, depth - 1, rest);
            }
        }
        nodes
    }

    let mut layers = vec![Vec::with_capacity(32); depth as usize];
    inner(board, depth, &mut layers[..])
}
