//! Arena of game nodes forming the search DAG, and node expansion.

use minichess_core::{GameBoard, Piece, PieceKind, PieceMove};
use tracing::warn;

use crate::error::SearchOutcome;
use crate::keys::PositionKeyTable;
use crate::node::{GameNode, NodeId};
use crate::tt::TranspositionTable;

/// Nodes addressed by index. Parent and child links are index lists, so a
/// position reached along several move orders is stored once with several
/// parents.
#[derive(Debug)]
pub struct GameTree<B> {
    nodes: Vec<GameNode<B>>,
    skipped_moves: u64,
}

impl<B: GameBoard> GameTree<B> {
    /// A tree holding only `root`, registered as canonical for its signature.
    pub fn new(root: GameNode<B>, tt: &mut TranspositionTable) -> Self {
        tt.register_node(root.signature(), NodeId(0));
        Self {
            nodes: vec![root],
            skipped_moves: 0,
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Panics if `id` does not come from this tree.
    pub fn node(&self, id: NodeId) -> &GameNode<B> {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Candidate moves dropped during expansion because the board misbehaved.
    pub fn skipped_moves(&self) -> u64 {
        self.skipped_moves
    }

    pub(crate) fn set_children(&mut self, id: NodeId, children: Vec<NodeId>) {
        self.nodes[id.0].children = children;
    }

    /// Materialize the children of `id`.
    ///
    /// Each legal move is played on a clone of the node's board. The child's
    /// signature is derived incrementally; if the table already knows it the
    /// existing node gains a parent link, otherwise a new node is created and
    /// registered. Runs at most once per node.
    pub fn expand(
        &mut self,
        id: NodeId,
        keys: &PositionKeyTable,
        tt: &mut TranspositionTable,
    ) -> SearchOutcome<()> {
        if self.nodes[id.0].expanded {
            return Ok(());
        }
        if self.nodes[id.0].is_terminal() {
            self.nodes[id.0].expanded = true;
            return Ok(());
        }

        // Hash every successor before touching the arena, so a key error
        // leaves the node unexpanded and the tree unchanged.
        let parent = &self.nodes[id.0];
        let mut played = Vec::with_capacity(parent.legal_moves().len());
        let mut skipped = 0;
        for mv in parent.legal_moves() {
            let Some((board, landed)) = play(parent.board(), mv) else {
                skipped += 1;
                continue;
            };
            let signature = keys.child_signature(
                parent.signature(),
                parent.board(),
                mv,
                &landed,
                board.current_player(),
            )?;
            played.push((mv.clone(), board, landed, signature));
        }

        for (mv, board, landed, signature) in played {
            let child = match tt.lookup_node(signature) {
                Some(existing) => existing,
                None => {
                    let parent = &self.nodes[id.0];
                    let captured: Vec<Piece> = mv
                        .option
                        .captures
                        .iter()
                        .filter_map(|&sq| parent.board().piece_at(sq))
                        .collect();
                    let mut kings = parent.kings();
                    if mv.piece.kind == PieceKind::King {
                        kings[mv.piece.owner.idx()] = Some(landed.square);
                    }
                    for victim in &captured {
                        if victim.kind == PieceKind::King {
                            kings[victim.owner.idx()] = None;
                        }
                    }

                    let new_id = NodeId(self.nodes.len());
                    self.nodes
                        .push(GameNode::new(board, signature, Some(mv), captured, kings));
                    tt.register_node(signature, new_id)
                }
            };

            let child_node = &mut self.nodes[child.0];
            if !child_node.parents.contains(&id) {
                child_node.parents.push(id);
            }
            let parent = &mut self.nodes[id.0];
            if !parent.children.contains(&child) {
                parent.children.push(child);
            }
        }
        self.skipped_moves += skipped;
        self.nodes[id.0].expanded = true;
        Ok(())
    }
}

/// Play `mv` on a clone of `board`, returning the new board and the piece that
/// landed on the destination. `None` if the board rejected the move or the
/// destination does not hold the mover (or its promotion).
fn play<B: GameBoard>(board: &B, mv: &PieceMove) -> Option<(B, Piece)> {
    let mut next = board.clone();
    if let Err(err) = next.apply_move(&mv.piece, &mv.option) {
        warn!(%mv, error = %err, "skipping move the board rejected");
        return None;
    }
    match next.piece_at(mv.to()) {
        Some(landed)
            if landed.owner == mv.piece.owner
                && (landed.kind == mv.piece.kind || mv.piece.kind == PieceKind::Pawn) =>
        {
            Some((next, landed))
        }
        other => {
            warn!(%mv, landed = ?other, "skipping move with unexpected destination");
            None
        }
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tree_tests;
