//! Cheap move ordering.
//!
//! Children are searched best-first for the side to move so that alpha-beta
//! cuts off early. The score never feeds into the search result itself.

use std::cmp::Ordering;

use minichess_core::GameBoard;

use crate::eval::Evaluator;
use crate::node::{GameNode, NodeId};
use crate::tree::GameTree;

impl Evaluator {
    /// Ordering score of a child node, relative to the player who moved into it.
    pub fn score_child<B: GameBoard>(&self, child: &GameNode<B>) -> f64 {
        child.order_score_or_init(|| {
            let Some(terms) = self.move_terms(child) else {
                return 0.0;
            };
            let w = &self.weights;
            let o = &self.ordering;
            let mut score = terms.capture_delta * w.capture * o.capture
                - terms.unsafe_value * w.unsafe_move * o.unsafe_move;
            if terms.promotion {
                score += w.promotion * o.promotion;
            }
            if terms.check {
                score += w.check * o.check;
            }
            if terms.protected {
                score += w.protected * o.protected;
            }
            score
        })
    }

    /// Sort `id`'s children by descending ordering score, keeping generation
    /// order among equals. The sorted order is written back to the node.
    pub fn order_children<B: GameBoard>(&self, tree: &mut GameTree<B>, id: NodeId) -> Vec<NodeId> {
        let mut scored: Vec<(NodeId, f64)> = tree
            .node(id)
            .children()
            .iter()
            .map(|&c| (c, self.score_child(tree.node(c))))
            .collect();
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        let ordered: Vec<NodeId> = scored.into_iter().map(|(c, _)| c).collect();
        tree.set_children(id, ordered.clone());
        ordered
    }
}

#[cfg(test)]
#[path = "ordering_tests.rs"]
mod ordering_tests;
