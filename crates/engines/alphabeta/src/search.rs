//! Minimax with alpha-beta pruning over the node graph, with transposition
//! table cutoffs, move ordering and iterative deepening.

use minichess_core::{GameBoard, Player, SearchLimits, SearchResult, TimeControl};
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::error::{SearchError, SearchOutcome};
use crate::eval::Evaluator;
use crate::keys::PositionKeyTable;
use crate::node::{GameNode, NodeId};
use crate::tree::GameTree;
use crate::tt::{Bound, TranspositionTable};

/// One search session: a node graph and a transposition table grown from a
/// single root, scored for a single optimizing player.
///
/// Nothing is shared between sessions, so a fresh session never sees bounds
/// computed for another root.
pub struct SearchSession<'a, B> {
    keys: &'a PositionKeyTable,
    evaluator: &'a Evaluator,
    time: &'a TimeControl,
    agent: Player,
    tree: GameTree<B>,
    tt: TranspositionTable,
    nodes: u64,
}

impl<'a, B: GameBoard> SearchSession<'a, B> {
    pub fn new(
        board: B,
        agent: Player,
        keys: &'a PositionKeyTable,
        evaluator: &'a Evaluator,
        time: &'a TimeControl,
    ) -> SearchOutcome<Self> {
        let root = GameNode::root(board, keys)?;
        Ok(Self::with_root(root, agent, keys, evaluator, time))
    }

    pub fn with_root(
        root: GameNode<B>,
        agent: Player,
        keys: &'a PositionKeyTable,
        evaluator: &'a Evaluator,
        time: &'a TimeControl,
    ) -> Self {
        let mut tt = TranspositionTable::new();
        let tree = GameTree::new(root, &mut tt);
        Self {
            keys,
            evaluator,
            time,
            agent,
            tree,
            tt,
            nodes: 0,
        }
    }

    pub fn tree(&self) -> &GameTree<B> {
        &self.tree
    }

    pub fn table(&self) -> &TranspositionTable {
        &self.tt
    }

    pub fn agent(&self) -> Player {
        self.agent
    }

    /// Nodes visited by `alphabeta` so far.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn expand(&mut self, id: NodeId) -> SearchOutcome<()> {
        self.tree.expand(id, self.keys, &mut self.tt)
    }

    /// Expand `id` and return its children, most promising first.
    pub fn ordered_children(&mut self, id: NodeId) -> SearchOutcome<Vec<NodeId>> {
        self.expand(id)?;
        Ok(self.evaluator.order_children(&mut self.tree, id))
    }

    /// Evaluate a leaf for the session's agent.
    pub fn evaluate(&self, id: NodeId) -> f64 {
        self.evaluator.evaluate(self.tree.node(id), self.agent)
    }

    /// A new session rooted at child `id` of this session's root, carrying
    /// the move that produced it.
    pub fn spawn_child(&self, id: NodeId) -> SearchOutcome<Self> {
        let node = self.tree.node(id);
        let mut root = GameNode::root(node.board().clone(), self.keys)?;
        if let Some(mv) = node.move_played() {
            root = root.with_move(mv.clone(), node.captured().to_vec());
        }
        Ok(Self::with_root(root, self.agent, self.keys, self.evaluator, self.time))
    }

    /// Minimax value of `id` searched `depth` plies deep within `(alpha, beta)`.
    ///
    /// The returned value may fall outside the window; the stored bound says
    /// which side of it the true value lies on.
    pub fn alphabeta(
        &mut self,
        id: NodeId,
        mut alpha: f64,
        mut beta: f64,
        depth: u8,
    ) -> SearchOutcome<f64> {
        self.nodes += 1;
        if self.time.check_nodes(self.nodes)
            || (self.time.should_check_time(self.nodes) && self.time.check_time())
        {
            return Err(SearchError::Interrupted);
        }

        let signature = self.tree.node(id).signature();
        if let Some(entry) = self.tt.lookup_result(signature) {
            if entry.depth >= depth {
                match entry.bound {
                    Bound::Exact => return Ok(entry.score),
                    Bound::Lower => alpha = alpha.max(entry.score),
                    Bound::Upper => beta = beta.min(entry.score),
                }
                if alpha >= beta {
                    trace!(signature, score = entry.score, "table cutoff");
                    return Ok(entry.score);
                }
            }
        }

        if depth == 0 || self.tree.node(id).is_terminal() {
            let score = self.evaluate(id);
            self.tt.store_result(signature, depth, score, Bound::Exact);
            return Ok(score);
        }

        let children = self.ordered_children(id)?;
        if children.is_empty() {
            // Every candidate was skipped by the expander.
            let score = self.evaluate(id);
            self.tt.store_result(signature, depth, score, Bound::Exact);
            return Ok(score);
        }

        let maximizing = self.tree.node(id).current_player() == self.agent;
        let (floor, ceiling) = (alpha, beta);
        let mut best = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        for child in children {
            let score = self.alphabeta(child, alpha, beta, depth - 1)?;
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if beta <= alpha {
                break;
            }
        }

        let bound = if best <= floor {
            Bound::Upper
        } else if best >= ceiling {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.tt.store_result(signature, depth, best, bound);
        Ok(best)
    }

    /// One full pass at `depth`: every root child searched at `depth - 1` with
    /// an open window. Returns the first child with the strictly highest
    /// score, or `None` when the root has no children.
    pub fn search_root(&mut self, depth: u8) -> SearchOutcome<Option<(NodeId, f64)>> {
        let root = self.tree.root();
        let children = self.ordered_children(root)?;
        let mut scores = Vec::with_capacity(children.len());
        for child in children {
            let score = self.alphabeta(child, f64::NEG_INFINITY, f64::INFINITY, depth.saturating_sub(1))?;
            scores.push((child, score));
        }
        Ok(pick_best(scores))
    }
}

/// First entry with the strictly highest score.
fn pick_best(scores: impl IntoIterator<Item = (NodeId, f64)>) -> Option<(NodeId, f64)> {
    let mut best: Option<(NodeId, f64)> = None;
    for (child, score) in scores {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((child, score)),
        }
    }
    best
}

/// Drives iterative deepening for one root position.
pub struct SearchEngine<'a> {
    keys: &'a PositionKeyTable,
    evaluator: &'a Evaluator,
    /// Search root children on the rayon pool once the root has at least
    /// this many of them.
    parallel_threshold: Option<usize>,
}

impl<'a> SearchEngine<'a> {
    pub fn new(
        keys: &'a PositionKeyTable,
        evaluator: &'a Evaluator,
        parallel_threshold: Option<usize>,
    ) -> Self {
        Self {
            keys,
            evaluator,
            parallel_threshold,
        }
    }

    /// Best move for `agent` on `board`.
    ///
    /// Runs depth 1, 2, ... up to `limits.depth` when `limits.iterative` is
    /// set, otherwise one pass at `limits.depth` (at least 1). A pass cut off
    /// by the clock is discarded and the last completed pass answers. The
    /// caller starts the clock.
    pub fn search<B: GameBoard + Send>(
        &self,
        board: &B,
        agent: Player,
        limits: &SearchLimits,
    ) -> SearchOutcome<SearchResult> {
        let time = &limits.time_control;
        let max_depth = limits.depth.max(1);
        let first_depth = if limits.iterative { 1 } else { max_depth };

        let mut root = SearchSession::new(board.clone(), agent, self.keys, self.evaluator, time)?;
        let root_id = root.tree.root();
        let ordered = root.ordered_children(root_id)?;
        if ordered.is_empty() {
            debug!(%agent, "no legal move at the root");
            return Ok(SearchResult {
                skipped_moves: root.tree.skipped_moves(),
                ..SearchResult::no_move()
            });
        }

        let mut workers = match self.parallel_threshold {
            Some(threshold) if ordered.len() >= threshold => ordered
                .iter()
                .map(|&child| root.spawn_child(child))
                .collect::<SearchOutcome<Vec<_>>>()?,
            _ => Vec::new(),
        };

        let mut completed: Option<(NodeId, f64, u8)> = None;
        let mut stopped = false;
        for depth in first_depth..=max_depth {
            if time.check_time() {
                stopped = true;
                break;
            }
            let pass = if workers.is_empty() {
                root.search_root(depth)
            } else {
                parallel_pass(&mut workers, &ordered, depth)
            };
            match pass {
                Ok(Some((child, score))) => {
                    debug!(depth, score, nodes = root.nodes, "completed depth pass");
                    completed = Some((child, score, depth));
                    if score.is_infinite() {
                        break;
                    }
                }
                Ok(None) => break,
                Err(SearchError::Interrupted) => {
                    debug!(depth, "depth pass interrupted");
                    stopped = true;
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        let (best, score, depth) = match completed {
            Some(found) => found,
            None => {
                warn!("no depth pass completed, falling back to the first ordered move");
                (ordered[0], 0.0, 0)
            }
        };

        let nodes = root.nodes + workers.iter().map(|w| w.nodes).sum::<u64>();
        let skipped_moves =
            root.tree.skipped_moves() + workers.iter().map(|w| w.tree.skipped_moves()).sum::<u64>();

        Ok(SearchResult {
            best_move: root.tree.node(best).move_played().cloned(),
            score,
            depth,
            nodes,
            stopped,
            skipped_moves,
        })
    }
}

/// Search every root child in its own session on the rayon pool and compare
/// the scores in ordered-child order.
fn parallel_pass<B: GameBoard + Send>(
    workers: &mut [SearchSession<'_, B>],
    ordered: &[NodeId],
    depth: u8,
) -> SearchOutcome<Option<(NodeId, f64)>> {
    let scores: Vec<SearchOutcome<f64>> = workers
        .par_iter_mut()
        .map(|worker| {
            let root = worker.tree.root();
            worker.alphabeta(root, f64::NEG_INFINITY, f64::INFINITY, depth - 1)
        })
        .collect();

    let mut results = Vec::with_capacity(scores.len());
    for (&child, score) in ordered.iter().zip(scores) {
        results.push((child, score?));
    }
    Ok(pick_best(results))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
