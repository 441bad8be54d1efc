//! Heuristic position evaluation.
//!
//! Scores are from the point of view of one optimizing player (the agent):
//! positive is good for the agent. Terminal positions score `+inf`, `-inf` or
//! `0`; everything else is a finite weighted sum of features.

use minichess_core::{GameBoard, GameOutcome, PieceKind, Player, Square};
use serde::{Deserialize, Serialize};

use crate::node::GameNode;

/// A value per piece kind.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PieceTable {
    pub king: f64,
    pub queen: f64,
    pub right: f64,
    pub knight: f64,
    pub bishop: f64,
    pub pawn: f64,
}

impl PieceTable {
    pub fn get(&self, kind: PieceKind) -> f64 {
        match kind {
            PieceKind::King => self.king,
            PieceKind::Queen => self.queen,
            PieceKind::Right => self.right,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Pawn => self.pawn,
        }
    }
}

/// Evaluation weights. Penalties are stored as positive magnitudes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub piece_values: PieceTable,
    /// Per-kind value of standing on a centre square.
    pub centre_values: PieceTable,
    pub centre: f64,
    pub mobility: f64,
    /// Penalty per attacked own piece, times its value.
    pub safety: f64,
    /// Penalty when the agent's king is attacked.
    pub king_safety: f64,
    /// Bonus when the opponent's king is attacked but can step away.
    pub enemy_king_safety: f64,
    /// Bonus when the opponent's king is attacked with nowhere to go.
    pub checkmate: f64,
    pub capture: f64,
    pub check: f64,
    pub promotion: f64,
    /// Penalty for landing on an attacked square, times the mover's value.
    pub unsafe_move: f64,
    /// Bonus for landing on a defended square.
    pub protected: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            piece_values: PieceTable {
                king: 20.0,
                queen: 9.0,
                right: 8.0,
                knight: 4.0,
                bishop: 3.0,
                pawn: 1.0,
            },
            centre_values: PieceTable {
                king: -5.0,
                queen: 1.0,
                right: 2.0,
                knight: 4.0,
                bishop: 7.0,
                pawn: 8.0,
            },
            centre: 0.06,
            mobility: 0.05,
            safety: 0.45,
            king_safety: 3.0,
            enemy_king_safety: 2.0,
            checkmate: 500.0,
            capture: 1.1,
            check: 0.45,
            promotion: 2.0,
            unsafe_move: 0.7,
            protected: 0.8,
        }
    }
}

/// Multipliers applied to the move terms when ordering children.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderingWeights {
    pub capture: f64,
    pub promotion: f64,
    pub check: f64,
    pub unsafe_move: f64,
    pub protected: f64,
}

impl Default for OrderingWeights {
    fn default() -> Self {
        Self {
            capture: 1.4,
            promotion: 1.2,
            check: 1.1,
            unsafe_move: 1.3,
            protected: 1.0,
        }
    }
}

/// The five central squares of a 5x5 board.
pub const CENTRE: [Square; 5] = [
    Square::new(2, 2),
    Square::new(1, 2),
    Square::new(2, 1),
    Square::new(3, 2),
    Square::new(2, 3),
];

/// Terms describing the move that produced a node, relative to the mover.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveTerms {
    /// Captured value minus the mover's value; zero for quiet moves.
    pub capture_delta: f64,
    pub promotion: bool,
    pub check: bool,
    /// Destination attacked by the opponent, valued by the landed piece.
    pub unsafe_value: f64,
    pub protected: bool,
}

#[derive(Clone, Debug, Default)]
pub struct Evaluator {
    pub weights: EvalWeights,
    pub ordering: OrderingWeights,
}

impl Evaluator {
    pub fn new(weights: EvalWeights, ordering: OrderingWeights) -> Self {
        Self { weights, ordering }
    }

    /// Score `node` for `agent`.
    pub fn evaluate<B: GameBoard>(&self, node: &GameNode<B>, agent: Player) -> f64 {
        if node.is_terminal() {
            return terminal_score(node, agent);
        }
        let board = node.board();
        self.material(board, agent)
            + self.centre(board, agent)
            + self.safety(node, agent)
            + self.mobility(node, agent)
            + self.king_safety(node, agent)
            + self.move_bonus(node, agent)
    }

    /// Agent material minus opponent material.
    pub fn material<B: GameBoard>(&self, board: &B, agent: Player) -> f64 {
        board
            .pieces()
            .iter()
            .map(|pc| signed(pc.owner, agent, self.weights.piece_values.get(pc.kind)))
            .sum()
    }

    pub fn centre<B: GameBoard>(&self, board: &B, agent: Player) -> f64 {
        CENTRE
            .iter()
            .filter_map(|&sq| board.piece_at(sq))
            .map(|pc| signed(pc.owner, agent, self.weights.centre_values.get(pc.kind)))
            .sum::<f64>()
            * self.weights.centre
    }

    /// Penalty for agent pieces standing where the opponent can capture.
    pub fn safety<B: GameBoard>(&self, node: &GameNode<B>, agent: Player) -> f64 {
        let attacked = node.attacked_squares(agent.other());
        let exposed: f64 = node
            .board()
            .player_pieces(agent)
            .iter()
            .filter(|pc| attacked.contains(pc.square))
            .map(|pc| self.weights.piece_values.get(pc.kind))
            .sum();
        -self.weights.safety * exposed
    }

    pub fn mobility<B: GameBoard>(&self, node: &GameNode<B>, agent: Player) -> f64 {
        let count = node.legal_moves().len() as f64;
        signed(node.current_player(), agent, count * self.weights.mobility)
    }

    pub fn king_safety<B: GameBoard>(&self, node: &GameNode<B>, agent: Player) -> f64 {
        let w = &self.weights;
        let mut score = 0.0;
        if node.king_attacked(agent) {
            score -= w.king_safety;
        }
        let opponent = agent.other();
        if node.king_attacked(opponent) {
            score += if king_can_escape(node, opponent) {
                w.enemy_king_safety
            } else {
                w.checkmate
            };
        }
        score
    }

    /// Bonus for the move that produced `node`, signed by whether the agent made it.
    pub fn move_bonus<B: GameBoard>(&self, node: &GameNode<B>, agent: Player) -> f64 {
        let Some(terms) = self.move_terms(node) else {
            return 0.0;
        };
        let w = &self.weights;
        let mut bonus = terms.capture_delta * w.capture - terms.unsafe_value * w.unsafe_move;
        if terms.promotion {
            bonus += w.promotion;
        }
        if terms.check {
            bonus += w.check;
        }
        if terms.protected {
            bonus += w.protected;
        }
        signed(node.previous_player(), agent, bonus)
    }

    /// Features of the move that produced `node`, or `None` at a search root.
    pub fn move_terms<B: GameBoard>(&self, node: &GameNode<B>) -> Option<MoveTerms> {
        let mv = node.move_played()?;
        let values = &self.weights.piece_values;
        let mover = mv.piece.owner;
        let board = node.board();
        let dest = mv.to();

        let capture_delta = if node.captured().is_empty() {
            0.0
        } else {
            node.captured().iter().map(|pc| values.get(pc.kind)).sum::<f64>()
                - values.get(mv.piece.kind)
        };
        let landed_value = board
            .piece_at(dest)
            .map_or(values.get(mv.piece.kind), |pc| values.get(pc.kind));

        Some(MoveTerms {
            capture_delta,
            promotion: mv.piece.kind == PieceKind::Pawn
                && (dest.y == 0 || dest.y + 1 == board.height()),
            check: node.king_attacked(mover.other()),
            unsafe_value: if node.attacked_squares(mover.other()).contains(dest) {
                landed_value
            } else {
                0.0
            },
            protected: board.is_square_attacked(dest, mover),
        })
    }
}

/// Value of a terminal node for `agent`.
pub fn terminal_score<B: GameBoard>(node: &GameNode<B>, agent: Player) -> f64 {
    let to_move = node.current_player();
    if node.legal_moves().is_empty() && node.king_attacked(to_move) {
        return if to_move == agent {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    match node.board().result() {
        Some(GameOutcome::Checkmate { winner }) if winner == agent => f64::INFINITY,
        Some(GameOutcome::Checkmate { .. }) => f64::NEG_INFINITY,
        _ => 0.0,
    }
}

/// Whether `player`'s king has a step to a square the opponent does not attack.
fn king_can_escape<B: GameBoard>(node: &GameNode<B>, player: Player) -> bool {
    if node.current_player() == player {
        return node
            .legal_moves()
            .iter()
            .any(|mv| mv.piece.kind == PieceKind::King);
    }
    let Some(king) = node
        .king_square(player)
        .and_then(|sq| node.board().piece_at(sq))
    else {
        return true;
    };
    // Off-turn king: step it on a scratch board so it no longer shields its own square.
    node.board().move_options(&king).iter().any(|opt| {
        let mut scratch = node.board().clone();
        scratch.apply_move(&king, opt).is_ok()
            && !scratch.is_square_attacked(opt.position, player.other())
    })
}

#[inline]
fn signed(owner: Player, agent: Player, value: f64) -> f64 {
    if owner == agent {
        value
    } else {
        -value
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
