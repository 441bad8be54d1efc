//! One position in the search graph.
//!
//! A node owns an immutable board snapshot. Everything derived from the board
//! (legal moves, attacked squares, terminal status, ordering score) is
//! computed on first use and kept for the node's lifetime.

use std::cell::OnceCell;

use minichess_core::{GameBoard, Piece, PieceKind, PieceMove, Player, Square, SquareSet};

use crate::error::SearchOutcome;
use crate::keys::PositionKeyTable;

/// Index of a node inside its `GameTree` arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Debug)]
pub struct GameNode<B> {
    board: B,
    signature: u64,
    pub(crate) parents: Vec<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) expanded: bool,
    /// Move that first produced this position, `None` for a search root.
    mv: Option<PieceMove>,
    /// Pieces removed by `mv`, as they stood on the parent board.
    captured: Vec<Piece>,
    current_player: Player,
    previous_player: Player,
    kings: [Option<Square>; 2],
    legal: OnceCell<Vec<PieceMove>>,
    attacked: [OnceCell<SquareSet>; 2],
    terminal: OnceCell<bool>,
    order_score: OnceCell<f64>,
}

impl<B: GameBoard> GameNode<B> {
    /// A search root: signature computed from scratch, kings located by scanning.
    pub fn root(board: B, keys: &PositionKeyTable) -> SearchOutcome<Self> {
        let signature = keys.signature(&board)?;
        let kings = scan_kings(&board);
        Ok(Self::new(board, signature, None, Vec::new(), kings))
    }

    pub(crate) fn new(
        board: B,
        signature: u64,
        mv: Option<PieceMove>,
        captured: Vec<Piece>,
        kings: [Option<Square>; 2],
    ) -> Self {
        let current_player = board.current_player();
        Self {
            board,
            signature,
            parents: Vec::new(),
            children: Vec::new(),
            expanded: false,
            mv,
            captured,
            current_player,
            previous_player: current_player.other(),
            kings,
            legal: OnceCell::new(),
            attacked: [OnceCell::new(), OnceCell::new()],
            terminal: OnceCell::new(),
            order_score: OnceCell::new(),
        }
    }

    /// Attach the move (and its captures) that led here. Used when a child
    /// position becomes the root of its own search session.
    pub fn with_move(mut self, mv: PieceMove, captured: Vec<Piece>) -> Self {
        self.mv = Some(mv);
        self.captured = captured;
        self
    }

    pub fn board(&self) -> &B {
        &self.board
    }

    pub fn signature(&self) -> u64 {
        self.signature
    }

    pub fn parents(&self) -> &[NodeId] {
        &self.parents
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn move_played(&self) -> Option<&PieceMove> {
        self.mv.as_ref()
    }

    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    /// Side to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Side that just moved.
    pub fn previous_player(&self) -> Player {
        self.previous_player
    }

    pub fn king_square(&self, player: Player) -> Option<Square> {
        self.kings[player.idx()]
    }

    pub(crate) fn kings(&self) -> [Option<Square>; 2] {
        self.kings
    }

    /// Whether `player`'s king stands on a square the opponent attacks.
    pub fn king_attacked(&self, player: Player) -> bool {
        self.king_square(player)
            .is_some_and(|sq| self.board.is_square_attacked(sq, player.other()))
    }

    /// Legal moves for the side to move.
    ///
    /// King moves are always tried on a scratch board. Other moves are only
    /// tried when the king is already attacked or the piece shares a line
    /// with its own king, since nothing else can expose the king.
    pub fn legal_moves(&self) -> &[PieceMove] {
        self.legal.get_or_init(|| self.generate_legal())
    }

    fn generate_legal(&self) -> Vec<PieceMove> {
        let mover = self.current_player;
        let king = self.king_square(mover);
        let in_check = self.king_attacked(mover);

        let mut out = Vec::new();
        for piece in self.board.player_pieces(mover) {
            let must_simulate = piece.kind == PieceKind::King
                || in_check
                || king.is_some_and(|k| shares_line(k, piece.square));
            for option in self.board.move_options(&piece) {
                let mv = PieceMove::new(piece, option);
                if !must_simulate || self.keeps_king_safe(&mv) {
                    out.push(mv);
                }
            }
        }
        out
    }

    fn keeps_king_safe(&self, mv: &PieceMove) -> bool {
        let mut scratch = self.board.clone();
        if scratch.apply_move(&mv.piece, &mv.option).is_err() {
            // Left for the expander to skip and count.
            return true;
        }
        let king = if mv.piece.kind == PieceKind::King {
            Some(mv.to())
        } else {
            self.king_square(mv.piece.owner)
        };
        match king {
            Some(sq) => !scratch.is_square_attacked(sq, mv.piece.owner.other()),
            None => true,
        }
    }

    /// Every square `player` could move to or capture on in one ply.
    pub fn attacked_squares(&self, player: Player) -> SquareSet {
        *self.attacked[player.idx()].get_or_init(|| {
            let mut set = SquareSet::EMPTY;
            for piece in self.board.player_pieces(player) {
                for option in self.board.move_options(&piece) {
                    set.insert(option.position);
                    set.extend(option.captures.iter().copied());
                }
            }
            set
        })
    }

    /// No legal move, or the board reports a result.
    pub fn is_terminal(&self) -> bool {
        *self
            .terminal
            .get_or_init(|| self.legal_moves().is_empty() || self.board.result().is_some())
    }

    pub(crate) fn order_score_or_init(&self, score: impl FnOnce() -> f64) -> f64 {
        *self.order_score.get_or_init(score)
    }
}

pub(crate) fn scan_kings<B: GameBoard>(board: &B) -> [Option<Square>; 2] {
    let mut kings = [None, None];
    for pc in board.pieces() {
        if pc.kind == PieceKind::King {
            kings[pc.owner.idx()] = Some(pc.square);
        }
    }
    kings
}

/// Same rank, file or diagonal.
fn shares_line(a: Square, b: Square) -> bool {
    if a == b {
        return false;
    }
    let dx = (a.x as i16 - b.x as i16).abs();
    let dy = (a.y as i16 - b.y as i16).abs();
    dx == 0 || dy == 0 || dx == dy
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod node_tests;
