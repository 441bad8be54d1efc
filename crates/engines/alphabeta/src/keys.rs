//! Zobrist keys for position signatures.
//!
//! A signature XORs one random key per (kind, owner, square) occupied plus
//! one key for the side to move. After a move only the changed terms are
//! XORed in or out, so a child's signature costs a handful of lookups:
//!
//! - the mover's key on its old square (out)
//! - each captured piece's key (out)
//! - the old side-to-move key (out) and the new one (in)
//! - the mover's key on its new square, with its possibly promoted kind (in)
//!
//! Keys are drawn once per table and checked for uniqueness, so two distinct
//! features never share a key.

use std::collections::HashSet;

use minichess_core::{GameBoard, Piece, PieceKind, PieceMove, Player, Square};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{SearchError, SearchOutcome};

/// Random keys covering every (kind, owner, square) on a fixed geometry.
#[derive(Debug, Clone)]
pub struct PositionKeyTable {
    width: u8,
    height: u8,
    /// Indexed by ((owner * kinds + kind) * height + y) * width + x
    pieces: Vec<u64>,
    turn: [u64; 2],
}

impl PositionKeyTable {
    /// Draw keys from an entropy-seeded generator.
    pub fn new(width: u8, height: u8) -> Self {
        Self::generate(width, height, &mut StdRng::from_entropy())
    }

    /// Draw keys from a fixed seed, giving identical tables across runs.
    pub fn with_seed(width: u8, height: u8, seed: u64) -> Self {
        Self::generate(width, height, &mut StdRng::seed_from_u64(seed))
    }

    fn generate<R: Rng>(width: u8, height: u8, rng: &mut R) -> Self {
        let squares = width as usize * height as usize;
        let count = 2 * PieceKind::COUNT * squares;
        let mut seen = HashSet::with_capacity(count + 2);

        let pieces = (0..count).map(|_| unique_key(rng, &mut seen)).collect();
        let turn = [unique_key(rng, &mut seen), unique_key(rng, &mut seen)];

        Self {
            width,
            height,
            pieces,
            turn,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether this table can hash boards of the given size.
    pub fn covers(&self, width: u8, height: u8) -> bool {
        self.width == width && self.height == height
    }

    /// Key for `kind` owned by `owner` standing on `square`.
    pub fn key_for(&self, kind: PieceKind, owner: Player, square: Square) -> SearchOutcome<u64> {
        if square.x >= self.width || square.y >= self.height {
            return Err(SearchError::MissingKey { kind, owner, square });
        }
        let w = self.width as usize;
        let h = self.height as usize;
        let idx = ((owner.idx() * PieceKind::COUNT + kind.idx()) * h + square.y as usize) * w
            + square.x as usize;
        Ok(self.pieces[idx])
    }

    #[inline]
    pub fn piece_key(&self, piece: &Piece) -> SearchOutcome<u64> {
        self.key_for(piece.kind, piece.owner, piece.square)
    }

    /// Key for "`player` to move".
    #[inline]
    pub fn turn_key(&self, player: Player) -> u64 {
        self.turn[player.idx()]
    }

    /// Signature of `board` computed from scratch.
    pub fn signature<B: GameBoard>(&self, board: &B) -> SearchOutcome<u64> {
        if !self.covers(board.width(), board.height()) {
            return Err(SearchError::GeometryMismatch {
                width: board.width(),
                height: board.height(),
                key_width: self.width,
                key_height: self.height,
            });
        }
        let mut hash = self.turn_key(board.current_player());
        for pc in board.pieces() {
            hash ^= self.piece_key(&pc)?;
        }
        Ok(hash)
    }

    /// Signature of the board reached by playing `mv` on `parent_board`.
    ///
    /// `landed` is the piece standing on the destination after the move and
    /// `to_move` the side to move on the resulting board.
    pub fn child_signature<B: GameBoard>(
        &self,
        parent_signature: u64,
        parent_board: &B,
        mv: &PieceMove,
        landed: &Piece,
        to_move: Player,
    ) -> SearchOutcome<u64> {
        let mut hash = parent_signature;
        hash ^= self.piece_key(&mv.piece)?;
        for &cap in &mv.option.captures {
            if let Some(victim) = parent_board.piece_at(cap) {
                hash ^= self.piece_key(&victim)?;
            }
        }
        hash ^= self.turn_key(parent_board.current_player());
        hash ^= self.turn_key(to_move);
        hash ^= self.piece_key(landed)?;
        Ok(hash)
    }
}

fn unique_key<R: Rng>(rng: &mut R, seen: &mut HashSet<u64>) -> u64 {
    loop {
        let key: u64 = rng.gen();
        if key != 0 && seen.insert(key) {
            return key;
        }
    }
}

#[cfg(test)]
#[path = "keys_tests.rs"]
mod keys_tests;
