//! The board capability consumed by search engines.
//!
//! Engines only need to enumerate pieces and their move options, play a move
//! on a copy, read squares, and ask about attacks and the game result. Any
//! board implementing this trait can be searched.

use crate::board::Board;
use crate::error::BoardError;
use crate::types::*;

pub trait GameBoard: Clone {
    /// Number of files.
    fn width(&self) -> u8;

    /// Number of ranks.
    fn height(&self) -> u8;

    /// Every piece on the board.
    fn pieces(&self) -> Vec<Piece>;

    fn player_pieces(&self, player: Player) -> Vec<Piece> {
        self.pieces()
            .into_iter()
            .filter(|pc| pc.owner == player)
            .collect()
    }

    /// Pseudo-legal move options for `piece`.
    fn move_options(&self, piece: &Piece) -> Vec<MoveOption>;

    /// Play `option` for `piece` in place and pass the turn.
    fn apply_move(&mut self, piece: &Piece, option: &MoveOption) -> Result<(), BoardError>;

    fn current_player(&self) -> Player;

    fn piece_at(&self, square: Square) -> Option<Piece>;

    /// Terminal status, or `None` while the game goes on.
    fn result(&self) -> Option<GameOutcome>;

    fn is_square_attacked(&self, square: Square, by: Player) -> bool;

    fn is_attacked(&self, piece: &Piece) -> bool {
        self.is_square_attacked(piece.square, piece.owner.other())
    }
}

impl GameBoard for Board {
    fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    fn pieces(&self) -> Vec<Piece> {
        Board::pieces(self)
    }

    fn player_pieces(&self, player: Player) -> Vec<Piece> {
        Board::player_pieces(self, player)
    }

    fn move_options(&self, piece: &Piece) -> Vec<MoveOption> {
        Board::move_options(self, piece)
    }

    fn apply_move(&mut self, piece: &Piece, option: &MoveOption) -> Result<(), BoardError> {
        Board::apply_move(self, piece, option)
    }

    fn current_player(&self) -> Player {
        self.side_to_move()
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        Board::piece_at(self, square)
    }

    fn result(&self) -> Option<GameOutcome> {
        Board::result(self)
    }

    fn is_square_attacked(&self, square: Square, by: Player) -> bool {
        Board::is_square_attacked(self, square, by)
    }

    fn is_attacked(&self, piece: &Piece) -> bool {
        Board::is_attacked(self, piece)
    }
}
