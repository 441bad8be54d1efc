use crate::error::BoardError;
use crate::movegen;
use crate::types::*;

const CELLS: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Layout every game starts from: white on ranks 1-2, black on ranks 4-5.
pub const STANDARD_LAYOUT: &str = "rnbqk/ppppp/5/PPPPP/RNBQK w";

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];
pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];
pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A 5x5 board: piece placement plus side to move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Option<(PieceKind, Player)>; CELLS],
    side_to_move: Player,
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// An empty board with `side_to_move` to play.
    pub fn empty(side_to_move: Player) -> Self {
        Board {
            cells: [None; CELLS],
            side_to_move,
        }
    }

    /// The `STANDARD_LAYOUT` position, white to move.
    pub fn standard() -> Self {
        let back = [
            PieceKind::Right,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
        ];
        let mut board = Board::empty(Player::White);
        for (x, &kind) in back.iter().enumerate() {
            let x = x as u8;
            board.cells[Self::index(Square::new(x, 0))] = Some((kind, Player::White));
            board.cells[Self::index(Square::new(x, 1))] = Some((PieceKind::Pawn, Player::White));
            board.cells[Self::index(Square::new(x, BOARD_HEIGHT - 2))] =
                Some((PieceKind::Pawn, Player::Black));
            board.cells[Self::index(Square::new(x, BOARD_HEIGHT - 1))] = Some((kind, Player::Black));
        }
        board
    }

    /// Parse a layout string: ranks from the top (y = 4) down separated by `/`,
    /// digits for runs of empty squares, `KQRNBP` for white, lower case for black,
    /// then `w` or `b` for the side to move.
    pub fn from_layout(layout: &str) -> Result<Self, BoardError> {
        let mut parts = layout.split_whitespace();
        let placement = parts.next().unwrap_or("");
        let side = parts.next().unwrap_or("w");

        let side_to_move = match side {
            "w" => Player::White,
            "b" => Player::Black,
            other => return Err(BoardError::SideToMove(other.to_string())),
        };

        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != BOARD_HEIGHT as usize {
            return Err(BoardError::RankCount {
                expected: BOARD_HEIGHT as usize,
                found: ranks.len(),
            });
        }

        let mut board = Board::empty(side_to_move);
        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let y = BOARD_HEIGHT - 1 - rank_idx as u8;
            let mut x: usize = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    x += d as usize;
                    continue;
                }
                let (kind, owner) = PieceKind::from_char(ch).ok_or(BoardError::UnknownPiece(ch))?;
                if x >= BOARD_WIDTH as usize {
                    return Err(BoardError::RankWidth { rank: y, width: x + 1 });
                }
                board.cells[Self::index(Square::new(x as u8, y))] = Some((kind, owner));
                x += 1;
            }
            if x != BOARD_WIDTH as usize {
                return Err(BoardError::RankWidth { rank: y, width: x });
            }
        }
        Ok(board)
    }

    /// Render the board back into layout notation.
    pub fn to_layout(&self) -> String {
        let mut out = String::new();
        for y in (0..BOARD_HEIGHT).rev() {
            let mut empty = 0;
            for x in 0..BOARD_WIDTH {
                match self.cells[Self::index(Square::new(x, y))] {
                    Some((kind, owner)) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(kind.to_char(owner));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if y > 0 {
                out.push('/');
            }
        }
        out.push(' ');
        out.push(match self.side_to_move {
            Player::White => 'w',
            Player::Black => 'b',
        });
        out
    }

    #[inline]
    fn index(sq: Square) -> usize {
        sq.y as usize * BOARD_WIDTH as usize + sq.x as usize
    }

    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        sq.x < BOARD_WIDTH && sq.y < BOARD_HEIGHT
    }

    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    pub fn set_side_to_move(&mut self, player: Player) {
        self.side_to_move = player;
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        if !self.contains(sq) {
            return None;
        }
        self.cells[Self::index(sq)].map(|(kind, owner)| Piece::new(kind, owner, sq))
    }

    pub fn set_piece(&mut self, sq: Square, occupant: Option<(PieceKind, Player)>) -> Result<(), BoardError> {
        if !self.contains(sq) {
            return Err(BoardError::OffBoard(sq));
        }
        self.cells[Self::index(sq)] = occupant;
        Ok(())
    }

    /// All pieces, scanning rank by rank from white's side.
    pub fn pieces(&self) -> Vec<Piece> {
        let mut out = Vec::with_capacity(20);
        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                if let Some(pc) = self.piece_at(Square::new(x, y)) {
                    out.push(pc);
                }
            }
        }
        out
    }

    pub fn player_pieces(&self, player: Player) -> Vec<Piece> {
        self.pieces().into_iter().filter(|pc| pc.owner == player).collect()
    }

    pub fn king_square(&self, player: Player) -> Option<Square> {
        self.pieces()
            .into_iter()
            .find(|pc| pc.owner == player && pc.kind == PieceKind::King)
            .map(|pc| pc.square)
    }

    pub fn in_check(&self, player: Player) -> bool {
        match self.king_square(player) {
            Some(ksq) => self.is_square_attacked(ksq, player.other()),
            None => false,
        }
    }

    /// Whether any piece of `by` could capture on `target`, whatever currently stands there.
    pub fn is_square_attacked(&self, target: Square, by: Player) -> bool {
        let (w, h) = (BOARD_WIDTH, BOARD_HEIGHT);
        let holds = |sq: Option<Square>, kinds: &[PieceKind]| -> bool {
            sq.and_then(|s| self.piece_at(s))
                .is_some_and(|pc| pc.owner == by && kinds.contains(&pc.kind))
        };

        // Pawns capture diagonally forward, so look one rank behind the target.
        let back = -by.forward();
        for dx in [-1, 1] {
            if holds(target.offset(dx, back, w, h), &[PieceKind::Pawn]) {
                return true;
            }
        }

        for (dx, dy) in KNIGHT_DELTAS {
            if holds(target.offset(dx, dy, w, h), &[PieceKind::Knight, PieceKind::Right]) {
                return true;
            }
        }

        for (dx, dy) in KING_DELTAS {
            if holds(target.offset(dx, dy, w, h), &[PieceKind::King]) {
                return true;
            }
        }

        let rays: [(&[(i8, i8)], &[PieceKind]); 2] = [
            (&DIAGONALS, &[PieceKind::Bishop, PieceKind::Queen]),
            (&ORTHOGONALS, &[PieceKind::Right, PieceKind::Queen]),
        ];
        for (dirs, kinds) in rays {
            for &(dx, dy) in dirs {
                let mut cur = target.offset(dx, dy, w, h);
                while let Some(sq) = cur {
                    if let Some(pc) = self.piece_at(sq) {
                        if pc.owner == by && kinds.contains(&pc.kind) {
                            return true;
                        }
                        break;
                    }
                    cur = sq.offset(dx, dy, w, h);
                }
            }
        }

        false
    }

    /// Whether the opponent of `piece`'s owner attacks its square.
    pub fn is_attacked(&self, piece: &Piece) -> bool {
        self.is_square_attacked(piece.square, piece.owner.other())
    }

    /// Play `option` for `piece`: clear captured squares, move, promote, pass the turn.
    pub fn apply_move(&mut self, piece: &Piece, option: &MoveOption) -> Result<(), BoardError> {
        if self.piece_at(piece.square).as_ref() != Some(piece) {
            return Err(BoardError::PieceMismatch { expected: *piece });
        }
        if !self.contains(option.position) {
            return Err(BoardError::OffBoard(option.position));
        }
        for &cap in &option.captures {
            self.set_piece(cap, None)?;
        }
        self.set_piece(piece.square, None)?;

        let last_rank = match piece.owner {
            Player::White => BOARD_HEIGHT - 1,
            Player::Black => 0,
        };
        let kind = if piece.kind == PieceKind::Pawn && option.position.y == last_rank {
            PieceKind::Queen
        } else {
            piece.kind
        };
        self.set_piece(option.position, Some((kind, piece.owner)))?;
        self.side_to_move = self.side_to_move.other();
        Ok(())
    }

    /// Pseudo-legal options for `piece` (own king safety is not considered).
    pub fn move_options(&self, piece: &Piece) -> Vec<MoveOption> {
        movegen::move_options(self, piece)
    }

    /// Legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<PieceMove> {
        movegen::legal_moves(self)
    }

    /// `None` while the game is in progress.
    pub fn result(&self) -> Option<GameOutcome> {
        if !self.legal_moves().is_empty() {
            return None;
        }
        if self.in_check(self.side_to_move) {
            Some(GameOutcome::Checkmate {
                winner: self.side_to_move.other(),
            })
        } else {
            Some(GameOutcome::Stalemate)
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
