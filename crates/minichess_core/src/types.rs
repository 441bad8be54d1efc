use std::fmt;

/// Board width (files) of the standard layout.
pub const BOARD_WIDTH: u8 = 5;
/// Board height (ranks) of the standard layout.
pub const BOARD_HEIGHT: u8 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Player {
    White,
    Black,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::White, Player::Black];

    pub fn other(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Player::White => 0,
            Player::Black => 1,
        }
    }
    /// Rank direction pawns of this player advance in.
    pub fn forward(self) -> i8 {
        match self {
            Player::White => 1,
            Player::Black => -1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::White => f.write_str("white"),
            Player::Black => f.write_str("black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    King,
    Queen,
    /// Compound piece: moves like a rook or like a knight.
    Right,
    Knight,
    Bishop,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Right,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Pawn,
    ];
    pub const COUNT: usize = 6;

    pub fn idx(self) -> usize {
        match self {
            PieceKind::King => 0,
            PieceKind::Queen => 1,
            PieceKind::Right => 2,
            PieceKind::Knight => 3,
            PieceKind::Bishop => 4,
            PieceKind::Pawn => 5,
        }
    }

    pub fn from_char(ch: char) -> Option<(PieceKind, Player)> {
        let owner = if ch.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        let kind = match ch.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'q' => PieceKind::Queen,
            'r' => PieceKind::Right,
            'n' => PieceKind::Knight,
            'b' => PieceKind::Bishop,
            'p' => PieceKind::Pawn,
            _ => return None,
        };
        Some((kind, owner))
    }

    pub fn to_char(self, owner: Player) -> char {
        let c = match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Right => 'r',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Pawn => 'p',
        };
        match owner {
            Player::White => c.to_ascii_uppercase(),
            Player::Black => c,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Right => "right",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Pawn => "pawn",
        };
        f.write_str(name)
    }
}

/// A board coordinate. `x` is the file, `y` the rank; (0, 0) is white's left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub x: u8,
    pub y: u8,
}

impl Square {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Offset this square, returning `None` when it leaves a `width` x `height` board.
    pub fn offset(self, dx: i8, dy: i8, width: u8, height: u8) -> Option<Square> {
        let x = self.x as i8 + dx;
        let y = self.y as i8 + dy;
        if (0..width as i8).contains(&x) && (0..height as i8).contains(&y) {
            Some(Square::new(x as u8, y as u8))
        } else {
            None
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.x) as char;
        write!(f, "{}{}", file, self.y + 1)
    }
}

/// A piece standing on a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub owner: Player,
    pub square: Square,
}

impl Piece {
    pub fn new(kind: PieceKind, owner: Player, square: Square) -> Self {
        Self {
            kind,
            owner,
            square,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} on {}", self.owner, self.kind, self.square)
    }
}

/// One way a piece can move: where it lands and which squares it clears.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MoveOption {
    pub position: Square,
    pub captures: Vec<Square>,
}

impl MoveOption {
    pub fn quiet(position: Square) -> Self {
        Self {
            position,
            captures: Vec::new(),
        }
    }

    pub fn capture(position: Square) -> Self {
        Self {
            position,
            captures: vec![position],
        }
    }

    pub fn is_capture(&self) -> bool {
        !self.captures.is_empty()
    }
}

/// A piece paired with one of its move options.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PieceMove {
    pub piece: Piece,
    pub option: MoveOption,
}

impl PieceMove {
    pub fn new(piece: Piece, option: MoveOption) -> Self {
        Self { piece, option }
    }

    pub fn from(&self) -> Square {
        self.piece.square
    }

    pub fn to(&self) -> Square {
        self.option.position
    }
}

impl fmt::Display for PieceMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.option.is_capture() { 'x' } else { '-' };
        write!(
            f,
            "{}{}{}{}",
            self.piece.kind.to_char(self.piece.owner),
            self.piece.square,
            sep,
            self.option.position
        )
    }
}

/// Terminal status of a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Player },
    Stalemate,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => {
                write!(f, "Checkmate - {} loses", winner.other())
            }
            GameOutcome::Stalemate => f.write_str("Stalemate"),
        }
    }
}
