//! Board, rules and shared engine plumbing for 5x5 minichess.

pub mod board;
pub mod error;
pub mod game_board;
pub mod movegen;
pub mod perft;
pub mod square_set;
pub mod time_control;
pub mod types;

pub use board::*;
pub use error::{BoardError, EngineError};
pub use game_board::GameBoard;
pub use movegen::*;
pub use perft::perft;
pub use square_set::*;
pub use time_control::*;
pub use types::*;

// =============================================================================
// Engine trait, implemented by every engine (alpha-beta, random, ...)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<PieceMove>,
    /// Score of the best move from the searching player's perspective
    pub score: f64,
    /// Deepest fully completed search depth
    pub depth: u8,
    /// Number of nodes searched
    pub nodes: u64,
    /// Whether search was stopped early due to time limit
    pub stopped: bool,
    /// Candidate moves dropped because applying them misbehaved
    pub skipped_moves: u64,
}

impl SearchResult {
    /// A result carrying no move.
    pub fn no_move() -> Self {
        Self {
            best_move: None,
            score: 0.0,
            depth: 0,
            nodes: 0,
            stopped: false,
            skipped_moves: 0,
        }
    }

    /// Split into the `(piece, move option)` pair callers hand back to the game.
    pub fn into_pair(self) -> (Option<Piece>, Option<MoveOption>) {
        match self.best_move {
            Some(mv) => (Some(mv.piece), Some(mv.option)),
            None => (None, None),
        }
    }
}

/// Trait that all engines implement so they can be swapped in matches.
pub trait Engine: Send {
    /// Search `board` for the side to move within `limits`.
    ///
    /// `Ok` with no move means the side to move has nothing legal to play.
    /// `Err` is an engine failure and must not be read as a lost position.
    fn search(&mut self, board: &Board, limits: SearchLimits) -> Result<SearchResult, EngineError>;

    /// Returns the engine's name
    fn name(&self) -> &str;

    fn author(&self) -> &str {
        "minichess"
    }

    /// Reset internal state for a new game (clear hash tables, history, etc.)
    fn new_game(&mut self) {}
}
