use thiserror::Error;

use crate::types::{Piece, Square};

/// Errors raised by board construction and move application.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("invalid layout: expected {expected} ranks, found {found}")]
    RankCount { expected: usize, found: usize },

    #[error("invalid layout: rank {rank} spans {width} files")]
    RankWidth { rank: u8, width: usize },

    #[error("invalid layout: unknown piece character '{0}'")]
    UnknownPiece(char),

    #[error("invalid layout: bad side to move '{0}'")]
    SideToMove(String),

    #[error("square {0} is off the board")]
    OffBoard(Square),

    #[error("expected {expected} but the square holds something else")]
    PieceMismatch { expected: Piece },
}

/// A search that failed inside an engine. Distinct from finding no legal move.
#[derive(Debug, Error)]
#[error("{engine} search failed: {source}")]
pub struct EngineError {
    pub engine: String,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl EngineError {
    pub fn new(
        engine: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            engine: engine.into(),
            source: source.into(),
        }
    }
}
