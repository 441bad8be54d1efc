//! Error types for the alpha-beta engine.

use minichess_core::{BoardError, PieceKind, Player, Square};
use thiserror::Error;

/// Errors raised while hashing positions, caching results or searching.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// A (kind, owner, square) combination outside the generated key table.
    #[error("no position key for {owner} {kind} on {square}")]
    MissingKey {
        kind: PieceKind,
        owner: Player,
        square: Square,
    },

    /// A bound flag that is not EXACT, LOWER or UPPER.
    #[error("bound flag must be EXACT, LOWER or UPPER, got '{0}'")]
    InvalidBound(String),

    /// The board geometry cannot be hashed by a key table of another size.
    #[error("board is {width}x{height}, key table covers {key_width}x{key_height}")]
    GeometryMismatch {
        width: u8,
        height: u8,
        key_width: u8,
        key_height: u8,
    },

    #[error(transparent)]
    Board(#[from] BoardError),

    /// The time budget ran out mid-pass; the pass is discarded.
    #[error("search interrupted")]
    Interrupted,
}

/// Result type for search operations
pub type SearchOutcome<T> = Result<T, SearchError>;

/// Errors raised while loading engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
