//! Alpha-beta engine for 5x5 minichess.
//!
//! Positions live in an arena graph keyed by Zobrist signatures, so a
//! position reached along different move orders is searched once. Search is
//! minimax with alpha-beta pruning, transposition table cutoffs, cheap move
//! ordering and iterative deepening under an optional time budget.
//!
//! ```no_run
//! use alphabeta_engine::{AlphaBetaEngine, EngineConfig};
//! use minichess_core::{Board, Player, SearchLimits};
//!
//! let mut engine = AlphaBetaEngine::new(EngineConfig::default());
//! let board = Board::standard();
//! let result = engine.best_move(&board, Player::White, SearchLimits::iterative(3))?;
//! println!("{:?}", result.best_move);
//! # Ok::<(), alphabeta_engine::SearchError>(())
//! ```

mod config;
mod error;
mod eval;
mod keys;
mod node;
mod ordering;
mod search;
mod tree;
mod tt;

use std::sync::Arc;
use std::time::Duration;

use minichess_core::{
    Board, Engine, EngineError, GameBoard, MoveOption, Piece, Player, SearchLimits, SearchResult,
};
use tracing::{debug, error, info};

pub use config::EngineConfig;
pub use error::{ConfigError, SearchError, SearchOutcome};
pub use eval::{terminal_score, EvalWeights, Evaluator, MoveTerms, OrderingWeights, PieceTable, CENTRE};
pub use keys::PositionKeyTable;
pub use node::{GameNode, NodeId};
pub use search::{SearchEngine, SearchSession};
pub use tree::GameTree;
pub use tt::{Bound, TranspositionTable, TtEntry, TtStats};

/// Alpha-beta engine with a configurable evaluation.
///
/// The position key table is drawn on the first search and reused for every
/// later search on boards of the same size.
#[derive(Debug, Clone)]
pub struct AlphaBetaEngine {
    config: EngineConfig,
    evaluator: Evaluator,
    keys: Option<Arc<PositionKeyTable>>,
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl AlphaBetaEngine {
    pub fn new(config: EngineConfig) -> Self {
        let evaluator = Evaluator::new(config.weights.clone(), config.ordering.clone());
        Self {
            config,
            evaluator,
            keys: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn keys_for(&mut self, width: u8, height: u8) -> Arc<PositionKeyTable> {
        match &self.keys {
            Some(keys) if keys.covers(width, height) => Arc::clone(keys),
            _ => {
                let keys = Arc::new(match self.config.key_seed {
                    Some(seed) => PositionKeyTable::with_seed(width, height, seed),
                    None => PositionKeyTable::new(width, height),
                });
                self.keys = Some(Arc::clone(&keys));
                keys
            }
        }
    }

    /// Search `board` for the move that is best for `player`.
    ///
    /// Starts the clock in `limits`. Returns a result without a move when
    /// `player` has nothing legal to play.
    pub fn best_move<B: GameBoard + Send>(
        &mut self,
        board: &B,
        player: Player,
        limits: SearchLimits,
    ) -> SearchOutcome<SearchResult> {
        limits.start();
        let keys = self.keys_for(board.width(), board.height());
        let engine = SearchEngine::new(&keys, &self.evaluator, self.config.parallel_threshold);
        let result = engine.search(board, player, &limits)?;
        match &result.best_move {
            Some(mv) => info!(
                %mv,
                score = result.score,
                depth = result.depth,
                nodes = result.nodes,
                "chose move"
            ),
            None => info!(%player, "no legal move"),
        }
        Ok(result)
    }
}

impl Engine for AlphaBetaEngine {
    fn search(&mut self, board: &Board, limits: SearchLimits) -> Result<SearchResult, EngineError> {
        self.best_move(board, board.side_to_move(), limits)
            .map_err(|err| {
                error!(error = %err, "search failed");
                EngineError::new(self.name(), err)
            })
    }

    fn name(&self) -> &str {
        "AlphaBeta"
    }

    fn new_game(&mut self) {
        self.keys = None;
    }
}

/// Pick a move for `player` on `board` for ply `ply` within `time_budget`,
/// searching with the default configuration.
///
/// Returns `(None, None)` when no legal move exists.
pub fn agent<B: GameBoard + Send>(
    board: &B,
    player: Player,
    ply: u32,
    time_budget: Duration,
) -> SearchOutcome<(Option<Piece>, Option<MoveOption>)> {
    let mut engine = AlphaBetaEngine::default();
    let limits = SearchLimits::depth_and_time(engine.config().max_depth, time_budget);
    let result = engine.best_move(board, player, limits)?;
    debug!(ply, depth = result.depth, stopped = result.stopped, "agent move");
    Ok(result.into_pair())
}
