//! Random Move Minichess Engine
//!
//! Selects moves uniformly at random from all legal moves. Useful as a
//! baseline opponent for self-play and for stress testing move generation.

use minichess_core::{legal_moves_into, Board, Engine, EngineError, SearchLimits, SearchResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, SeedableRng};


/// An engine that plays random legal moves.
#[derive(Debug, Clone, Default)]
pub struct RandomEngine {
    nodes: u64,
    /// Fixed-seed generator for reproducible games; `None` uses `thread_rng`.
    rng: Option<StdRng>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            nodes: 0,
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, _limits: SearchLimits) -> Result<SearchResult, EngineError> {
        let mut moves = Vec::with_capacity(32);
        legal_moves_into(board, &mut moves);
        self.nodes = 1;

        let best_move = match self.rng.as_mut() {
            Some(rng) => moves.choose(rng).cloned(),
            None => moves.choose(&mut thread_rng()).cloned(),
        };

        Ok(SearchResult {
            best_move,
            depth: 1,
            nodes: self.nodes,
            ..SearchResult::no_move()
        })
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
