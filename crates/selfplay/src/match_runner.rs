//! Match runner for playing games between engines

use std::time::Duration;

use minichess_core::{Board, Engine, EngineError, GameOutcome, Player, SearchLimits};
use tracing::{info, warn};

use crate::results::{GameRecord, GameResult, MatchResult, MatchSummary};

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Search depth for engines
    pub depth: u8,
    /// Maximum time per move (None = no limit)
    pub time_per_move: Option<Duration>,
    /// Maximum plies per game before declaring a draw
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            depth: 3,
            time_per_move: None,
            max_moves: 200,
            alternate_colors: true,
        }
    }
}

impl MatchConfig {
    /// Create search limits based on this config
    fn search_limits(&self) -> SearchLimits {
        match self.time_per_move {
            Some(time) => SearchLimits::depth_and_time(self.depth, time),
            None => SearchLimits::iterative(self.depth),
        }
    }
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two engines. Results are from engine1's perspective.
    ///
    /// An engine failure aborts the match.
    pub fn run_match(
        &self,
        engine1: &mut dyn Engine,
        engine2: &mut dyn Engine,
    ) -> Result<MatchSummary, EngineError> {
        let mut result = MatchResult::new();
        let mut games = Vec::with_capacity(self.config.num_games as usize);

        for game_num in 0..self.config.num_games {
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let record = if engine1_white {
                self.play_game(engine1, engine2)?
            } else {
                self.play_game(engine2, engine1)?
            };
            let outcome = if engine1_white {
                record.result
            } else {
                record.result.flip()
            };
            result.record(outcome);

            info!(
                game = game_num + 1,
                of = self.config.num_games,
                white = %record.white,
                reason = %record.reason,
                plies = record.plies,
                wins = result.wins,
                losses = result.losses,
                draws = result.draws,
                "game finished"
            );
            games.push(record);
        }

        Ok(MatchSummary {
            engine1: engine1.name().to_string(),
            engine2: engine2.name().to_string(),
            depth: self.config.depth,
            move_time_ms: self.config.time_per_move.map(|t| t.as_millis() as u64),
            result,
            games,
        })
    }

    /// Play a single game from the standard layout; the result is white's.
    pub fn play_game(
        &self,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
    ) -> Result<GameRecord, EngineError> {
        self.play_from(Board::standard(), white, black)
    }

    /// Play a single game from `board`; the result is white's.
    pub fn play_from(
        &self,
        mut board: Board,
        white: &mut dyn Engine,
        black: &mut dyn Engine,
    ) -> Result<GameRecord, EngineError> {
        white.new_game();
        black.new_game();

        let mut record = GameRecord {
            white: white.name().to_string(),
            black: black.name().to_string(),
            result: GameResult::Draw,
            reason: "move limit".to_string(),
            plies: 0,
            moves: Vec::new(),
        };

        for _ply in 0..self.config.max_moves {
            if let Some(outcome) = board.result() {
                return Ok(finish(record, outcome));
            }

            // Fresh limits per move so each search gets its own clock.
            let limits = self.config.search_limits();
            let mover = board.side_to_move();
            let search = if mover == Player::White {
                white.search(&board, limits)?
            } else {
                black.search(&board, limits)?
            };

            let played = search
                .best_move
                .filter(|mv| board.legal_moves().contains(mv));
            let Some(mv) = played else {
                warn!(%mover, "engine produced no legal move, forfeiting");
                return Ok(forfeit(record, mover));
            };
            if let Err(err) = board.apply_move(&mv.piece, &mv.option) {
                warn!(%mover, %mv, error = %err, "move could not be applied, forfeiting");
                return Ok(forfeit(record, mover));
            }
            record.moves.push(mv.to_string());
            record.plies += 1;
        }

        Ok(match board.result() {
            Some(outcome) => finish(record, outcome),
            None => record,
        })
    }
}

fn finish(mut record: GameRecord, outcome: GameOutcome) -> GameRecord {
    record.result = match outcome {
        GameOutcome::Checkmate { winner: Player::White } => GameResult::Win,
        GameOutcome::Checkmate { winner: Player::Black } => GameResult::Loss,
        GameOutcome::Stalemate => GameResult::Draw,
    };
    record.reason = outcome.to_string();
    record
}

fn forfeit(mut record: GameRecord, loser: Player) -> GameRecord {
    record.result = if loser == Player::White {
        GameResult::Loss
    } else {
        GameResult::Win
    };
    record.reason = format!("{loser} forfeits");
    record
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Engine,
    engine2: &mut dyn Engine,
    num_games: u32,
    depth: u8,
) -> Result<MatchSummary, EngineError> {
    let config = MatchConfig {
        num_games,
        depth,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(engine1, engine2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
