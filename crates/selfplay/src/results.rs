//! Match results and JSON summaries

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of a single game from one engine's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    pub fn flip(self) -> Self {
        match self {
            GameResult::Win => GameResult::Loss,
            GameResult::Loss => GameResult::Win,
            GameResult::Draw => GameResult::Draw,
        }
    }
}

/// How one game went, from white's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameRecord {
    pub white: String,
    pub black: String,
    pub result: GameResult,
    /// Why the game ended: a board result, a move limit or a forfeit.
    pub reason: String,
    pub plies: u32,
    pub moves: Vec<String>,
}

/// Tally of a match (multiple games) from engine1's perspective
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("failed to write summary: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode summary: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything worth keeping about a finished match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchSummary {
    pub engine1: String,
    pub engine2: String,
    pub depth: u8,
    pub move_time_ms: Option<u64>,
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchSummary {
    pub fn to_json(&self) -> Result<String, SummaryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<(), SummaryError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, SummaryError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// One-line text report
    pub fn report(&self) -> String {
        format!(
            "{} vs {}: {} wins, {} losses, {} draws (score {:.1}%)",
            self.engine1,
            self.engine2,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        )
    }
}
