//! Engine configuration, loadable from TOML.
//!
//! ```toml
//! max_depth = 4
//! move_time_ms = 1500
//! parallel_threshold = 12
//! key_seed = 7
//!
//! [weights]
//! capture = 1.5
//!
//! [ordering]
//! check = 2.0
//! ```
//!
//! Every field is optional and falls back to `EngineConfig::default()`.

use std::path::Path;
use std::time::Duration;

use minichess_core::SearchLimits;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::eval::{EvalWeights, OrderingWeights};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Deepest iterative-deepening pass.
    pub max_depth: u8,
    /// Time budget per move; `None` searches to `max_depth`.
    pub move_time_ms: Option<u64>,
    /// Minimum number of root moves before the root is searched in parallel.
    /// `None` always searches on the calling thread.
    pub parallel_threshold: Option<usize>,
    /// Seed for the position key table; `None` draws from entropy.
    pub key_seed: Option<u64>,
    pub weights: EvalWeights,
    pub ordering: OrderingWeights,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            move_time_ms: None,
            parallel_threshold: None,
            key_seed: None,
            weights: EvalWeights::default(),
            ordering: OrderingWeights::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid("max_depth must be at least 1".to_string()));
        }
        if self.parallel_threshold == Some(0) {
            return Err(ConfigError::Invalid(
                "parallel_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn move_time(&self) -> Option<Duration> {
        self.move_time_ms.map(Duration::from_millis)
    }

    /// Iterative deepening to `max_depth`, bounded by `move_time_ms` if set.
    pub fn search_limits(&self) -> SearchLimits {
        match self.move_time() {
            Some(time) => SearchLimits::depth_and_time(self.max_depth, time),
            None => SearchLimits::iterative(self.max_depth),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
