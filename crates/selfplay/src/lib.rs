//! Self-play runner for minichess engines.
//!
//! Plays engines against each other from the standard 5x5 layout and
//! summarizes the results as JSON.
//!
//! ```bash
//! cargo run -p selfplay -- alphabeta random --games 10 --depth 3
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
