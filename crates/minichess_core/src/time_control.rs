//! Time control and search limits for engines.
//!
//! This module provides shared time management that any engine can use to
//! respect a per-move budget. Iterative deepening engines poll the controller
//! and fall back to the last fully completed depth once it trips.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// Search limits that control how deep and how long an engine searches.
///
/// With `iterative` set the engine searches depth 1, 2, ... up to `depth`,
/// otherwise it runs a single pass at exactly `depth`. The time limit takes
/// precedence over the depth limit.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies
    pub depth: u8,
    /// Deepen one ply at a time up to `depth`
    pub iterative: bool,
    /// Maximum time allowed for this move (None = infinite)
    pub move_time: Option<Duration>,
    /// Time controller for checking if search should stop
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// A single fixed-depth pass with no time limit.
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            iterative: false,
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }

    /// Iterative deepening up to `max_depth` with no time limit.
    pub fn iterative(max_depth: u8) -> Self {
        Self {
            depth: max_depth,
            iterative: true,
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }

    /// Iterative deepening up to `max_depth`, stopping when `move_time` runs out.
    pub fn depth_and_time(max_depth: u8, move_time: Duration) -> Self {
        Self {
            depth: max_depth,
            iterative: true,
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Iterative deepening bounded only by `move_time`.
    pub fn time(move_time: Duration) -> Self {
        Self::depth_and_time(u8::MAX, move_time)
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.time_control.is_stopped()
    }

    /// Start the clock. Call this when search begins.
    pub fn start(&self) {
        self.time_control.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::iterative(3)
    }
}

/// Thread-safe time controller that tracks whether search should stop.
///
/// Cheap to clone and share across worker threads; `is_stopped()` is a single
/// atomic load.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    start_time: Arc<RwLock<Option<Instant>>>,
    time_limit: Option<Duration>,
    /// Stop once a search session has visited this many nodes.
    node_limit: Option<u64>,
    /// How often to check the clock (in nodes). Checking every node is wasteful.
    check_interval: u64,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(RwLock::new(None)),
            time_limit,
            node_limit: None,
            check_interval: 256,
        }
    }

    /// Also stop after `limit` nodes. Counted per search session.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    pub fn start(&self) {
        let mut start = self.start_time.write().unwrap_or_else(|e| e.into_inner());
        *start = Some(Instant::now());
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Force stop the search immediately.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Check the clock and trip the stop flag if the limit has passed.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }
        if let Some(limit) = self.time_limit {
            if self.elapsed() >= limit {
                self.stop();
                return true;
            }
        }
        false
    }

    /// Trip the stop flag once `nodes` reaches the node limit.
    pub fn check_nodes(&self, nodes: u64) -> bool {
        match self.node_limit {
            Some(limit) if nodes >= limit => {
                self.stop();
                true
            }
            _ => false,
        }
    }

    /// Returns true every `check_interval` nodes.
    #[inline]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        nodes % self.check_interval == 0
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Remaining time (None if there is no limit).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
