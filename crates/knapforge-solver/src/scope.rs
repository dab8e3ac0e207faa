//! Per-solve search scope.

use std::time::{Duration, Instant};

/// Mutable state owned by exactly one solve.
///
/// Holds the clock and the counters that terminations inspect and that end
/// up in [`SearchStatistics`](crate::statistics::SearchStatistics). Nothing
/// here is shared between solves.
#[derive(Debug, Clone)]
pub struct SearchScope {
    start_time: Instant,
    nodes_explored: u64,
    nodes_pruned: u64,
    leaves_reached: u64,
    improvements: u64,
    best_value: i64,
}

impl SearchScope {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            nodes_explored: 0,
            nodes_pruned: 0,
            leaves_reached: 0,
            improvements: 0,
            best_value: 0,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn nodes_explored(&self) -> u64 {
        self.nodes_explored
    }

    pub fn nodes_pruned(&self) -> u64 {
        self.nodes_pruned
    }

    pub fn leaves_reached(&self) -> u64 {
        self.leaves_reached
    }

    pub fn improvements(&self) -> u64 {
        self.improvements
    }

    /// Value of the incumbent, 0 before any improvement.
    pub fn best_value(&self) -> i64 {
        self.best_value
    }

    #[inline]
    pub fn increment_node_count(&mut self) {
        self.nodes_explored += 1;
    }

    #[inline]
    pub fn record_prune(&mut self) {
        self.nodes_pruned += 1;
    }

    #[inline]
    pub fn record_leaf(&mut self) {
        self.leaves_reached += 1;
    }

    pub fn record_improvement(&mut self, value: i64) {
        debug_assert!(value > self.best_value);
        self.improvements += 1;
        self.best_value = value;
    }
}

impl Default for SearchScope {
    fn default() -> Self {
        Self::new()
    }
}
