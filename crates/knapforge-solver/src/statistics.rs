//! Search statistics.

use std::time::Duration;

use knapforge_config::{BounderType, SearchStrategy};

use crate::scope::SearchScope;

/// Statistics for one solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchStatistics {
    /// Strategy that actually ran (never `Auto`).
    pub strategy: SearchStrategy,
    /// Bounder used by depth-first strategies.
    pub bounder: Option<BounderType>,
    /// Decision nodes visited (table rows for dynamic programming).
    pub nodes_explored: u64,
    /// Subtrees skipped by the bounder.
    pub nodes_pruned: u64,
    /// Complete assignments reached.
    pub leaves_reached: u64,
    /// Number of times the incumbent improved.
    pub improvements: u64,
    /// Table cells allocated by dynamic programming, 0 otherwise.
    pub table_cells: u64,
    /// Wall time of the search.
    pub duration: Duration,
}

impl SearchStatistics {
    /// Snapshots the counters of `scope`.
    pub fn from_scope(
        scope: &SearchScope,
        strategy: SearchStrategy,
        bounder: Option<BounderType>,
        table_cells: u64,
    ) -> Self {
        Self {
            strategy,
            bounder,
            nodes_explored: scope.nodes_explored(),
            nodes_pruned: scope.nodes_pruned(),
            leaves_reached: scope.leaves_reached(),
            improvements: scope.improvements(),
            table_cells,
            duration: scope.elapsed(),
        }
    }

    /// Returns the share of visited nodes whose subtree was pruned.
    pub fn prune_rate(&self) -> f64 {
        if self.nodes_explored == 0 {
            0.0
        } else {
            self.nodes_pruned as f64 / self.nodes_explored as f64
        }
    }

    /// Returns nodes visited per second.
    pub fn nodes_per_second(&self) -> u64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            (self.nodes_explored as f64 / secs) as u64
        } else {
            0
        }
    }
}
