//! Entry points that hide the solver wiring.

use std::path::Path;

use knapforge_config::SolverConfig;
use knapforge_core::{Item, KnapsackSolution, Result};
use knapforge_solver::{SolveResult, Solver};
use tracing::debug;

/// Finds the most valuable subset of `items` whose total weight fits in
/// `capacity`.
///
/// Runs with the default configuration and no termination, so the result is
/// always optimal.
///
/// # Errors
///
/// Fails with [`KnapsackError::InvalidInput`](crate::KnapsackError::InvalidInput)
/// if `capacity` is negative, an item has a negative value or weight, or the
/// totals overflow `i64`.
///
/// # Example
///
/// ```
/// use knapforge::Item;
///
/// let items = vec![Item::new("X", 10, 100)];
/// let solution = knapforge::solve(&items, 5).unwrap();
/// assert_eq!(solution.total_value(), 0);
/// assert!(solution.is_empty());
///
/// assert!(knapforge::solve(&items, -1).unwrap_err().is_invalid_input());
/// ```
pub fn solve(items: &[Item], capacity: i64) -> Result<KnapsackSolution> {
    Solver::new()
        .solve(items, capacity)
        .map(SolveResult::into_solution)
}

/// Solves with an explicit configuration and returns status and statistics.
///
/// Termination limits in `config` apply; check
/// [`SolveResult::status`] before treating the solution as optimal.
pub fn solve_with_config(
    items: &[Item],
    capacity: i64,
    config: SolverConfig,
) -> Result<SolveResult> {
    Solver::with_config(config).solve(items, capacity)
}

/// Loads a solver configuration, falling back to defaults if the file is
/// missing or unreadable.
pub fn load_config(path: impl AsRef<Path>) -> SolverConfig {
    let path = path.as_ref();
    match SolverConfig::load(path) {
        Ok(config) => config,
        Err(err) => {
            debug!(
                event = "config_default",
                path = %path.display(),
                error = %err,
            );
            SolverConfig::default()
        }
    }
}
