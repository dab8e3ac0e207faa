//! Solver entry point.

use std::fmt;
use std::time::Instant;

use knapforge_config::{BounderType, EnvironmentMode, SearchStrategy, SolverConfig};
use knapforge_core::{
    validate_items, Item, KnapsackError, KnapsackProblem, KnapsackSolution, Result,
};
use tracing::{debug, info};

use crate::bounder::{AnyBounder, NoBounder};
use crate::scope::SearchScope;
use crate::search::{table_cells, DepthFirstSearch, DynamicProgrammingSearch, SearchOutcome};
use crate::statistics::SearchStatistics;
use crate::termination::{
    NoTermination, NodeCountTermination, OrTermination, Termination, TimeTermination,
};

/// How a solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolveStatus {
    /// The search was exhaustive; the solution is optimal.
    Optimal,
    /// A termination fired; the solution is the best found so far.
    Terminated,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveStatus::Optimal => write!(f, "optimal"),
            SolveStatus::Terminated => write!(f, "terminated"),
        }
    }
}

/// Solution together with how it was obtained.
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub solution: KnapsackSolution,
    pub status: SolveStatus,
    pub statistics: SearchStatistics,
}

impl SolveResult {
    pub fn is_optimal(&self) -> bool {
        self.status == SolveStatus::Optimal
    }

    pub fn into_solution(self) -> KnapsackSolution {
        self.solution
    }
}

/// Exact 0/1 knapsack solver.
///
/// A solver holds only configuration and a termination; every call to
/// [`solve`](Self::solve) owns its own search state, so one solver can be
/// shared between threads.
///
/// # Example
///
/// ```
/// use knapforge_core::Item;
/// use knapforge_solver::{SearchStrategy, SolveStatus, Solver, SolverConfig};
///
/// let items = vec![
///     Item::new("A", 60, 10),
///     Item::new("B", 100, 20),
///     Item::new("C", 120, 30),
/// ];
/// let config = SolverConfig::new().with_strategy(SearchStrategy::Auto);
/// let result = Solver::with_config(config).solve(&items, 50).unwrap();
///
/// assert_eq!(result.status, SolveStatus::Optimal);
/// assert_eq!(result.solution.total_value(), 220);
/// assert_eq!(result.solution.indices(), &[1, 2]);
/// ```
#[derive(Debug)]
pub struct Solver<T = NoTermination> {
    config: SolverConfig,
    termination: T,
}

impl Solver<NoTermination> {
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self {
            config,
            termination: NoTermination,
        }
    }
}

impl Default for Solver<NoTermination> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Termination> Solver<T> {
    /// Replaces the termination. Limits from the configuration still apply.
    pub fn with_termination<U: Termination>(self, termination: U) -> Solver<U> {
        Solver {
            config: self.config,
            termination,
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves a problem value.
    pub fn solve_problem(&self, problem: &KnapsackProblem) -> Result<SolveResult> {
        self.solve(problem.items(), problem.capacity())
    }

    /// Finds the most valuable subset of `items` whose weight fits `capacity`.
    ///
    /// # Errors
    ///
    /// - [`KnapsackError::Config`] if the configuration is invalid
    /// - [`KnapsackError::InvalidInput`] for negative capacity, negative item
    ///   values or weights, or totals that overflow `i64`
    /// - [`KnapsackError::Internal`] if full-assert checks fail
    pub fn solve(&self, items: &[Item], capacity: i64) -> Result<SolveResult> {
        self.config
            .validate()
            .map_err(|e| KnapsackError::Config(e.to_string()))?;
        validate_items(items, capacity)?;

        let strategy = self.resolve_strategy(items.len(), capacity);
        info!(
            event = "solve_start",
            item_count = items.len(),
            capacity,
            strategy = %strategy,
        );

        let termination = OrTermination::new((
            &self.termination,
            self.config.time_limit().map(TimeTermination::new),
            self.config.node_count_limit().map(NodeCountTermination::new),
        ));

        let started = Instant::now();
        let mut scope = SearchScope::new();
        let (outcome, bounder, cells) = match strategy {
            SearchStrategy::BruteForce => {
                let outcome =
                    DepthFirstSearch::new(items, capacity, NoBounder).run(&mut scope, &termination);
                (outcome, Some(BounderType::None), 0)
            }
            SearchStrategy::DynamicProgramming => {
                let cells = table_cells(items.len(), capacity).unwrap_or(0);
                let outcome =
                    DynamicProgrammingSearch::new(items, capacity).run(&mut scope, &termination);
                (outcome, None, cells)
            }
            SearchStrategy::Auto | SearchStrategy::BranchAndBound => {
                let bounder = AnyBounder::build(self.config.search.bounder, items);
                let bounder_type = bounder.bounder_type();
                let outcome =
                    DepthFirstSearch::new(items, capacity, bounder).run(&mut scope, &termination);
                (outcome, Some(bounder_type), 0)
            }
        };

        let status = if outcome.terminated {
            SolveStatus::Terminated
        } else {
            SolveStatus::Optimal
        };
        let statistics = SearchStatistics::from_scope(&scope, strategy, bounder, cells);
        let solution = self.build_solution(items, capacity, outcome)?;

        info!(
            event = "solve_end",
            status = %status,
            total_value = solution.total_value(),
            selected = solution.len(),
            nodes = statistics.nodes_explored,
            duration_ms = started.elapsed().as_millis() as u64,
        );

        Ok(SolveResult {
            solution,
            status,
            statistics,
        })
    }

    /// Picks the concrete strategy for an instance of this size.
    ///
    /// Never returns `Auto`.
    pub fn resolve_strategy(&self, item_count: usize, capacity: i64) -> SearchStrategy {
        let fits = table_cells(item_count, capacity)
            .is_some_and(|cells| cells <= self.config.search.dp_cell_limit);
        match self.config.search.strategy {
            SearchStrategy::Auto if fits => SearchStrategy::DynamicProgramming,
            SearchStrategy::Auto => SearchStrategy::BranchAndBound,
            SearchStrategy::DynamicProgramming if !fits => {
                debug!(
                    event = "dp_fallback",
                    item_count,
                    capacity,
                    dp_cell_limit = self.config.search.dp_cell_limit,
                );
                SearchStrategy::BranchAndBound
            }
            other => other,
        }
    }

    fn build_solution(
        &self,
        items: &[Item],
        capacity: i64,
        outcome: SearchOutcome,
    ) -> Result<KnapsackSolution> {
        let solution = KnapsackSolution::from_indices(items, outcome.best_indices);
        if self.config.environment_mode == EnvironmentMode::FullAssert {
            solution.check_against(items, capacity)?;
            if solution.total_value() != outcome.best_value {
                return Err(KnapsackError::Internal(format!(
                    "search reported value {} but selection is worth {}",
                    outcome.best_value,
                    solution.total_value()
                )));
            }
        }
        Ok(solution)
    }
}

#[cfg(test)]
#[path = "solver_tests.rs"]
mod tests;
