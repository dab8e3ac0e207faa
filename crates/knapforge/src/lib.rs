//! KnapForge - An exact 0/1 knapsack solver in Rust
//!
//! Pass the items and a capacity to [`solve`] and get back the most valuable
//! subset that fits.
//!
//! # Example
//!
//! ```rust
//! use knapforge::prelude::*;
//!
//! let items = vec![
//!     Item::new("A", 60, 10),
//!     Item::new("B", 100, 20),
//!     Item::new("C", 120, 30),
//! ];
//! let solution = knapforge::solve(&items, 50).unwrap();
//!
//! assert_eq!(solution.total_value(), 220);
//! let names: Vec<&str> = solution.items().iter().map(Item::name).collect();
//! assert_eq!(names, ["B", "C"]);
//! ```
//!
//! Among equally valuable subsets the one that excludes earlier items is
//! returned, whatever strategy is configured.

// Domain types
pub use knapforge_core::{
    validate_items, InstanceTotals, Item, KnapsackError, KnapsackProblem, KnapsackSolution,
    Result, Selection,
};

// Configuration
pub use knapforge_config::{
    BounderType, ConfigError, EnvironmentMode, SearchConfig, SearchStrategy, SolverConfig,
    TerminationConfig,
};

// Search engine
pub use knapforge_solver::{
    bounder, search, termination, ExternalTermination, NoTermination, NodeCountTermination,
    OrTermination, SearchStatistics, SolveResult, SolveStatus, Solver, Termination,
    TimeTermination,
};

// Catalogue files and reports
pub use knapforge_catalogue::{
    Catalogue, CatalogueEntry, CatalogueError, CatalogueListing, SolveReport,
};

#[cfg(feature = "console")]
pub mod console;

mod solver;
pub use solver::{load_config, solve, solve_with_config};

pub mod prelude {
    pub use super::{solve, solve_with_config};
    pub use super::{Item, KnapsackError, KnapsackProblem, KnapsackSolution};
    pub use super::{SearchStrategy, SolveResult, SolveStatus, Solver, SolverConfig};
}
