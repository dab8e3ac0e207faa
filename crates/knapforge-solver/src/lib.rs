//! KnapForge Solver Engine
//!
//! This crate provides the exact 0/1 knapsack search:
//! - Depth-first include/exclude search, unpruned or branch-and-bound
//! - Dynamic programming over remaining capacity for small tables
//! - Bounders that prune subtrees without changing the result
//! - Termination conditions for cooperative cancellation
//! - Search statistics

pub mod bounder;
pub mod scope;
pub mod search;
pub mod solver;
pub mod statistics;
pub mod termination;

pub use bounder::{
    AnyBounder, FractionalBounder, NoBounder, RemainingValueBounder, ValueBounder,
};
pub use knapforge_config::{BounderType, EnvironmentMode, SearchStrategy, SolverConfig};
pub use scope::SearchScope;
pub use solver::{SolveResult, SolveStatus, Solver};
pub use statistics::SearchStatistics;
pub use termination::{
    ExternalTermination, NoTermination, NodeCountTermination, OrTermination, Termination,
    TimeTermination,
};
