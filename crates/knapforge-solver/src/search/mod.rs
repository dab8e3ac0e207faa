//! Exact search strategies.
//!
//! Every strategy returns the same selection: among all optimal subsets,
//! the one reached first when items are decided in input order with the
//! exclude branch explored before the include branch.
//!
//! - **Depth first**: explicit-stack include/exclude search, optionally
//!   pruned by a [`ValueBounder`](crate::bounder::ValueBounder)
//! - **Dynamic programming**: table over item suffixes and remaining
//!   capacity, reconstructed to the same tie-break

mod depth_first;
mod dynamic;

pub use depth_first::DepthFirstSearch;
pub use dynamic::{table_cells, DynamicProgrammingSearch};

/// Raw result of one search run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchOutcome {
    /// Value of the best selection found.
    pub best_value: i64,
    /// Input positions of the best selection, strictly increasing.
    pub best_indices: Vec<usize>,
    /// True if a termination stopped the search before it was exhaustive.
    pub terminated: bool,
}
