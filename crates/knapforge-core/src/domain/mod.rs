//! Domain model for knapsack instances.
//!
//! An instance is an ordered list of [`Item`]s plus a capacity. Solvers read
//! the items through a shared slice, build a scoped [`Selection`] while
//! searching and hand back a [`KnapsackSolution`] that refers to the input
//! by position.

mod item;
mod problem;
mod selection;
mod solution;

pub use item::Item;
pub use problem::{validate_items, InstanceTotals, KnapsackProblem};
pub use selection::Selection;
pub use solution::KnapsackSolution;
