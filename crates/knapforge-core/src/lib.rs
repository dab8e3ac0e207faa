//! KnapForge Core - Core types for 0/1 knapsack solving
//!
//! This crate provides the fundamental abstractions for KnapForge:
//! - Items and problem instances with input validation
//! - The scoped selection buffer used while searching
//! - The solution type returned by every solver strategy
//! - The error taxonomy shared by all crates

pub mod domain;
pub mod error;

pub use domain::{
    validate_items, InstanceTotals, Item, KnapsackProblem, KnapsackSolution, Selection,
};
pub use error::{KnapsackError, Result};
