//! Shared test fixtures for KnapForge crates.
//!
//! This crate provides data and pure functions for testing. It depends only
//! on `knapforge-core` so every other crate can use it as a dev-dependency.
//!
//! - [`instances`] - Hand-made instances with known answers
//! - [`generator`] - Seeded random instances
//! - [`oracle`] - Brute-force enumeration of all subsets
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! knapforge-test = { workspace = true }
//! ```
//!
//! Then import the fixtures you need:
//!
//! ```ignore
//! use knapforge_test::{brute_force, classic_items, InstanceGenerator};
//! ```

pub mod generator;
pub mod instances;
pub mod oracle;

pub use generator::{GeneratedInstance, InstanceGenerator};
pub use instances::{classic_capacity, classic_items, infeasible_single, tied_items};
pub use oracle::{brute_force, OracleAnswer};
