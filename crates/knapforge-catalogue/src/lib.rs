//! Item catalogues and solution reports.
//!
//! A catalogue is a UTF-8 text file with one item per line:
//!
//! ```text
//! name,value,weight,image
//! ```
//!
//! The image reference is kept for presentation and never reaches the
//! solver. [`SolveReport`] renders a solved selection as plain text and
//! [`CatalogueListing`] renders catalogue entries.

mod error;
mod loader;
mod report;

pub use error::{CatalogueError, Result};
pub use loader::{Catalogue, CatalogueEntry};
pub use report::{CatalogueListing, SolveReport};
