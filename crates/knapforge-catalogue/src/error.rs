//! Catalogue errors.

use std::io;

use thiserror::Error;

/// Errors raised while loading a catalogue.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("failed to read catalogue: {0}")]
    Io(#[from] io::Error),

    /// A four-field line whose value or weight is not an integer.
    #[error("line {line}: invalid {field} '{text}': {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        field: &'static str,
        text: String,
        message: String,
    },
}

/// Result type for catalogue operations.
pub type Result<T> = std::result::Result<T, CatalogueError>;
