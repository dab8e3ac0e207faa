//! Error types for KnapForge

use thiserror::Error;

/// Main error type for KnapForge operations
#[derive(Debug, Error)]
pub enum KnapsackError {
    /// Caller contract violation: negative capacity, value or weight,
    /// or totals that do not fit in `i64`
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error in solver configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl KnapsackError {
    /// Returns true for caller contract violations.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, KnapsackError::InvalidInput(_))
    }
}

/// Result type alias for KnapForge operations
pub type Result<T> = std::result::Result<T, KnapsackError>;
