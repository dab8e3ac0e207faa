//! Configuration system for KnapForge.
//!
//! Load solver configuration from TOML or YAML files to pick the search
//! strategy, the pruning bounder and optional termination limits without
//! code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use knapforge_config::{BounderType, SearchStrategy, SolverConfig};
//! use std::time::Duration;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     [search]
//!     strategy = "branch_and_bound"
//!     bounder = "fractional"
//!
//!     [termination]
//!     seconds_spent_limit = 30
//! "#).unwrap();
//!
//! assert_eq!(config.search.strategy, SearchStrategy::BranchAndBound);
//! assert_eq!(config.search.bounder, BounderType::Fractional);
//! assert_eq!(config.time_limit(), Some(Duration::from_secs(30)));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use knapforge_config::SolverConfig;
//!
//! let config = SolverConfig::load("solver.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default upper bound on dynamic programming table cells.
pub const DEFAULT_DP_CELL_LIMIT: u64 = 4_000_000;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main solver configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Environment mode affecting post-solve assertions.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Search configuration.
    #[serde(default)]
    pub search: SearchConfig,

    /// Termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.dp_cell_limit == 0 {
            return Err(ConfigError::Invalid(
                "search.dp_cell_limit must be positive".to_string(),
            ));
        }
        if self.termination.as_ref().and_then(|t| t.node_count_limit) == Some(0) {
            return Err(ConfigError::Invalid(
                "termination.node_count_limit must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the search strategy.
    pub fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.search.strategy = strategy;
        self
    }

    /// Sets the pruning bounder.
    pub fn with_bounder(mut self, bounder: BounderType) -> Self {
        self.search.bounder = bounder;
        self
    }

    /// Sets the dynamic programming table limit.
    pub fn with_dp_cell_limit(mut self, limit: u64) -> Self {
        self.search.dp_cell_limit = limit;
        self
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Sets the termination time limit.
    pub fn with_termination_seconds(mut self, seconds: u64) -> Self {
        self.termination = Some(TerminationConfig {
            seconds_spent_limit: Some(seconds),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Sets the termination node limit.
    pub fn with_node_count_limit(mut self, limit: u64) -> Self {
        self.termination = Some(TerminationConfig {
            node_count_limit: Some(limit),
            ..self.termination.unwrap_or_default()
        });
        self
    }

    /// Returns the termination time limit, if configured.
    ///
    /// Convenience method that delegates to `termination.time_limit()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use knapforge_config::SolverConfig;
    /// use std::time::Duration;
    ///
    /// let config = SolverConfig::from_toml_str(r#"
    ///     [termination]
    ///     seconds_spent_limit = 2
    ///     millis_spent_limit = 500
    /// "#).unwrap();
    ///
    /// assert_eq!(config.time_limit(), Some(Duration::from_millis(2500)));
    /// ```
    pub fn time_limit(&self) -> Option<Duration> {
        self.termination.as_ref().and_then(|t| t.time_limit())
    }

    /// Returns the node count limit, if configured.
    pub fn node_count_limit(&self) -> Option<u64> {
        self.termination.as_ref().and_then(|t| t.node_count_limit)
    }
}

/// Environment mode affecting solver behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// No extra checks.
    #[default]
    Fast,

    /// Re-checks every solution against the instance after solving.
    FullAssert,
}

/// Search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Search strategy.
    #[serde(default)]
    pub strategy: SearchStrategy,

    /// Bounder used to prune the branch-and-bound tree.
    #[serde(default)]
    pub bounder: BounderType,

    /// Maximum `(items + 1) * (capacity + 1)` table size for dynamic programming.
    #[serde(default = "default_dp_cell_limit")]
    pub dp_cell_limit: u64,
}

fn default_dp_cell_limit() -> u64 {
    DEFAULT_DP_CELL_LIMIT
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::default(),
            bounder: BounderType::default(),
            dp_cell_limit: DEFAULT_DP_CELL_LIMIT,
        }
    }
}

/// Search strategy types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Dynamic programming when the table fits, branch and bound otherwise.
    Auto,

    /// Unpruned include/exclude enumeration.
    BruteForce,

    /// Depth-first search pruned by the configured bounder.
    #[default]
    BranchAndBound,

    /// Table over item suffixes and remaining capacity.
    DynamicProgramming,
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchStrategy::Auto => write!(f, "Auto"),
            SearchStrategy::BruteForce => write!(f, "BruteForce"),
            SearchStrategy::BranchAndBound => write!(f, "BranchAndBound"),
            SearchStrategy::DynamicProgramming => write!(f, "DynamicProgramming"),
        }
    }
}

/// Bounder type selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BounderType {
    /// No bounding (disables pruning).
    None,

    /// Sum of the remaining item values.
    RemainingValue,

    /// Linear relaxation over the remaining items.
    #[default]
    Fractional,
}

impl fmt::Display for BounderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BounderType::None => write!(f, "None"),
            BounderType::RemainingValue => write!(f, "RemainingValue"),
            BounderType::Fractional => write!(f, "Fractional"),
        }
    }
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum seconds to spend solving.
    pub seconds_spent_limit: Option<u64>,

    /// Maximum milliseconds to spend solving, added to the seconds limit.
    pub millis_spent_limit: Option<u64>,

    /// Maximum number of search nodes to visit.
    pub node_count_limit: Option<u64>,
}

impl TerminationConfig {
    /// Returns the time limit as a Duration, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        let millis = self
            .seconds_spent_limit
            .unwrap_or(0)
            .saturating_mul(1000)
            .saturating_add(self.millis_spent_limit.unwrap_or(0));
        if millis > 0 {
            Some(Duration::from_millis(millis))
        } else {
            None
        }
    }

    /// Returns true if no limit is set.
    pub fn is_unlimited(&self) -> bool {
        self.time_limit().is_none() && self.node_count_limit.is_none()
    }
}
