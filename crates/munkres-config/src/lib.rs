//! Configuration system for Munkres.
//!
//! Load solver configuration from TOML or YAML files to choose the solving
//! strategy, the assertion level, and step limits without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use munkres_config::{EnvironmentMode, SolverConfig, Strategy};
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     strategy = "hungarian"
//!     environment_mode = "full_assert"
//!     brute_force_limit = 8
//!
//!     [termination]
//!     step_count_limit = 100000
//! "#).unwrap();
//!
//! assert_eq!(config.strategy, Strategy::Hungarian);
//! assert_eq!(config.environment_mode, EnvironmentMode::FullAssert);
//! assert_eq!(config.step_count_limit(), Some(100_000));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use munkres_config::SolverConfig;
//!
//! let config = SolverConfig::load("solver.toml").unwrap_or_default();
//! assert_eq!(config.brute_force_limit, 10);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default ceiling on the matrix size accepted by brute force.
pub const DEFAULT_BRUTE_FORCE_LIMIT: usize = 10;

/// Largest brute force ceiling a configuration may request (12! permutations).
pub const MAX_BRUTE_FORCE_LIMIT: usize = 12;

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
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Which algorithm solves the matrix.
    #[serde(default)]
    pub strategy: Strategy,

    /// Assertion level applied while solving.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Largest matrix size brute force accepts.
    #[serde(default = "default_brute_force_limit")]
    pub brute_force_limit: usize,

    /// Termination configuration.
    #[serde(default)]
    pub termination: Option<TerminationConfig>,
}

fn default_brute_force_limit() -> usize {
    DEFAULT_BRUTE_FORCE_LIMIT
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            environment_mode: EnvironmentMode::default(),
            brute_force_limit: DEFAULT_BRUTE_FORCE_LIMIT,
            termination: None,
        }
    }
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
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
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
        if self.brute_force_limit == 0 || self.brute_force_limit > MAX_BRUTE_FORCE_LIMIT {
            return Err(ConfigError::Invalid(format!(
                "brute_force_limit must be in 1..={MAX_BRUTE_FORCE_LIMIT}, got {}",
                self.brute_force_limit
            )));
        }
        if self.step_count_limit() == Some(0) {
            return Err(ConfigError::Invalid(
                "step_count_limit must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the solving strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Sets the brute force ceiling.
    pub fn with_brute_force_limit(mut self, limit: usize) -> Self {
        self.brute_force_limit = limit;
        self
    }

    /// Sets the step count limit.
    pub fn with_step_count_limit(mut self, limit: u64) -> Self {
        self.termination = Some(TerminationConfig {
            step_count_limit: Some(limit),
        });
        self
    }

    /// Returns the step count limit, if configured.
    ///
    /// Convenience method that delegates to `termination.step_count_limit`.
    pub fn step_count_limit(&self) -> Option<u64> {
        self.termination.as_ref().and_then(|t| t.step_count_limit)
    }
}

/// Algorithm used to solve a cost matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// O(n³) Kuhn-Munkres state machine.
    #[default]
    Hungarian,

    /// O(n!) permutation search, for small matrices only.
    BruteForce,
}

/// Environment mode affecting the assertions performed while solving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// No assertions.
    #[default]
    Production,

    /// Verifies the final assignment and its total cost.
    FastAssert,

    /// Verifies mark invariants after every step and cross-checks small
    /// problems against brute force.
    FullAssert,
}

impl EnvironmentMode {
    /// Returns true if the final result should be verified.
    pub fn asserts_result(self) -> bool {
        matches!(self, Self::FastAssert | Self::FullAssert)
    }

    /// Returns true if every step should be verified.
    pub fn asserts_steps(self) -> bool {
        matches!(self, Self::FullAssert)
    }
}

/// Termination configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct TerminationConfig {
    /// Maximum number of state machine steps.
    pub step_count_limit: Option<u64>,
}

#[cfg(test)]
mod tests;
