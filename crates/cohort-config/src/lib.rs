//! Configuration for the Cohort solver.
//!
//! Load solver tunables from TOML to adjust the target group count, the
//! fallback budget and the reliable-sample threshold without code changes.
//!
//! # Examples
//!
//! Parse configuration from a TOML string:
//!
//! ```
//! use cohort_config::SolverConfig;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     target_count = 5
//!     max_fallback_rounds = 4
//!     seed = 42
//! "#).unwrap();
//!
//! assert_eq!(config.target_count, 5);
//! assert_eq!(config.seed, Some(42));
//! ```
//!
//! Use default config when the file is missing:
//!
//! ```
//! use cohort_config::SolverConfig;
//!
//! let config = SolverConfig::load("solver.toml").unwrap_or_default();
//! assert_eq!(config.target_count, 5);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the configuration contents.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration parsed but holds unusable values.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Tunables for group extraction and similarity selection.
///
/// The defaults reproduce the production constants: groups sum to 5, up to 4
/// fallback rounds, and a round's statistical result is trusted once at
/// least max(10% of the population, 3) entities were grouped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SolverConfig {
    /// Exact value every emitted group's counts must sum to.
    pub target_count: i32,

    /// Number of extraction-plus-similarity attempts before giving up.
    pub max_fallback_rounds: u32,

    /// Lower bound of the reliable-sample threshold.
    pub min_sample_size: usize,

    /// Fraction of the population length in the reliable-sample threshold.
    pub sample_fraction: f64,

    /// Fixed RNG seed for reproducible reshuffles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            target_count: 5,
            max_fallback_rounds: 4,
            min_sample_size: 3,
            sample_fraction: 0.1,
            seed: None,
        }
    }
}

impl SolverConfig {
    /// Parses and validates configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Checks that the tunables are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_count <= 0 {
            return Err(ConfigError::Invalid(format!(
                "target_count must be positive, got {}",
                self.target_count
            )));
        }
        if self.max_fallback_rounds == 0 {
            return Err(ConfigError::Invalid(
                "max_fallback_rounds must be at least 1".to_string(),
            ));
        }
        if !(self.sample_fraction > 0.0 && self.sample_fraction <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "sample_fraction must be in (0, 1], got {}",
                self.sample_fraction
            )));
        }
        Ok(())
    }
}
