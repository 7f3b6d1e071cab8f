//! Configuration options for the expected-value search.
//!
//! This module provides the configuration struct that controls how the
//! search runs (parallel or sequential, worker count) and how its exact
//! results are rounded for display.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Largest supported display precision, in decimal digits.
pub const MAX_PRECISION: u32 = 12;

/// Configuration for the expected-value search.
///
/// # Example
/// ```
/// use draw_poker_ev::search::SearchConfig;
///
/// let config = SearchConfig::default();
/// assert!(config.parallel);
/// assert_eq!(config.precision, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Evaluate holds and draw batches on a rayon worker pool.
    ///
    /// Results are identical either way; scores are summed as integers.
    pub parallel: bool,

    /// Number of worker threads for parallel search.
    ///
    /// Set to `None` to use rayon's global pool (all available cores).
    pub num_threads: Option<usize>,

    /// Decimal digits kept when rounding expected scores for display.
    ///
    /// Comparisons always use the exact rational mean.
    pub precision: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            num_threads: None,
            precision: 2,
        }
    }
}

impl SearchConfig {
    /// Create a new SearchConfig with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a single-threaded configuration.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Default::default()
        }
    }

    /// Builder method: set whether to search in parallel.
    pub fn with_parallel(mut self, enable: bool) -> Self {
        self.parallel = enable;
        self
    }

    /// Builder method: set number of threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.num_threads = Some(threads);
        self
    }

    /// Builder method: set display precision.
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Load configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision(self.precision));
        }
        if self.num_threads == Some(0) {
            return Err(ConfigError::InvalidThreads(0));
        }
        Ok(())
    }

    /// Round a value to the configured precision.
    pub fn round(&self, value: f64) -> f64 {
        let scale = 10f64.powi(self.precision as i32);
        (value * scale).round() / scale
    }
}

/// Errors that can occur when loading or validating search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Display precision is out of range.
    #[error("precision {0} is out of range [0, 12]")]
    InvalidPrecision(u32),
    /// Worker count is zero.
    #[error("thread count {0} must be at least 1")]
    InvalidThreads(usize),
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(String),
    /// The config file is not valid JSON for this struct.
    #[error("failed to parse config: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(SearchConfig::default().validate().is_ok());
        assert!(!SearchConfig::sequential().parallel);
    }

    #[test]
    fn test_invalid_values() {
        let config = SearchConfig::new().with_precision(MAX_PRECISION + 1);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidPrecision(MAX_PRECISION + 1))
        );

        let config = SearchConfig::new().with_threads(0);
        assert_eq!(config.validate(), Err(ConfigError::InvalidThreads(0)));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{ "parallel": false, "precision": 4 }"#;
        let config = SearchConfig::from_json_str(json).unwrap();
        assert!(!config.parallel);
        assert_eq!(config.precision, 4);
        assert_eq!(config.num_threads, None);

        assert!(matches!(
            SearchConfig::from_json_str(r#"{ "precision": 40 }"#),
            Err(ConfigError::InvalidPrecision(40))
        ));
        assert!(matches!(
            SearchConfig::from_json_str("not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            SearchConfig::from_json_file("/nonexistent/search.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_round() {
        let config = SearchConfig::default();
        assert_eq!(config.round(1.23456), 1.23);
        assert_eq!(config.round(0.005), 0.01);
        assert_eq!(config.with_precision(0).round(2.6), 3.0);
    }
}
