//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading scheduling
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::WeekLayout;

use super::types::{SchedulingConfig, SchedulingPolicy};

/// Loads and provides access to scheduling configuration.
///
/// # Directory Structure
///
/// ```text
/// config/standard/
/// ├── policy.yaml   # Weekly cap, headcount/roster limits, filter mode
/// └── week.yaml     # Default week layout
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/standard")?;
/// println!("Weekly cap: {}", loader.policy().weekly_cap);
/// # Ok::<(), shift_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: SchedulingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// or holds values outside their allowed range.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy = Self::load_yaml::<SchedulingPolicy>(&path.join("policy.yaml"))?;
        policy.validate()?;

        let default_week = Self::load_yaml::<WeekLayout>(&path.join("week.yaml"))?;
        default_week.validate()?;

        debug!(
            path = %path.display(),
            weekly_cap = policy.weekly_cap,
            filter_mode = ?policy.filter_mode,
            "Loaded scheduling configuration"
        );

        Ok(Self {
            config: SchedulingConfig::new(policy, default_week),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: SchedulingConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying scheduling configuration.
    pub fn config(&self) -> &SchedulingConfig {
        &self.config
    }

    /// Returns the scheduling policy.
    pub fn policy(&self) -> &SchedulingPolicy {
        self.config.policy()
    }

    /// Returns the default week layout.
    pub fn default_week(&self) -> &WeekLayout {
        self.config.default_week()
    }
}
