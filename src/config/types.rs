//! Configuration types for shift scheduling.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::WeekLayout;
use crate::scheduling::FilterMode;

/// Default maximum number of seats a worker may hold per week.
pub const DEFAULT_WEEKLY_CAP: u32 = 7;

/// Default maximum headcount for a single slot.
pub const DEFAULT_MAX_HEADCOUNT_PER_SLOT: u32 = 20;

/// Default maximum roster size.
pub const DEFAULT_MAX_WORKERS: usize = 100;

fn default_weekly_cap() -> u32 {
    DEFAULT_WEEKLY_CAP
}

fn default_max_headcount_per_slot() -> u32 {
    DEFAULT_MAX_HEADCOUNT_PER_SLOT
}

fn default_max_workers() -> usize {
    DEFAULT_MAX_WORKERS
}

/// Limits and behaviour applied to every scheduling run.
///
/// Loaded from `policy.yaml`. Every field has a default, so an empty file
/// is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulingPolicy {
    /// Maximum seats per worker per week.
    #[serde(default = "default_weekly_cap")]
    pub weekly_cap: u32,
    /// Maximum headcount a single slot may request.
    #[serde(default = "default_max_headcount_per_slot")]
    pub max_headcount_per_slot: u32,
    /// Maximum roster size.
    #[serde(default = "default_max_workers")]
    pub max_workers: usize,
    /// Filtering mode used unless a request overrides it.
    #[serde(default)]
    pub filter_mode: FilterMode,
}

impl Default for SchedulingPolicy {
    fn default() -> Self {
        Self {
            weekly_cap: DEFAULT_WEEKLY_CAP,
            max_headcount_per_slot: DEFAULT_MAX_HEADCOUNT_PER_SLOT,
            max_workers: DEFAULT_MAX_WORKERS,
            filter_mode: FilterMode::default(),
        }
    }
}

impl SchedulingPolicy {
    /// Checks every limit is at least one.
    pub fn validate(&self) -> EngineResult<()> {
        let limits = [
            ("weekly_cap", self.weekly_cap as usize),
            ("max_headcount_per_slot", self.max_headcount_per_slot as usize),
            ("max_workers", self.max_workers),
        ];
        match limits.iter().find(|(_, value)| *value == 0) {
            Some((field, _)) => Err(EngineError::InvalidConfiguration {
                field: field.to_string(),
                message: "must be at least 1".to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// The complete scheduling configuration loaded from YAML files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchedulingConfig {
    /// Scheduling policy.
    policy: SchedulingPolicy,
    /// Week layout used when a request does not supply one.
    default_week: WeekLayout,
}

impl SchedulingConfig {
    /// Creates a new SchedulingConfig from its component parts.
    pub fn new(policy: SchedulingPolicy, default_week: WeekLayout) -> Self {
        Self {
            policy,
            default_week,
        }
    }

    /// Returns the scheduling policy.
    pub fn policy(&self) -> &SchedulingPolicy {
        &self.policy
    }

    /// Returns the default week layout.
    pub fn default_week(&self) -> &WeekLayout {
        &self.default_week
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_policy_uses_defaults() {
        let policy: SchedulingPolicy = serde_yaml::from_str("{}").unwrap();
        assert_eq!(policy, SchedulingPolicy::default());
        assert_eq!(policy.weekly_cap, 7);
    }

    #[test]
    fn test_policy_parses_filter_mode() {
        let policy: SchedulingPolicy =
            serde_yaml::from_str("weekly_cap: 5\nfilter_mode: resolve\n").unwrap();
        assert_eq!(policy.weekly_cap, 5);
        assert_eq!(policy.filter_mode, FilterMode::Resolve);
    }

    #[test]
    fn test_zero_cap_is_invalid() {
        let policy = SchedulingPolicy {
            weekly_cap: 0,
            ..SchedulingPolicy::default()
        };
        match policy.validate() {
            Err(EngineError::InvalidConfiguration { field, .. }) => {
                assert_eq!(field, "weekly_cap")
            }
            other => panic!("Expected InvalidConfiguration, got {:?}", other),
        }
    }
}
