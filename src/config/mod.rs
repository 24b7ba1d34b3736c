//! Configuration loading and management for the Shift Assignment Engine.
//!
//! This module loads the scheduling policy and default week layout from
//! YAML files.
//!
//! # Example
//!
//! ```no_run
//! use shift_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/standard").unwrap();
//! println!("Weekly cap: {}", config.policy().weekly_cap);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_MAX_HEADCOUNT_PER_SLOT, DEFAULT_MAX_WORKERS, DEFAULT_WEEKLY_CAP, SchedulingConfig,
    SchedulingPolicy,
};
