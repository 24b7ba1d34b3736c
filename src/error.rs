//! Error types for the Shift Assignment Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every structurally invalid input the engine refuses to schedule.
//! Capacity and preference shortfalls are never errors; they surface as
//! partial schedules.

use thiserror::Error;

use crate::models::{Day, ShiftType};

/// The main error type for the Shift Assignment Engine.
///
/// # Example
///
/// ```
/// use shift_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration or week layout value is out of its allowed range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfiguration {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A roster entry was invalid (blank or duplicated name, oversized roster).
    #[error("Invalid worker '{name}': {message}")]
    InvalidWorker {
        /// The offending worker name.
        name: String,
        /// A description of what made the worker invalid.
        message: String,
    },

    /// A worker has no preference for an active slot.
    #[error("Missing preference for worker '{worker}' on {day} {shift}")]
    ConfigurationIncomplete {
        /// The worker lacking a preference.
        worker: String,
        /// The day of the uncovered slot.
        day: Day,
        /// The shift of the uncovered slot.
        shift: ShiftType,
    },

    /// A preference entry was invalid (unknown worker, inactive slot, duplicate, out of range).
    #[error("Invalid preference for worker '{worker}' on {day} {shift}: {message}")]
    InvalidPreference {
        /// The worker named by the entry.
        worker: String,
        /// The day named by the entry.
        day: Day,
        /// The shift named by the entry.
        shift: ShiftType,
        /// A description of what made the entry invalid.
        message: String,
    },

    /// A headcount requirement was invalid (inactive slot, duplicate, above maximum).
    #[error("Invalid headcount for {day} {shift}: {message}")]
    InvalidHeadcount {
        /// The day named by the requirement.
        day: Day,
        /// The shift named by the requirement.
        shift: ShiftType,
        /// A description of what made the requirement invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_configuration_incomplete_displays_slot() {
        let error = EngineError::ConfigurationIncomplete {
            worker: "Dana".to_string(),
            day: Day::Tuesday,
            shift: ShiftType::Night,
        };
        assert_eq!(
            error.to_string(),
            "Missing preference for worker 'Dana' on Tuesday night"
        );
    }

    #[test]
    fn test_invalid_headcount_displays_slot_and_message() {
        let error = EngineError::InvalidHeadcount {
            day: Day::Friday,
            shift: ShiftType::Morning,
            message: "day is not active".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid headcount for Friday morning: day is not active"
        );
    }

    #[test]
    fn test_invalid_worker_displays_name_and_message() {
        let error = EngineError::InvalidWorker {
            name: "Avi".to_string(),
            message: "duplicate name".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid worker 'Avi': duplicate name");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_invalid_configuration() -> EngineResult<()> {
            Err(EngineError::InvalidConfiguration {
                field: "weekly_cap".to_string(),
                message: "must be at least 1".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_invalid_configuration()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
