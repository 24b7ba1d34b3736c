//! Request types for the Shift Assignment Engine API.
//!
//! This module defines the JSON request structures for the `/schedule` endpoint.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Day, PreferenceScore, ShiftType, Slot, WeekLayout, Worker};
use crate::scheduling::{FilterMode, HeadcountPlan, PreferenceTable, ScheduleInput};

/// Request body for the `/schedule` endpoint.
///
/// Contains the roster, demand and preferences for one scheduling week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// Worker names in roster order.
    pub workers: Vec<String>,
    /// Week layout. Falls back to the configured default when absent.
    #[serde(default)]
    pub week: Option<WeekLayout>,
    /// Required headcount per slot. Slots not listed need nobody.
    #[serde(default)]
    pub headcounts: Vec<HeadcountRequest>,
    /// One score per worker and active slot.
    pub preferences: Vec<PreferenceRequest>,
    /// Overrides the configured filter mode.
    #[serde(default)]
    pub filter_mode: Option<FilterMode>,
}

/// A headcount requirement in a schedule request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadcountRequest {
    /// The day of the slot.
    pub day: Day,
    /// The shift of the slot.
    pub shift: ShiftType,
    /// How many workers the slot needs.
    pub required: u32,
}

/// A preference score in a schedule request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferenceRequest {
    /// The worker's name.
    pub worker: String,
    /// The day of the slot.
    pub day: Day,
    /// The shift of the slot.
    pub shift: ShiftType,
    /// Score from -1 (unavailable) to 3 (top preference).
    pub score: i8,
}

impl ScheduleRequest {
    /// Converts the request into engine input.
    ///
    /// Duplicate headcount or preference entries and out-of-range scores are
    /// rejected here; everything else is left to
    /// [`validate_input`](crate::scheduling::validate_input).
    pub fn into_input(self, default_week: WeekLayout) -> EngineResult<ScheduleInput> {
        let week = self.week.unwrap_or(default_week);

        let mut headcounts = HeadcountPlan::new();
        for entry in self.headcounts {
            headcounts.insert(Slot::new(entry.day, entry.shift), entry.required)?;
        }

        let mut preferences = PreferenceTable::new();
        for entry in self.preferences {
            let score =
                PreferenceScore::new(entry.score).map_err(|e| EngineError::InvalidPreference {
                    worker: entry.worker.clone(),
                    day: entry.day,
                    shift: entry.shift,
                    message: e.to_string(),
                })?;
            preferences.insert(
                &Worker::new(entry.worker),
                Slot::new(entry.day, entry.shift),
                score,
            )?;
        }

        Ok(ScheduleInput {
            roster: self.workers.into_iter().map(Worker::new).collect(),
            week,
            headcounts,
            preferences,
        })
    }
}
