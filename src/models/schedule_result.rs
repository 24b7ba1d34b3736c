//! Schedule result models for the Shift Assignment Engine.
//!
//! This module contains the [`ScheduleResult`] type and the structures it is
//! built from: accepted assignments, fulfillment statistics, slot
//! shortfalls and the audit trace of the run.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Day, PreferenceScore, ShiftType, Slot, WeekLayout, Worker};

/// A worker placed into one seat of a slot.
///
/// # Example
///
/// ```
/// use shift_engine::models::{Assignment, Day, PreferenceScore, ShiftType, Worker};
///
/// let assignment = Assignment {
///     day: Day::Monday,
///     shift: ShiftType::Morning,
///     worker: Worker::new("Tal"),
///     unit_index: 0,
///     preference: PreferenceScore::TOP,
/// };
/// assert_eq!(assignment.slot().to_string(), "Monday morning");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The day of the assigned slot.
    pub day: Day,
    /// The shift of the assigned slot.
    pub shift: ShiftType,
    /// The assigned worker.
    pub worker: Worker,
    /// The seat within the slot the worker occupies.
    pub unit_index: u32,
    /// The worker's preference for this slot.
    pub preference: PreferenceScore,
}

impl Assignment {
    /// Returns the (day, shift) slot of this assignment.
    pub fn slot(&self) -> Slot {
        Slot::new(self.day, self.shift)
    }
}

/// How well the schedule honoured top preferences and headcount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentStats {
    /// Number of accepted assignments.
    pub total_assigned: u32,
    /// Number of accepted assignments made at the top preference.
    pub top_preference_count: u32,
    /// `top_preference_count / total_assigned` as a percentage, one decimal place.
    pub top_preference_percentage: Decimal,
    /// Sum of headcount over all active slots.
    pub requested_headcount: u32,
    /// Seats actually filled.
    pub filled_headcount: u32,
}

/// A slot that ended the run with fewer workers than required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotShortfall {
    /// The day of the slot.
    pub day: Day,
    /// The shift of the slot.
    pub shift: ShiftType,
    /// Required headcount.
    pub required: u32,
    /// Accepted assignments.
    pub filled: u32,
}

/// A single step in the audit trace recording one pipeline stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The identifier of the stage.
    pub rule_id: String,
    /// The human-readable name of the stage.
    pub rule_name: String,
    /// The input summary for this step.
    pub input: serde_json::Value,
    /// The output summary for this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of what the stage decided.
    pub reasoning: String,
}

/// A warning generated during scheduling.
///
/// Warnings flag outcomes that are valid but likely need attention, such
/// as an unfilled slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of pipeline steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during the run.
    pub warnings: Vec<AuditWarning>,
    /// The total run duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Unique identifier for this run.
    pub schedule_id: Uuid,
    /// When the run was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that produced the schedule.
    pub engine_version: String,
    /// The week layout the schedule covers.
    pub week: WeekLayout,
    /// Accepted assignments sorted by day, shift, then worker name.
    pub assignments: Vec<Assignment>,
    /// Fulfillment statistics.
    pub stats: FulfillmentStats,
    /// Slots left below their required headcount.
    pub shortfalls: Vec<SlotShortfall>,
    /// Audit trace of the run.
    pub audit_trace: AuditTrace,
}

impl ScheduleResult {
    /// Returns the assignments of one worker in schedule order.
    pub fn assignments_for<'a>(&'a self, worker: &'a str) -> impl Iterator<Item = &'a Assignment> {
        self.assignments
            .iter()
            .filter(move |a| a.worker.name() == worker)
    }
}
