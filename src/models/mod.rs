//! Core data models for the Shift Assignment Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calendar;
mod preference;
mod schedule_result;
mod week;
mod worker;

pub use calendar::{Day, ShiftType, Slot, SlotUnit};
pub use preference::{PreferenceScore, ScoreOutOfRange};
pub use schedule_result::{
    Assignment, AuditStep, AuditTrace, AuditWarning, FulfillmentStats, ScheduleResult,
    SlotShortfall,
};
pub use week::{MAX_SHIFTS_PER_DAY, WeekLayout};
pub use worker::Worker;
