//! Week layout model.
//!
//! A [`WeekLayout`] decides which days are active and how many shifts each
//! active day enables. Every run of the engine is scoped by one layout.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::{Day, ShiftType, Slot};

/// The maximum number of shifts a day can enable.
pub const MAX_SHIFTS_PER_DAY: u8 = 3;

/// Which days and shifts are in scope for a scheduling run.
///
/// Sunday through Thursday always use `weekday_shifts`. Friday and
/// Saturday are active only when their shift count is present.
///
/// # Example
///
/// ```
/// use shift_engine::models::{Day, ShiftType, WeekLayout};
///
/// let layout = WeekLayout {
///     weekday_shifts: 2,
///     friday_shifts: Some(1),
///     saturday_shifts: None,
/// };
/// assert_eq!(layout.active_days(), vec![
///     Day::Sunday, Day::Monday, Day::Tuesday, Day::Wednesday, Day::Thursday, Day::Friday,
/// ]);
/// assert_eq!(layout.shifts_for(Day::Friday), &[ShiftType::Morning]);
/// assert_eq!(layout.active_slots().len(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekLayout {
    /// Shifts enabled on each core day (Sunday-Thursday).
    pub weekday_shifts: u8,
    /// Shifts enabled on Friday, or `None` when Friday is off.
    #[serde(default)]
    pub friday_shifts: Option<u8>,
    /// Shifts enabled on Saturday, or `None` when Saturday is off.
    #[serde(default)]
    pub saturday_shifts: Option<u8>,
}

impl Default for WeekLayout {
    fn default() -> Self {
        Self {
            weekday_shifts: 2,
            friday_shifts: None,
            saturday_shifts: None,
        }
    }
}

impl WeekLayout {
    /// Checks every configured shift count is within `1..=3`.
    pub fn validate(&self) -> EngineResult<()> {
        check_shift_count("weekday_shifts", self.weekday_shifts)?;
        if let Some(count) = self.friday_shifts {
            check_shift_count("friday_shifts", count)?;
        }
        if let Some(count) = self.saturday_shifts {
            check_shift_count("saturday_shifts", count)?;
        }
        Ok(())
    }

    fn shift_count(&self, day: Day) -> u8 {
        match day {
            Day::Friday => self.friday_shifts.unwrap_or(0),
            Day::Saturday => self.saturday_shifts.unwrap_or(0),
            _ => self.weekday_shifts,
        }
    }

    /// Returns true if the day has at least one enabled shift.
    pub fn is_active(&self, day: Day) -> bool {
        self.shift_count(day) > 0
    }

    /// Returns the active days in calendar order.
    pub fn active_days(&self) -> Vec<Day> {
        Day::ALL
            .into_iter()
            .filter(|day| self.is_active(*day))
            .collect()
    }

    /// Returns the enabled shifts for a day (empty for inactive days).
    pub fn shifts_for(&self, day: Day) -> &'static [ShiftType] {
        ShiftType::prefix(self.shift_count(day))
    }

    /// Returns true if the slot's day is active and its shift enabled.
    pub fn contains(&self, slot: Slot) -> bool {
        self.shifts_for(slot.day).contains(&slot.shift)
    }

    /// Returns all active slots ordered by day, then shift.
    pub fn active_slots(&self) -> Vec<Slot> {
        Day::ALL
            .into_iter()
            .flat_map(|day| {
                self.shifts_for(day)
                    .iter()
                    .map(move |shift| Slot::new(day, *shift))
            })
            .collect()
    }
}

fn check_shift_count(field: &str, count: u8) -> EngineResult<()> {
    if (1..=MAX_SHIFTS_PER_DAY).contains(&count) {
        Ok(())
    } else {
        Err(EngineError::InvalidConfiguration {
            field: field.to_string(),
            message: format!(
                "shift count {} is outside 1..={}",
                count, MAX_SHIFTS_PER_DAY
            ),
        })
    }
}
