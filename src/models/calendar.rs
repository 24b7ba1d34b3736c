//! Calendar types for the weekly schedule.
//!
//! This module defines the [`Day`] and [`ShiftType`] labels and the
//! [`Slot`] / [`SlotUnit`] units of demand built from them.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// A day of the scheduling week.
///
/// The week starts on Sunday. Sunday through Thursday are the core days of
/// every schedule; Friday and Saturday are optional.
///
/// # Example
///
/// ```
/// use shift_engine::models::Day;
///
/// assert!(Day::Sunday < Day::Saturday);
/// assert!(Day::Thursday.is_core());
/// assert!(!Day::Friday.is_core());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Day {
    /// First day of the week.
    Sunday,
    /// Second day of the week.
    Monday,
    /// Third day of the week.
    Tuesday,
    /// Fourth day of the week.
    Wednesday,
    /// Fifth day of the week, last of the core days.
    Thursday,
    /// Optional sixth day.
    Friday,
    /// Optional seventh day.
    Saturday,
}

impl Day {
    /// All days in calendar order.
    pub const ALL: [Day; 7] = [
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    /// The days that are active in every schedule.
    pub const CORE: [Day; 5] = [
        Day::Sunday,
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
    ];

    /// Returns the zero-based position of the day in the week.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns true for Sunday through Thursday.
    pub fn is_core(self) -> bool {
        self.index() < Self::CORE.len()
    }
}

impl From<Day> for Weekday {
    fn from(day: Day) -> Self {
        match day {
            Day::Sunday => Weekday::Sun,
            Day::Monday => Weekday::Mon,
            Day::Tuesday => Weekday::Tue,
            Day::Wednesday => Weekday::Wed,
            Day::Thursday => Weekday::Thu,
            Day::Friday => Weekday::Fri,
            Day::Saturday => Weekday::Sat,
        }
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        // Sunday-first numbering lines up with the enum discriminants.
        Day::ALL[weekday.num_days_from_sunday() as usize]
    }
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Day::Sunday => write!(f, "Sunday"),
            Day::Monday => write!(f, "Monday"),
            Day::Tuesday => write!(f, "Tuesday"),
            Day::Wednesday => write!(f, "Wednesday"),
            Day::Thursday => write!(f, "Thursday"),
            Day::Friday => write!(f, "Friday"),
            Day::Saturday => write!(f, "Saturday"),
        }
    }
}

/// A shift within a day.
///
/// Shifts are ordered; a day that enables `n` shifts enables the first `n`
/// of morning, afternoon, night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// First shift of the day.
    Morning,
    /// Second shift of the day.
    Afternoon,
    /// Third shift of the day.
    Night,
}

impl ShiftType {
    /// All shift types in order.
    pub const ALL: [ShiftType; 3] = [ShiftType::Morning, ShiftType::Afternoon, ShiftType::Night];

    /// Returns the first `count` shift types, clamped to the available three.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_engine::models::ShiftType;
    ///
    /// assert_eq!(ShiftType::prefix(2), &[ShiftType::Morning, ShiftType::Afternoon]);
    /// assert!(ShiftType::prefix(0).is_empty());
    /// ```
    pub fn prefix(count: u8) -> &'static [ShiftType] {
        let count = usize::from(count).min(Self::ALL.len());
        &Self::ALL[..count]
    }
}

impl std::fmt::Display for ShiftType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftType::Morning => write!(f, "morning"),
            ShiftType::Afternoon => write!(f, "afternoon"),
            ShiftType::Night => write!(f, "night"),
        }
    }
}

/// A schedulable (day, shift) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// The day of the slot.
    pub day: Day,
    /// The shift of the slot.
    pub shift: ShiftType,
}

impl Slot {
    /// Creates a new slot.
    pub fn new(day: Day, shift: ShiftType) -> Self {
        Self { day, shift }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.day, self.shift)
    }
}

/// One seat within a slot.
///
/// A slot with headcount `n` expands into units `0..n`. Units of the same
/// slot are interchangeable but tracked separately so capacity is exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SlotUnit {
    /// The slot this unit belongs to.
    pub slot: Slot,
    /// Zero-based seat index within the slot.
    pub index: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_days_order_sunday_first() {
        let mut days = vec![Day::Saturday, Day::Monday, Day::Sunday, Day::Friday];
        days.sort();
        assert_eq!(
            days,
            vec![Day::Sunday, Day::Monday, Day::Friday, Day::Saturday]
        );
    }

    #[test]
    fn test_core_days_are_first_five() {
        for day in Day::ALL {
            assert_eq!(day.is_core(), Day::CORE.contains(&day));
        }
        assert!(!Day::Saturday.is_core());
    }

    #[test]
    fn test_weekday_conversion_round_trips() {
        for day in Day::ALL {
            let weekday: Weekday = day.into();
            assert_eq!(Day::from(weekday), day);
        }
        assert_eq!(Day::from(Weekday::Sun), Day::Sunday);
    }

    #[test]
    fn test_shift_prefix_clamps() {
        assert_eq!(ShiftType::prefix(1), &[ShiftType::Morning]);
        assert_eq!(ShiftType::prefix(3).len(), 3);
        assert_eq!(ShiftType::prefix(9).len(), 3);
    }

    #[test]
    fn test_slot_serializes_snake_case() {
        let slot = Slot::new(Day::Wednesday, ShiftType::Afternoon);
        let json = serde_json::to_string(&slot).unwrap();
        assert_eq!(json, r#"{"day":"wednesday","shift":"afternoon"}"#);
    }

    #[test]
    fn test_slot_display() {
        let slot = Slot::new(Day::Friday, ShiftType::Night);
        assert_eq!(slot.to_string(), "Friday night");
    }
}
