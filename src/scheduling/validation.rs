//! Structural validation of a scheduling input.
//!
//! Runs before any expansion so that a malformed input never produces a
//! partial schedule. Shortfalls in capacity or availability are not checked
//! here; they are legitimate outcomes.

use std::collections::HashSet;

use crate::config::SchedulingPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::Worker;

use super::ScheduleInput;

/// Validates an input against a policy.
///
/// Checks, in order: the week layout, the roster, headcount entries,
/// preference entries, and finally preference coverage.
pub fn validate_input(input: &ScheduleInput, policy: &SchedulingPolicy) -> EngineResult<()> {
    input.week.validate()?;
    validate_roster(&input.roster, policy)?;

    // Sorted so the reported entry does not depend on hash order.
    let mut headcounts: Vec<_> = input.headcounts.iter().collect();
    headcounts.sort_unstable();
    for (slot, required) in headcounts {
        if !input.week.contains(slot) {
            return Err(EngineError::InvalidHeadcount {
                day: slot.day,
                shift: slot.shift,
                message: "slot is not active in the week layout".to_string(),
            });
        }
        if required > policy.max_headcount_per_slot {
            return Err(EngineError::InvalidHeadcount {
                day: slot.day,
                shift: slot.shift,
                message: format!(
                    "headcount {} exceeds maximum {}",
                    required, policy.max_headcount_per_slot
                ),
            });
        }
    }

    let names: HashSet<&str> = input.roster.iter().map(Worker::name).collect();
    let mut preferences: Vec<_> = input.preferences.iter().collect();
    preferences.sort_unstable_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
    for (worker, slot, _) in preferences {
        let message = if !names.contains(worker) {
            "worker is not on the roster"
        } else if !input.week.contains(slot) {
            "slot is not active in the week layout"
        } else {
            continue;
        };
        return Err(EngineError::InvalidPreference {
            worker: worker.to_string(),
            day: slot.day,
            shift: slot.shift,
            message: message.to_string(),
        });
    }

    input
        .preferences
        .ensure_complete(&input.roster, &input.week)
}

fn validate_roster(roster: &[Worker], policy: &SchedulingPolicy) -> EngineResult<()> {
    if roster.len() > policy.max_workers {
        return Err(EngineError::InvalidConfiguration {
            field: "workers".to_string(),
            message: format!(
                "roster of {} exceeds maximum {}",
                roster.len(),
                policy.max_workers
            ),
        });
    }

    let mut seen = HashSet::new();
    for worker in roster {
        if worker.name().trim().is_empty() {
            return Err(EngineError::InvalidWorker {
                name: worker.name().to_string(),
                message: "name must not be blank".to_string(),
            });
        }
        if !seen.insert(worker.name()) {
            return Err(EngineError::InvalidWorker {
                name: worker.name().to_string(),
                message: "duplicate name".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, PreferenceScore, ShiftType, Slot, WeekLayout};
    use crate::scheduling::{HeadcountPlan, PreferenceTable};

    fn layout() -> WeekLayout {
        WeekLayout {
            weekday_shifts: 1,
            friday_shifts: None,
            saturday_shifts: None,
        }
    }

    fn valid_input(names: &[&str]) -> ScheduleInput {
        let roster: Vec<Worker> = names.iter().map(|n| Worker::new(*n)).collect();
        let week = layout();
        let mut preferences = PreferenceTable::new();
        for worker in &roster {
            for slot in week.active_slots() {
                preferences
                    .insert(worker, slot, PreferenceScore::new(2).unwrap())
                    .unwrap();
            }
        }
        let mut headcounts = HeadcountPlan::new();
        headcounts
            .insert(Slot::new(Day::Sunday, ShiftType::Morning), 1)
            .unwrap();
        ScheduleInput {
            roster,
            week,
            headcounts,
            preferences,
        }
    }

    #[test]
    fn test_valid_input_passes() {
        let input = valid_input(&["A", "B"]);
        assert!(validate_input(&input, &SchedulingPolicy::default()).is_ok());
    }

    #[test]
    fn test_duplicate_worker_rejected() {
        let mut input = valid_input(&["A"]);
        input.roster.push(Worker::new("A"));
        match validate_input(&input, &SchedulingPolicy::default()) {
            Err(EngineError::InvalidWorker { name, message }) => {
                assert_eq!(name, "A");
                assert_eq!(message, "duplicate name");
            }
            other => panic!("Expected InvalidWorker, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_worker_rejected() {
        let input = valid_input(&["  "]);
        assert!(matches!(
            validate_input(&input, &SchedulingPolicy::default()),
            Err(EngineError::InvalidWorker { .. })
        ));
    }

    #[test]
    fn test_roster_above_maximum_rejected() {
        let input = valid_input(&["A", "B", "C"]);
        let policy = SchedulingPolicy {
            max_workers: 2,
            ..SchedulingPolicy::default()
        };
        assert!(matches!(
            validate_input(&input, &policy),
            Err(EngineError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_headcount_for_inactive_slot_rejected() {
        let mut input = valid_input(&["A"]);
        input
            .headcounts
            .insert(Slot::new(Day::Friday, ShiftType::Morning), 1)
            .unwrap();
        match validate_input(&input, &SchedulingPolicy::default()) {
            Err(EngineError::InvalidHeadcount { day, .. }) => assert_eq!(day, Day::Friday),
            other => panic!("Expected InvalidHeadcount, got {:?}", other),
        }
    }

    #[test]
    fn test_headcount_above_maximum_rejected() {
        let mut input = valid_input(&["A"]);
        input
            .headcounts
            .insert(Slot::new(Day::Monday, ShiftType::Morning), 21)
            .unwrap();
        assert!(matches!(
            validate_input(&input, &SchedulingPolicy::default()),
            Err(EngineError::InvalidHeadcount { .. })
        ));
    }

    #[test]
    fn test_preference_for_unknown_worker_rejected() {
        let mut input = valid_input(&["A"]);
        input
            .preferences
            .insert(
                &Worker::new("Ghost"),
                Slot::new(Day::Sunday, ShiftType::Morning),
                PreferenceScore::TOP,
            )
            .unwrap();
        match validate_input(&input, &SchedulingPolicy::default()) {
            Err(EngineError::InvalidPreference { worker, .. }) => assert_eq!(worker, "Ghost"),
            other => panic!("Expected InvalidPreference, got {:?}", other),
        }
    }

    #[test]
    fn test_preference_for_inactive_shift_rejected() {
        let mut input = valid_input(&["A"]);
        input
            .preferences
            .insert(
                &Worker::new("A"),
                Slot::new(Day::Sunday, ShiftType::Night),
                PreferenceScore::TOP,
            )
            .unwrap();
        assert!(matches!(
            validate_input(&input, &SchedulingPolicy::default()),
            Err(EngineError::InvalidPreference { .. })
        ));
    }

    #[test]
    fn test_missing_preference_rejected() {
        let mut input = valid_input(&["A"]);
        input.roster.push(Worker::new("B"));
        assert!(matches!(
            validate_input(&input, &SchedulingPolicy::default()),
            Err(EngineError::ConfigurationIncomplete { .. })
        ));
    }
}
