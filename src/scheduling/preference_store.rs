//! Preference store.
//!
//! Holds one [`PreferenceScore`] per (worker, slot) for the active week and
//! checks that coverage is complete before the engine runs.

use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{PreferenceScore, Slot, WeekLayout, Worker};

/// Per-worker, per-slot preference scores.
///
/// # Example
///
/// ```
/// use shift_engine::models::{Day, PreferenceScore, ShiftType, Slot, Worker};
/// use shift_engine::scheduling::PreferenceTable;
///
/// let mut table = PreferenceTable::new();
/// let slot = Slot::new(Day::Sunday, ShiftType::Morning);
/// table.insert(&Worker::new("Ori"), slot, PreferenceScore::TOP).unwrap();
///
/// assert_eq!(table.get("Ori", slot), Some(PreferenceScore::TOP));
/// assert_eq!(table.get("Ori", Slot::new(Day::Monday, ShiftType::Morning)), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceTable {
    scores: HashMap<String, HashMap<Slot, PreferenceScore>>,
}

impl PreferenceTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a score, rejecting a second entry for the same worker and slot.
    pub fn insert(
        &mut self,
        worker: &Worker,
        slot: Slot,
        score: PreferenceScore,
    ) -> EngineResult<()> {
        let by_slot = self.scores.entry(worker.name().to_string()).or_default();
        if by_slot.contains_key(&slot) {
            return Err(EngineError::InvalidPreference {
                worker: worker.name().to_string(),
                day: slot.day,
                shift: slot.shift,
                message: "duplicate preference entry".to_string(),
            });
        }
        by_slot.insert(slot, score);
        Ok(())
    }

    /// Returns the score for a worker and slot, if recorded.
    pub fn get(&self, worker: &str, slot: Slot) -> Option<PreferenceScore> {
        self.scores.get(worker)?.get(&slot).copied()
    }

    /// Returns the number of recorded scores.
    pub fn len(&self) -> usize {
        self.scores.values().map(HashMap::len).sum()
    }

    /// Returns true if no scores are recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every recorded (worker, slot, score) triple.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Slot, PreferenceScore)> + '_ {
        self.scores.iter().flat_map(|(worker, by_slot)| {
            by_slot
                .iter()
                .map(move |(slot, score)| (worker.as_str(), *slot, *score))
        })
    }

    /// Checks every roster worker has a score for every active slot.
    ///
    /// Reports the first gap in roster order, then day/shift order, so the
    /// error is the same on every run.
    pub fn ensure_complete(&self, roster: &[Worker], layout: &WeekLayout) -> EngineResult<()> {
        let slots = layout.active_slots();
        for worker in roster {
            if let Some(slot) = slots
                .iter()
                .find(|slot| self.get(worker.name(), **slot).is_none())
            {
                return Err(EngineError::ConfigurationIncomplete {
                    worker: worker.name().to_string(),
                    day: slot.day,
                    shift: slot.shift,
                });
            }
        }
        Ok(())
    }
}
