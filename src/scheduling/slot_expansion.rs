//! Slot expansion.
//!
//! Turns per-slot headcount into individual seats ([`SlotUnit`]) and each
//! worker's available slots into matching [`Candidate`]s.

use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, PreferenceScore, Slot, SlotUnit, WeekLayout, Worker};

use super::PreferenceTable;

/// Required headcount per slot. Slots without an entry require nobody.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadcountPlan {
    required: HashMap<Slot, u32>,
}

impl HeadcountPlan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the headcount for a slot, rejecting a second entry.
    pub fn insert(&mut self, slot: Slot, required: u32) -> EngineResult<()> {
        if self.required.insert(slot, required).is_some() {
            return Err(EngineError::InvalidHeadcount {
                day: slot.day,
                shift: slot.shift,
                message: "duplicate headcount entry".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the headcount for a slot (zero when unset).
    pub fn required(&self, slot: Slot) -> u32 {
        self.required.get(&slot).copied().unwrap_or(0)
    }

    /// Iterates over every explicit (slot, headcount) entry.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, u32)> + '_ {
        self.required.iter().map(|(slot, n)| (*slot, *n))
    }

    /// Total headcount over the active slots of a layout.
    pub fn total(&self, layout: &WeekLayout) -> u32 {
        layout
            .active_slots()
            .into_iter()
            .map(|slot| self.required(slot))
            .sum()
    }
}

/// An eligible (worker, slot) pairing. One per pairing, not per seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The worker.
    pub worker: Worker,
    /// The slot the worker can take.
    pub slot: Slot,
    /// The worker's score for the slot (never unavailable).
    pub preference: PreferenceScore,
}

/// Expands headcount into seats, in layout order then seat index.
///
/// # Example
///
/// ```
/// use shift_engine::models::{Day, ShiftType, Slot, WeekLayout};
/// use shift_engine::scheduling::{HeadcountPlan, expand_slot_units};
///
/// let mut plan = HeadcountPlan::new();
/// plan.insert(Slot::new(Day::Monday, ShiftType::Morning), 2).unwrap();
///
/// let units = expand_slot_units(&WeekLayout::default(), &plan);
/// assert_eq!(units.len(), 2);
/// assert_eq!(units[1].index, 1);
/// ```
pub fn expand_slot_units(layout: &WeekLayout, headcounts: &HeadcountPlan) -> Vec<SlotUnit> {
    layout
        .active_slots()
        .into_iter()
        .flat_map(|slot| (0..headcounts.required(slot)).map(move |index| SlotUnit { slot, index }))
        .collect()
}

/// Expands the roster into candidates, in roster order then slot order.
///
/// Unavailable pairings are skipped. A missing score is reported as
/// [`EngineError::ConfigurationIncomplete`]; no default is assumed.
pub fn expand_candidates(
    roster: &[Worker],
    layout: &WeekLayout,
    preferences: &PreferenceTable,
) -> EngineResult<Vec<Candidate>> {
    let slots = layout.active_slots();
    let mut candidates = Vec::new();

    for worker in roster {
        for slot in &slots {
            let preference = preferences.get(worker.name(), *slot).ok_or_else(|| {
                EngineError::ConfigurationIncomplete {
                    worker: worker.name().to_string(),
                    day: slot.day,
                    shift: slot.shift,
                }
            })?;
            if preference.is_available() {
                candidates.push(Candidate {
                    worker: worker.clone(),
                    slot: *slot,
                    preference,
                });
            }
        }
    }

    Ok(candidates)
}

/// The result of expanding demand and supply, with its audit step.
#[derive(Debug, Clone)]
pub struct ExpansionResult {
    /// Seats to fill.
    pub units: Vec<SlotUnit>,
    /// Eligible pairings.
    pub candidates: Vec<Candidate>,
    /// The audit step recording this expansion.
    pub audit_step: AuditStep,
}

/// Runs both expansions and records an audit step.
pub fn expand_demand(
    roster: &[Worker],
    layout: &WeekLayout,
    headcounts: &HeadcountPlan,
    preferences: &PreferenceTable,
    step_number: u32,
) -> EngineResult<ExpansionResult> {
    let units = expand_slot_units(layout, headcounts);
    let candidates = expand_candidates(roster, layout, preferences)?;
    let unavailable = roster.len() * layout.active_slots().len() - candidates.len();

    let audit_step = AuditStep {
        step_number,
        rule_id: "slot_expansion".to_string(),
        rule_name: "Slot Expansion".to_string(),
        input: serde_json::json!({
            "workers": roster.len(),
            "active_slots": layout.active_slots().len(),
            "requested_headcount": headcounts.total(layout),
        }),
        output: serde_json::json!({
            "slot_units": units.len(),
            "candidates": candidates.len(),
            "unavailable_pairings": unavailable,
        }),
        reasoning: format!(
            "{} seats to fill from {} eligible worker/slot pairings ({} marked unavailable)",
            units.len(),
            candidates.len(),
            unavailable
        ),
    };

    Ok(ExpansionResult {
        units,
        candidates,
        audit_step,
    })
}
