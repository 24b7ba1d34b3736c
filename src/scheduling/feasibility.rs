//! Feasibility filtering of solver output.
//!
//! The solver does not know about the weekly cap, and forbidden cells may be
//! matched when the matrix is unbalanced. This module walks the matched pairs
//! in solver order and greedily accepts the ones that keep the schedule
//! feasible. All bookkeeping lives in [`FilterState`], which is threaded
//! through the pass as a fold.
//!
//! The pass is single and order-dependent: a seat freed by a rejected pair is
//! not offered to anyone else. [`FilterMode::Resolve`] exists for callers
//! that want those seats re-matched.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::{Assignment, Slot, SlotUnit, Worker};

use super::{Candidate, CostCell, MatchedPair};

/// How the engine treats seats freed by rejected pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// One solve, one filtering pass. Freed seats stay empty.
    #[default]
    SinglePass,
    /// After a pass that hit the weekly cap, drop capped workers and
    /// re-solve the remaining candidates against the open seats.
    Resolve,
}

/// Why a matched pair was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// The pair sits on a forbidden cell.
    Forbidden,
    /// The worker already holds a seat in this slot.
    WorkerAlreadyInSlot,
    /// The seat is already taken.
    UnitAlreadyFilled,
    /// The worker has reached the weekly cap.
    WeeklyCapReached,
}

/// A matched pair the filter turned down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// The candidate's worker.
    pub worker: Worker,
    /// The seat the solver chose.
    pub unit: SlotUnit,
    /// Why the pair was turned down.
    pub reason: RejectionReason,
}

/// Bookkeeping carried through the filtering fold.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    accepted_keys: HashSet<(Worker, Slot)>,
    used_units: HashSet<SlotUnit>,
    weekly_counts: HashMap<Worker, u32>,
    assignments: Vec<Assignment>,
    rejections: Vec<Rejection>,
}

impl FilterState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Considers one matched pair and returns the updated state.
    pub fn consider(
        mut self,
        candidate: &Candidate,
        unit: SlotUnit,
        cell: CostCell,
        weekly_cap: u32,
    ) -> Self {
        match self.check(candidate, unit, cell, weekly_cap) {
            Some(reason) => self.rejections.push(Rejection {
                worker: candidate.worker.clone(),
                unit,
                reason,
            }),
            None => {
                self.accepted_keys
                    .insert((candidate.worker.clone(), unit.slot));
                self.used_units.insert(unit);
                *self
                    .weekly_counts
                    .entry(candidate.worker.clone())
                    .or_insert(0) += 1;
                self.assignments.push(Assignment {
                    day: unit.slot.day,
                    shift: unit.slot.shift,
                    worker: candidate.worker.clone(),
                    unit_index: unit.index,
                    preference: candidate.preference,
                });
            }
        }
        self
    }

    fn check(
        &self,
        candidate: &Candidate,
        unit: SlotUnit,
        cell: CostCell,
        weekly_cap: u32,
    ) -> Option<RejectionReason> {
        if !cell.is_allowed() {
            Some(RejectionReason::Forbidden)
        } else if self.is_accepted(&candidate.worker, unit.slot) {
            Some(RejectionReason::WorkerAlreadyInSlot)
        } else if self.is_unit_used(unit) {
            Some(RejectionReason::UnitAlreadyFilled)
        } else if self.weekly_count(&candidate.worker) >= weekly_cap {
            Some(RejectionReason::WeeklyCapReached)
        } else {
            None
        }
    }

    /// Returns true if the worker already holds a seat in the slot.
    pub fn is_accepted(&self, worker: &Worker, slot: Slot) -> bool {
        self.accepted_keys.contains(&(worker.clone(), slot))
    }

    /// Returns true if the seat is taken.
    pub fn is_unit_used(&self, unit: SlotUnit) -> bool {
        self.used_units.contains(&unit)
    }

    /// Returns how many seats the worker holds this week.
    pub fn weekly_count(&self, worker: &Worker) -> u32 {
        self.weekly_counts.get(worker).copied().unwrap_or(0)
    }

    /// Accepted assignments in acceptance order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Rejected pairs in encounter order.
    pub fn rejections(&self) -> &[Rejection] {
        &self.rejections
    }

    /// Consumes the state, returning accepted assignments and rejections.
    pub fn into_parts(self) -> (Vec<Assignment>, Vec<Rejection>) {
        (self.assignments, self.rejections)
    }
}

/// Runs one filtering pass over `pairs` in the order given.
///
/// `candidates` and `units` are the row and column labels of the matrix the
/// pairs came from.
pub fn filter_pairs(
    state: FilterState,
    pairs: &[MatchedPair],
    candidates: &[Candidate],
    units: &[SlotUnit],
    weekly_cap: u32,
) -> FilterState {
    pairs.iter().fold(state, |state, pair| {
        state.consider(&candidates[pair.row], units[pair.col], pair.cell, weekly_cap)
    })
}
