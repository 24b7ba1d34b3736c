//! The scheduling pipeline.
//!
//! validate → expand → build cost matrix → solve → filter → measure.
//! Each run is a pure function of its input and policy apart from the run
//! id, timestamp and duration recorded on the result.

use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::config::SchedulingPolicy;
use crate::error::EngineResult;
use crate::models::{
    Assignment, AuditStep, AuditTrace, AuditWarning, ScheduleResult, SlotUnit, WeekLayout, Worker,
};

use super::{
    Candidate, FilterMode, FilterState, HeadcountPlan, PreferenceTable, Rejection,
    RejectionReason, allowed_cost, build_cost_matrix, expand_demand, filter_pairs,
    measure_fulfillment, solve, validate_input,
};

/// The version reported on every schedule.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything a scheduling run needs besides the policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleInput {
    /// Workers in roster order.
    pub roster: Vec<Worker>,
    /// Active days and shifts.
    pub week: WeekLayout,
    /// Required headcount per slot.
    pub headcounts: HeadcountPlan,
    /// Scores for every roster worker and active slot.
    pub preferences: PreferenceTable,
}

/// Summary of one solve-and-filter round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchingRound {
    /// One-based round number.
    pub round: u32,
    /// Matrix rows.
    pub candidates: usize,
    /// Matrix columns.
    pub units: usize,
    /// Allowed cells in the matrix.
    pub allowed_cells: usize,
    /// Pairs returned by the solver.
    pub matched_pairs: usize,
    /// Returned pairs that sit on forbidden cells.
    pub forbidden_pairs: usize,
    /// Total cost of the allowed pairs.
    pub matched_cost: u64,
    /// Pairs accepted by the filter this round.
    pub accepted: usize,
    /// Pairs rejected by the filter this round.
    pub rejections: Vec<Rejection>,
}

impl MatchingRound {
    fn rejected(&self, reason: RejectionReason) -> usize {
        self.rejections.iter().filter(|r| r.reason == reason).count()
    }
}

/// The accepted schedule and the rounds that produced it.
#[derive(Debug, Clone)]
pub struct MatchingOutcome {
    /// Final filter state.
    pub state: FilterState,
    /// Rounds in execution order. Single-pass runs have exactly one.
    pub rounds: Vec<MatchingRound>,
}

/// Matches candidates to seats and filters the result.
///
/// In [`FilterMode::SinglePass`] this is one solve and one filtering pass.
/// In [`FilterMode::Resolve`] a round that rejected pairs for the weekly cap
/// is followed by another round over the candidates that are still usable
/// and the seats that are still open, until a round accepts nothing or no
/// cap rejection occurs.
pub fn assign(
    candidates: &[Candidate],
    units: &[SlotUnit],
    weekly_cap: u32,
    mode: FilterMode,
) -> MatchingOutcome {
    let mut state = FilterState::new();
    let mut rounds = Vec::new();
    let mut open_candidates: Vec<Candidate> = candidates.to_vec();
    let mut open_units: Vec<SlotUnit> = units.to_vec();

    loop {
        let matrix = build_cost_matrix(&open_candidates, &open_units);
        let pairs = solve(&matrix);

        let accepted_before = state.assignments().len();
        let rejected_before = state.rejections().len();
        state = filter_pairs(state, &pairs, &open_candidates, &open_units, weekly_cap);

        let round = MatchingRound {
            round: rounds.len() as u32 + 1,
            candidates: matrix.rows(),
            units: matrix.cols(),
            allowed_cells: matrix.allowed_cells(),
            matched_pairs: pairs.len(),
            forbidden_pairs: pairs.iter().filter(|p| !p.cell.is_allowed()).count(),
            matched_cost: allowed_cost(&pairs),
            accepted: state.assignments().len() - accepted_before,
            rejections: state.rejections()[rejected_before..].to_vec(),
        };
        debug!(
            round = round.round,
            candidates = round.candidates,
            units = round.units,
            matched_pairs = round.matched_pairs,
            accepted = round.accepted,
            rejected = round.rejections.len(),
            "Matching round finished"
        );

        let hit_cap = round.rejected(RejectionReason::WeeklyCapReached) > 0;
        let progressed = round.accepted > 0;
        rounds.push(round);

        if mode == FilterMode::SinglePass || !hit_cap || !progressed {
            break;
        }

        open_candidates.retain(|c| {
            !state.is_accepted(&c.worker, c.slot) && state.weekly_count(&c.worker) < weekly_cap
        });
        open_units.retain(|u| !state.is_unit_used(*u));
        if open_candidates.is_empty() || open_units.is_empty() {
            break;
        }
    }

    MatchingOutcome { state, rounds }
}

/// Sorts assignments by day, then shift, then worker name.
pub fn sort_assignments(assignments: &mut [Assignment]) {
    assignments.sort_by(|a, b| {
        (a.day, a.shift, a.worker.name()).cmp(&(b.day, b.shift, b.worker.name()))
    });
}

/// Runs the full pipeline and builds a [`ScheduleResult`].
///
/// Returns an error only for structurally invalid input. An empty roster,
/// universal unavailability or unfillable headcount all produce a valid,
/// possibly empty, schedule.
///
/// # Example
///
/// ```
/// use shift_engine::config::SchedulingPolicy;
/// use shift_engine::models::{Day, PreferenceScore, ShiftType, Slot, WeekLayout, Worker};
/// use shift_engine::scheduling::{HeadcountPlan, PreferenceTable, ScheduleInput, generate_schedule};
///
/// let week = WeekLayout { weekday_shifts: 1, friday_shifts: None, saturday_shifts: None };
/// let worker = Worker::new("Noa");
/// let mut preferences = PreferenceTable::new();
/// for slot in week.active_slots() {
///     preferences.insert(&worker, slot, PreferenceScore::TOP).unwrap();
/// }
/// let mut headcounts = HeadcountPlan::new();
/// headcounts.insert(Slot::new(Day::Sunday, ShiftType::Morning), 1).unwrap();
///
/// let input = ScheduleInput { roster: vec![worker], week, headcounts, preferences };
/// let result = generate_schedule(&input, &SchedulingPolicy::default()).unwrap();
///
/// assert_eq!(result.assignments.len(), 1);
/// assert_eq!(result.stats.top_preference_percentage.to_string(), "100.0");
/// ```
pub fn generate_schedule(
    input: &ScheduleInput,
    policy: &SchedulingPolicy,
) -> EngineResult<ScheduleResult> {
    let started = Instant::now();
    let schedule_id = Uuid::new_v4();
    info!(
        schedule_id = %schedule_id,
        workers = input.roster.len(),
        preferences = input.preferences.len(),
        filter_mode = ?policy.filter_mode,
        "Generating schedule"
    );

    validate_input(input, policy)?;

    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();

    steps.push(AuditStep {
        step_number: 1,
        rule_id: "input_validation".to_string(),
        rule_name: "Input Validation".to_string(),
        input: serde_json::json!({
            "workers": input.roster.len(),
            "active_days": input.week.active_days(),
            "preferences": input.preferences.len(),
        }),
        output: serde_json::json!({ "valid": true }),
        reasoning: "Roster, week layout, headcounts and preference coverage are consistent"
            .to_string(),
    });

    let expansion = expand_demand(
        &input.roster,
        &input.week,
        &input.headcounts,
        &input.preferences,
        next_step(&steps),
    )?;
    steps.push(expansion.audit_step);

    if expansion.candidates.is_empty() {
        warnings.push(AuditWarning {
            code: "NO_ELIGIBLE_WORKERS".to_string(),
            message: "No worker is available for any active slot".to_string(),
            severity: "high".to_string(),
        });
    }

    let outcome = assign(
        &expansion.candidates,
        &expansion.units,
        policy.weekly_cap,
        policy.filter_mode,
    );
    for round in &outcome.rounds {
        push_round_steps(&mut steps, round, policy.weekly_cap);
    }

    let (mut assignments, rejections) = outcome.state.into_parts();
    sort_assignments(&mut assignments);

    let fulfillment =
        measure_fulfillment(&assignments, &input.week, &input.headcounts, next_step(&steps));
    steps.push(fulfillment.audit_step);
    warnings.extend(fulfillment.warnings);

    let duration = started.elapsed();
    info!(
        schedule_id = %schedule_id,
        assigned = assignments.len(),
        rejected = rejections.len(),
        requested = fulfillment.stats.requested_headcount,
        top_preference_percentage = %fulfillment.stats.top_preference_percentage,
        duration_us = duration.as_micros(),
        "Schedule generated"
    );

    Ok(ScheduleResult {
        schedule_id,
        timestamp: Utc::now(),
        engine_version: ENGINE_VERSION.to_string(),
        week: input.week,
        assignments,
        stats: fulfillment.stats,
        shortfalls: fulfillment.shortfalls,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us: duration.as_micros() as u64,
        },
    })
}

fn next_step(steps: &[AuditStep]) -> u32 {
    steps.len() as u32 + 1
}

fn push_round_steps(steps: &mut Vec<AuditStep>, round: &MatchingRound, weekly_cap: u32) {
    let first = next_step(steps);
    steps.push(AuditStep {
        step_number: first,
        rule_id: "cost_matrix".to_string(),
        rule_name: format!("Cost Matrix (round {})", round.round),
        input: serde_json::json!({
            "candidates": round.candidates,
            "slot_units": round.units,
        }),
        output: serde_json::json!({
            "cells": round.candidates * round.units,
            "allowed_cells": round.allowed_cells,
        }),
        reasoning: format!(
            "{} of {} candidate/seat cells share a slot and carry a preference cost",
            round.allowed_cells,
            round.candidates * round.units
        ),
    });

    steps.push(AuditStep {
        step_number: first + 1,
        rule_id: "optimal_matching".to_string(),
        rule_name: format!("Optimal Matching (round {})", round.round),
        input: serde_json::json!({
            "rows": round.candidates,
            "cols": round.units,
        }),
        output: serde_json::json!({
            "matched_pairs": round.matched_pairs,
            "forbidden_pairs": round.forbidden_pairs,
            "matched_cost": round.matched_cost,
        }),
        reasoning: format!(
            "Minimum-cost matching paired {} rows and columns ({} on forbidden cells), allowed cost {}",
            round.matched_pairs, round.forbidden_pairs, round.matched_cost
        ),
    });

    steps.push(AuditStep {
        step_number: first + 2,
        rule_id: "feasibility_filter".to_string(),
        rule_name: format!("Feasibility Filter (round {})", round.round),
        input: serde_json::json!({
            "matched_pairs": round.matched_pairs,
            "weekly_cap": weekly_cap,
        }),
        output: serde_json::json!({
            "accepted": round.accepted,
            "rejected": {
                "forbidden": round.rejected(RejectionReason::Forbidden),
                "worker_already_in_slot": round.rejected(RejectionReason::WorkerAlreadyInSlot),
                "unit_already_filled": round.rejected(RejectionReason::UnitAlreadyFilled),
                "weekly_cap_reached": round.rejected(RejectionReason::WeeklyCapReached),
            },
        }),
        reasoning: format!(
            "Accepted {} of {} matched pairs in solver order",
            round.accepted, round.matched_pairs
        ),
    });
}
