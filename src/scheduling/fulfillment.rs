//! Fulfillment statistics and shortfall reporting.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::{
    Assignment, AuditStep, AuditWarning, FulfillmentStats, Slot, SlotShortfall, WeekLayout,
};

use super::HeadcountPlan;

/// The outcome of measuring a schedule, with its audit step.
#[derive(Debug, Clone)]
pub struct FulfillmentResult {
    /// Aggregate statistics.
    pub stats: FulfillmentStats,
    /// Slots left under headcount, in layout order.
    pub shortfalls: Vec<SlotShortfall>,
    /// One warning per shortfall.
    pub warnings: Vec<AuditWarning>,
    /// The audit step recording this measurement.
    pub audit_step: AuditStep,
}

/// Percentage of `part` in `whole`, one decimal place. Zero when `whole` is zero.
///
/// # Example
///
/// ```
/// use shift_engine::scheduling::percentage;
///
/// assert_eq!(percentage(1, 3).to_string(), "33.3");
/// assert_eq!(percentage(2, 2).to_string(), "100.0");
/// assert_eq!(percentage(0, 0).to_string(), "0.0");
/// ```
pub fn percentage(part: u32, whole: u32) -> Decimal {
    let mut value = if whole == 0 {
        Decimal::ZERO
    } else {
        (Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(whole)).round_dp(1)
    };
    value.rescale(1);
    value
}

/// Measures top-preference fulfillment and per-slot shortfall.
pub fn measure_fulfillment(
    assignments: &[Assignment],
    layout: &WeekLayout,
    headcounts: &HeadcountPlan,
    step_number: u32,
) -> FulfillmentResult {
    let total_assigned = assignments.len() as u32;
    let top_preference_count = assignments
        .iter()
        .filter(|a| a.preference.is_top())
        .count() as u32;

    let mut filled_by_slot: HashMap<Slot, u32> = HashMap::new();
    for assignment in assignments {
        *filled_by_slot.entry(assignment.slot()).or_insert(0) += 1;
    }

    let shortfalls: Vec<SlotShortfall> = layout
        .active_slots()
        .into_iter()
        .filter_map(|slot| {
            let required = headcounts.required(slot);
            let filled = filled_by_slot.get(&slot).copied().unwrap_or(0);
            (filled < required).then_some(SlotShortfall {
                day: slot.day,
                shift: slot.shift,
                required,
                filled,
            })
        })
        .collect();

    let warnings: Vec<AuditWarning> = shortfalls
        .iter()
        .map(|s| AuditWarning {
            code: "UNDERFILLED_SLOT".to_string(),
            message: format!(
                "{} {} filled {} of {} required",
                s.day, s.shift, s.filled, s.required
            ),
            severity: if s.filled == 0 { "high" } else { "medium" }.to_string(),
        })
        .collect();

    let stats = FulfillmentStats {
        total_assigned,
        top_preference_count,
        top_preference_percentage: percentage(top_preference_count, total_assigned),
        requested_headcount: headcounts.total(layout),
        filled_headcount: total_assigned,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "fulfillment".to_string(),
        rule_name: "Fulfillment Statistics".to_string(),
        input: serde_json::json!({
            "assignments": total_assigned,
            "requested_headcount": stats.requested_headcount,
        }),
        output: serde_json::json!({
            "top_preference_count": top_preference_count,
            "top_preference_percentage": stats.top_preference_percentage.to_string(),
            "underfilled_slots": shortfalls.len(),
        }),
        reasoning: format!(
            "{} of {} assignments ({}%) made at top preference; {} of {} seats filled",
            top_preference_count,
            total_assigned,
            stats.top_preference_percentage,
            stats.filled_headcount,
            stats.requested_headcount
        ),
    };

    FulfillmentResult {
        stats,
        shortfalls,
        warnings,
        audit_step,
    }
}
