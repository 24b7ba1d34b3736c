//! Shift assignment pipeline.
//!
//! This module turns a roster, a week layout, headcount requirements and
//! preference scores into a schedule:
//!
//! - [`slot_expansion`]: headcount into seats, roster into eligible candidates
//! - [`cost_matrix`]: candidate × seat costs, forbidden across slots
//! - [`matching`]: minimum-cost rectangular assignment
//! - [`feasibility`]: ordered acceptance under the weekly cap
//! - [`fulfillment`]: statistics and shortfalls
//! - [`engine`]: the full run
//!
//! # Example
//!
//! ```
//! use shift_engine::scheduling::percentage;
//!
//! assert_eq!(percentage(3, 4).to_string(), "75.0");
//! ```

pub mod cost_matrix;
pub mod engine;
pub mod feasibility;
pub mod fulfillment;
pub mod matching;
pub mod preference_store;
pub mod slot_expansion;
pub mod validation;

pub use cost_matrix::{CostCell, CostMatrix, build_cost_matrix};
pub use engine::{
    ENGINE_VERSION, MatchingOutcome, MatchingRound, ScheduleInput, assign, generate_schedule,
    sort_assignments,
};
pub use feasibility::{FilterMode, FilterState, Rejection, RejectionReason, filter_pairs};
pub use fulfillment::{FulfillmentResult, measure_fulfillment, percentage};
pub use matching::{MatchedPair, allowed_cost, solve};
pub use preference_store::PreferenceTable;
pub use slot_expansion::{
    Candidate, ExpansionResult, HeadcountPlan, expand_candidates, expand_demand,
    expand_slot_units,
};
pub use validation::validate_input;
