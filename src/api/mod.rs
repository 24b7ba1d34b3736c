//! HTTP API module for the Shift Assignment Engine.
//!
//! This module provides the REST endpoint for generating a weekly schedule
//! from a roster, headcount requirements and preference scores.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{HeadcountRequest, PreferenceRequest, ScheduleRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
