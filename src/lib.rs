//! Shift Assignment Engine
//!
//! This crate builds a weekly staffing schedule from a roster, per-slot
//! headcount requirements and each worker's preference score for every
//! shift. Demand is expanded into seats, matched to workers by a
//! minimum-cost assignment, and filtered under a weekly per-worker cap.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod scheduling;
