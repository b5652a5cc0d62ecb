//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `journey` - Relocation journey aggregate, templates and step lifecycle
//! - `financing` - Financing eligibility scorer and frozen assessments
//! - `costs` - Hidden purchase cost calculator and frozen breakdowns
//! - `roi` - Rental return calculator, projections and frozen results
//! - `calculations` - Union type over the three frozen record kinds
//! - `dashboard` - Read-only dashboard overview assembly

pub mod calculations;
pub mod costs;
pub mod dashboard;
pub mod financing;
pub mod foundation;
pub mod journey;
pub mod roi;
