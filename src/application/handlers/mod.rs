//! Command and query handlers.

pub mod calculators;
pub mod dashboard;
pub mod journey;
