//! Calculations module - the union of frozen calculator records.

mod record;

pub use record::{CalculationKind, CalculationRecord};
