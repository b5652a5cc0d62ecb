//! Calculator command and query handlers.
//!
//! Each command handler runs the same pipeline: validate raw inputs,
//! run the pure calculator, freeze a snapshot, persist it. Results are
//! never re-derived from a stored record.

mod assess_financing;
mod calculate_hidden_costs;
mod calculate_roi;
mod get_shared_calculation;

#[cfg(test)]
pub(crate) mod testing;

pub use assess_financing::{
    AssessFinancingCommand, AssessFinancingError, AssessFinancingHandler,
};
pub use calculate_hidden_costs::{
    CalculateHiddenCostsCommand, CalculateHiddenCostsError, CalculateHiddenCostsHandler,
};
pub use calculate_roi::{CalculateRoiCommand, CalculateRoiError, CalculateRoiHandler};
pub use get_shared_calculation::{
    GetSharedCalculationError, GetSharedCalculationHandler, GetSharedCalculationQuery,
};
