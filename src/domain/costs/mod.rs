//! Costs module - hidden purchase costs of German property.

mod calculator;
mod snapshot;

pub use calculator::{
    FederalState, HiddenCostBreakdown, HiddenCostCalculator, HiddenCostInputs, PropertyType,
    RenovationLevel, AGENT_COMMISSION_RATE, LAND_REGISTRY_RATE, NOTARY_RATE,
};
pub use snapshot::HiddenCostCalculation;
