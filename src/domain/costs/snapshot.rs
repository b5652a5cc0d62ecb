//! Frozen hidden-cost calculation record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CalculationId, ShareToken, Timestamp, UserId};

use super::{HiddenCostBreakdown, HiddenCostInputs};

/// A hidden-cost calculation frozen at creation time.
///
/// Inputs and breakdown are stored verbatim and never recomputed, even
/// if rate tables change later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiddenCostCalculation {
    pub id: CalculationId,
    pub owner: Option<UserId>,
    pub display_name: Option<String>,
    pub share_token: Option<ShareToken>,
    pub created_at: Timestamp,
    pub inputs: HiddenCostInputs,
    pub results: HiddenCostBreakdown,
}

impl HiddenCostCalculation {
    /// Freezes one calculator run into a persistable record.
    pub fn freeze(
        owner: Option<UserId>,
        display_name: Option<String>,
        share_token: Option<ShareToken>,
        inputs: HiddenCostInputs,
        results: HiddenCostBreakdown,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id: CalculationId::new(),
            owner,
            display_name,
            share_token,
            created_at,
            inputs,
            results,
        }
    }

    pub fn is_share_only(&self) -> bool {
        self.owner.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::costs::{
        FederalState, HiddenCostCalculator, PropertyType, RenovationLevel,
    };

    #[test]
    fn freeze_round_trips_through_json() {
        let inputs = HiddenCostInputs {
            property_price: 250_000.0,
            state: FederalState::Saxony,
            property_type: PropertyType::Apartment,
            include_agent: false,
            renovation_level: RenovationLevel::Light,
            include_moving: false,
        };
        let results = HiddenCostCalculator::calculate(&inputs);
        let record = HiddenCostCalculation::freeze(
            None,
            None,
            Some(ShareToken::generate()),
            inputs,
            results,
            Timestamp::now(),
        );

        assert!(record.is_share_only());
        let json = serde_json::to_string(&record).unwrap();
        let back: HiddenCostCalculation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
