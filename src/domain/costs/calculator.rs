//! Hidden purchase cost calculator.
//!
//! German closing costs are dominated by the per-state transfer tax
//! (Grunderwerbsteuer), followed by notary, land registry and - where a
//! buyer agent is involved - commission. All rates are fixed constants
//! below; the calculation has no time or randomness dependence, so a
//! frozen record can be reproduced bit-for-bit for auditing.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Notary fee as a fraction of the purchase price.
pub const NOTARY_RATE: f64 = 0.015;
/// Land registry (Grundbuch) fee as a fraction of the purchase price.
pub const LAND_REGISTRY_RATE: f64 = 0.005;
/// Buyer share of the agent commission including VAT, per the post-2020
/// nationwide split convention.
pub const AGENT_COMMISSION_RATE: f64 = 0.0357;

/// The sixteen German federal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FederalState {
    #[serde(rename = "BW")]
    BadenWuerttemberg,
    #[serde(rename = "BY")]
    Bavaria,
    #[serde(rename = "BE")]
    Berlin,
    #[serde(rename = "BB")]
    Brandenburg,
    #[serde(rename = "HB")]
    Bremen,
    #[serde(rename = "HH")]
    Hamburg,
    #[serde(rename = "HE")]
    Hesse,
    #[serde(rename = "MV")]
    MecklenburgVorpommern,
    #[serde(rename = "NI")]
    LowerSaxony,
    #[serde(rename = "NW")]
    NorthRhineWestphalia,
    #[serde(rename = "RP")]
    RhinelandPalatinate,
    #[serde(rename = "SL")]
    Saarland,
    #[serde(rename = "SN")]
    Saxony,
    #[serde(rename = "ST")]
    SaxonyAnhalt,
    #[serde(rename = "SH")]
    SchleswigHolstein,
    #[serde(rename = "TH")]
    Thuringia,
}

impl FederalState {
    /// Transfer tax (Grunderwerbsteuer) rate of the state.
    pub fn transfer_tax_rate(&self) -> f64 {
        use FederalState::*;
        match self {
            Bavaria => 0.035,
            BadenWuerttemberg | Bremen | LowerSaxony | RhinelandPalatinate | SaxonyAnhalt
            | Thuringia => 0.05,
            Hamburg | Saxony => 0.055,
            Berlin | Hesse | MecklenburgVorpommern => 0.06,
            Brandenburg | NorthRhineWestphalia | Saarland | SchleswigHolstein => 0.065,
        }
    }

    /// Two-letter state code.
    pub fn code(&self) -> &'static str {
        use FederalState::*;
        match self {
            BadenWuerttemberg => "BW",
            Bavaria => "BY",
            Berlin => "BE",
            Brandenburg => "BB",
            Bremen => "HB",
            Hamburg => "HH",
            Hesse => "HE",
            MecklenburgVorpommern => "MV",
            LowerSaxony => "NI",
            NorthRhineWestphalia => "NW",
            RhinelandPalatinate => "RP",
            Saarland => "SL",
            Saxony => "SN",
            SaxonyAnhalt => "ST",
            SchleswigHolstein => "SH",
            Thuringia => "TH",
        }
    }

    /// All sixteen states.
    pub fn all() -> [FederalState; 16] {
        use FederalState::*;
        [
            BadenWuerttemberg,
            Bavaria,
            Berlin,
            Brandenburg,
            Bremen,
            Hamburg,
            Hesse,
            MecklenburgVorpommern,
            LowerSaxony,
            NorthRhineWestphalia,
            RhinelandPalatinate,
            Saarland,
            Saxony,
            SaxonyAnhalt,
            SchleswigHolstein,
            Thuringia,
        ]
    }
}

/// Kind of property being purchased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Apartment,
    House,
    MultiFamily,
    Plot,
}

impl PropertyType {
    /// Flat moving-cost estimate in euros, applied when moving is
    /// included. A bare plot has nothing to move into.
    pub fn moving_cost_estimate(&self) -> f64 {
        match self {
            PropertyType::Apartment => 2_500.0,
            PropertyType::House => 4_000.0,
            PropertyType::MultiFamily => 4_000.0,
            PropertyType::Plot => 0.0,
        }
    }
}

/// How much renovation the buyer plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenovationLevel {
    None,
    Light,
    Moderate,
    Heavy,
}

impl RenovationLevel {
    /// Renovation budget as a fraction of the purchase price.
    pub fn cost_fraction(&self) -> f64 {
        match self {
            RenovationLevel::None => 0.0,
            RenovationLevel::Light => 0.05,
            RenovationLevel::Moderate => 0.10,
            RenovationLevel::Heavy => 0.20,
        }
    }
}

/// Inputs to one hidden-cost calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HiddenCostInputs {
    /// Purchase price in euros, strictly positive.
    pub property_price: f64,
    pub state: FederalState,
    pub property_type: PropertyType,
    pub include_agent: bool,
    pub renovation_level: RenovationLevel,
    pub include_moving: bool,
}

impl HiddenCostInputs {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.property_price.is_finite() || self.property_price <= 0.0 {
            return Err(ValidationError::invalid_format(
                "property_price",
                "must be a positive amount",
            ));
        }
        Ok(())
    }
}

/// Itemized cost breakdown produced by the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiddenCostBreakdown {
    pub transfer_tax: f64,
    pub notary_fee: f64,
    pub land_registry_fee: f64,
    pub agent_commission: f64,
    pub renovation_estimate: f64,
    pub moving_costs: f64,
    pub total_additional_costs: f64,
    pub total_cost_of_ownership: f64,
    /// Additional costs as percent of the purchase price, one decimal.
    pub additional_cost_percentage: f64,
}

/// Pure calculator: purchase inputs in, itemized breakdown out.
pub struct HiddenCostCalculator;

impl HiddenCostCalculator {
    /// Computes the breakdown for validated inputs.
    pub fn calculate(inputs: &HiddenCostInputs) -> HiddenCostBreakdown {
        let price = inputs.property_price;
        let transfer_tax = price * inputs.state.transfer_tax_rate();
        let notary_fee = price * NOTARY_RATE;
        let land_registry_fee = price * LAND_REGISTRY_RATE;
        let agent_commission = if inputs.include_agent {
            price * AGENT_COMMISSION_RATE
        } else {
            0.0
        };
        let renovation_estimate = price * inputs.renovation_level.cost_fraction();
        let moving_costs = if inputs.include_moving {
            inputs.property_type.moving_cost_estimate()
        } else {
            0.0
        };

        let total_additional_costs = transfer_tax
            + notary_fee
            + land_registry_fee
            + agent_commission
            + renovation_estimate
            + moving_costs;

        HiddenCostBreakdown {
            transfer_tax,
            notary_fee,
            land_registry_fee,
            agent_commission,
            renovation_estimate,
            moving_costs,
            total_additional_costs,
            total_cost_of_ownership: price + total_additional_costs,
            additional_cost_percentage: round1(total_additional_costs / price * 100.0),
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn berlin_inputs() -> HiddenCostInputs {
        HiddenCostInputs {
            property_price: 400_000.0,
            state: FederalState::Berlin,
            property_type: PropertyType::Apartment,
            include_agent: true,
            renovation_level: RenovationLevel::None,
            include_moving: true,
        }
    }

    #[test]
    fn berlin_reference_example() {
        let breakdown = HiddenCostCalculator::calculate(&berlin_inputs());

        assert_eq!(breakdown.transfer_tax, 24_000.0);
        assert_eq!(breakdown.notary_fee, 6_000.0);
        assert_eq!(breakdown.land_registry_fee, 2_000.0);
        assert_eq!(breakdown.agent_commission, 14_280.0);
        assert_eq!(breakdown.renovation_estimate, 0.0);
        assert_eq!(breakdown.moving_costs, 2_500.0);
        assert_eq!(breakdown.total_additional_costs, 48_780.0);
        assert_eq!(breakdown.total_cost_of_ownership, 448_780.0);
        assert_eq!(breakdown.additional_cost_percentage, 12.2);
    }

    #[test]
    fn excluding_agent_and_moving_zeroes_those_lines() {
        let inputs = HiddenCostInputs {
            include_agent: false,
            include_moving: false,
            ..berlin_inputs()
        };
        let breakdown = HiddenCostCalculator::calculate(&inputs);
        assert_eq!(breakdown.agent_commission, 0.0);
        assert_eq!(breakdown.moving_costs, 0.0);
        assert_eq!(breakdown.total_additional_costs, 32_000.0);
    }

    #[test]
    fn renovation_levels_scale_with_price() {
        let estimate = |level| {
            HiddenCostCalculator::calculate(&HiddenCostInputs {
                renovation_level: level,
                ..berlin_inputs()
            })
            .renovation_estimate
        };
        assert_eq!(estimate(RenovationLevel::None), 0.0);
        assert_eq!(estimate(RenovationLevel::Light), 20_000.0);
        assert_eq!(estimate(RenovationLevel::Moderate), 40_000.0);
        assert_eq!(estimate(RenovationLevel::Heavy), 80_000.0);
    }

    #[test]
    fn plot_has_no_moving_costs_even_when_included() {
        let inputs = HiddenCostInputs {
            property_type: PropertyType::Plot,
            ..berlin_inputs()
        };
        let breakdown = HiddenCostCalculator::calculate(&inputs);
        assert_eq!(breakdown.moving_costs, 0.0);
    }

    #[test]
    fn transfer_tax_table_covers_all_states() {
        for state in FederalState::all() {
            let rate = state.transfer_tax_rate();
            assert!((0.035..=0.065).contains(&rate), "{:?}", state);
        }
        assert_eq!(FederalState::Bavaria.transfer_tax_rate(), 0.035);
        assert_eq!(FederalState::Berlin.transfer_tax_rate(), 0.06);
        assert_eq!(FederalState::NorthRhineWestphalia.transfer_tax_rate(), 0.065);
    }

    #[test]
    fn state_codes_are_unique() {
        let mut codes: Vec<_> = FederalState::all().iter().map(|s| s.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 16);
    }

    #[test]
    fn state_serializes_as_code() {
        assert_eq!(
            serde_json::to_string(&FederalState::Berlin).unwrap(),
            "\"BE\""
        );
        let back: FederalState = serde_json::from_str("\"NW\"").unwrap();
        assert_eq!(back, FederalState::NorthRhineWestphalia);
    }

    #[test]
    fn validate_rejects_non_positive_price() {
        let mut inputs = berlin_inputs();
        inputs.property_price = 0.0;
        assert!(inputs.validate().is_err());
        inputs.property_price = -5.0;
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn calculation_is_deterministic() {
        let inputs = berlin_inputs();
        let a = HiddenCostCalculator::calculate(&inputs);
        let b = HiddenCostCalculator::calculate(&inputs);
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    proptest! {
        #[test]
        fn totals_are_consistent(
            price in 10_000.0f64..5_000_000.0,
            include_agent: bool,
            include_moving: bool,
        ) {
            let inputs = HiddenCostInputs {
                property_price: price,
                state: FederalState::Hesse,
                property_type: PropertyType::House,
                include_agent,
                renovation_level: RenovationLevel::Moderate,
                include_moving,
            };
            let b = HiddenCostCalculator::calculate(&inputs);
            let sum = b.transfer_tax
                + b.notary_fee
                + b.land_registry_fee
                + b.agent_commission
                + b.renovation_estimate
                + b.moving_costs;
            prop_assert!((b.total_additional_costs - sum).abs() < 1e-6);
            prop_assert!((b.total_cost_of_ownership - (price + sum)).abs() < 1e-6);
        }
    }
}
