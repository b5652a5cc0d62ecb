//! Frozen calculation record union.
//!
//! The three calculators produce distinct snapshot types; persistence
//! and the dashboard handle them uniformly through this enum.

use serde::{Deserialize, Serialize};

use crate::domain::costs::HiddenCostCalculation;
use crate::domain::financing::FinancingAssessment;
use crate::domain::foundation::{CalculationId, ShareToken, Timestamp, UserId};
use crate::domain::roi::RoiCalculation;

/// The three calculator record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationKind {
    HiddenCost,
    Financing,
    Roi,
}

impl CalculationKind {
    pub fn all() -> [CalculationKind; 3] {
        [
            CalculationKind::HiddenCost,
            CalculationKind::Financing,
            CalculationKind::Roi,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            CalculationKind::HiddenCost => "hidden cost calculation",
            CalculationKind::Financing => "financing assessment",
            CalculationKind::Roi => "ROI calculation",
        }
    }
}

/// A frozen record of any kind, as stored and retrieved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalculationRecord {
    HiddenCost(HiddenCostCalculation),
    Financing(FinancingAssessment),
    Roi(RoiCalculation),
}

impl CalculationRecord {
    pub fn kind(&self) -> CalculationKind {
        match self {
            CalculationRecord::HiddenCost(_) => CalculationKind::HiddenCost,
            CalculationRecord::Financing(_) => CalculationKind::Financing,
            CalculationRecord::Roi(_) => CalculationKind::Roi,
        }
    }

    pub fn id(&self) -> CalculationId {
        match self {
            CalculationRecord::HiddenCost(r) => r.id,
            CalculationRecord::Financing(r) => r.id,
            CalculationRecord::Roi(r) => r.id,
        }
    }

    pub fn owner(&self) -> Option<&UserId> {
        match self {
            CalculationRecord::HiddenCost(r) => r.owner.as_ref(),
            CalculationRecord::Financing(r) => r.owner.as_ref(),
            CalculationRecord::Roi(r) => r.owner.as_ref(),
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        match self {
            CalculationRecord::HiddenCost(r) => r.display_name.as_deref(),
            CalculationRecord::Financing(r) => r.display_name.as_deref(),
            CalculationRecord::Roi(r) => r.display_name.as_deref(),
        }
    }

    pub fn share_token(&self) -> Option<&ShareToken> {
        match self {
            CalculationRecord::HiddenCost(r) => r.share_token.as_ref(),
            CalculationRecord::Financing(r) => r.share_token.as_ref(),
            CalculationRecord::Roi(r) => r.share_token.as_ref(),
        }
    }

    pub fn created_at(&self) -> Timestamp {
        match self {
            CalculationRecord::HiddenCost(r) => r.created_at,
            CalculationRecord::Financing(r) => r.created_at,
            CalculationRecord::Roi(r) => r.created_at,
        }
    }

    /// Feed title: the user-chosen name, or the kind label.
    pub fn title(&self) -> String {
        self.display_name()
            .map(str::to_string)
            .unwrap_or_else(|| self.kind().label().to_string())
    }
}
