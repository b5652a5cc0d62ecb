//! Frozen ROI calculation record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CalculationId, ShareToken, Timestamp, UserId};

use super::{RoiBreakdown, RoiInputs};

/// An ROI calculation frozen at creation time.
///
/// Holds the exact inputs and the full breakdown including projections;
/// never recomputed after persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiCalculation {
    pub id: CalculationId,
    pub owner: Option<UserId>,
    pub display_name: Option<String>,
    pub share_token: Option<ShareToken>,
    pub created_at: Timestamp,
    pub inputs: RoiInputs,
    pub results: RoiBreakdown,
}

impl RoiCalculation {
    /// Freezes one calculator run into a persistable record.
    pub fn freeze(
        owner: Option<UserId>,
        display_name: Option<String>,
        share_token: Option<ShareToken>,
        inputs: RoiInputs,
        results: RoiBreakdown,
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
