//! Frozen financing assessment record.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CalculationId, ShareToken, Timestamp, UserId};

use super::{FinancingProfile, FinancingReport};

/// A financing assessment frozen at creation time.
///
/// Stores the exact inputs and outputs of one scorer run. Once persisted
/// the results are never recomputed, so the record stays stable even if
/// the scoring tables change later. There is deliberately no method that
/// re-derives `results` from `inputs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancingAssessment {
    pub id: CalculationId,
    /// Owning user, or `None` for an ownerless share-only record.
    pub owner: Option<UserId>,
    pub display_name: Option<String>,
    /// Public lookup token; `None` disables sharing.
    pub share_token: Option<ShareToken>,
    pub created_at: Timestamp,
    pub inputs: FinancingProfile,
    pub results: FinancingReport,
}

impl FinancingAssessment {
    /// Freezes one scorer run into a persistable record.
    pub fn freeze(
        owner: Option<UserId>,
        display_name: Option<String>,
        share_token: Option<ShareToken>,
        inputs: FinancingProfile,
        results: FinancingReport,
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

    /// True when the record has no owner and is reachable only through
    /// its share token.
    pub fn is_share_only(&self) -> bool {
        self.owner.is_none()
    }
}
