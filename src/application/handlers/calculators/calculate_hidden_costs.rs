//! CalculateHiddenCostsHandler - command handler for purchase cost breakdowns.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::calculations::CalculationRecord;
use crate::domain::costs::{HiddenCostCalculation, HiddenCostCalculator, HiddenCostInputs};
use crate::domain::foundation::{DomainError, ShareToken, Timestamp, UserId, ValidationError};
use crate::ports::CalculationStore;

/// Command to compute a hidden cost breakdown and persist it.
#[derive(Debug, Clone)]
pub struct CalculateHiddenCostsCommand {
    /// Owner, or `None` for an anonymous share-only calculation.
    pub user_id: Option<UserId>,
    pub inputs: HiddenCostInputs,
    pub display_name: Option<String>,
    pub share: bool,
}

/// Error type for hidden cost calculation.
#[derive(Debug, Error)]
pub enum CalculateHiddenCostsError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Handler for hidden cost calculations.
pub struct CalculateHiddenCostsHandler {
    store: Arc<dyn CalculationStore>,
}

impl CalculateHiddenCostsHandler {
    pub fn new(store: Arc<dyn CalculationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: CalculateHiddenCostsCommand,
    ) -> Result<HiddenCostCalculation, CalculateHiddenCostsError> {
        cmd.inputs.validate()?;

        let results = HiddenCostCalculator::calculate(&cmd.inputs);
        let share_token = cmd.share.then(ShareToken::generate);
        let calculation = HiddenCostCalculation::freeze(
            cmd.user_id,
            cmd.display_name,
            share_token,
            cmd.inputs,
            results,
            Timestamp::now(),
        );
        self.store
            .create(CalculationRecord::HiddenCost(calculation.clone()))
            .await?;

        tracing::debug!(
            calculation_id = %calculation.id,
            total_cost = calculation.results.total_cost_of_ownership,
            "hidden costs calculated"
        );
        Ok(calculation)
    }
}
