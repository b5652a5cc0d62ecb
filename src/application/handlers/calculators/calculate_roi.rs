//! CalculateRoiHandler - command handler for rental return calculations.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::calculations::CalculationRecord;
use crate::domain::foundation::{DomainError, ShareToken, Timestamp, UserId, ValidationError};
use crate::domain::roi::{RoiCalculation, RoiCalculator, RoiError, RoiInputs};
use crate::ports::CalculationStore;

/// Command to compute a rental return breakdown and persist it.
#[derive(Debug, Clone)]
pub struct CalculateRoiCommand {
    /// Owner, or `None` for an anonymous share-only calculation.
    pub user_id: Option<UserId>,
    pub inputs: RoiInputs,
    pub display_name: Option<String>,
    pub share: bool,
}

/// Error type for ROI calculation.
#[derive(Debug, Error)]
pub enum CalculateRoiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Roi(#[from] RoiError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Handler for ROI calculations.
pub struct CalculateRoiHandler {
    store: Arc<dyn CalculationStore>,
}

impl CalculateRoiHandler {
    pub fn new(store: Arc<dyn CalculationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: CalculateRoiCommand,
    ) -> Result<RoiCalculation, CalculateRoiError> {
        cmd.inputs.validate()?;

        let results = RoiCalculator::calculate(&cmd.inputs)?;
        let share_token = cmd.share.then(ShareToken::generate);
        let calculation = RoiCalculation::freeze(
            cmd.user_id,
            cmd.display_name,
            share_token,
            cmd.inputs,
            results,
            Timestamp::now(),
        );
        self.store
            .create(CalculationRecord::Roi(calculation.clone()))
            .await?;

        tracing::debug!(
            calculation_id = %calculation.id,
            investment_grade = calculation.results.investment_grade,
            "rental return calculated"
        );
        Ok(calculation)
    }
}
