//! AssessFinancingHandler - command handler for financing assessments.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::calculations::CalculationRecord;
use crate::domain::financing::{FinancingAssessment, FinancingProfile, FinancingScorer};
use crate::domain::foundation::{DomainError, ShareToken, Timestamp, UserId, ValidationError};
use crate::ports::CalculationStore;

/// Command to score a financing profile and persist the result.
#[derive(Debug, Clone)]
pub struct AssessFinancingCommand {
    /// Owner, or `None` for an anonymous share-only assessment.
    pub user_id: Option<UserId>,
    pub profile: FinancingProfile,
    pub display_name: Option<String>,
    /// Attach a share token so the frozen result can be opened publicly.
    pub share: bool,
}

/// Error type for financing assessment.
#[derive(Debug, Error)]
pub enum AssessFinancingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Handler for financing assessments.
pub struct AssessFinancingHandler {
    store: Arc<dyn CalculationStore>,
}

impl AssessFinancingHandler {
    pub fn new(store: Arc<dyn CalculationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: AssessFinancingCommand,
    ) -> Result<FinancingAssessment, AssessFinancingError> {
        cmd.profile.validate()?;

        let report = FinancingScorer::score(&cmd.profile);
        let share_token = cmd.share.then(ShareToken::generate);
        let assessment = FinancingAssessment::freeze(
            cmd.user_id,
            cmd.display_name,
            share_token,
            cmd.profile,
            report,
            Timestamp::now(),
        );
        self.store
            .create(CalculationRecord::Financing(assessment.clone()))
            .await?;

        tracing::debug!(
            calculation_id = %assessment.id,
            score = assessment.results.total_score,
            "financing profile assessed"
        );
        Ok(assessment)
    }
}
