//! AdvanceStepHandler - command handler for completing the current step.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{DomainError, StepId, UserId};
use crate::domain::journey::{Journey, JourneyError};
use crate::ports::JourneyRepository;

/// Command to complete a step of the user's journey.
#[derive(Debug, Clone)]
pub struct AdvanceStepCommand {
    pub user_id: UserId,
    pub step_id: StepId,
}

/// Error type for step completion.
#[derive(Debug, Error)]
pub enum AdvanceStepError {
    #[error("No active journey found for user {0}")]
    NotFound(UserId),
    #[error(transparent)]
    Journey(#[from] JourneyError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Handler for completing steps.
///
/// Loads the journey, applies the ordered transition in the aggregate
/// and writes back under a version compare-and-swap, so a concurrent
/// mutation surfaces as `ConcurrentModification` instead of clobbering.
pub struct AdvanceStepHandler {
    repository: Arc<dyn JourneyRepository>,
}

impl AdvanceStepHandler {
    pub fn new(repository: Arc<dyn JourneyRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AdvanceStepCommand) -> Result<Journey, AdvanceStepError> {
        let mut journey = self
            .repository
            .find_by_user(&cmd.user_id)
            .await?
            .ok_or(AdvanceStepError::NotFound(cmd.user_id))?;

        let loaded_version = journey.version();
        journey.advance_step(cmd.step_id)?;
        self.repository.update(&journey, loaded_version).await?;

        tracing::debug!(
            journey_id = %journey.id(),
            step_id = %cmd.step_id,
            progress = journey.progress_percentage(),
            "step completed"
        );
        Ok(journey)
    }
}
