//! ReopenStepHandler - command handler for undoing the last finished step.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{DomainError, StepId, UserId};
use crate::domain::journey::{Journey, JourneyError};
use crate::ports::JourneyRepository;

/// Command to reopen the most recently finished step.
#[derive(Debug, Clone)]
pub struct ReopenStepCommand {
    pub user_id: UserId,
    pub step_id: StepId,
}

/// Error type for reopening.
#[derive(Debug, Error)]
pub enum ReopenStepError {
    #[error("No active journey found for user {0}")]
    NotFound(UserId),
    #[error(transparent)]
    Journey(#[from] JourneyError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Handler for reopening steps. Only the top of the aggregate's
/// terminal history is accepted, so undo stays strictly last-in-first-out.
pub struct ReopenStepHandler {
    repository: Arc<dyn JourneyRepository>,
}

impl ReopenStepHandler {
    pub fn new(repository: Arc<dyn JourneyRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: ReopenStepCommand) -> Result<Journey, ReopenStepError> {
        let mut journey = self
            .repository
            .find_by_user(&cmd.user_id)
            .await?
            .ok_or(ReopenStepError::NotFound(cmd.user_id))?;

        let loaded_version = journey.version();
        journey.reopen_step(cmd.step_id)?;
        self.repository.update(&journey, loaded_version).await?;

        tracing::debug!(
            journey_id = %journey.id(),
            step_id = %cmd.step_id,
            "step reopened"
        );
        Ok(journey)
    }
}
