//! SkipStepHandler - command handler for skipping the current step.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{DomainError, StepId, UserId};
use crate::domain::journey::{Journey, JourneyError};
use crate::ports::JourneyRepository;

/// Command to skip a step of the user's journey.
#[derive(Debug, Clone)]
pub struct SkipStepCommand {
    pub user_id: UserId,
    pub step_id: StepId,
    pub reason: Option<String>,
}

/// Error type for step skipping.
#[derive(Debug, Error)]
pub enum SkipStepError {
    #[error("No active journey found for user {0}")]
    NotFound(UserId),
    #[error(transparent)]
    Journey(#[from] JourneyError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Handler for skipping steps. Same ordering and CAS rules as step
/// completion; skipped steps never count toward progress.
pub struct SkipStepHandler {
    repository: Arc<dyn JourneyRepository>,
}

impl SkipStepHandler {
    pub fn new(repository: Arc<dyn JourneyRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: SkipStepCommand) -> Result<Journey, SkipStepError> {
        let mut journey = self
            .repository
            .find_by_user(&cmd.user_id)
            .await?
            .ok_or(SkipStepError::NotFound(cmd.user_id))?;

        let loaded_version = journey.version();
        journey.skip_step(cmd.step_id, cmd.reason)?;
        self.repository.update(&journey, loaded_version).await?;

        tracing::debug!(
            journey_id = %journey.id(),
            step_id = %cmd.step_id,
            "step skipped"
        );
        Ok(journey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::journey::testing::InMemoryJourneyRepository;
    use crate::domain::foundation::{StepStatus, Timestamp};
    use crate::domain::journey::default_relocation_template;

    fn test_user_id() -> UserId {
        UserId::new("test-user-123").unwrap()
    }

    fn test_journey() -> Journey {
        Journey::from_template(
            test_user_id(),
            default_relocation_template(),
            None,
            Timestamp::now(),
        )
    }

    #[tokio::test]
    async fn skips_current_step_with_reason() {
        let journey = test_journey();
        let step_id = journey.current_step_id().unwrap();
        let repo = Arc::new(InMemoryJourneyRepository::with_journey(journey));
        let handler = SkipStepHandler::new(repo);

        let updated = handler
            .handle(SkipStepCommand {
                user_id: test_user_id(),
                step_id,
                reason: Some("Already done before moving".to_string()),
            })
            .await
            .unwrap();

        let step = updated.find_step(step_id).unwrap();
        assert_eq!(step.status, StepStatus::Skipped);
        assert_eq!(step.skip_reason.as_deref(), Some("Already done before moving"));
    }

    #[tokio::test]
    async fn skipped_step_does_not_count_toward_progress() {
        let journey = test_journey();
        let step_id = journey.current_step_id().unwrap();
        let repo = Arc::new(InMemoryJourneyRepository::with_journey(journey));
        let handler = SkipStepHandler::new(repo);

        let updated = handler
            .handle(SkipStepCommand {
                user_id: test_user_id(),
                step_id,
                reason: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.progress_percentage(), 0.0);
        assert_ne!(updated.current_step_id(), Some(step_id));
    }

    #[tokio::test]
    async fn rejects_out_of_order_step() {
        let journey = test_journey();
        let ahead = journey.steps_in_order().nth(5).unwrap().id;
        let repo = Arc::new(InMemoryJourneyRepository::with_journey(journey));
        let handler = SkipStepHandler::new(repo);

        let result = handler
            .handle(SkipStepCommand {
                user_id: test_user_id(),
                step_id: ahead,
                reason: None,
            })
            .await;
        assert!(matches!(
            result,
            Err(SkipStepError::Journey(
                JourneyError::InvalidStepTransition { .. }
            ))
        ));
    }
}
