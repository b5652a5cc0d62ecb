//! CompleteTaskHandler - command handler for toggling checklist tasks.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{DomainError, StepId, TaskId, UserId};
use crate::domain::journey::{Journey, JourneyError};
use crate::ports::JourneyRepository;

/// Command to mark a checklist task done or not done.
#[derive(Debug, Clone)]
pub struct CompleteTaskCommand {
    pub user_id: UserId,
    pub step_id: StepId,
    pub task_id: TaskId,
    pub done: bool,
}

/// Error type for task toggling.
#[derive(Debug, Error)]
pub enum CompleteTaskError {
    #[error("No active journey found for user {0}")]
    NotFound(UserId),
    #[error(transparent)]
    Journey(#[from] JourneyError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Handler for toggling tasks. Tasks are advisory: the owning step's
/// status and the journey's progress never change here.
pub struct CompleteTaskHandler {
    repository: Arc<dyn JourneyRepository>,
}

impl CompleteTaskHandler {
    pub fn new(repository: Arc<dyn JourneyRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: CompleteTaskCommand) -> Result<Journey, CompleteTaskError> {
        let mut journey = self
            .repository
            .find_by_user(&cmd.user_id)
            .await?
            .ok_or(CompleteTaskError::NotFound(cmd.user_id))?;

        let loaded_version = journey.version();
        journey.set_task_done(cmd.step_id, cmd.task_id, cmd.done)?;
        self.repository.update(&journey, loaded_version).await?;

        Ok(journey)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::journey::testing::InMemoryJourneyRepository;
    use crate::domain::foundation::Timestamp;
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

    /// First step carrying at least one task, with the task's id.
    fn step_with_task(journey: &Journey) -> (StepId, TaskId) {
        let step = journey
            .steps_in_order()
            .find(|s| !s.tasks.is_empty())
            .expect("template has steps with tasks");
        (step.id, step.tasks[0].id)
    }

    #[tokio::test]
    async fn marks_task_done_without_touching_step_status() {
        let journey = test_journey();
        let (step_id, task_id) = step_with_task(&journey);
        let status_before = journey.find_step(step_id).unwrap().status;
        let repo = Arc::new(InMemoryJourneyRepository::with_journey(journey));
        let handler = CompleteTaskHandler::new(repo);

        let updated = handler
            .handle(CompleteTaskCommand {
                user_id: test_user_id(),
                step_id,
                task_id,
                done: true,
            })
            .await
            .unwrap();

        let step = updated.find_step(step_id).unwrap();
        assert!(step.tasks.iter().any(|t| t.id == task_id && t.done));
        assert_eq!(step.status, status_before);
        assert_eq!(updated.progress_percentage(), 0.0);
    }

    #[tokio::test]
    async fn unmarking_is_allowed() {
        let journey = test_journey();
        let (step_id, task_id) = step_with_task(&journey);
        let repo = Arc::new(InMemoryJourneyRepository::with_journey(journey));
        let handler = CompleteTaskHandler::new(repo);

        handler
            .handle(CompleteTaskCommand {
                user_id: test_user_id(),
                step_id,
                task_id,
                done: true,
            })
            .await
            .unwrap();
        let updated = handler
            .handle(CompleteTaskCommand {
                user_id: test_user_id(),
                step_id,
                task_id,
                done: false,
            })
            .await
            .unwrap();

        let step = updated.find_step(step_id).unwrap();
        assert!(step.tasks.iter().any(|t| t.id == task_id && !t.done));
    }

    #[tokio::test]
    async fn fails_for_unknown_task() {
        let journey = test_journey();
        let step_id = journey.current_step_id().unwrap();
        let repo = Arc::new(InMemoryJourneyRepository::with_journey(journey));
        let handler = CompleteTaskHandler::new(repo);

        let result = handler
            .handle(CompleteTaskCommand {
                user_id: test_user_id(),
                step_id,
                task_id: TaskId::new(),
                done: true,
            })
            .await;
        assert!(matches!(
            result,
            Err(CompleteTaskError::Journey(JourneyError::TaskNotFound(_)))
        ));
    }
}
