//! StartJourneyHandler - command handler for starting a journey.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::journey::{
    default_relocation_template, Journey, JourneyTemplate, PropertyGoals,
};
use crate::ports::JourneyRepository;

/// Command to start a journey for a user.
#[derive(Debug, Clone)]
pub struct StartJourneyCommand {
    pub user_id: UserId,
    pub property_goals: Option<PropertyGoals>,
}

/// Error type for journey creation.
#[derive(Debug, Error)]
pub enum StartJourneyError {
    #[error("User {0} already has an active journey")]
    AlreadyActive(UserId),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Handler for starting journeys. One active journey per user.
pub struct StartJourneyHandler {
    repository: Arc<dyn JourneyRepository>,
    template: JourneyTemplate,
}

impl StartJourneyHandler {
    /// Uses the bundled relocation template.
    pub fn new(repository: Arc<dyn JourneyRepository>) -> Self {
        Self::with_template(repository, default_relocation_template().clone())
    }

    /// Uses a custom template, e.g. one loaded through configuration.
    pub fn with_template(
        repository: Arc<dyn JourneyRepository>,
        template: JourneyTemplate,
    ) -> Self {
        Self {
            repository,
            template,
        }
    }

    pub async fn handle(&self, cmd: StartJourneyCommand) -> Result<Journey, StartJourneyError> {
        // The repository's insert constraint is the authority; this check
        // only gives the common case a precise error.
        if self.repository.find_by_user(&cmd.user_id).await?.is_some() {
            return Err(StartJourneyError::AlreadyActive(cmd.user_id));
        }

        let journey = Journey::from_template(
            cmd.user_id,
            &self.template,
            cmd.property_goals,
            Timestamp::now(),
        );
        self.repository.insert(&journey).await?;

        tracing::debug!(journey_id = %journey.id(), "journey started");
        Ok(journey)
    }
}
