//! GetJourneyHandler - query handler for loading a user's journey.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::journey::Journey;
use crate::ports::JourneyRepository;

/// Query for the active journey of a user.
#[derive(Debug, Clone)]
pub struct GetJourneyQuery {
    pub user_id: UserId,
}

/// Error type for the journey query.
#[derive(Debug, Error)]
pub enum GetJourneyError {
    #[error("No active journey found for user {0}")]
    NotFound(UserId),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Handler for reading the active journey.
pub struct GetJourneyHandler {
    repository: Arc<dyn JourneyRepository>,
}

impl GetJourneyHandler {
    pub fn new(repository: Arc<dyn JourneyRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetJourneyQuery) -> Result<Journey, GetJourneyError> {
        self.repository
            .find_by_user(&query.user_id)
            .await?
            .ok_or(GetJourneyError::NotFound(query.user_id))
    }
}
