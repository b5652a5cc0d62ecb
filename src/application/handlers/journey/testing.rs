//! In-memory journey repository for handler tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, JourneyId, UserId};
use crate::domain::journey::Journey;
use crate::ports::JourneyRepository;

/// HashMap-backed repository with real version CAS semantics.
pub struct InMemoryJourneyRepository {
    journeys: Mutex<HashMap<JourneyId, Journey>>,
    fail_writes: bool,
}

impl InMemoryJourneyRepository {
    pub fn new() -> Self {
        Self {
            journeys: Mutex::new(HashMap::new()),
            fail_writes: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            journeys: Mutex::new(HashMap::new()),
            fail_writes: true,
        }
    }

    pub fn with_journey(journey: Journey) -> Self {
        let repo = Self::new();
        repo.journeys.lock().unwrap().insert(journey.id(), journey);
        repo
    }

    pub fn stored(&self, id: JourneyId) -> Option<Journey> {
        self.journeys.lock().unwrap().get(&id).cloned()
    }

    fn write_guard(&self) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated write failure",
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl JourneyRepository for InMemoryJourneyRepository {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Journey>, DomainError> {
        Ok(self
            .journeys
            .lock()
            .unwrap()
            .values()
            .find(|j| j.user_id() == user_id)
            .cloned())
    }

    async fn find_by_id(&self, id: JourneyId) -> Result<Option<Journey>, DomainError> {
        Ok(self.journeys.lock().unwrap().get(&id).cloned())
    }

    async fn insert(&self, journey: &Journey) -> Result<(), DomainError> {
        self.write_guard()?;
        let mut journeys = self.journeys.lock().unwrap();
        if journeys.values().any(|j| j.user_id() == journey.user_id()) {
            return Err(DomainError::new(
                ErrorCode::JourneyAlreadyActive,
                format!("User {} already has an active journey", journey.user_id()),
            ));
        }
        journeys.insert(journey.id(), journey.clone());
        Ok(())
    }

    async fn update(&self, journey: &Journey, expected_version: u64) -> Result<(), DomainError> {
        self.write_guard()?;
        let mut journeys = self.journeys.lock().unwrap();
        let stored = journeys.get(&journey.id()).ok_or_else(|| {
            DomainError::new(ErrorCode::JourneyNotFound, "Journey no longer exists")
        })?;
        if stored.version() != expected_version {
            return Err(DomainError::new(
                ErrorCode::ConcurrentModification,
                format!(
                    "Expected version {expected_version}, found {}",
                    stored.version()
                ),
            ));
        }
        journeys.insert(journey.id(), journey.clone());
        Ok(())
    }

    async fn delete(&self, id: JourneyId) -> Result<(), DomainError> {
        self.write_guard()?;
        self.journeys.lock().unwrap().remove(&id);
        Ok(())
    }
}
