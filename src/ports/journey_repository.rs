//! Journey repository port.
//!
//! # Design
//!
//! - **One active journey per user**: `insert` must reject a second one.
//! - **Optimistic concurrency**: the aggregate bumps its version on every
//!   mutation; `update` compares the caller's expected version inside the
//!   transaction and fails on mismatch. Two racing advances therefore
//!   cannot both get past a stale ordering check.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, JourneyId, UserId};
use crate::domain::journey::Journey;

/// Repository port for Journey aggregate persistence.
#[async_trait]
pub trait JourneyRepository: Send + Sync {
    /// Finds the active journey of a user, if any.
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Journey>, DomainError>;

    /// Finds a journey by its id.
    async fn find_by_id(&self, id: JourneyId) -> Result<Option<Journey>, DomainError>;

    /// Persists a new journey.
    ///
    /// # Errors
    ///
    /// - `JourneyAlreadyActive` if the user already has one
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, journey: &Journey) -> Result<(), DomainError>;

    /// Persists a mutated journey, compare-and-swapping on version.
    ///
    /// `expected_version` is the version the caller loaded before
    /// mutating; implementations must reject the write when the stored
    /// version differs.
    ///
    /// # Errors
    ///
    /// - `JourneyNotFound` if the journey no longer exists
    /// - `ConcurrentModification` on version mismatch
    /// - `DatabaseError` on persistence failure
    async fn update(&self, journey: &Journey, expected_version: u64) -> Result<(), DomainError>;

    /// Deletes a journey. Deleting a missing journey is a no-op.
    async fn delete(&self, id: JourneyId) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn journey_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn JourneyRepository) {}
    }
}
