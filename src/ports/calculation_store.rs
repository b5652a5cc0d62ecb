//! Calculation store port - persistence of frozen calculator records.
//!
//! Records arrive fully frozen; the store writes them verbatim and never
//! recomputes results. Share tokens are generated by the domain; the
//! store must collision-check a token against existing records of the
//! same kind before insert.

use async_trait::async_trait;

use crate::domain::calculations::{CalculationKind, CalculationRecord};
use crate::domain::foundation::{DomainError, ShareToken, UserId};

/// Store port for frozen calculation records.
#[async_trait]
pub trait CalculationStore: Send + Sync {
    /// Persists a frozen record as-is.
    ///
    /// Implementations must verify the record's share token (when
    /// present) does not collide with an existing record of the same
    /// kind before inserting. Deleting the owning user cascades to the
    /// user's records; that cascade lives in the adapter.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure or unresolved collision
    async fn create(&self, record: CalculationRecord) -> Result<(), DomainError>;

    /// Public share lookup: no owner check, read-only.
    async fn find_by_share_token(
        &self,
        kind: CalculationKind,
        token: &ShareToken,
    ) -> Result<Option<CalculationRecord>, DomainError>;

    /// Most recent records of one kind owned by the user, newest first.
    async fn list_recent(
        &self,
        user_id: &UserId,
        kind: CalculationKind,
        limit: usize,
    ) -> Result<Vec<CalculationRecord>, DomainError>;

    /// Total records owned by the user across all kinds.
    async fn count_for_user(&self, user_id: &UserId) -> Result<u64, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calculation_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn CalculationStore) {}
    }
}
