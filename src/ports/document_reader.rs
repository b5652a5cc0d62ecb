//! Document reader port - translated-document history for the dashboard.
//!
//! Translation itself is handled by excluded infrastructure; the
//! dashboard only needs a recent list and a monthly count.

use async_trait::async_trait;

use crate::domain::dashboard::DocumentSummary;
use crate::domain::foundation::{DomainError, UserId};

/// Read-only port over the user's translated documents.
#[async_trait]
pub trait DocumentReader: Send + Sync {
    /// Most recently translated documents, newest first.
    async fn list_recent(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<DocumentSummary>, DomainError>;

    /// Documents translated within the given calendar month.
    async fn count_translated_in_month(
        &self,
        user_id: &UserId,
        year: i32,
        month: u32,
    ) -> Result<u64, DomainError>;
}
