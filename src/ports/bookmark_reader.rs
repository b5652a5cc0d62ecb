//! Bookmark reader port - saved listings for the dashboard.

use async_trait::async_trait;

use crate::domain::dashboard::BookmarkSummary;
use crate::domain::foundation::{DomainError, UserId};

/// Read-only port over the user's bookmarks.
#[async_trait]
pub trait BookmarkReader: Send + Sync {
    /// Most recent bookmarks, newest first.
    async fn list_recent(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<BookmarkSummary>, DomainError>;

    /// Total bookmarks of the user.
    async fn count_for_user(&self, user_id: &UserId) -> Result<u64, DomainError>;
}
