//! GetDashboardOverviewHandler - aggregated dashboard read.

use std::sync::Arc;

use chrono::Datelike;

use crate::domain::calculations::{CalculationKind, CalculationRecord};
use crate::domain::dashboard::DashboardOverview;
use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::ports::{BookmarkReader, CalculationStore, DocumentReader, JourneyRepository};

/// Query for the dashboard overview of a user.
#[derive(Debug, Clone)]
pub struct GetDashboardOverviewQuery {
    pub user_id: UserId,
}

/// Handler for the dashboard overview.
///
/// Fetches all sources concurrently and never fails as a whole: a
/// source that errors is logged and degraded to its empty value, so one
/// broken collaborator cannot take the dashboard down.
pub struct GetDashboardOverviewHandler {
    journeys: Arc<dyn JourneyRepository>,
    calculations: Arc<dyn CalculationStore>,
    documents: Arc<dyn DocumentReader>,
    bookmarks: Arc<dyn BookmarkReader>,
    recent_items_limit: usize,
    activity_limit: usize,
}

impl GetDashboardOverviewHandler {
    pub fn new(
        journeys: Arc<dyn JourneyRepository>,
        calculations: Arc<dyn CalculationStore>,
        documents: Arc<dyn DocumentReader>,
        bookmarks: Arc<dyn BookmarkReader>,
        recent_items_limit: usize,
        activity_limit: usize,
    ) -> Self {
        Self {
            journeys,
            calculations,
            documents,
            bookmarks,
            recent_items_limit,
            activity_limit,
        }
    }

    pub async fn handle(&self, query: GetDashboardOverviewQuery) -> DashboardOverview {
        let now = Timestamp::now();
        let user_id = &query.user_id;
        let (year, month) = (now.as_datetime().year(), now.as_datetime().month());

        let (journey, documents, calculations, bookmarks, month_count, total_calcs, total_bm) = tokio::join!(
            self.journeys.find_by_user(user_id),
            self.documents.list_recent(user_id, self.recent_items_limit),
            self.recent_calculations(user_id),
            self.bookmarks.list_recent(user_id, self.recent_items_limit),
            self.documents
                .count_translated_in_month(user_id, year, month),
            self.calculations.count_for_user(user_id),
            self.bookmarks.count_for_user(user_id),
        );

        let journey = or_empty(journey, "journey");
        let documents = or_empty(documents, "documents");
        let calculations = or_empty(calculations, "calculations");
        let bookmarks = or_empty(bookmarks, "bookmarks");
        let month_count = or_empty(month_count, "documents_month_count");
        let total_calcs = or_empty(total_calcs, "calculation_count");
        let total_bm = or_empty(total_bm, "bookmark_count");

        DashboardOverview::assemble(
            journey.as_ref(),
            &documents,
            &calculations,
            &bookmarks,
            month_count,
            total_calcs,
            total_bm,
            self.activity_limit,
            now,
        )
    }

    /// Recent records across all calculator kinds.
    async fn recent_calculations(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<CalculationRecord>, DomainError> {
        let mut records = Vec::new();
        for kind in CalculationKind::all() {
            records.extend(
                self.calculations
                    .list_recent(user_id, kind, self.recent_items_limit)
                    .await?,
            );
        }
        Ok(records)
    }
}

/// Partial-result policy: log the failure, keep the dashboard up.
fn or_empty<T: Default>(result: Result<T, DomainError>, source: &'static str) -> T {
    match result {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(%err, source, "dashboard source failed, returning empty");
            T::default()
        }
    }
}
