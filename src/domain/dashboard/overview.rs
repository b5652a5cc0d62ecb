//! Dashboard overview - derived, never persisted, rebuilt per request.

use serde::{Deserialize, Serialize};

use crate::domain::calculations::{CalculationKind, CalculationRecord};
use crate::domain::foundation::{JourneyId, Timestamp};
use crate::domain::journey::Journey;

/// Summary of one translated document, as supplied by the document
/// service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSummary {
    /// Opaque identifier owned by the document service.
    pub id: String,
    pub title: String,
    pub translated_at: Timestamp,
}

/// Summary of one bookmarked property listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkSummary {
    /// Opaque identifier owned by the bookmark service.
    pub id: String,
    pub title: String,
    pub created_at: Timestamp,
}

/// Source tag of one activity feed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    DocumentTranslated,
    HiddenCostCalculated,
    FinancingAssessed,
    RoiCalculated,
    BookmarkAdded,
}

impl ActivityType {
    fn for_calculation(kind: CalculationKind) -> Self {
        match kind {
            CalculationKind::HiddenCost => ActivityType::HiddenCostCalculated,
            CalculationKind::Financing => ActivityType::FinancingAssessed,
            CalculationKind::Roi => ActivityType::RoiCalculated,
        }
    }
}

/// One entry of the merged activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityEntry {
    pub activity_type: ActivityType,
    pub title: String,
    /// Identifier of the underlying record, as a string.
    pub reference_id: String,
    pub occurred_at: Timestamp,
}

/// Condensed journey state for the dashboard header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneySummary {
    pub journey_id: JourneyId,
    pub progress_percentage: f64,
    pub current_phase: Option<String>,
    pub current_step: Option<String>,
    pub steps_completed: usize,
    pub steps_total: usize,
    pub estimated_days_remaining: Option<u32>,
}

impl JourneySummary {
    fn from_journey(journey: &Journey) -> Self {
        Self {
            journey_id: journey.id(),
            progress_percentage: journey.progress_percentage(),
            current_phase: journey.current_phase_name().map(str::to_string),
            current_step: journey.current_step().map(|s| s.title.clone()),
            steps_completed: journey.completed_count(),
            steps_total: journey.total_steps(),
            estimated_days_remaining: journey.estimated_days_remaining(),
        }
    }
}

/// The dashboard overview - aggregates journey state and history into
/// one view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub has_journey: bool,
    pub journey: Option<JourneySummary>,
    /// Merged feed over all sources, newest first.
    pub recent_activity: Vec<ActivityEntry>,
    pub documents_translated_this_month: u64,
    pub total_calculations: u64,
    pub total_bookmarks: u64,
    pub generated_at: Timestamp,
}

impl DashboardOverview {
    /// Assembles the overview from already-fetched inputs.
    ///
    /// Pure: fetching (and the degrade-to-empty policy for failed
    /// sources) is the handler's concern. The feed is sorted by
    /// timestamp descending and truncated to `activity_limit`.
    #[allow(clippy::too_many_arguments)]
    pub fn assemble(
        journey: Option<&Journey>,
        documents: &[DocumentSummary],
        calculations: &[CalculationRecord],
        bookmarks: &[BookmarkSummary],
        documents_translated_this_month: u64,
        total_calculations: u64,
        total_bookmarks: u64,
        activity_limit: usize,
        generated_at: Timestamp,
    ) -> Self {
        let mut recent_activity: Vec<ActivityEntry> = Vec::new();

        recent_activity.extend(documents.iter().map(|d| ActivityEntry {
            activity_type: ActivityType::DocumentTranslated,
            title: d.title.clone(),
            reference_id: d.id.clone(),
            occurred_at: d.translated_at,
        }));
        recent_activity.extend(calculations.iter().map(|c| ActivityEntry {
            activity_type: ActivityType::for_calculation(c.kind()),
            title: c.title(),
            reference_id: c.id().to_string(),
            occurred_at: c.created_at(),
        }));
        recent_activity.extend(bookmarks.iter().map(|b| ActivityEntry {
            activity_type: ActivityType::BookmarkAdded,
            title: b.title.clone(),
            reference_id: b.id.clone(),
            occurred_at: b.created_at,
        }));

        // Stable sort keeps source order for identical timestamps.
        recent_activity.sort_by(|a, b| b.occurred_at.cmp(&a.occurred_at));
        recent_activity.truncate(activity_limit);

        Self {
            has_journey: journey.is_some(),
            journey: journey.map(JourneySummary::from_journey),
            recent_activity,
            documents_translated_this_month,
            total_calculations,
            total_bookmarks,
            generated_at,
        }
    }
}

#[cfg(test)]
#[path = "overview_test.rs"]
mod overview_test;
