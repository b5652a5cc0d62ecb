//! Dashboard module - read-only overview assembly.

mod overview;

pub use overview::{
    ActivityEntry, ActivityType, BookmarkSummary, DashboardOverview, DocumentSummary,
    JourneySummary,
};
