//! Timestamp value object for immutable points in time.

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable point in time, always UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from a DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the inner DateTime.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Checks if this timestamp is before another.
    pub fn is_before(&self, other: &Timestamp) -> bool {
        self.0 < other.0
    }

    /// Checks if this timestamp is after another.
    pub fn is_after(&self, other: &Timestamp) -> bool {
        self.0 > other.0
    }

    /// Creates a new timestamp by adding the specified number of days.
    ///
    /// Negative values subtract days.
    pub fn add_days(&self, days: i64) -> Self {
        Self(self.0 + Duration::days(days))
    }

    /// Checks if this timestamp falls within the same calendar month
    /// (and year) as another.
    ///
    /// Used by the dashboard's "translated this month" counter.
    pub fn in_same_calendar_month(&self, other: &Timestamp) -> bool {
        self.0.year() == other.0.year() && self.0.month() == other.0.month()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(y: i32, m: u32, d: u32) -> Timestamp {
        Timestamp::from_datetime(Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap())
    }

    #[test]
    fn ordering_works() {
        let earlier = ts(2026, 1, 1);
        let later = ts(2026, 6, 1);
        assert!(earlier.is_before(&later));
        assert!(later.is_after(&earlier));
        assert!(earlier < later);
    }

    #[test]
    fn add_days_moves_forward_and_backward() {
        let base = ts(2026, 3, 10);
        assert_eq!(base.add_days(5), ts(2026, 3, 15));
        assert_eq!(base.add_days(-9), ts(2026, 3, 1));
    }

    #[test]
    fn same_calendar_month_requires_matching_year() {
        assert!(ts(2026, 8, 1).in_same_calendar_month(&ts(2026, 8, 31)));
        assert!(!ts(2026, 8, 1).in_same_calendar_month(&ts(2026, 7, 31)));
        assert!(!ts(2025, 8, 1).in_same_calendar_month(&ts(2026, 8, 1)));
    }

    #[test]
    fn serializes_as_rfc3339_string() {
        let t = ts(2026, 2, 14);
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("2026-02-14"));
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
