//! Dashboard configuration

use serde::Deserialize;

use crate::config::ConfigValidationError;

const MAX_LIMIT: usize = 100;

/// Dashboard assembly limits
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Entries kept in the merged activity feed.
    #[serde(default = "default_recent_activity_limit")]
    pub recent_activity_limit: usize,

    /// Items fetched per source (documents, calculations, bookmarks).
    #[serde(default = "default_recent_items_limit")]
    pub recent_items_limit: usize,
}

fn default_recent_activity_limit() -> usize {
    10
}

fn default_recent_items_limit() -> usize {
    5
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_activity_limit: default_recent_activity_limit(),
            recent_items_limit: default_recent_items_limit(),
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for (name, value) in [
            ("recent_activity_limit", self.recent_activity_limit),
            ("recent_items_limit", self.recent_items_limit),
        ] {
            if value == 0 {
                return Err(ConfigValidationError::ZeroLimit(name));
            }
            if value > MAX_LIMIT {
                return Err(ConfigValidationError::LimitTooLarge {
                    name,
                    max: MAX_LIMIT,
                });
            }
        }
        Ok(())
    }
}
