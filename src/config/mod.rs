//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `RELO_COMPASS` prefix and nested values use double underscores as
//! separators. Every section has working defaults, so an empty
//! environment yields a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use relo_compass::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod dashboard;
mod error;
mod journey;

pub use dashboard::DashboardConfig;
pub use error::{ConfigError, ConfigValidationError};
pub use journey::JourneyConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Journey template settings
    #[serde(default)]
    pub journey: JourneyConfig,

    /// Dashboard assembly limits
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present, then reads variables with the
    /// `RELO_COMPASS` prefix, `__` separating nested values:
    ///
    /// - `RELO_COMPASS__DASHBOARD__RECENT_ACTIVITY_LIMIT=20`
    /// - `RELO_COMPASS__JOURNEY__TEMPLATE_PATH=templates/custom.yaml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a value cannot be parsed into the
    /// expected type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("RELO_COMPASS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.journey.validate()?;
        self.dashboard.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("RELO_COMPASS__DASHBOARD__RECENT_ACTIVITY_LIMIT");
        env::remove_var("RELO_COMPASS__DASHBOARD__RECENT_ITEMS_LIMIT");
        env::remove_var("RELO_COMPASS__JOURNEY__TEMPLATE_PATH");
    }

    #[test]
    fn loads_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert!(config.journey.template_path.is_none());
        assert_eq!(config.dashboard.recent_activity_limit, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn reads_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("RELO_COMPASS__DASHBOARD__RECENT_ACTIVITY_LIMIT", "20");
        env::set_var(
            "RELO_COMPASS__JOURNEY__TEMPLATE_PATH",
            "templates/custom.yaml",
        );
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.dashboard.recent_activity_limit, 20);
        assert_eq!(
            config.journey.template_path.as_deref(),
            Some("templates/custom.yaml")
        );
    }

    #[test]
    fn validate_rejects_bad_overrides() {
        let config = AppConfig {
            dashboard: DashboardConfig {
                recent_activity_limit: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
