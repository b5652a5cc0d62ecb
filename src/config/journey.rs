//! Journey configuration

use serde::Deserialize;

use crate::config::ConfigValidationError;

/// Journey template settings
#[derive(Debug, Clone, Deserialize, Default)]
pub struct JourneyConfig {
    /// Path to a YAML template overriding the bundled relocation
    /// template. `None` keeps the built-in default.
    #[serde(default)]
    pub template_path: Option<String>,
}

impl JourneyConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if let Some(path) = &self.template_path {
            if path.trim().is_empty() {
                return Err(ConfigValidationError::EmptyTemplatePath);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_override() {
        let config = JourneyConfig::default();
        assert!(config.template_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_path_is_rejected() {
        let config = JourneyConfig {
            template_path: Some("  ".to_string()),
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyTemplatePath)
        ));
    }
}
