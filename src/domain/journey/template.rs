//! Journey templates - the blueprint a new journey is instantiated from.
//!
//! Templates are plain data parsed from YAML. A bundled default covers
//! the standard relocation-and-purchase flow; deployments may override it
//! through configuration.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a template.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template could not be parsed: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Template is invalid: {0}")]
    Invalid(String),
}

/// A checklist item blueprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskTemplate {
    pub title: String,
}

/// A step blueprint within a phase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepTemplate {
    pub title: String,
    /// Rough working-days estimate, used for the remaining-days figure.
    #[serde(default)]
    pub estimated_days: Option<u32>,
    /// Deadline expressed as days after journey start.
    #[serde(default)]
    pub deadline_days_from_start: Option<i64>,
    #[serde(default)]
    pub tasks: Vec<TaskTemplate>,
}

/// A named, ordered grouping of step blueprints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseTemplate {
    pub name: String,
    pub steps: Vec<StepTemplate>,
}

/// A complete journey blueprint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JourneyTemplate {
    pub name: String,
    pub phases: Vec<PhaseTemplate>,
}

impl JourneyTemplate {
    /// Parses and validates a template from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, TemplateError> {
        let template: JourneyTemplate = serde_yaml::from_str(yaml)?;
        template.validate()?;
        Ok(template)
    }

    /// Validates structural requirements: a non-empty name, at least one
    /// phase, every phase non-empty, every title non-empty.
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.name.trim().is_empty() {
            return Err(TemplateError::Invalid("template name is empty".into()));
        }
        if self.phases.is_empty() {
            return Err(TemplateError::Invalid("template has no phases".into()));
        }
        for phase in &self.phases {
            if phase.name.trim().is_empty() {
                return Err(TemplateError::Invalid("phase name is empty".into()));
            }
            if phase.steps.is_empty() {
                return Err(TemplateError::Invalid(format!(
                    "phase '{}' has no steps",
                    phase.name
                )));
            }
            for step in &phase.steps {
                if step.title.trim().is_empty() {
                    return Err(TemplateError::Invalid(format!(
                        "phase '{}' contains a step with an empty title",
                        phase.name
                    )));
                }
            }
        }
        Ok(())
    }

    /// Total number of steps across all phases.
    pub fn step_count(&self) -> usize {
        self.phases.iter().map(|p| p.steps.len()).sum()
    }
}

static DEFAULT_TEMPLATE: Lazy<JourneyTemplate> = Lazy::new(|| {
    JourneyTemplate::from_yaml(include_str!("default_template.yaml"))
        .unwrap_or_else(|e| panic!("bundled default template is invalid: {e}"))
});

/// Returns the bundled default relocation template.
pub fn default_relocation_template() -> &'static JourneyTemplate {
    &DEFAULT_TEMPLATE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_template_parses() {
        let template = default_relocation_template();
        assert_eq!(template.name, "Germany Relocation & Purchase");
        assert_eq!(template.phases.len(), 4);
        assert!(template.step_count() >= 10);
    }

    #[test]
    fn default_template_phases_are_named() {
        let names: Vec<_> = default_relocation_template()
            .phases
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Preparation", "Search", "Financing", "Closing"]);
    }

    #[test]
    fn from_yaml_rejects_empty_phase() {
        let yaml = r#"
name: "Empty"
phases:
  - name: "Nothing here"
    steps: []
"#;
        let result = JourneyTemplate::from_yaml(yaml);
        assert!(matches!(result, Err(TemplateError::Invalid(_))));
    }

    #[test]
    fn from_yaml_rejects_missing_phases() {
        let yaml = r#"
name: "No phases"
phases: []
"#;
        assert!(JourneyTemplate::from_yaml(yaml).is_err());
    }

    #[test]
    fn from_yaml_rejects_blank_step_title() {
        let yaml = r#"
name: "Blank step"
phases:
  - name: "Phase"
    steps:
      - title: "   "
"#;
        assert!(JourneyTemplate::from_yaml(yaml).is_err());
    }

    #[test]
    fn from_yaml_accepts_minimal_template() {
        let yaml = r#"
name: "Minimal"
phases:
  - name: "Only phase"
    steps:
      - title: "Only step"
        estimated_days: 3
"#;
        let template = JourneyTemplate::from_yaml(yaml).unwrap();
        assert_eq!(template.step_count(), 1);
        assert_eq!(template.phases[0].steps[0].estimated_days, Some(3));
    }
}
