//! Journey module - relocation plan aggregate and templates.

mod aggregate;
mod template;

pub use aggregate::{Journey, JourneyError, Phase, PropertyGoals, Step, Task};
pub use template::{
    default_relocation_template, JourneyTemplate, PhaseTemplate, StepTemplate, TaskTemplate,
    TemplateError,
};
