//! Step lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::StateMachine;

/// Lifecycle status of a journey step.
///
/// A step starts `Pending`, may be promoted to `InProgress` when it
/// becomes the journey's current step, and ends `Completed` or `Skipped`.
/// Leaving a terminal state is only possible through the journey's
/// explicit reopen operation, which is validated by the aggregate rather
/// than by this machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Pending,
    InProgress,
    Completed,
    Skipped,
}

impl StepStatus {
    /// Returns true for `Completed` or `Skipped`.
    pub fn is_terminal(&self) -> bool {
        matches!(self, StepStatus::Completed | StepStatus::Skipped)
    }

    /// Returns true only for `Completed`; skipped steps do not count
    /// toward progress.
    pub fn counts_as_completed(&self) -> bool {
        matches!(self, StepStatus::Completed)
    }

    /// Returns the display label for this status.
    pub fn label(&self) -> &'static str {
        match self {
            StepStatus::Pending => "pending",
            StepStatus::InProgress => "in_progress",
            StepStatus::Completed => "completed",
            StepStatus::Skipped => "skipped",
        }
    }
}

impl StateMachine for StepStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use StepStatus::*;
        matches!(
            (self, target),
            (Pending, InProgress)
                | (Pending, Completed)
                | (Pending, Skipped)
                | (InProgress, Completed)
                | (InProgress, Skipped)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use StepStatus::*;
        match self {
            Pending => vec![InProgress, Completed, Skipped],
            InProgress => vec![Completed, Skipped],
            Completed | Skipped => vec![],
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
