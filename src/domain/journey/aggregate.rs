//! Journey aggregate - a user's relocation plan.
//!
//! A journey is an ordered sequence of phases, each holding ordered steps
//! with an order index that is global and monotonic across phases. The
//! aggregate owns every status transition: steps complete or skip strictly
//! in global order, and only the most recently finished step can be
//! reopened. The current step is always the first non-terminal step.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::{
    DomainError, ErrorCode, JourneyId, StateMachine, StepId, StepStatus, TaskId, Timestamp, UserId,
};

use super::JourneyTemplate;

/// Errors raised by journey operations.
#[derive(Debug, Clone, Error)]
pub enum JourneyError {
    #[error("No active journey found for user {0}")]
    NotFound(UserId),

    #[error("User {0} already has an active journey")]
    AlreadyActive(UserId),

    #[error("Step {0} does not belong to this journey")]
    StepNotFound(StepId),

    #[error("Task {0} does not belong to this step")]
    TaskNotFound(TaskId),

    #[error("Invalid transition for step {step_id}: {reason}")]
    InvalidStepTransition { step_id: StepId, reason: String },
}

impl JourneyError {
    fn out_of_order(step_id: StepId, reason: impl Into<String>) -> Self {
        JourneyError::InvalidStepTransition {
            step_id,
            reason: reason.into(),
        }
    }
}

impl From<JourneyError> for DomainError {
    fn from(err: JourneyError) -> Self {
        let code = match &err {
            JourneyError::NotFound(_) => ErrorCode::JourneyNotFound,
            JourneyError::AlreadyActive(_) => ErrorCode::JourneyAlreadyActive,
            JourneyError::StepNotFound(_) => ErrorCode::StepNotFound,
            JourneyError::TaskNotFound(_) => ErrorCode::TaskNotFound,
            JourneyError::InvalidStepTransition { .. } => ErrorCode::InvalidStepTransition,
        };
        DomainError::new(code, err.to_string())
    }
}

/// Free-form property preferences captured at journey start.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyGoals {
    #[serde(default)]
    pub target_city: Option<String>,
    #[serde(default)]
    pub max_budget: Option<f64>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub min_rooms: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Checklist item under a step. Purely advisory: toggling tasks never
/// changes the owning step's status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub done: bool,
}

/// Atomic unit of journey progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    pub id: StepId,
    pub title: String,
    /// Global order index, monotonic across phases.
    pub order: u32,
    pub status: StepStatus,
    pub estimated_days: Option<u32>,
    pub deadline: Option<Timestamp>,
    pub skip_reason: Option<String>,
    pub tasks: Vec<Task>,
}

impl Step {
    /// Returns true once the step is completed or skipped.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

/// Named ordered grouping of steps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    /// Phase order index, unique and contiguous from zero.
    pub order: u32,
    pub steps: Vec<Step>,
}

/// A user's relocation plan. One active journey per user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journey {
    id: JourneyId,
    user_id: UserId,
    phases: Vec<Phase>,
    current_step: Option<StepId>,
    started_at: Timestamp,
    property_goals: Option<PropertyGoals>,
    /// Step ids in the order they reached a terminal status. The top of
    /// the stack is the only step `reopen_step` will accept.
    terminal_history: Vec<StepId>,
    /// Optimistic concurrency counter, bumped on every mutation. The
    /// repository compares it on update so two racing advances cannot
    /// both pass a stale ordering check.
    version: u64,
}

impl Journey {
    /// Instantiates a journey from a template.
    ///
    /// Phases receive contiguous order indices, steps a global monotonic
    /// order. Deadlines are resolved relative to `started_at`. The first
    /// step is promoted to `InProgress` immediately.
    pub fn from_template(
        user_id: UserId,
        template: &JourneyTemplate,
        property_goals: Option<PropertyGoals>,
        started_at: Timestamp,
    ) -> Self {
        let mut global_order = 0u32;
        let phases = template
            .phases
            .iter()
            .enumerate()
            .map(|(phase_idx, phase)| Phase {
                name: phase.name.clone(),
                order: phase_idx as u32,
                steps: phase
                    .steps
                    .iter()
                    .map(|step| {
                        let order = global_order;
                        global_order += 1;
                        Step {
                            id: StepId::new(),
                            title: step.title.clone(),
                            order,
                            status: StepStatus::Pending,
                            estimated_days: step.estimated_days,
                            deadline: step
                                .deadline_days_from_start
                                .map(|days| started_at.add_days(days)),
                            skip_reason: None,
                            tasks: step
                                .tasks
                                .iter()
                                .map(|task| Task {
                                    id: TaskId::new(),
                                    title: task.title.clone(),
                                    done: false,
                                })
                                .collect(),
                        }
                    })
                    .collect(),
            })
            .collect();

        let mut journey = Self {
            id: JourneyId::new(),
            user_id,
            phases,
            current_step: None,
            started_at,
            property_goals,
            terminal_history: Vec::new(),
            version: 0,
        };
        journey.recompute_current();
        journey
    }

    pub fn id(&self) -> JourneyId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }

    pub fn started_at(&self) -> Timestamp {
        self.started_at
    }

    pub fn property_goals(&self) -> Option<&PropertyGoals> {
        self.property_goals.as_ref()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// The first non-terminal step in global order, or `None` when the
    /// journey is complete.
    pub fn current_step_id(&self) -> Option<StepId> {
        self.current_step
    }

    /// The current step itself.
    pub fn current_step(&self) -> Option<&Step> {
        self.current_step.and_then(|id| self.find_step(id))
    }

    /// Name of the phase containing the current step.
    pub fn current_phase_name(&self) -> Option<&str> {
        let current = self.current_step?;
        self.phases
            .iter()
            .find(|p| p.steps.iter().any(|s| s.id == current))
            .map(|p| p.name.as_str())
    }

    /// Iterates steps in global order.
    pub fn steps_in_order(&self) -> impl Iterator<Item = &Step> {
        // Phases are stored in order and step order is monotonic across
        // them, so flat iteration preserves global order.
        self.phases.iter().flat_map(|p| p.steps.iter())
    }

    /// Looks up a step by id.
    pub fn find_step(&self, step_id: StepId) -> Option<&Step> {
        self.steps_in_order().find(|s| s.id == step_id)
    }

    pub fn total_steps(&self) -> usize {
        self.phases.iter().map(|p| p.steps.len()).sum()
    }

    pub fn completed_count(&self) -> usize {
        self.steps_in_order()
            .filter(|s| s.status.counts_as_completed())
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.steps_in_order()
            .filter(|s| s.status == StepStatus::Skipped)
            .count()
    }

    /// True once every step is completed or skipped.
    pub fn is_complete(&self) -> bool {
        self.current_step.is_none()
    }

    /// Completion percentage, rounded to one decimal.
    ///
    /// Skipped steps do not count as completed, so a fully skipped
    /// journey reports 0.0 while still being complete.
    pub fn progress_percentage(&self) -> f64 {
        let total = self.total_steps();
        if total == 0 {
            return 0.0;
        }
        let raw = self.completed_count() as f64 / total as f64 * 100.0;
        (raw * 10.0).round() / 10.0
    }

    /// Sum of duration estimates over all non-terminal steps.
    ///
    /// Returns `None` when any remaining step lacks an estimate, so the
    /// caller never sees a silently understated figure.
    pub fn estimated_days_remaining(&self) -> Option<u32> {
        let mut total = 0u32;
        for step in self.steps_in_order().filter(|s| !s.is_terminal()) {
            total += step.estimated_days?;
        }
        Some(total)
    }

    /// Marks the current step completed and moves the pointer forward.
    ///
    /// Fails with `StepNotFound` for foreign ids and with
    /// `InvalidStepTransition` when the step is terminal or not the
    /// current step. State is untouched on failure.
    pub fn advance_step(&mut self, step_id: StepId) -> Result<(), JourneyError> {
        self.finish_step(step_id, StepStatus::Completed, None)
    }

    /// Marks the current step skipped, with an optional reason.
    ///
    /// Same ordering constraint as `advance_step`; skipped steps free up
    /// the current pointer but never count toward progress.
    pub fn skip_step(
        &mut self,
        step_id: StepId,
        reason: Option<String>,
    ) -> Result<(), JourneyError> {
        self.finish_step(step_id, StepStatus::Skipped, reason)
    }

    fn finish_step(
        &mut self,
        step_id: StepId,
        target: StepStatus,
        skip_reason: Option<String>,
    ) -> Result<(), JourneyError> {
        let current = self.current_step;
        let step = self
            .find_step(step_id)
            .ok_or(JourneyError::StepNotFound(step_id))?;

        if step.is_terminal() {
            return Err(JourneyError::out_of_order(
                step_id,
                format!("step is already {}", step.status),
            ));
        }
        if current != Some(step_id) {
            return Err(JourneyError::out_of_order(
                step_id,
                "steps must be completed in order; this is not the current step",
            ));
        }

        // Validation done; from here the mutation cannot fail.
        let new_status = step
            .status
            .transition_to(target)
            .map_err(|e| JourneyError::out_of_order(step_id, e.to_string()))?;

        let step = self
            .find_step_mut(step_id)
            .expect("step existence checked above");
        step.status = new_status;
        step.skip_reason = skip_reason;
        self.terminal_history.push(step_id);
        self.recompute_current();
        self.version += 1;
        Ok(())
    }

    /// Reverts the most recently finished step to `Pending`.
    ///
    /// Undo semantics: reopening any other terminal step would punch a
    /// hole into the ordered prefix of finished steps and is rejected.
    pub fn reopen_step(&mut self, step_id: StepId) -> Result<(), JourneyError> {
        let step = self
            .find_step(step_id)
            .ok_or(JourneyError::StepNotFound(step_id))?;

        if !step.is_terminal() {
            return Err(JourneyError::out_of_order(
                step_id,
                "only completed or skipped steps can be reopened",
            ));
        }
        if self.terminal_history.last() != Some(&step_id) {
            return Err(JourneyError::out_of_order(
                step_id,
                "only the most recently finished step can be reopened",
            ));
        }

        let step = self
            .find_step_mut(step_id)
            .expect("step existence checked above");
        // Aggregate-owned edge out of a terminal state; the status state
        // machine deliberately does not model it.
        step.status = StepStatus::Pending;
        step.skip_reason = None;
        self.terminal_history.pop();
        self.recompute_current();
        self.version += 1;
        Ok(())
    }

    /// Toggles a checklist task. Advisory only: step status is operator
    /// driven and never derived from task completion.
    pub fn set_task_done(
        &mut self,
        step_id: StepId,
        task_id: TaskId,
        done: bool,
    ) -> Result<(), JourneyError> {
        let step = self
            .find_step_mut(step_id)
            .ok_or(JourneyError::StepNotFound(step_id))?;
        let task = step
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(JourneyError::TaskNotFound(task_id))?;
        task.done = done;
        self.version += 1;
        Ok(())
    }

    fn find_step_mut(&mut self, step_id: StepId) -> Option<&mut Step> {
        self.phases
            .iter_mut()
            .flat_map(|p| p.steps.iter_mut())
            .find(|s| s.id == step_id)
    }

    /// Re-derives the current pointer and keeps `InProgress` in sync:
    /// the current step is promoted from `Pending`, and any step that
    /// lost the pointer (after a reopen) drops back to `Pending`.
    fn recompute_current(&mut self) {
        let current = self
            .steps_in_order()
            .find(|s| !s.is_terminal())
            .map(|s| s.id);
        self.current_step = current;

        for step in self.phases.iter_mut().flat_map(|p| p.steps.iter_mut()) {
            if Some(step.id) == current {
                if step.status == StepStatus::Pending {
                    step.status = StepStatus::InProgress;
                }
            } else if step.status == StepStatus::InProgress {
                // Pointer moved away without finishing; aggregate-owned
                // demotion, mirroring the reopen edge.
                step.status = StepStatus::Pending;
            }
        }
    }
}
