//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the Relo Compass domain.

mod errors;
mod ids;
mod share_token;
mod state_machine;
mod step_status;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CalculationId, JourneyId, StepId, TaskId, UserId};
pub use share_token::ShareToken;
pub use state_machine::StateMachine;
pub use step_status::StepStatus;
pub use timestamp::Timestamp;
