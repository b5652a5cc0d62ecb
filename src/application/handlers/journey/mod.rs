//! Journey command and query handlers.

mod advance_step;
mod complete_task;
mod get_journey;
mod reopen_step;
mod skip_step;
mod start_journey;

#[cfg(test)]
pub(crate) mod testing;

pub use advance_step::{AdvanceStepCommand, AdvanceStepError, AdvanceStepHandler};
pub use complete_task::{CompleteTaskCommand, CompleteTaskError, CompleteTaskHandler};
pub use get_journey::{GetJourneyError, GetJourneyHandler, GetJourneyQuery};
pub use reopen_step::{ReopenStepCommand, ReopenStepError, ReopenStepHandler};
pub use skip_step::{SkipStepCommand, SkipStepError, SkipStepHandler};
pub use start_journey::{StartJourneyCommand, StartJourneyError, StartJourneyHandler};
