//! Scheduling domain models.
//!
//! Plain value records for one scheduling run. The caller owns
//! persistence and pre-loads everything fully resolved; the generator
//! only reads these and produces new `ScheduledSession` and
//! `SummaryEntry` values.

mod cohort;
mod curriculum;
mod holiday;
mod room;
mod session;
mod summary;
mod trainer;

pub use cohort::{ClassCohort, Methodology};
pub use curriculum::CurriculumModule;
pub use holiday::{fixed_holidays, HolidaySet};
pub use room::Room;
pub use session::ScheduledSession;
pub use summary::{Diagnostic, SummaryEntry};
pub use trainer::{AvailabilityWindow, Trainer, TrainerAssignment};
