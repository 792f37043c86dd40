//! Greedy schedule generation and reporting.
//!
//! The generator walks the class calendar day by day, derives the
//! bookable slots from the methodology, and fits active curriculum
//! modules into them against room, class, and trainer constraints. It is
//! a fast, deterministic heuristic, not a solver, and it degrades per
//! module: a module that cannot be placed is explained in the summary,
//! never raised as an error.
//!
//! # Units
//!
//! - [`ModuleQueue`]: pending FIFO + bounded active window
//! - [`CalendarCursor`]: day stepping, weekend/holiday classification
//! - [`day_slots`]: methodology template → candidate slots
//! - availability predicates: room / class / trainer double-booking checks
//! - [`ScheduleGenerator`]: the main loop
//! - [`ScheduleStats`]: aggregate figures from a finished outcome

mod availability;
mod config;
mod cursor;
mod driver;
mod queue;
mod report;
mod slots;

pub use availability::{class_is_free, find_room, room_is_free, trainer_is_free};
pub use config::SchedulerConfig;
pub use cursor::CalendarCursor;
pub use driver::{ScheduleGenerator, ScheduleOutcome, ScheduleRequest};
pub use queue::ModuleQueue;
pub use report::ScheduleStats;
pub use slots::{day_slots, Slot};
