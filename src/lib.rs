//! Class scheduling for training centers.
//!
//! Given a class cohort, its priority-ordered curriculum modules, trainer
//! assignments with availability windows, and a room inventory, produces
//! a conflict-free calendar of teaching sessions plus a per-module
//! summary explaining any shortfall.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `ClassCohort`, `Methodology`,
//!   `CurriculumModule`, `Trainer`, `Room`, `ScheduledSession`,
//!   `HolidaySet`, `SummaryEntry`
//! - **`scheduler`**: The greedy generator and its units (module queue,
//!   calendar cursor, slot derivation, availability checks, reporting)
//! - **`validation`**: Input integrity checks (duplicate IDs, dangling
//!   references, malformed windows)
//! - **`error`**: Construction-time errors
//!
//! # Architecture
//!
//! The caller owns persistence: it pre-loads fully resolved records and
//! passes them in plain collections together with a mutable
//! committed-session log (sessions of other classes sharing trainers or
//! rooms). The generator appends every new session to that log and
//! returns the new sessions with a diagnostic summary. Scheduling is
//! single-threaded, synchronous, and deterministic for fixed inputs; an
//! unschedulable module is reported, never raised.

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
