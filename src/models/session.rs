//! Scheduled session model.
//!
//! A session is the unit the generator produces and consumes: one booking
//! of a class, module, trainer, and room for a time range on one date.
//! Once appended to the committed set, a session participates in every
//! subsequent double-booking check of the same run.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A committed teaching session.
///
/// Invariant: `start < end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledSession {
    /// Class attending the session.
    pub class_id: String,
    /// Curriculum module being taught.
    pub module_id: String,
    /// Trainer delivering the session.
    pub trainer_id: String,
    /// Room hosting the session.
    pub room_id: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Start time.
    pub start: NaiveTime,
    /// End time.
    pub end: NaiveTime,
}

impl ScheduledSession {
    /// Creates a new session.
    pub fn new(
        class_id: impl Into<String>,
        module_id: impl Into<String>,
        trainer_id: impl Into<String>,
        room_id: impl Into<String>,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Self {
        Self {
            class_id: class_id.into(),
            module_id: module_id.into(),
            trainer_id: trainer_id.into(),
            room_id: room_id.into(),
            date,
            start,
            end,
        }
    }

    /// Session length in whole hours.
    #[inline]
    pub fn duration_hours(&self) -> i64 {
        (self.end - self.start).num_hours()
    }

    /// Whether this session overlaps `[start, end)` on `date`.
    ///
    /// Sessions on different dates never overlap.
    #[inline]
    pub fn overlaps(&self, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> bool {
        self.date == date && self.start < end && self.end > start
    }
}
