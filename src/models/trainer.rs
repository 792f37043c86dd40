//! Trainer, availability, and assignment models.
//!
//! A trainer may only be booked inside declared availability windows:
//! absence of any window on a date means unavailable that whole day.
//! Assignments map one module to exactly one trainer for a run, with the
//! trainer record pre-loaded by the caller.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A declared (date, start, end) range in which a trainer may be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    /// Calendar date of the window.
    pub date: NaiveDate,
    /// Window start time.
    pub start: NaiveTime,
    /// Window end time.
    pub end: NaiveTime,
}

impl AvailabilityWindow {
    /// Creates a new availability window.
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        Self { date, start, end }
    }

    /// Whether this window fully covers `[start, end]`.
    #[inline]
    pub fn covers(&self, start: NaiveTime, end: NaiveTime) -> bool {
        self.start <= start && self.end >= end
    }
}

/// A trainer with declared availability windows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trainer {
    /// Unique trainer identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Windows in which this trainer may be booked.
    pub availability: Vec<AvailabilityWindow>,
}

impl Trainer {
    /// Creates a new trainer with no availability.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            availability: Vec::new(),
        }
    }

    /// Sets the trainer name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds an availability window.
    pub fn with_window(mut self, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Self {
        self.availability
            .push(AvailabilityWindow::new(date, start, end));
        self
    }

    /// Whether any availability window is registered at all.
    pub fn has_availability(&self) -> bool {
        !self.availability.is_empty()
    }

    /// Latest date with a declared window, if any.
    pub fn latest_available_date(&self) -> Option<NaiveDate> {
        self.availability.iter().map(|w| w.date).max()
    }

    /// Whether some declared window on `date` fully covers `[start, end]`.
    pub fn covers(&self, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> bool {
        self.availability
            .iter()
            .any(|w| w.date == date && w.covers(start, end))
    }
}

/// Maps one curriculum module to its trainer for a scheduling run.
///
/// At most one trainer per module per run. A module without an assignment
/// cannot be scheduled and is reported as such in the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerAssignment {
    /// The module this assignment covers.
    pub module_id: String,
    /// The assigned trainer, availability pre-loaded.
    pub trainer: Trainer,
}

impl TrainerAssignment {
    /// Creates a new assignment.
    pub fn new(module_id: impl Into<String>, trainer: Trainer) -> Self {
        Self {
            module_id: module_id.into(),
            trainer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_window_covers() {
        let w = AvailabilityWindow::new(d(2025, 1, 6), t(9), t(17));
        assert!(w.covers(t(9), t(12)));
        assert!(w.covers(t(9), t(17)));
        assert!(!w.covers(t(8), t(10)));
        assert!(!w.covers(t(16), t(18)));
    }

    #[test]
    fn test_trainer_builder() {
        let trainer = Trainer::new("T1")
            .with_name("Alice Santos")
            .with_window(d(2025, 1, 6), t(9), t(17))
            .with_window(d(2025, 1, 7), t(9), t(13));

        assert_eq!(trainer.id, "T1");
        assert_eq!(trainer.name, "Alice Santos");
        assert_eq!(trainer.availability.len(), 2);
        assert!(trainer.has_availability());
    }

    #[test]
    fn test_trainer_covers_by_date() {
        let trainer = Trainer::new("T1").with_window(d(2025, 1, 6), t(9), t(17));

        assert!(trainer.covers(d(2025, 1, 6), t(10), t(12)));
        // No window on the 7th at all
        assert!(!trainer.covers(d(2025, 1, 7), t(10), t(12)));
    }

    #[test]
    fn test_latest_available_date() {
        let trainer = Trainer::new("T1")
            .with_window(d(2025, 1, 8), t(9), t(12))
            .with_window(d(2025, 1, 6), t(9), t(17));

        assert_eq!(trainer.latest_available_date(), Some(d(2025, 1, 8)));
        assert_eq!(Trainer::new("T2").latest_available_date(), None);
    }

    #[test]
    fn test_assignment() {
        let assignment = TrainerAssignment::new("M1", Trainer::new("T1"));
        assert_eq!(assignment.module_id, "M1");
        assert_eq!(assignment.trainer.id, "T1");
    }
}
