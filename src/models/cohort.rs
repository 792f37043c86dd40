//! Class cohort and methodology models.
//!
//! A cohort is a group of trainees enrolled together, following one
//! curriculum over a date range. Its methodology is the daily time
//! template (teaching window plus lunch break) that governs where
//! sessions may be placed.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Daily teaching-time template for a class.
///
/// Sessions may only occupy `[day_start, lunch_start)` and
/// `[lunch_end, day_end)`. Construction enforces that the teaching window
/// is non-empty and the lunch break lies strictly within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Methodology {
    /// Start of the daily teaching window.
    pub day_start: NaiveTime,
    /// End of the daily teaching window.
    pub day_end: NaiveTime,
    /// Start of the lunch break.
    pub lunch_start: NaiveTime,
    /// End of the lunch break.
    pub lunch_end: NaiveTime,
}

impl Methodology {
    /// Creates a methodology, checking the window invariants.
    pub fn new(
        day_start: NaiveTime,
        day_end: NaiveTime,
        lunch_start: NaiveTime,
        lunch_end: NaiveTime,
    ) -> Result<Self, ScheduleError> {
        if day_start >= day_end {
            return Err(ScheduleError::EmptyTeachingWindow { day_start, day_end });
        }
        if lunch_start >= lunch_end {
            return Err(ScheduleError::EmptyLunchBreak {
                lunch_start,
                lunch_end,
            });
        }
        if lunch_start <= day_start || lunch_end >= day_end {
            return Err(ScheduleError::LunchOutsideTeachingWindow {
                lunch_start,
                lunch_end,
            });
        }
        Ok(Self {
            day_start,
            day_end,
            lunch_start,
            lunch_end,
        })
    }

    /// Morning teaching window: (day_start, lunch_start).
    pub fn morning(&self) -> (NaiveTime, NaiveTime) {
        (self.day_start, self.lunch_start)
    }

    /// Afternoon teaching window: (lunch_end, day_end).
    pub fn afternoon(&self) -> (NaiveTime, NaiveTime) {
        (self.lunch_end, self.day_end)
    }
}

/// A class cohort to be scheduled.
///
/// Read-only input to the generator; never mutated by a scheduling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCohort {
    /// Unique class identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// First day of the class.
    pub start_date: NaiveDate,
    /// Last day of the class (inclusive).
    pub end_date: NaiveDate,
    /// Daily time template.
    pub methodology: Methodology,
}

impl ClassCohort {
    /// Creates a new cohort.
    pub fn new(
        id: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        methodology: Methodology,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            start_date,
            end_date,
            methodology,
        }
    }

    /// Sets the cohort name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_methodology_valid() {
        let m = Methodology::new(t(9, 0), t(17, 0), t(12, 0), t(13, 0)).unwrap();
        assert_eq!(m.morning(), (t(9, 0), t(12, 0)));
        assert_eq!(m.afternoon(), (t(13, 0), t(17, 0)));
    }

    #[test]
    fn test_methodology_empty_window() {
        let err = Methodology::new(t(17, 0), t(9, 0), t(12, 0), t(13, 0)).unwrap_err();
        assert!(matches!(err, ScheduleError::EmptyTeachingWindow { .. }));
    }

    #[test]
    fn test_methodology_empty_lunch() {
        let err = Methodology::new(t(9, 0), t(17, 0), t(13, 0), t(12, 0)).unwrap_err();
        assert!(matches!(err, ScheduleError::EmptyLunchBreak { .. }));
    }

    #[test]
    fn test_methodology_lunch_outside_window() {
        // Lunch starting exactly at day start is not strictly inside
        let err = Methodology::new(t(9, 0), t(17, 0), t(9, 0), t(10, 0)).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::LunchOutsideTeachingWindow { .. }
        ));

        let err = Methodology::new(t(9, 0), t(17, 0), t(16, 0), t(17, 0)).unwrap_err();
        assert!(matches!(
            err,
            ScheduleError::LunchOutsideTeachingWindow { .. }
        ));
    }

    #[test]
    fn test_cohort_builder() {
        let methodology = Methodology::new(t(9, 0), t(17, 0), t(12, 0), t(13, 0)).unwrap();
        let cohort = ClassCohort::new("C1", d(2025, 1, 6), d(2025, 3, 28), methodology)
            .with_name("Web Development 2025");

        assert_eq!(cohort.id, "C1");
        assert_eq!(cohort.name, "Web Development 2025");
        assert_eq!(cohort.start_date, d(2025, 1, 6));
        assert_eq!(cohort.end_date, d(2025, 3, 28));
    }
}
