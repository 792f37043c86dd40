//! Calendar cursor: day stepping over the class date range.
//!
//! Advances one day at a time. Weekends and public holidays are not
//! teaching days; crossing the class end date ends a run, and a grace
//! bound several months past it guards against unbounded iteration.

use chrono::{Datelike, Months, NaiveDate, Weekday};

use crate::models::HolidaySet;

/// Day-by-day date pointer for one scheduling run.
#[derive(Debug, Clone)]
pub struct CalendarCursor {
    current: NaiveDate,
    class_end: NaiveDate,
    safety_end: NaiveDate,
    holidays: HolidaySet,
}

impl CalendarCursor {
    /// Creates a cursor at `start`, bounded by `class_end` plus the grace
    /// period.
    pub fn new(
        start: NaiveDate,
        class_end: NaiveDate,
        holidays: HolidaySet,
        grace_months: u32,
    ) -> Self {
        let safety_end = class_end
            .checked_add_months(Months::new(grace_months))
            .unwrap_or(class_end);
        Self {
            current: start,
            class_end,
            safety_end,
            holidays,
        }
    }

    /// The date the cursor points at.
    pub fn current(&self) -> NaiveDate {
        self.current
    }

    /// Moves forward one day.
    pub fn advance(&mut self) {
        if let Some(next) = self.current.succ_opt() {
            self.current = next;
        }
    }

    /// Whether the cursor has crossed the class end date.
    pub fn past_class_end(&self) -> bool {
        self.current > self.class_end
    }

    /// Whether the cursor has crossed the safety bound.
    pub fn past_safety_bound(&self) -> bool {
        self.current > self.safety_end
    }

    /// Whether the current date is a bookable teaching day
    /// (a weekday that is not a holiday).
    pub fn is_teaching_day(&self) -> bool {
        !matches!(self.current.weekday(), Weekday::Sat | Weekday::Sun)
            && !self.holidays.contains(self.current)
    }
}
