//! Public-holiday lookup.
//!
//! Holidays are a pure function of the calendar year: the ten fixed-date
//! national public holidays. A `HolidaySet` materializes them for every
//! year a class spans, so day classification is a set lookup.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The ten fixed-date national public holidays as (month, day).
const FIXED_HOLIDAYS: [(u32, u32); 10] = [
    (1, 1),   // New Year's Day
    (4, 25),  // Freedom Day
    (5, 1),   // Labour Day
    (6, 10),  // National Day
    (8, 15),  // Assumption
    (10, 5),  // Republic Day
    (11, 1),  // All Saints' Day
    (12, 1),  // Restoration of Independence
    (12, 8),  // Immaculate Conception
    (12, 25), // Christmas Day
];

/// Returns the fixed-date national holidays for one year.
pub fn fixed_holidays(year: i32) -> Vec<NaiveDate> {
    FIXED_HOLIDAYS
        .iter()
        .filter_map(|&(month, day)| NaiveDate::from_ymd_opt(year, month, day))
        .collect()
}

/// A set of holiday dates covering a date range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySet {
    dates: HashSet<NaiveDate>,
}

impl HolidaySet {
    /// Builds the holiday set for every year in `[start, end]`.
    ///
    /// An inverted range yields an empty set.
    pub fn covering(start: NaiveDate, end: NaiveDate) -> Self {
        use chrono::Datelike;

        let mut dates = HashSet::new();
        let mut year = start.year();
        while year <= end.year() {
            dates.extend(fixed_holidays(year));
            year += 1;
        }
        Self { dates }
    }

    /// Adds an extra closure date (e.g. a municipal or school holiday).
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.dates.insert(date);
        self
    }

    /// Whether `date` is a holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Number of holiday dates in the set.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Whether the set holds no dates.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
