//! Construction-time errors.
//!
//! These cover invalid configuration only: a malformed methodology or
//! out-of-range scheduler tuning. Failure to place a session is never an
//! error; it is an expected outcome reported through the summary.

use chrono::NaiveTime;
use thiserror::Error;

/// Errors raised when building a methodology or scheduler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The daily teaching window has zero or negative length.
    #[error("teaching window is empty ({day_start}..{day_end})")]
    EmptyTeachingWindow {
        day_start: NaiveTime,
        day_end: NaiveTime,
    },
    /// The lunch break has zero or negative length.
    #[error("lunch break is empty ({lunch_start}..{lunch_end})")]
    EmptyLunchBreak {
        lunch_start: NaiveTime,
        lunch_end: NaiveTime,
    },
    /// The lunch break is not strictly inside the teaching window.
    #[error("lunch break {lunch_start}..{lunch_end} must lie strictly within the teaching window")]
    LunchOutsideTeachingWindow {
        lunch_start: NaiveTime,
        lunch_end: NaiveTime,
    },
    /// Session blocks must be at least one hour long.
    #[error("block length must be at least one hour")]
    ZeroBlockLength,
    /// The minimum block length exceeds the maximum.
    #[error("minimum block length {min_block_hours}h exceeds maximum {max_block_hours}h")]
    InvalidBlockBounds {
        min_block_hours: i64,
        max_block_hours: i64,
    },
    /// The active window must admit at least one module.
    #[error("active window capacity must be at least 1")]
    EmptyActiveWindow,
}
