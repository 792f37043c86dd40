//! Scheduler tuning knobs.

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;

/// Tunable parameters for a scheduling run.
///
/// Defaults match standard operation: up to three modules in progress at
/// once, sessions between one and three hours, and a six-month grace
/// window past the class end before the run force-terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Maximum modules simultaneously in the active window.
    pub max_active_modules: usize,
    /// Longest session block, in hours.
    pub max_block_hours: i64,
    /// Shortest session block, in hours.
    pub min_block_hours: i64,
    /// Months past the class end after which the run force-terminates.
    pub overrun_grace_months: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_active_modules: 3,
            max_block_hours: 3,
            min_block_hours: 1,
            overrun_grace_months: 6,
        }
    }
}

impl SchedulerConfig {
    /// Checks the configuration bounds.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.max_active_modules == 0 {
            return Err(ScheduleError::EmptyActiveWindow);
        }
        if self.min_block_hours < 1 {
            return Err(ScheduleError::ZeroBlockLength);
        }
        if self.min_block_hours > self.max_block_hours {
            return Err(ScheduleError::InvalidBlockBounds {
                min_block_hours: self.min_block_hours,
                max_block_hours: self.max_block_hours,
            });
        }
        Ok(())
    }
}
