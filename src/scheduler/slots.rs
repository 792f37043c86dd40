//! Daily slot derivation from the methodology template.
//!
//! Packs full-length blocks from the start of the teaching window up to
//! the lunch break, then from the end of the break to the end of the day.
//! A tail shorter than a full block yields no slot; shorter sessions
//! still happen *inside* a slot when the driver steps the duration down.
//!
//! Deterministic and cheap: recomputed per day rather than cached.

use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::Methodology;

/// A bookable time window within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Slot start time.
    pub start: NaiveTime,
    /// Slot end time.
    pub end: NaiveTime,
}

impl Slot {
    /// Slot length in whole hours.
    #[inline]
    pub fn duration_hours(&self) -> i64 {
        (self.end - self.start).num_hours()
    }
}

/// Derives the ordered candidate slots for one day.
///
/// Morning blocks come first, then afternoon blocks.
pub fn day_slots(methodology: &Methodology, max_block_hours: i64) -> Vec<Slot> {
    let mut slots = Vec::new();
    let (morning_start, morning_end) = methodology.morning();
    pack_blocks(morning_start, morning_end, max_block_hours, &mut slots);
    let (afternoon_start, afternoon_end) = methodology.afternoon();
    pack_blocks(afternoon_start, afternoon_end, max_block_hours, &mut slots);
    slots
}

/// Packs consecutive `block_hours`-long slots into `[window_start, window_end]`.
fn pack_blocks(
    window_start: NaiveTime,
    window_end: NaiveTime,
    block_hours: i64,
    out: &mut Vec<Slot>,
) {
    let block = Duration::hours(block_hours);
    let mut start = window_start;
    loop {
        let (end, wrapped_days) = start.overflowing_add_signed(block);
        if wrapped_days != 0 || end > window_end {
            break;
        }
        out.push(Slot { start, end });
        start = end;
    }
}
