//! Module queue: pending FIFO plus bounded active window.
//!
//! Curriculum modules enter pre-sorted by ascending priority. A bounded
//! active window holds the modules currently eligible for slots; as
//! modules complete or are dropped, `refill` pulls from the front of the
//! pending queue. Partial completion rotates a module to the end of the
//! window so concurrently active modules alternate across slots.

use std::collections::VecDeque;

/// Two-tier module ordering over indices into the caller's module slice.
#[derive(Debug, Clone)]
pub struct ModuleQueue {
    pending: VecDeque<usize>,
    active: Vec<usize>,
    max_active: usize,
}

impl ModuleQueue {
    /// Creates a queue from priority-ordered module indices and fills the
    /// active window.
    pub fn new(order: Vec<usize>, max_active: usize) -> Self {
        let mut queue = Self {
            pending: order.into(),
            active: Vec::new(),
            max_active,
        };
        queue.refill();
        queue
    }

    /// Pulls pending modules into the active window while it has room.
    pub fn refill(&mut self) {
        while self.active.len() < self.max_active {
            match self.pending.pop_front() {
                Some(index) => self.active.push(index),
                None => break,
            }
        }
    }

    /// Modules currently eligible for slots, in window order.
    pub fn active(&self) -> &[usize] {
        &self.active
    }

    /// Removes the module at `position` in the active window.
    ///
    /// The caller decides when to refill, so a drop and its refill stay
    /// distinct steps.
    pub fn remove_active(&mut self, position: usize) -> usize {
        self.active.remove(position)
    }

    /// Moves the module at `position` to the end of the active window.
    pub fn rotate_to_back(&mut self, position: usize) {
        let index = self.active.remove(position);
        self.active.push(index);
    }

    /// Whether no module remains anywhere.
    pub fn is_drained(&self) -> bool {
        self.active.is_empty() && self.pending.is_empty()
    }
}
