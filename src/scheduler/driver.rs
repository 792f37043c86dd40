//! Greedy class-schedule generation.
//!
//! # Algorithm
//!
//! 1. Queue curriculum modules by ascending priority rank and keep a
//!    bounded active window of modules in progress.
//! 2. Walk the class calendar one day at a time, skipping weekends and
//!    public holidays.
//! 3. For each daily slot, try the active modules in window order and
//!    durations longest-first against room, class, and trainer
//!    availability. The first feasible assignment is committed and
//!    consumes the slot; a partially complete module rotates to the end
//!    of the window so active modules alternate.
//! 4. Stop when every module is handled, the class end date is crossed,
//!    or the overrun guard trips.
//!
//! The loop is deterministic for fixed inputs and never backtracks: a
//! committed session is final for the rest of the run.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::ScheduleError;
use crate::models::{
    ClassCohort, CurriculumModule, HolidaySet, Room, ScheduledSession, SummaryEntry,
    TrainerAssignment,
};

use super::availability::{class_is_free, find_room, trainer_is_free};
use super::config::SchedulerConfig;
use super::cursor::CalendarCursor;
use super::queue::ModuleQueue;
use super::report::{build_summary, ModuleProgress};
use super::slots::{day_slots, Slot};

/// Input container for one scheduling run.
///
/// Everything is pre-loaded and fully resolved by the caller; the
/// generator performs no data fetches of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRequest {
    /// The class being scheduled.
    pub cohort: ClassCohort,
    /// Curriculum modules, any order; priority rank decides scheduling order.
    pub modules: Vec<CurriculumModule>,
    /// Trainer assignments, at most one per module.
    pub assignments: Vec<TrainerAssignment>,
    /// Room inventory, in selection order.
    pub rooms: Vec<Room>,
    /// Optional earliest scheduling date (e.g. "resume from next week").
    pub min_start_date: Option<NaiveDate>,
    /// Hours already taught per module, for mid-course re-planning.
    pub prior_hours: HashMap<String, i64>,
}

impl ScheduleRequest {
    /// Creates a new request.
    pub fn new(
        cohort: ClassCohort,
        modules: Vec<CurriculumModule>,
        assignments: Vec<TrainerAssignment>,
        rooms: Vec<Room>,
    ) -> Self {
        Self {
            cohort,
            modules,
            assignments,
            rooms,
            min_start_date: None,
            prior_hours: HashMap::new(),
        }
    }

    /// Sets the earliest date sessions may be placed on.
    pub fn with_min_start_date(mut self, date: NaiveDate) -> Self {
        self.min_start_date = Some(date);
        self
    }

    /// Records hours already taught for a module.
    pub fn with_prior_hours(mut self, module_id: impl Into<String>, hours: i64) -> Self {
        self.prior_hours.insert(module_id.into(), hours);
        self
    }

    /// The assignment covering a module, if one exists.
    pub fn assignment_for(&self, module_id: &str) -> Option<&TrainerAssignment> {
        self.assignments.iter().find(|a| a.module_id == module_id)
    }
}

/// Result of a scheduling run: new sessions plus the per-module summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleOutcome {
    /// Sessions created by this run, in commit order.
    pub sessions: Vec<ScheduledSession>,
    /// One entry per curriculum module.
    pub summary: Vec<SummaryEntry>,
}

impl ScheduleOutcome {
    /// Whether every module completed. Callers must inspect this (or the
    /// per-entry flags); an incomplete schedule is not an error.
    pub fn fully_scheduled(&self) -> bool {
        self.summary.iter().all(|e| e.completed)
    }
}

/// Greedy, priority-driven session generator.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use classplan::models::{
///     ClassCohort, CurriculumModule, Methodology, Room, Trainer, TrainerAssignment,
/// };
/// use classplan::scheduler::{ScheduleGenerator, ScheduleRequest};
///
/// let t = |h| NaiveTime::from_hms_opt(h, 0, 0).unwrap();
/// let d = |day| NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
///
/// let methodology = Methodology::new(t(9), t(17), t(12), t(13)).unwrap();
/// let cohort = ClassCohort::new("C1", d(6), d(10), methodology);
/// let trainer = Trainer::new("T1").with_window(d(6), t(9), t(17));
/// let request = ScheduleRequest::new(
///     cohort,
///     vec![CurriculumModule::new("M1", 1, 3)],
///     vec![TrainerAssignment::new("M1", trainer)],
///     vec![Room::new("R1", "classroom")],
/// );
///
/// let mut committed = Vec::new();
/// let outcome = ScheduleGenerator::new().generate(&request, &mut committed);
/// assert!(outcome.fully_scheduled());
/// assert_eq!(committed.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleGenerator {
    config: SchedulerConfig,
}

impl ScheduleGenerator {
    /// Creates a generator with default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with explicit tuning.
    pub fn with_config(config: SchedulerConfig) -> Result<Self, ScheduleError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Runs the scheduler.
    ///
    /// `committed` is the append-only session log for the run: it should
    /// hold any pre-existing sessions of classes sharing trainers or
    /// rooms, and every session created here is appended to it. The
    /// returned outcome holds only the new sessions, plus the summary.
    pub fn generate(
        &self,
        request: &ScheduleRequest,
        committed: &mut Vec<ScheduledSession>,
    ) -> ScheduleOutcome {
        let cohort = &request.cohort;
        let config = &self.config;

        let mut order: Vec<usize> = (0..request.modules.len()).collect();
        order.sort_by_key(|&i| request.modules[i].priority);
        let mut queue = ModuleQueue::new(order, config.max_active_modules);

        let mut progress: Vec<ModuleProgress> = request
            .modules
            .iter()
            .map(|m| ModuleProgress {
                scheduled_hours: request.prior_hours.get(&m.module_id).copied().unwrap_or(0),
                placed_hours: 0,
            })
            .collect();

        let start = match request.min_start_date {
            Some(min) if min > cohort.start_date => min,
            _ => cohort.start_date,
        };
        let holidays = HolidaySet::covering(cohort.start_date, cohort.end_date);
        let mut cursor =
            CalendarCursor::new(start, cohort.end_date, holidays, config.overrun_grace_months);

        let mut generated: Vec<ScheduledSession> = Vec::new();
        let mut end_reached = false;

        while !queue.active().is_empty() {
            if cursor.past_safety_bound() {
                debug!(date = %cursor.current(), "overrun guard tripped; terminating run");
                break;
            }
            if cursor.past_class_end() {
                end_reached = true;
                break;
            }
            if !cursor.is_teaching_day() {
                cursor.advance();
                continue;
            }

            let date = cursor.current();
            for slot in day_slots(&cohort.methodology, config.max_block_hours) {
                let mut position = 0;
                while position < queue.active().len() {
                    let index = queue.active()[position];
                    let module = &request.modules[index];
                    let remaining = module.required_hours - progress[index].scheduled_hours;

                    if remaining <= 0 {
                        queue.remove_active(position);
                        queue.refill();
                        continue;
                    }

                    let assignment = match request.assignment_for(&module.module_id) {
                        Some(a) => a,
                        None => {
                            debug!(module = %module.module_id, "dropped: no trainer assigned");
                            queue.remove_active(position);
                            queue.refill();
                            continue;
                        }
                    };

                    match self.try_place(request, module, assignment, date, slot, remaining, committed)
                    {
                        Some(session) => {
                            let hours = session.duration_hours();
                            debug!(
                                module = %module.module_id,
                                room = %session.room_id,
                                %date,
                                start = %session.start,
                                end = %session.end,
                                "committed session"
                            );
                            generated.push(session.clone());
                            committed.push(session);
                            progress[index].scheduled_hours += hours;
                            progress[index].placed_hours += hours;

                            if progress[index].scheduled_hours >= module.required_hours {
                                queue.remove_active(position);
                                queue.refill();
                            } else {
                                queue.rotate_to_back(position);
                            }
                            // The class attends one session at a time:
                            // the slot is spent, move to the next one.
                            break;
                        }
                        None => {
                            trace!(
                                module = %module.module_id,
                                %date,
                                slot_start = %slot.start,
                                "no fit"
                            );
                            position += 1;
                        }
                    }
                }
            }
            cursor.advance();
        }

        let summary = build_summary(request, &progress, end_reached);
        ScheduleOutcome {
            sessions: generated,
            summary,
        }
    }

    /// Tries durations longest-first within one slot for one module.
    ///
    /// Ceiling is the smallest of remaining hours, slot length, and the
    /// block maximum; the floor is the block minimum. Returns the session
    /// to commit for the first duration where a compatible free room, a
    /// free class, and a free-and-available trainer all line up.
    #[allow(clippy::too_many_arguments)]
    fn try_place(
        &self,
        request: &ScheduleRequest,
        module: &CurriculumModule,
        assignment: &TrainerAssignment,
        date: NaiveDate,
        slot: Slot,
        remaining: i64,
        committed: &[ScheduledSession],
    ) -> Option<ScheduledSession> {
        let ceiling = remaining
            .min(slot.duration_hours())
            .min(self.config.max_block_hours);

        let mut hours = ceiling;
        while hours >= self.config.min_block_hours {
            let start = slot.start;
            let (end, wrapped_days) = start.overflowing_add_signed(Duration::hours(hours));
            if wrapped_days == 0 {
                if let Some(room) = find_room(&request.rooms, module, date, start, end, committed) {
                    if class_is_free(&request.cohort.id, date, start, end, committed)
                        && trainer_is_free(&assignment.trainer, date, start, end, committed)
                    {
                        return Some(ScheduledSession::new(
                            request.cohort.id.as_str(),
                            module.module_id.as_str(),
                            assignment.trainer.id.as_str(),
                            room.id.as_str(),
                            date,
                            start,
                            end,
                        ));
                    }
                }
            }
            hours -= 1;
        }
        None
    }
}
