//! Post-run summary and aggregate statistics.
//!
//! One `SummaryEntry` per curriculum module, including modules dropped
//! early for lacking a trainer. Shortfall diagnosis follows a fixed
//! priority: staffing gaps, then availability gaps, then exhausted class
//! time, then the generic conflict explanation. Detection conditions are
//! normative; the phrasing lives in `Diagnostic::message`.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{Diagnostic, SummaryEntry, TrainerAssignment};

use super::driver::{ScheduleOutcome, ScheduleRequest};

/// Hour counters tracked per module during a run.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ModuleProgress {
    /// Total hours covered: prior progress plus this run.
    pub scheduled_hours: i64,
    /// Hours placed by this run alone.
    pub placed_hours: i64,
}

/// Builds the per-module summary after the main loop.
pub(crate) fn build_summary(
    request: &ScheduleRequest,
    progress: &[ModuleProgress],
    end_reached: bool,
) -> Vec<SummaryEntry> {
    request
        .modules
        .iter()
        .zip(progress)
        .map(|(module, tally)| {
            let assignment = request.assignment_for(&module.module_id);
            let completed = tally.scheduled_hours >= module.required_hours;
            let diagnostic = if completed {
                Diagnostic::Completed
            } else {
                diagnose(assignment, tally, end_reached, request.cohort.end_date)
            };
            SummaryEntry {
                module_id: module.module_id.clone(),
                module_name: module.name.clone(),
                trainer_name: assignment.map(|a| a.trainer.name.clone()),
                required_hours: module.required_hours,
                scheduled_hours: tally.scheduled_hours,
                completed,
                diagnostic,
            }
        })
        .collect()
}

/// First matching shortfall cause wins.
///
/// The class-end diagnosis applies only to modules that placed hours this
/// run; a module that never placed a single hour gets the generic
/// explanation, which points at conflicts rather than the calendar.
fn diagnose(
    assignment: Option<&TrainerAssignment>,
    tally: &ModuleProgress,
    end_reached: bool,
    class_end: NaiveDate,
) -> Diagnostic {
    let assignment = match assignment {
        Some(a) => a,
        None => return Diagnostic::NoTrainerAssigned,
    };
    let trainer = &assignment.trainer;
    if !trainer.has_availability() {
        return Diagnostic::NoRegisteredAvailability;
    }
    if let Some(last_available) = trainer.latest_available_date() {
        if last_available < class_end {
            return Diagnostic::AvailabilityEndsEarly { last_available };
        }
    }
    if end_reached && tally.placed_hours > 0 {
        return Diagnostic::ClassEndReached;
    }
    Diagnostic::NoCompatibleSlot
}

/// Aggregate figures computed from a finished outcome.
#[derive(Debug, Clone)]
pub struct ScheduleStats {
    /// Curriculum modules in the run.
    pub module_count: usize,
    /// Modules with every required hour covered.
    pub modules_completed: usize,
    /// Sum of required hours across modules.
    pub required_hours_total: i64,
    /// Sum of covered hours across modules.
    pub scheduled_hours_total: i64,
    /// Fraction of modules completed (1.0 for an empty curriculum).
    pub completion_rate: f64,
    /// Hours booked per room by this run.
    pub hours_by_room: HashMap<String, i64>,
}

impl ScheduleStats {
    /// Computes statistics from an outcome.
    pub fn calculate(outcome: &ScheduleOutcome) -> Self {
        let module_count = outcome.summary.len();
        let modules_completed = outcome.summary.iter().filter(|e| e.completed).count();
        let required_hours_total = outcome.summary.iter().map(|e| e.required_hours).sum();
        let scheduled_hours_total = outcome.summary.iter().map(|e| e.scheduled_hours).sum();

        let completion_rate = if module_count == 0 {
            1.0
        } else {
            modules_completed as f64 / module_count as f64
        };

        let mut hours_by_room: HashMap<String, i64> = HashMap::new();
        for session in &outcome.sessions {
            *hours_by_room.entry(session.room_id.clone()).or_insert(0) +=
                session.duration_hours();
        }

        Self {
            module_count,
            modules_completed,
            required_hours_total,
            scheduled_hours_total,
            completion_rate,
            hours_by_room,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassCohort, CurriculumModule, Methodology, ScheduledSession, Trainer};
    use chrono::NaiveTime;

    fn t(h: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, 0, 0).unwrap()
    }

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn request_with(
        modules: Vec<CurriculumModule>,
        assignments: Vec<TrainerAssignment>,
    ) -> ScheduleRequest {
        let methodology = Methodology::new(t(9), t(17), t(12), t(13)).unwrap();
        let cohort = ClassCohort::new("C1", d(6), d(10), methodology);
        ScheduleRequest::new(cohort, modules, assignments, Vec::new())
    }

    fn tally(scheduled: i64, placed: i64) -> ModuleProgress {
        ModuleProgress {
            scheduled_hours: scheduled,
            placed_hours: placed,
        }
    }

    #[test]
    fn test_completed_entry() {
        let request = request_with(
            vec![CurriculumModule::new("M1", 1, 6).with_name("Intro")],
            vec![TrainerAssignment::new(
                "M1",
                Trainer::new("T1").with_window(d(6), t(9), t(17)),
            )],
        );
        let summary = build_summary(&request, &[tally(6, 6)], false);

        assert_eq!(summary.len(), 1);
        assert!(summary[0].completed);
        assert_eq!(summary[0].diagnostic, Diagnostic::Completed);
    }

    #[test]
    fn test_no_trainer_beats_everything() {
        let request = request_with(vec![CurriculumModule::new("M1", 1, 6)], Vec::new());
        let summary = build_summary(&request, &[tally(0, 0)], true);

        assert_eq!(summary[0].diagnostic, Diagnostic::NoTrainerAssigned);
        assert_eq!(summary[0].trainer_name, None);
    }

    #[test]
    fn test_no_availability_beats_end_reached() {
        let request = request_with(
            vec![CurriculumModule::new("M1", 1, 6)],
            vec![TrainerAssignment::new("M1", Trainer::new("T1"))],
        );
        let summary = build_summary(&request, &[tally(0, 0)], true);

        assert_eq!(summary[0].diagnostic, Diagnostic::NoRegisteredAvailability);
    }

    #[test]
    fn test_availability_ends_early() {
        // Last declared window on the 7th, class ends on the 10th
        let request = request_with(
            vec![CurriculumModule::new("M1", 1, 20)],
            vec![TrainerAssignment::new(
                "M1",
                Trainer::new("T1").with_window(d(7), t(9), t(17)),
            )],
        );
        let summary = build_summary(&request, &[tally(6, 6)], true);

        assert_eq!(
            summary[0].diagnostic,
            Diagnostic::AvailabilityEndsEarly {
                last_available: d(7)
            }
        );
    }

    #[test]
    fn test_end_reached_requires_progress() {
        let modules = vec![CurriculumModule::new("M1", 1, 20)];
        let assignments = vec![TrainerAssignment::new(
            "M1",
            Trainer::new("T1").with_window(d(10), t(9), t(17)),
        )];

        // Placed hours this run: calendar ran out
        let request = request_with(modules, assignments);
        let summary = build_summary(&request, &[tally(6, 6)], true);
        assert_eq!(summary[0].diagnostic, Diagnostic::ClassEndReached);

        // Nothing ever placed: the calendar is not the story
        let summary = build_summary(&request, &[tally(0, 0)], true);
        assert_eq!(summary[0].diagnostic, Diagnostic::NoCompatibleSlot);
    }

    #[test]
    fn test_stats() {
        let outcome = ScheduleOutcome {
            sessions: vec![
                ScheduledSession::new("C1", "M1", "T1", "R1", d(6), t(9), t(12)),
                ScheduledSession::new("C1", "M1", "T1", "R1", d(6), t(13), t(16)),
                ScheduledSession::new("C1", "M2", "T1", "R2", d(7), t(9), t(11)),
            ],
            summary: vec![
                SummaryEntry {
                    module_id: "M1".into(),
                    module_name: String::new(),
                    trainer_name: Some("T1".into()),
                    required_hours: 6,
                    scheduled_hours: 6,
                    completed: true,
                    diagnostic: Diagnostic::Completed,
                },
                SummaryEntry {
                    module_id: "M2".into(),
                    module_name: String::new(),
                    trainer_name: Some("T1".into()),
                    required_hours: 10,
                    scheduled_hours: 2,
                    completed: false,
                    diagnostic: Diagnostic::ClassEndReached,
                },
            ],
        };

        let stats = ScheduleStats::calculate(&outcome);
        assert_eq!(stats.module_count, 2);
        assert_eq!(stats.modules_completed, 1);
        assert_eq!(stats.required_hours_total, 16);
        assert_eq!(stats.scheduled_hours_total, 8);
        assert!((stats.completion_rate - 0.5).abs() < 1e-10);
        assert_eq!(stats.hours_by_room["R1"], 6);
        assert_eq!(stats.hours_by_room["R2"], 2);
    }

    #[test]
    fn test_stats_empty() {
        let outcome = ScheduleOutcome {
            sessions: Vec::new(),
            summary: Vec::new(),
        };
        let stats = ScheduleStats::calculate(&outcome);
        assert_eq!(stats.module_count, 0);
        assert!((stats.completion_rate - 1.0).abs() < 1e-10);
    }
}
