//! Per-module scheduling summary.
//!
//! After a run, every curriculum module gets one entry stating how many
//! of its required hours were placed and, for shortfalls, a diagnostic
//! explaining the most actionable cause. Staffing problems are reported
//! before soft scheduling-conflict explanations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Why a module ended a run in the state it did.
///
/// Detection follows a fixed priority: structural staffing gaps first,
/// then availability gaps, then exhausted class time, then the generic
/// conflict explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diagnostic {
    /// All required hours were scheduled.
    Completed,
    /// No trainer is assigned to the module.
    NoTrainerAssigned,
    /// The assigned trainer has no availability windows at all.
    NoRegisteredAvailability,
    /// The trainer's availability ends before the class does.
    AvailabilityEndsEarly {
        /// Latest date with a declared window.
        last_available: NaiveDate,
    },
    /// The class end date was reached with hours still remaining.
    ClassEndReached,
    /// No slot satisfied all constraints.
    NoCompatibleSlot,
}

impl Diagnostic {
    /// Human-readable explanation for reports.
    pub fn message(&self) -> String {
        match self {
            Diagnostic::Completed => "all required hours scheduled.".to_string(),
            Diagnostic::NoTrainerAssigned => "module has no assigned trainer.".to_string(),
            Diagnostic::NoRegisteredAvailability => {
                "trainer has no registered availability.".to_string()
            }
            Diagnostic::AvailabilityEndsEarly { last_available } => {
                format!("trainer has no availability windows beyond {last_available}.")
            }
            Diagnostic::ClassEndReached => {
                "class end date reached before module completion.".to_string()
            }
            Diagnostic::NoCompatibleSlot => {
                "no compatible slot found; check schedule conflicts, room compatibility, \
                 or holidays."
                    .to_string()
            }
        }
    }
}

/// One summary line per curriculum module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryEntry {
    /// Module identifier.
    pub module_id: String,
    /// Module name.
    pub module_name: String,
    /// Assigned trainer's name, if any trainer is assigned.
    pub trainer_name: Option<String>,
    /// Hours the module requires in total.
    pub required_hours: i64,
    /// Hours scheduled so far (prior progress plus this run).
    pub scheduled_hours: i64,
    /// Whether the required hours are fully covered.
    pub completed: bool,
    /// Shortfall explanation (or the done marker).
    pub diagnostic: Diagnostic,
}

impl SummaryEntry {
    /// Rendered diagnostic message.
    pub fn message(&self) -> String {
        self.diagnostic.message()
    }
}
