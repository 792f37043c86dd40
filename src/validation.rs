//! Input validation for scheduling runs.
//!
//! Checks structural integrity of a request before scheduling. Detects:
//! - Duplicate IDs (modules, rooms, assignments)
//! - Inverted class date range
//! - Non-positive module hour quotas
//! - Assignments referencing unknown modules
//! - Inverted availability windows
//!
//! All problems are collected and returned together. Validation is about
//! malformed input only; a well-formed request that cannot be fully
//! scheduled passes here and is explained by the run summary instead.

use std::collections::HashSet;

use crate::scheduler::ScheduleRequest;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID, or a module has two assignments.
    DuplicateId,
    /// Class end date precedes its start date.
    InvalidDateRange,
    /// A module requires zero or negative hours.
    NonPositiveHours,
    /// An assignment references a module that doesn't exist.
    UnknownModuleReference,
    /// An availability window ends at or before its start.
    InvalidAvailabilityWindow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a scheduling request.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with every detected issue.
pub fn validate_request(request: &ScheduleRequest) -> ValidationResult {
    let mut errors = Vec::new();

    if request.cohort.end_date < request.cohort.start_date {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDateRange,
            format!(
                "Class '{}' ends {} before it starts {}",
                request.cohort.id, request.cohort.end_date, request.cohort.start_date
            ),
        ));
    }

    let mut module_ids = HashSet::new();
    for module in &request.modules {
        if !module_ids.insert(module.module_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate module ID: {}", module.module_id),
            ));
        }
        if module.required_hours <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveHours,
                format!(
                    "Module '{}' requires {} hours",
                    module.module_id, module.required_hours
                ),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for room in &request.rooms {
        if !room_ids.insert(room.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", room.id),
            ));
        }
    }

    let mut assigned_modules = HashSet::new();
    for assignment in &request.assignments {
        if !assigned_modules.insert(assignment.module_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!(
                    "Module '{}' has more than one trainer assignment",
                    assignment.module_id
                ),
            ));
        }
        if !module_ids.contains(assignment.module_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownModuleReference,
                format!(
                    "Assignment references unknown module '{}'",
                    assignment.module_id
                ),
            ));
        }
        for window in &assignment.trainer.availability {
            if window.end <= window.start {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidAvailabilityWindow,
                    format!(
                        "Trainer '{}' has an empty window on {} ({}..{})",
                        assignment.trainer.id, window.date, window.start, window.end
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
