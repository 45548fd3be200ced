//! Problem-instance validation.
//!
//! Checks the integrity of a [`ProblemInstance`] before a search starts.
//! Detects:
//! - No active days, no teachers, no rooms
//! - An inverted or empty working window
//! - A teacher with zero availability across the active days
//! - Duplicate teacher or room names
//! - Zero session demand or zero session duration
//!
//! Validation runs once at the search boundary and is rejected
//! synchronously before any randomness is consumed, so failures are
//! reproducible and cheap. In-search placement failures are not errors;
//! they surface as lower fitness only.

use std::collections::HashSet;

use crate::models::ProblemInstance;

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
    /// No active day was selected.
    NoActiveDays,
    /// `start_hour >= end_hour`.
    InvalidHourWindow,
    /// The instance has no teachers.
    NoTeachers,
    /// The instance has no rooms.
    NoRooms,
    /// A teacher has no available hour on any active day.
    TeacherUnavailable,
    /// Two teachers or two rooms share a name.
    DuplicateName,
    /// A teacher requires zero sessions or zero-hour sessions.
    InvalidDemand,
    /// Search parameters describe an empty search.
    InvalidSearchParams,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a problem instance.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_instance(instance: &ProblemInstance) -> ValidationResult {
    let mut errors = Vec::new();

    if instance.days.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoActiveDays,
            "no active days selected",
        ));
    }

    if instance.start_hour >= instance.end_hour {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidHourWindow,
            format!(
                "working window [{}, {}) is empty",
                instance.start_hour, instance.end_hour
            ),
        ));
    }

    if instance.teachers.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoTeachers,
            "no teachers defined",
        ));
    }

    if instance.rooms.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoRooms,
            "no rooms defined",
        ));
    }

    let mut teacher_names = HashSet::new();
    for teacher in &instance.teachers {
        if !teacher_names.insert(teacher.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("duplicate teacher name: {}", teacher.name),
            ));
        }

        if teacher.required_sessions == 0 || teacher.session_duration == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDemand,
                format!(
                    "teacher '{}' has zero session demand or duration",
                    teacher.name
                ),
            ));
        }

        if !instance.days.is_empty() && teacher.available_days(&instance.days).is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::TeacherUnavailable,
                format!(
                    "teacher '{}' has no availability on the active days",
                    teacher.name
                ),
            ));
        }
    }

    let mut room_names = HashSet::new();
    for room in &instance.rooms {
        if !room_names.insert(room.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateName,
                format!("duplicate room name: {}", room.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
