//! Input validation for schedule snapshots.
//!
//! Checks structural integrity of an exam snapshot before the conflict
//! engine runs. Detects:
//! - Duplicate IDs
//! - Dangling module, room, teacher, and surveillant references
//! - Slots that run past midnight (the overlap predicate is day-local)
//!
//! The conflict engine tolerates all of these (dangling references fall
//! back to placeholder labels), so validation is where a client surfaces
//! them as actionable errors instead.

use crate::models::{Exam, Module, Room, Teacher};
use std::collections::HashSet;

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
    /// Two entities share the same ID.
    DuplicateId,
    /// An exam references a module that doesn't exist.
    UnknownModule,
    /// An exam references a room that doesn't exist.
    UnknownRoom,
    /// An exam or module references a teacher that doesn't exist.
    UnknownTeacher,
    /// An exam's slot runs past midnight.
    SlotPastMidnight,
    /// An exam's slot has zero duration.
    EmptySlot,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a schedule snapshot.
///
/// Checks:
/// 1. No duplicate exam, teacher, module, or room IDs
/// 2. Every exam's module reference points to an existing module
/// 3. Every exam's room references point to existing rooms
/// 4. Every exam's surveillant references point to existing teachers
/// 5. Every module's owner reference points to an existing teacher
/// 6. Every exam slot has a positive duration and stays within its day
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_snapshot(
    exams: &[Exam],
    teachers: &[Teacher],
    modules: &[Module],
    rooms: &[Room],
) -> ValidationResult {
    let mut errors = Vec::new();

    // Collect reference-list IDs, flagging duplicates as we go
    let mut teacher_ids = HashSet::new();
    for t in teachers {
        if !teacher_ids.insert(t.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate teacher ID: {}", t.id),
            ));
        }
    }

    let mut module_ids = HashSet::new();
    for m in modules {
        if !module_ids.insert(m.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate module ID: {}", m.id),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for r in rooms {
        if !room_ids.insert(r.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {}", r.id),
            ));
        }
    }

    // Module owners must exist
    for m in modules {
        if !teacher_ids.contains(m.teacher_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownTeacher,
                format!("Module '{}' references unknown teacher '{}'", m.id, m.teacher_id),
            ));
        }
    }

    // Exam IDs and references
    let mut exam_ids = HashSet::new();
    for exam in exams {
        if !exam_ids.insert(exam.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate exam ID: {}", exam.id),
            ));
        }

        if !module_ids.contains(exam.module_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownModule,
                format!("Exam '{}' references unknown module '{}'", exam.id, exam.module_id),
            ));
        }

        for room_id in &exam.room_ids {
            if !room_ids.contains(room_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownRoom,
                    format!("Exam '{}' references unknown room '{}'", exam.id, room_id),
                ));
            }
        }

        for teacher_id in &exam.surveillant_ids {
            if !teacher_ids.contains(teacher_id.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownTeacher,
                    format!("Exam '{}' references unknown surveillant '{}'", exam.id, teacher_id),
                ));
            }
        }

        if exam.slot.duration_min == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptySlot,
                format!("Exam '{}' has a zero-duration slot", exam.id),
            ));
        }

        if exam.slot.crosses_midnight() {
            errors.push(ValidationError::new(
                ValidationErrorKind::SlotPastMidnight,
                format!(
                    "Exam '{}' starts at {} and runs past midnight",
                    exam.id,
                    exam.slot.label()
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
