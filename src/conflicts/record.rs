//! Conflict record model.
//!
//! The structured output of a conflict check. Records are ephemeral —
//! computed per query, shown to the scheduler, never persisted.

use serde::{Deserialize, Serialize};

/// The resource dimension a conflict was detected on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    /// A requested room is already occupied by an overlapping exam.
    Room,
    /// The module owner already has an overlapping exam of an owned module.
    Teacher,
    /// A requested surveillant already proctors an overlapping exam.
    Surveillant,
}

/// A detected scheduling collision with one existing exam.
///
/// An exam contributes at most one record per check, even when it shares
/// several resources with the candidate — the shared resources are listed
/// together in `resources`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConflictRecord {
    /// Dimension the collision was detected on.
    pub kind: ConflictKind,
    /// Identifier of the colliding existing exam.
    pub exam_id: String,
    /// Label of the colliding exam (its module name, or a placeholder
    /// when the module cannot be resolved).
    pub exam_label: String,
    /// When the colliding exam takes place, e.g. `"2024-05-10 at 09:00"`.
    pub time: String,
    /// Names of the contested resources: room names, the owner teacher's
    /// name, or surveillant names depending on `kind`.
    pub resources: Vec<String>,
}

impl ConflictRecord {
    fn new(
        kind: ConflictKind,
        exam_id: impl Into<String>,
        exam_label: impl Into<String>,
        time: impl Into<String>,
        resources: Vec<String>,
    ) -> Self {
        Self {
            kind,
            exam_id: exam_id.into(),
            exam_label: exam_label.into(),
            time: time.into(),
            resources,
        }
    }

    /// Creates a room conflict record.
    pub fn room(
        exam_id: impl Into<String>,
        exam_label: impl Into<String>,
        time: impl Into<String>,
        rooms: Vec<String>,
    ) -> Self {
        Self::new(ConflictKind::Room, exam_id, exam_label, time, rooms)
    }

    /// Creates a module-owner conflict record.
    pub fn teacher(
        exam_id: impl Into<String>,
        exam_label: impl Into<String>,
        time: impl Into<String>,
        teachers: Vec<String>,
    ) -> Self {
        Self::new(ConflictKind::Teacher, exam_id, exam_label, time, teachers)
    }

    /// Creates a surveillant conflict record.
    pub fn surveillant(
        exam_id: impl Into<String>,
        exam_label: impl Into<String>,
        time: impl Into<String>,
        surveillants: Vec<String>,
    ) -> Self {
        Self::new(ConflictKind::Surveillant, exam_id, exam_label, time, surveillants)
    }
}
