//! Exam model.
//!
//! An exam is the schedulable unit: one module examined in a time slot,
//! possibly spread over several rooms, supervised by zero or more
//! surveillants, and sat by one or more student groups.

use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// A scheduled (or candidate) exam session.
///
/// Room, surveillant, and group references are stored as id lists; the
/// referenced entities live in the snapshot the caller supplies alongside
/// the exam list. Lists default to empty — an exam with no rooms or no
/// surveillants assigned yet is a normal intermediate state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    /// Unique exam identifier (server-assigned).
    pub id: String,
    /// When the exam takes place.
    pub slot: TimeSlot,
    /// Module being examined.
    pub module_id: String,
    /// Rooms the exam occupies. Empty = not yet placed.
    pub room_ids: Vec<String>,
    /// Teachers supervising the session. Empty = not yet assigned.
    pub surveillant_ids: Vec<String>,
    /// Student groups sitting the exam.
    pub group_ids: Vec<String>,
    /// Free-form scheduling notes.
    pub notes: String,
    /// Session category.
    pub exam_type: ExamType,
}

/// Exam session category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ExamType {
    /// Written paper.
    #[default]
    Written,
    /// Oral examination.
    Oral,
    /// Practical / lab session.
    Practical,
    /// Domain-specific category.
    Custom(String),
}

impl Exam {
    /// Creates a new exam for a module in a given slot.
    pub fn new(id: impl Into<String>, module_id: impl Into<String>, slot: TimeSlot) -> Self {
        Self {
            id: id.into(),
            slot,
            module_id: module_id.into(),
            room_ids: Vec::new(),
            surveillant_ids: Vec::new(),
            group_ids: Vec::new(),
            notes: String::new(),
            exam_type: ExamType::default(),
        }
    }

    /// Adds a room.
    pub fn with_room(mut self, room_id: impl Into<String>) -> Self {
        self.room_ids.push(room_id.into());
        self
    }

    /// Sets the full room list.
    pub fn with_rooms(mut self, room_ids: Vec<String>) -> Self {
        self.room_ids = room_ids;
        self
    }

    /// Adds a surveillant.
    pub fn with_surveillant(mut self, teacher_id: impl Into<String>) -> Self {
        self.surveillant_ids.push(teacher_id.into());
        self
    }

    /// Sets the full surveillant list.
    pub fn with_surveillants(mut self, teacher_ids: Vec<String>) -> Self {
        self.surveillant_ids = teacher_ids;
        self
    }

    /// Adds a student group.
    pub fn with_group(mut self, group_id: impl Into<String>) -> Self {
        self.group_ids.push(group_id.into());
        self
    }

    /// Sets the notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Sets the session category.
    pub fn with_type(mut self, exam_type: ExamType) -> Self {
        self.exam_type = exam_type;
        self
    }

    /// Whether any room is assigned.
    pub fn has_rooms(&self) -> bool {
        !self.room_ids.is_empty()
    }

    /// Whether any surveillant is assigned.
    pub fn has_surveillants(&self) -> bool {
        !self.surveillant_ids.is_empty()
    }
}
