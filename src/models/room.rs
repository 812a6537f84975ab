//! Room model.
//!
//! Rooms are the physical resources exams occupy. A single exam may spread
//! over several rooms; a room hosts at most one exam at a time.

use serde::{Deserialize, Serialize};

/// An examination room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    /// Unique room identifier.
    pub id: String,
    /// Human-readable name (used to label conflicts).
    pub name: String,
    /// Seating capacity.
    pub capacity: i32,
    /// Room classification.
    pub room_type: RoomType,
}

/// Room type classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RoomType {
    /// Standard classroom.
    #[default]
    Classroom,
    /// Large lecture hall.
    Amphitheater,
    /// Lab room (practical exams).
    Laboratory,
    /// Domain-specific type.
    Custom(String),
}

impl Room {
    /// Creates a new classroom.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            capacity: 0,
            room_type: RoomType::default(),
        }
    }

    /// Sets the room name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the seating capacity.
    pub fn with_capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the room type.
    pub fn with_type(mut self, room_type: RoomType) -> Self {
        self.room_type = room_type;
        self
    }
}
