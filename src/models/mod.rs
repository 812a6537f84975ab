//! Exam scheduling domain models.
//!
//! Provides the core data types for exam timetabling: the exam itself and
//! the reference entities it points at (module, teacher, room), plus the
//! time slot type every overlap comparison is built on.
//!
//! # Relationships
//!
//! | From | To | Kind |
//! |------|----|------|
//! | Exam | Module | many-to-one (`module_id`) |
//! | Exam | Room | many-to-many (`room_ids`) |
//! | Exam | Teacher | many-to-many (`surveillant_ids`, proctoring) |
//! | Module | Teacher | many-to-one (`teacher_id`, the owner) |
//!
//! All identifiers are server-assigned strings; this crate never mints ids
//! and never mutates the entities it is handed.

mod exam;
mod module;
mod room;
mod slot;
mod teacher;

pub use exam::{Exam, ExamType};
pub use module::Module;
pub use room::{Room, RoomType};
pub use slot::{SlotError, TimeSlot, MINUTES_PER_DAY};
pub use teacher::Teacher;
