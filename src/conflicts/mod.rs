//! Conflict detection and surveillant assignment.
//!
//! Provides the scheduling checks run before an exam is created or moved:
//! room double-booking, module-owner double-booking, and surveillant
//! double-booking — plus the availability query and greedy auto-assignment
//! built on top of them.
//!
//! # Algorithm
//!
//! Every check reduces to the same primitive: the half-open time-slot
//! overlap predicate ([`crate::models::TimeSlot::overlaps`]). A candidate
//! slot is compared against each existing exam (optionally skipping one —
//! the exam being edited must not conflict with itself); overlapping exams
//! are then filtered by the resource dimension under test.
//!
//! Checks are advisory, not transactional: they evaluate the snapshot they
//! are given, and a concurrent writer can still introduce a collision
//! between check and commit.
//!
//! # References
//!
//! - Carter & Laporte (1996), "Recent Developments in Practical
//!   Examination Timetabling"
//! - Qu et al. (2009), "A Survey of Search Methodologies and Automated
//!   System Development for Examination Timetabling"

mod engine;
mod record;

pub use engine::ConflictEngine;
pub use record::{ConflictKind, ConflictRecord};
