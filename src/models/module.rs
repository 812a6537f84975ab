//! Course module model.
//!
//! A module is the teaching unit an exam examines. Each module has exactly
//! one responsible teacher — the owner whose personal schedule a
//! same-time exam of another owned module would conflict with.

use serde::{Deserialize, Serialize};

/// A course module.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    /// Unique module identifier.
    pub id: String,
    /// Human-readable name (used to label conflicts).
    pub name: String,
    /// Administrative course code (e.g. "MATH-201").
    pub code: String,
    /// Responsible teacher (the module owner).
    pub teacher_id: String,
    /// Academic level the module belongs to.
    pub level_id: String,
    /// Credit weight.
    pub credits: u32,
}

impl Module {
    /// Creates a new module owned by a teacher.
    pub fn new(id: impl Into<String>, teacher_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            code: String::new(),
            teacher_id: teacher_id.into(),
            level_id: String::new(),
            credits: 0,
        }
    }

    /// Sets the module name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the course code.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the academic level.
    pub fn with_level(mut self, level_id: impl Into<String>) -> Self {
        self.level_id = level_id.into();
        self
    }

    /// Sets the credit weight.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }
}
