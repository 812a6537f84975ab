//! Teacher model.
//!
//! Teachers play two roles in scheduling: module owner (the one teacher
//! responsible for a module) and surveillant-pool member (candidate
//! proctor for any exam).

use serde::{Deserialize, Serialize};

/// A teacher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
}

impl Teacher {
    /// Creates a new teacher.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
