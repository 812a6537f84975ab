//! Time slot model.
//!
//! A slot places an exam on a calendar day: date, start time, and duration
//! in minutes. Slots on different days never overlap; same-day slots are
//! compared as half-open minute intervals.
//!
//! # Time Model
//! Slots are day-local. A slot whose duration would run past midnight is
//! not modeled — the overlap predicate assumes both intervals end on the
//! day they start. `validation::validate_snapshot` rejects such slots
//! before they reach the conflict engine.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes in a day; a slot must end at or before this mark.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Error constructing a [`TimeSlot`] from wire-level strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// Date string is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),
    /// Start-time string is not a valid `HH:MM` 24-hour time.
    #[error("invalid start time '{0}': expected HH:MM")]
    InvalidTime(String),
    /// Duration is zero; a slot must span at least one minute.
    #[error("invalid duration: must be a positive number of minutes")]
    InvalidDuration,
}

/// A scheduling interval: calendar day, start time, duration.
///
/// Represents the half-open interval `[start, start + duration)` on `date`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSlot {
    /// Calendar day the slot falls on.
    pub date: NaiveDate,
    /// Start time of day.
    pub start: NaiveTime,
    /// Duration in minutes (positive).
    pub duration_min: u32,
}

impl TimeSlot {
    /// Creates a new slot.
    pub fn new(date: NaiveDate, start: NaiveTime, duration_min: u32) -> Self {
        Self {
            date,
            start,
            duration_min,
        }
    }

    /// Parses a slot from an ISO date string and an `HH:MM` start time.
    ///
    /// This is the validation boundary for wire-level input: callers that
    /// receive dates and times as strings go through here; the conflict
    /// engine itself only ever sees well-formed slots.
    pub fn parse(date: &str, start: &str, duration_min: u32) -> Result<Self, SlotError> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| SlotError::InvalidDate(date.to_string()))?;
        let start = NaiveTime::parse_from_str(start, "%H:%M")
            .map_err(|_| SlotError::InvalidTime(start.to_string()))?;
        if duration_min == 0 {
            return Err(SlotError::InvalidDuration);
        }
        Ok(Self::new(date, start, duration_min))
    }

    /// Start time as minutes since midnight.
    #[inline]
    pub fn start_min(&self) -> u32 {
        self.start.hour() * 60 + self.start.minute()
    }

    /// End time as minutes since midnight (exclusive).
    #[inline]
    pub fn end_min(&self) -> u32 {
        self.start_min() + self.duration_min
    }

    /// Whether this slot runs past midnight (unsupported by the engine).
    #[inline]
    pub fn crosses_midnight(&self) -> bool {
        self.end_min() > MINUTES_PER_DAY
    }

    /// Whether two slots overlap.
    ///
    /// Slots on different dates never overlap. Same-date slots overlap iff
    /// their half-open minute intervals intersect — a slot ending at 10:00
    /// does not overlap one starting at 10:00.
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.date != other.date {
            return false;
        }
        self.start_min() < other.end_min() && other.start_min() < self.end_min()
    }

    /// Human-readable label, e.g. `"2024-05-10 at 09:00"`.
    pub fn label(&self) -> String {
        format!("{} at {}", self.date.format("%Y-%m-%d"), self.start.format("%H:%M"))
    }
}
