//! Free time-slot value object.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A computed free interval for booking.
///
/// Produced by the availability engine and returned to callers; never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Start of the free interval.
    pub start: NaiveDateTime,
    /// End of the free interval (exclusive).
    pub end: NaiveDateTime,
}

impl TimeSlot {
    /// Create a new time slot.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Length of the slot in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}
