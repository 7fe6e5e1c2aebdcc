//! Seat entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::SeatStatus;

/// A physical bookable seat in the library.
///
/// Seats are provisioned by seeding/admin tooling and never deleted;
/// decommissioning is expressed through the `blocked` flag.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Seat {
    /// Unique seat identifier.
    pub id: i64,
    /// Human-readable seat label (e.g. "A-17").
    pub number: String,
    /// Location description (wing, room, desk row).
    pub location: String,
    /// Display status.
    pub status: SeatStatus,
    /// Floor the seat is on (>= 0).
    pub floor: i32,
    /// Administrative override; blocked seats cannot be booked.
    pub blocked: bool,
    /// When the seat was created.
    pub created_at: DateTime<Utc>,
    /// When the seat was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Derive the floor for a seat from its identifier.
///
/// Seats 1–100 are on the ground floor, 101–150 on the first floor,
/// everything above on the second.
pub fn floor_for_seat_id(seat_id: i64) -> i32 {
    if seat_id <= 100 {
        0
    } else if seat_id <= 150 {
        1
    } else {
        2
    }
}
