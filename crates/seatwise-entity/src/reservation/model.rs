//! Reservation entity model.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::seat::model::floor_for_seat_id;

use super::status::ReservationStatus;

/// A time-bounded claim on a seat by a user.
///
/// Invariant: per seat, no two reservations with live status overlap.
/// Enforced at creation by the conflict checker and backed by a database
/// exclusion constraint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Reservation {
    /// Unique reservation identifier.
    pub id: i64,
    /// Owning user.
    pub user_id: i64,
    /// Reserved seat.
    pub seat_id: i64,
    /// Start of the booked interval (wall-clock).
    pub start_time: NaiveDateTime,
    /// End of the booked interval (wall-clock, exclusive).
    pub end_time: NaiveDateTime,
    /// Lifecycle status.
    pub status: ReservationStatus,
    /// Floor of the seat at creation time (denormalized).
    pub floor: i32,
    /// Calendar date of the booking.
    pub date: NaiveDate,
    /// When the reservation row was created.
    pub created_at: DateTime<Utc>,
    /// When the reservation row was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Reservation {
    /// Check if this reservation counts against seat availability.
    pub fn is_live(&self) -> bool {
        self.status.is_live()
    }

    /// Booked duration in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}

/// Data required to insert a new reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReservation {
    /// Owning user.
    pub user_id: i64,
    /// Reserved seat.
    pub seat_id: i64,
    /// Start of the booked interval.
    pub start_time: NaiveDateTime,
    /// End of the booked interval.
    pub end_time: NaiveDateTime,
    /// Initial status.
    pub status: ReservationStatus,
    /// Floor of the seat.
    pub floor: i32,
    /// Calendar date of the booking.
    pub date: NaiveDate,
}

impl NewReservation {
    /// Build an active draft for the given user/seat/interval, deriving
    /// the floor from the seat identifier.
    pub fn draft(
        user_id: i64,
        seat_id: i64,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
        date: NaiveDate,
    ) -> Self {
        Self {
            user_id,
            seat_id,
            start_time,
            end_time,
            status: ReservationStatus::Active,
            floor: floor_for_seat_id(seat_id),
            date,
        }
    }
}
