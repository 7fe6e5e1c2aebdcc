//! Reservation repository implementation.
//!
//! The overlap test is inclusive on both endpoints (`start_time <= $end
//! AND end_time >= $start`): touching intervals count as conflicting.
//! Cancelled reservations are excluded from every availability-relevant
//! query.

use chrono::{NaiveDate, NaiveDateTime};
use sqlx::PgPool;

use seatwise_core::error::{AppError, ErrorKind};
use seatwise_core::result::AppResult;
use seatwise_entity::reservation::{NewReservation, Reservation, ReservationStatus};

/// PostgreSQL error code for exclusion constraint violations.
const EXCLUSION_VIOLATION: &str = "23P01";

/// Repository for reservation CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    /// Create a new reservation repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new reservation.
    ///
    /// A violation of the live-overlap exclusion constraint is reported
    /// as `SeatAlreadyBooked`, so concurrent creations that slip past the
    /// in-process conflict check still surface as a user error.
    pub async fn create(&self, new: &NewReservation) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>(
            "INSERT INTO reservations (user_id, seat_id, start_time, end_time, status, floor, date) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(new.user_id)
        .bind(new.seat_id)
        .bind(new.start_time)
        .bind(new.end_time)
        .bind(new.status)
        .bind(new.floor)
        .bind(new.date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_exclusion_violation(&e) {
                AppError::seat_already_booked(
                    "This seat is already booked for the selected time",
                )
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to create reservation", e)
            }
        })
    }

    /// Find a reservation by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find reservation", e)
            })
    }

    /// List all reservations of a user, newest first.
    pub async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<Reservation>> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE user_id = $1 ORDER BY start_time DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list reservations by user", e)
        })
    }

    /// List all reservations on a seat, newest first.
    pub async fn find_by_seat(&self, seat_id: i64) -> AppResult<Vec<Reservation>> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE seat_id = $1 ORDER BY start_time DESC",
        )
        .bind(seat_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list reservations by seat", e)
        })
    }

    /// List reservations on a seat whose start time falls in `[start, end)`.
    pub async fn find_by_seat_within(
        &self,
        seat_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<Reservation>> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations \
             WHERE seat_id = $1 AND start_time >= $2 AND start_time < $3 \
             ORDER BY start_time",
        )
        .bind(seat_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list reservations in range", e)
        })
    }

    /// List non-cancelled reservations on the seat overlapping the
    /// proposed interval, endpoints inclusive.
    ///
    /// The conflict checker re-verifies each returned row against the
    /// in-process overlap predicate, so this query may only over-fetch.
    pub async fn find_overlapping(
        &self,
        seat_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<Reservation>> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations \
             WHERE seat_id = $1 AND status <> 'cancelled' \
               AND start_time <= $3 AND end_time >= $2",
        )
        .bind(seat_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to check for overlap", e)
        })
    }

    /// List non-cancelled reservations on a floor for a date that overlap
    /// `[start, end)` (strict comparison, matching the browsing query).
    pub async fn find_by_floor_date_and_time(
        &self,
        floor: i32,
        date: NaiveDate,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<Reservation>> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations \
             WHERE floor = $1 AND date = $2 AND status <> 'cancelled' \
               AND start_time < $4 AND end_time > $3",
        )
        .bind(floor)
        .bind(date)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list reservations by floor", e)
        })
    }

    /// Update the status of a reservation.
    pub async fn set_status(
        &self,
        id: i64,
        status: ReservationStatus,
    ) -> AppResult<Option<Reservation>> {
        sqlx::query_as::<_, Reservation>(
            "UPDATE reservations SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update reservation status", e)
        })
    }
}

fn is_exclusion_violation(err: &sqlx::Error) -> bool {
    matches!(
        err.as_database_error().and_then(|d| d.code()),
        Some(code) if code == EXCLUSION_VIOLATION
    )
}
