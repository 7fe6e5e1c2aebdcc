//! Reservation lifecycle management — create, cancel, repeat, list,
//! statistics.

use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::info;

use seatwise_auth::RbacEnforcer;
use seatwise_core::config::booking::BookingConfig;
use seatwise_core::error::AppError;
use seatwise_core::result::AppResult;
use seatwise_database::repositories::{ReservationRepository, SeatRepository, UserRepository};
use seatwise_entity::reservation::{NewReservation, Reservation, ReservationStatus};

use crate::context::RequestContext;

use super::conflict::ConflictChecker;
use super::locks::SeatLocks;
use super::statistics::{compute_statistics, UserStatistics};

/// Request to create a new reservation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservation {
    /// Seat to book.
    pub seat_id: i64,
    /// Start of the booked interval.
    pub start_time: NaiveDateTime,
    /// End of the booked interval (must be after the start).
    pub end_time: NaiveDateTime,
    /// Calendar date of the booking.
    pub date: NaiveDate,
}

/// Orchestrates the reservation lifecycle.
#[derive(Debug, Clone)]
pub struct ReservationService {
    /// Reservation repository.
    reservations: Arc<ReservationRepository>,
    /// Seat repository.
    seats: Arc<SeatRepository>,
    /// User repository.
    users: Arc<UserRepository>,
    /// Conflict checker.
    conflicts: ConflictChecker,
    /// Per-seat locks serializing check+insert.
    locks: Arc<SeatLocks>,
    /// Authorization policy.
    rbac: RbacEnforcer,
    /// Booking settings (repeat duration).
    config: BookingConfig,
}

impl ReservationService {
    /// Creates a new reservation service.
    pub fn new(
        reservations: Arc<ReservationRepository>,
        seats: Arc<SeatRepository>,
        users: Arc<UserRepository>,
        locks: Arc<SeatLocks>,
        rbac: RbacEnforcer,
        config: BookingConfig,
    ) -> Self {
        Self {
            conflicts: ConflictChecker::new(reservations.clone()),
            reservations,
            seats,
            users,
            locks,
            rbac,
            config,
        }
    }

    /// Creates a reservation for the calling user.
    ///
    /// Staff roles are refused: librarians and admins do not hold
    /// personal bookings. The conflict check and insert run under the
    /// seat's lock.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateReservation,
    ) -> AppResult<Reservation> {
        self.rbac.require_can_book(ctx.role)?;
        validate_interval(req.start_time, req.end_time)?;

        let seat = self
            .seats
            .find_by_id(req.seat_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Seat {} not found", req.seat_id)))?;
        if seat.blocked {
            return Err(AppError::invalid_input(format!(
                "Seat {} is blocked and cannot be booked",
                seat.id
            )));
        }

        let lock = self.locks.lock_for(seat.id);
        let _guard = lock.lock().await;

        self.conflicts
            .ensure_free(seat.id, req.start_time, req.end_time)
            .await?;

        let draft = NewReservation::draft(
            ctx.user_id,
            seat.id,
            req.start_time,
            req.end_time,
            req.date,
        );
        let reservation = self.reservations.create(&draft).await?;

        info!(
            reservation_id = reservation.id,
            user_id = ctx.user_id,
            seat_id = seat.id,
            "Reservation created"
        );
        Ok(reservation)
    }

    /// Cancels a reservation through the owner path.
    ///
    /// Permitted for staff or the owning user. Cancelling an already
    /// cancelled reservation fails with `AlreadyCancelled`.
    pub async fn cancel(&self, ctx: &RequestContext, id: i64) -> AppResult<Reservation> {
        let reservation = self.get(id).await?;
        ensure_not_cancelled(&reservation)?;
        self.rbac
            .require_can_cancel(ctx.user_id, ctx.role, &reservation)?;

        let cancelled = self
            .reservations
            .set_status(id, ReservationStatus::Cancelled)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Reservation {id} not found")))?;

        info!(reservation_id = id, user_id = ctx.user_id, "Reservation cancelled");
        Ok(cancelled)
    }

    /// Cancels a reservation through the privileged staff path.
    ///
    /// Re-cancelling an already cancelled reservation is a no-op
    /// success, unlike the owner path.
    pub async fn cancel_for_admin(&self, ctx: &RequestContext, id: i64) -> AppResult<Reservation> {
        self.rbac.require_staff(ctx.role)?;

        let reservation = self.get(id).await?;
        let cancelled = self
            .reservations
            .set_status(reservation.id, ReservationStatus::Cancelled)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Reservation {id} not found")))?;

        info!(reservation_id = id, user_id = ctx.user_id, "Reservation cancelled by staff");
        Ok(cancelled)
    }

    /// Repeats the user's most recent live reservation: same seat, a
    /// fresh interval anchored at now with the configured duration,
    /// today's date.
    pub async fn repeat_last(&self, ctx: &RequestContext, user_id: i64) -> AppResult<Reservation> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {user_id} not found")))?;

        let history = self.reservations.find_by_user(user.id).await?;
        let last = latest_live(&history)
            .cloned()
            .ok_or_else(|| {
                AppError::no_prior_reservation("You have no past reservations to repeat")
            })?;

        let start = Local::now().naive_local();
        let end = start + Duration::hours(self.config.repeat_duration_hours);

        let lock = self.locks.lock_for(last.seat_id);
        let _guard = lock.lock().await;

        self.conflicts.ensure_free(last.seat_id, start, end).await?;

        let draft =
            NewReservation::draft(user.id, last.seat_id, start, end, Local::now().date_naive());
        let reservation = self.reservations.create(&draft).await?;

        info!(
            reservation_id = reservation.id,
            source_reservation_id = last.id,
            user_id = ctx.user_id,
            "Reservation repeated"
        );
        Ok(reservation)
    }

    /// Lists reservations by owner or by seat.
    ///
    /// With both filters absent an empty list is returned rather than
    /// scanning the whole table. The user filter wins when both are
    /// given.
    pub async fn list(
        &self,
        user_id: Option<i64>,
        seat_id: Option<i64>,
    ) -> AppResult<Vec<Reservation>> {
        match (user_id, seat_id) {
            (Some(user_id), _) => self.reservations.find_by_user(user_id).await,
            (None, Some(seat_id)) => self.reservations.find_by_seat(seat_id).await,
            (None, None) => Ok(Vec::new()),
        }
    }

    /// Fetches a reservation by ID.
    pub async fn get(&self, id: i64) -> AppResult<Reservation> {
        self.reservations
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Reservation {id} not found")))
    }

    /// Computes usage statistics over the user's reservation history.
    pub async fn user_statistics(&self, user_id: i64) -> AppResult<UserStatistics> {
        let history = self.reservations.find_by_user(user_id).await?;
        let current_month = chrono::Datelike::month(&Local::now().date_naive());
        Ok(compute_statistics(&history, current_month))
    }
}

/// The reservation eligible for repeating: the live (active/reserved)
/// entry with the greatest start time, if any.
fn latest_live(history: &[Reservation]) -> Option<&Reservation> {
    history
        .iter()
        .filter(|r| r.is_live())
        .max_by_key(|r| r.start_time)
}

/// Reject malformed intervals at creation time.
fn validate_interval(start: NaiveDateTime, end: NaiveDateTime) -> AppResult<()> {
    if end <= start {
        return Err(AppError::invalid_input(
            "Reservation end time must be after the start time",
        ));
    }
    Ok(())
}

/// The owner cancellation path refuses redundant cancellations.
fn ensure_not_cancelled(reservation: &Reservation) -> AppResult<()> {
    if reservation.status == ReservationStatus::Cancelled {
        return Err(AppError::already_cancelled(
            "This reservation has already been cancelled",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use seatwise_core::error::ErrorKind;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn reservation(status: ReservationStatus) -> Reservation {
        Reservation {
            id: 9,
            user_id: 3,
            seat_id: 4,
            start_time: at(10, 0),
            end_time: at(12, 0),
            status,
            floor: 0,
            date: at(10, 0).date(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_validate_interval_rejects_inverted_and_empty() {
        assert!(validate_interval(at(10, 0), at(11, 0)).is_ok());

        let err = validate_interval(at(11, 0), at(10, 0)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);

        let err = validate_interval(at(10, 0), at(10, 0)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidInput);
    }

    #[test]
    fn test_latest_live_empty_history_is_none() {
        assert!(latest_live(&[]).is_none());
    }

    #[test]
    fn test_latest_live_skips_terminal_statuses() {
        let history = [
            reservation(ReservationStatus::Cancelled),
            reservation(ReservationStatus::Expired),
        ];
        assert!(latest_live(&history).is_none());
    }

    #[test]
    fn test_latest_live_picks_max_start_among_live() {
        let mut early = reservation(ReservationStatus::Active);
        early.id = 1;
        early.start_time = at(9, 0);

        let mut late = reservation(ReservationStatus::Reserved);
        late.id = 2;
        late.start_time = at(14, 0);

        let mut cancelled_later = reservation(ReservationStatus::Cancelled);
        cancelled_later.id = 3;
        cancelled_later.start_time = at(16, 0);

        let history = [early, late, cancelled_later];
        assert_eq!(latest_live(&history).unwrap().id, 2);
    }

    #[test]
    fn test_owner_path_refuses_double_cancel() {
        assert!(ensure_not_cancelled(&reservation(ReservationStatus::Active)).is_ok());

        let err = ensure_not_cancelled(&reservation(ReservationStatus::Cancelled)).unwrap_err();
        assert_eq!(err.kind, ErrorKind::AlreadyCancelled);
    }
}
