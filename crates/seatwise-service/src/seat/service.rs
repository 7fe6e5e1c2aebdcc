//! Seat browsing and administration service.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use tracing::info;

use seatwise_auth::RbacEnforcer;
use seatwise_core::error::AppError;
use seatwise_core::result::AppResult;
use seatwise_database::repositories::{ReservationRepository, SeatRepository};
use seatwise_entity::seat::{Seat, SeatStatus};

use crate::context::RequestContext;

/// Seat browsing and admin block/unblock operations.
#[derive(Debug, Clone)]
pub struct SeatService {
    /// Seat repository.
    seats: Arc<SeatRepository>,
    /// Reservation repository (for the reserved overlay).
    reservations: Arc<ReservationRepository>,
    /// Authorization policy.
    rbac: RbacEnforcer,
}

impl SeatService {
    /// Creates a new seat service.
    pub fn new(
        seats: Arc<SeatRepository>,
        reservations: Arc<ReservationRepository>,
        rbac: RbacEnforcer,
    ) -> Self {
        Self {
            seats,
            reservations,
            rbac,
        }
    }

    /// Lists all seats on a floor, with the status overlaid to
    /// `Reserved` for seats that have a booking overlapping the queried
    /// interval on that date.
    ///
    /// The overlay is a view-time projection; stored seat rows are not
    /// modified.
    pub async fn list_by_floor(
        &self,
        floor: i32,
        date: NaiveDate,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<Vec<Seat>> {
        let mut seats = self.seats.find_all_by_floor(floor).await?;
        let reservations = self
            .reservations
            .find_by_floor_date_and_time(floor, date, start, end)
            .await?;

        let reserved_seats: HashSet<i64> = reservations.iter().map(|r| r.seat_id).collect();
        for seat in &mut seats {
            if reserved_seats.contains(&seat.id) {
                seat.status = SeatStatus::Reserved;
            }
        }

        Ok(seats)
    }

    /// Fetches a seat by ID.
    pub async fn get(&self, id: i64) -> AppResult<Seat> {
        self.seats
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Seat {id} not found")))
    }

    /// Blocks a seat (admin only).
    pub async fn block(&self, ctx: &RequestContext, id: i64) -> AppResult<Seat> {
        self.set_blocked(ctx, id, true).await
    }

    /// Unblocks a seat (admin only).
    pub async fn unblock(&self, ctx: &RequestContext, id: i64) -> AppResult<Seat> {
        self.set_blocked(ctx, id, false).await
    }

    async fn set_blocked(&self, ctx: &RequestContext, id: i64, blocked: bool) -> AppResult<Seat> {
        self.rbac.require_admin(ctx.role)?;

        let seat = self
            .seats
            .set_blocked(id, blocked)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Seat {id} not found")))?;

        info!(seat_id = id, blocked, user_id = ctx.user_id, "Seat blocked flag updated");
        Ok(seat)
    }
}
