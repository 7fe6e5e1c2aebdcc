//! Seat availability computation.
//!
//! Walks the day's reservations for a seat and emits the free gaps
//! inside the working window. The gap walk itself is a pure function;
//! [`AvailabilityService`] wires it to storage and the clock.

use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, Timelike};
use tracing::debug;

use seatwise_core::config::booking::BookingConfig;
use seatwise_core::error::AppError;
use seatwise_core::result::AppResult;
use seatwise_database::repositories::ReservationRepository;
use seatwise_entity::reservation::Reservation;
use seatwise_entity::timeslot::TimeSlot;

/// Compute the free gaps between reservations inside `[day_start, day_end)`.
///
/// Cancelled reservations are ignored; the rest are walked in start-time
/// order. `cursor_floor`, when given, pushes the starting cursor forward
/// (used to avoid offering past time on the current day). Emitted slots
/// are disjoint, ordered, and each at least `min_gap` long.
pub fn compute_free_slots(
    reservations: &[Reservation],
    day_start: NaiveDateTime,
    day_end: NaiveDateTime,
    min_gap: Duration,
    cursor_floor: Option<NaiveDateTime>,
) -> Vec<TimeSlot> {
    let mut live: Vec<&Reservation> = reservations.iter().filter(|r| !is_cancelled(r)).collect();
    live.sort_by_key(|r| r.start_time);

    let mut current = day_start;
    if let Some(floor) = cursor_floor {
        if floor > current {
            current = floor;
        }
    }

    let mut slots = Vec::new();
    for reservation in live {
        if current < reservation.start_time && reservation.start_time - current >= min_gap {
            slots.push(TimeSlot::new(current, reservation.start_time));
        }
        if reservation.end_time > current {
            current = reservation.end_time;
        }
    }

    if day_end - current >= min_gap {
        slots.push(TimeSlot::new(current, day_end));
    }

    slots
}

fn is_cancelled(reservation: &Reservation) -> bool {
    reservation.status == seatwise_entity::reservation::ReservationStatus::Cancelled
}

/// Computes bookable time slots for a seat and date.
#[derive(Debug, Clone)]
pub struct AvailabilityService {
    /// Reservation repository.
    reservations: Arc<ReservationRepository>,
    /// Working window and slot settings.
    config: BookingConfig,
}

impl AvailabilityService {
    /// Creates a new availability service.
    pub fn new(reservations: Arc<ReservationRepository>, config: BookingConfig) -> Self {
        Self {
            reservations,
            config,
        }
    }

    /// Returns the free time slots for a seat on the given date.
    ///
    /// Fails with `InvalidInput` for dates strictly before today. On the
    /// current day, time that has already passed is never offered.
    pub async fn available_slots(&self, seat_id: i64, date: NaiveDate) -> AppResult<Vec<TimeSlot>> {
        let today = Local::now().date_naive();
        if date < today {
            return Err(AppError::invalid_input("A past date cannot be selected"));
        }

        let day_start = date.and_time(self.config.day_start_time()?);
        let day_end = date.and_time(self.config.day_end_time()?);

        let reservations = self
            .reservations
            .find_by_seat_within(seat_id, day_start, day_end)
            .await?;

        let cursor_floor = if date == today {
            let now = truncate_to_minute(Local::now().naive_local());
            (now > day_start).then_some(now)
        } else {
            None
        };

        let slots = compute_free_slots(
            &reservations,
            day_start,
            day_end,
            Duration::minutes(self.config.min_slot_minutes),
            cursor_floor,
        );

        debug!(seat_id, %date, slots = slots.len(), "Computed available slots");
        Ok(slots)
    }
}

fn truncate_to_minute(value: NaiveDateTime) -> NaiveDateTime {
    value
        .with_second(0)
        .and_then(|v| v.with_nanosecond(0))
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use seatwise_entity::reservation::ReservationStatus;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        day().and_hms_opt(h, m, 0).unwrap()
    }

    fn reservation(start: NaiveDateTime, end: NaiveDateTime, status: ReservationStatus) -> Reservation {
        Reservation {
            id: 1,
            user_id: 1,
            seat_id: 1,
            start_time: start,
            end_time: end,
            status,
            floor: 0,
            date: day(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn min_gap() -> Duration {
        Duration::minutes(30)
    }

    #[test]
    fn test_no_reservations_yields_whole_window() {
        let slots = compute_free_slots(&[], at(9, 0), at(18, 0), min_gap(), None);
        assert_eq!(slots, vec![TimeSlot::new(at(9, 0), at(18, 0))]);
    }

    #[test]
    fn test_single_booking_splits_window() {
        let existing = [reservation(at(10, 0), at(12, 0), ReservationStatus::Active)];
        let slots = compute_free_slots(&existing, at(9, 0), at(18, 0), min_gap(), None);
        assert_eq!(
            slots,
            vec![
                TimeSlot::new(at(9, 0), at(10, 0)),
                TimeSlot::new(at(12, 0), at(18, 0)),
            ]
        );
    }

    #[test]
    fn test_cancelled_reservations_are_ignored() {
        let existing = [reservation(at(10, 0), at(12, 0), ReservationStatus::Cancelled)];
        let slots = compute_free_slots(&existing, at(9, 0), at(18, 0), min_gap(), None);
        assert_eq!(slots, vec![TimeSlot::new(at(9, 0), at(18, 0))]);
    }

    #[test]
    fn test_back_to_back_bookings_emit_no_gap_between() {
        let existing = [
            reservation(at(9, 0), at(11, 0), ReservationStatus::Active),
            reservation(at(11, 0), at(13, 0), ReservationStatus::Reserved),
        ];
        let slots = compute_free_slots(&existing, at(9, 0), at(18, 0), min_gap(), None);
        assert_eq!(slots, vec![TimeSlot::new(at(13, 0), at(18, 0))]);
    }

    #[test]
    fn test_short_gaps_are_suppressed() {
        // 20-minute gap between bookings is below the minimum.
        let existing = [
            reservation(at(9, 0), at(10, 0), ReservationStatus::Active),
            reservation(at(10, 20), at(17, 45), ReservationStatus::Active),
        ];
        let slots = compute_free_slots(&existing, at(9, 0), at(18, 0), min_gap(), None);
        assert!(slots.is_empty());
    }

    #[test]
    fn test_cursor_floor_clamps_past_time() {
        // "Now" is 14:10; the morning must not be offered.
        let existing = [reservation(at(15, 0), at(16, 0), ReservationStatus::Active)];
        let slots =
            compute_free_slots(&existing, at(9, 0), at(18, 0), min_gap(), Some(at(14, 10)));
        assert_eq!(
            slots,
            vec![
                TimeSlot::new(at(14, 10), at(15, 0)),
                TimeSlot::new(at(16, 0), at(18, 0)),
            ]
        );
    }

    #[test]
    fn test_reservation_entirely_before_cursor_contributes_nothing() {
        let existing = [reservation(at(9, 0), at(10, 0), ReservationStatus::Active)];
        let slots =
            compute_free_slots(&existing, at(9, 0), at(18, 0), min_gap(), Some(at(12, 0)));
        assert_eq!(slots, vec![TimeSlot::new(at(12, 0), at(18, 0))]);
    }

    #[test]
    fn test_unsorted_input_is_handled() {
        let existing = [
            reservation(at(14, 0), at(15, 0), ReservationStatus::Active),
            reservation(at(10, 0), at(11, 0), ReservationStatus::Active),
        ];
        let slots = compute_free_slots(&existing, at(9, 0), at(18, 0), min_gap(), None);
        assert_eq!(
            slots,
            vec![
                TimeSlot::new(at(9, 0), at(10, 0)),
                TimeSlot::new(at(11, 0), at(14, 0)),
                TimeSlot::new(at(15, 0), at(18, 0)),
            ]
        );
    }

    #[test]
    fn test_slots_are_disjoint_ordered_and_long_enough() {
        let existing = [
            reservation(at(9, 30), at(10, 0), ReservationStatus::Active),
            reservation(at(11, 0), at(12, 30), ReservationStatus::Active),
            reservation(at(12, 0), at(13, 0), ReservationStatus::Active),
        ];
        let slots = compute_free_slots(&existing, at(9, 0), at(18, 0), min_gap(), None);
        for slot in &slots {
            assert!(slot.duration_minutes() >= 30);
            for r in &existing {
                // No emitted slot intersects a live booking.
                assert!(slot.end <= r.start_time || slot.start >= r.end_time);
            }
        }
        for pair in slots.windows(2) {
            assert!(pair[0].end <= pair[1].start);
        }
    }
}
