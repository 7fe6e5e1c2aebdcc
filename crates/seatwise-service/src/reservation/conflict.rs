//! Reservation conflict detection.
//!
//! An existing interval `[s, e]` conflicts with a proposed `[s2, e2]`
//! iff `s <= e2 && e >= s2` — endpoints inclusive, so touching intervals
//! count as conflicting. The stored query uses the same comparison and
//! excludes cancelled reservations.

use std::sync::Arc;

use chrono::NaiveDateTime;

use seatwise_core::error::AppError;
use seatwise_core::result::AppResult;
use seatwise_database::repositories::ReservationRepository;
use seatwise_entity::reservation::{Reservation, ReservationStatus};

/// Inclusive-boundary interval overlap test.
pub fn intervals_overlap(
    start_a: NaiveDateTime,
    end_a: NaiveDateTime,
    start_b: NaiveDateTime,
    end_b: NaiveDateTime,
) -> bool {
    start_a <= end_b && end_a >= start_b
}

/// Whether any non-cancelled candidate overlaps the proposed interval.
///
/// The repository's candidate query uses the same comparison; applying
/// the predicate again here keeps the stored and in-process definitions
/// from drifting apart.
pub fn any_conflicts(
    candidates: &[Reservation],
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> bool {
    candidates
        .iter()
        .filter(|r| r.status != ReservationStatus::Cancelled)
        .any(|r| intervals_overlap(r.start_time, r.end_time, start, end))
}

/// Checks a proposed booking interval against stored reservations.
#[derive(Debug, Clone)]
pub struct ConflictChecker {
    /// Reservation repository.
    reservations: Arc<ReservationRepository>,
}

impl ConflictChecker {
    /// Creates a new conflict checker.
    pub fn new(reservations: Arc<ReservationRepository>) -> Self {
        Self { reservations }
    }

    /// Returns whether the seat has a conflicting reservation for the
    /// proposed interval.
    pub async fn is_booked(
        &self,
        seat_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<bool> {
        let candidates = self
            .reservations
            .find_overlapping(seat_id, start, end)
            .await?;
        Ok(any_conflicts(&candidates, start, end))
    }

    /// Fails with `SeatAlreadyBooked` if the proposed interval conflicts.
    pub async fn ensure_free(
        &self,
        seat_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AppResult<()> {
        if self.is_booked(seat_id, start, end).await? {
            return Err(AppError::seat_already_booked(
                "This seat is already booked for the selected time",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn booking(status: ReservationStatus, start: NaiveDateTime, end: NaiveDateTime) -> Reservation {
        Reservation {
            id: 1,
            user_id: 3,
            seat_id: 4,
            start_time: start,
            end_time: end,
            status,
            floor: 0,
            date: start.date(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_partial_overlap_conflicts() {
        // 14:00–15:00 vs 14:30–15:30
        assert!(intervals_overlap(at(14, 0), at(15, 0), at(14, 30), at(15, 30)));
    }

    #[test]
    fn test_containment_conflicts() {
        assert!(intervals_overlap(at(10, 0), at(16, 0), at(12, 0), at(13, 0)));
        assert!(intervals_overlap(at(12, 0), at(13, 0), at(10, 0), at(16, 0)));
    }

    #[test]
    fn test_touching_endpoints_conflict() {
        assert!(intervals_overlap(at(10, 0), at(12, 0), at(12, 0), at(14, 0)));
        assert!(intervals_overlap(at(12, 0), at(14, 0), at(10, 0), at(12, 0)));
    }

    #[test]
    fn test_disjoint_intervals_do_not_conflict() {
        assert!(!intervals_overlap(at(9, 0), at(10, 0), at(10, 1), at(11, 0)));
        assert!(!intervals_overlap(at(14, 0), at(15, 0), at(9, 0), at(13, 59)));
    }

    #[test]
    fn test_any_conflicts_flags_overlapping_live_candidate() {
        let candidates = [booking(ReservationStatus::Active, at(14, 0), at(15, 0))];
        assert!(any_conflicts(&candidates, at(14, 30), at(15, 30)));
    }

    #[test]
    fn test_any_conflicts_ignores_cancelled_candidates() {
        let candidates = [booking(ReservationStatus::Cancelled, at(14, 0), at(15, 0))];
        assert!(!any_conflicts(&candidates, at(14, 30), at(15, 30)));
    }

    #[test]
    fn test_any_conflicts_rejects_non_overlapping_candidate() {
        // A row that slipped past the stored query still fails the
        // in-process predicate.
        let candidates = [booking(ReservationStatus::Active, at(9, 0), at(10, 0))];
        assert!(!any_conflicts(&candidates, at(10, 1), at(11, 0)));
    }

    #[test]
    fn test_any_conflicts_empty_candidates() {
        assert!(!any_conflicts(&[], at(10, 0), at(12, 0)));
    }
}
