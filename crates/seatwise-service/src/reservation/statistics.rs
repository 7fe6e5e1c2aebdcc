//! User statistics aggregation over reservation history.

use serde::{Deserialize, Serialize};

use seatwise_entity::reservation::Reservation;

/// Usage metrics folded from a user's reservation history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatistics {
    /// Total time spent in the library, whole hours.
    pub hours_in_library: i64,
    /// Remainder of the total time, minutes.
    pub minutes_in_library: i64,
    /// Number of live bookings dated in the current month.
    pub booking_days_in_month: i64,
    /// Longest single booking, whole hours. Tracks the same quantity as
    /// `record_hours` (kept as two fields for response compatibility).
    pub record_day: i64,
    /// Longest single booking, whole hours.
    pub record_hours: i64,
}

/// Fold the user's reservation history into usage metrics.
///
/// Only live (active/reserved) reservations count. `current_month` is
/// the month-of-year to match booking dates against; the year is
/// deliberately not compared.
pub fn compute_statistics(reservations: &[Reservation], current_month: u32) -> UserStatistics {
    if reservations.is_empty() {
        return UserStatistics::default();
    }

    let mut total_minutes: i64 = 0;
    let mut booking_days_in_month: i64 = 0;
    let mut record_hours: i64 = 0;
    let mut record_day: i64 = 0;

    for reservation in reservations {
        if !reservation.is_live() {
            continue;
        }

        let minutes = reservation.duration_minutes();
        total_minutes += minutes;

        if minutes > record_hours * 60 {
            record_hours = minutes / 60;
        }
        if minutes > record_day * 60 {
            record_day = minutes / 60;
        }

        if chrono::Datelike::month(&reservation.date) == current_month {
            booking_days_in_month += 1;
        }
    }

    UserStatistics {
        hours_in_library: total_minutes / 60,
        minutes_in_library: total_minutes % 60,
        booking_days_in_month,
        record_day,
        record_hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use seatwise_entity::reservation::ReservationStatus;

    fn reservation(
        date: NaiveDate,
        start: (u32, u32),
        end: (u32, u32),
        status: ReservationStatus,
    ) -> Reservation {
        Reservation {
            id: 1,
            user_id: 1,
            seat_id: 1,
            start_time: date.and_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: date.and_hms_opt(end.0, end.1, 0).unwrap(),
            status,
            floor: 0,
            date,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_history_is_all_zero() {
        assert_eq!(compute_statistics(&[], 3), UserStatistics::default());
    }

    #[test]
    fn test_totals_and_records() {
        let jan = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let feb = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        let history = [
            reservation(jan, (9, 0), (11, 30), ReservationStatus::Active), // 150 min
            reservation(feb, (14, 0), (15, 0), ReservationStatus::Reserved), // 60 min
        ];

        let stats = compute_statistics(&history, 1);
        assert_eq!(stats.hours_in_library, 3);
        assert_eq!(stats.minutes_in_library, 30);
        assert_eq!(stats.booking_days_in_month, 1);
        // Both record fields carry the longest booking in whole hours.
        assert_eq!(stats.record_hours, 2);
        assert_eq!(stats.record_day, stats.record_hours);
    }

    #[test]
    fn test_cancelled_and_expired_are_excluded() {
        let jan = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let history = [
            reservation(jan, (9, 0), (18, 0), ReservationStatus::Cancelled),
            reservation(jan, (9, 0), (18, 0), ReservationStatus::Expired),
        ];

        let stats = compute_statistics(&history, 1);
        assert_eq!(stats, UserStatistics::default());
    }

    #[test]
    fn test_month_match_ignores_year() {
        let jan_2023 = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        let history = [reservation(jan_2023, (10, 0), (11, 0), ReservationStatus::Active)];

        let stats = compute_statistics(&history, 1);
        assert_eq!(stats.booking_days_in_month, 1);
    }
}
