//! Authorization policy predicates.
//!
//! Pure functions over roles and ownership; the [`super::enforcer`]
//! turns denials into errors.

use seatwise_entity::reservation::Reservation;
use seatwise_entity::user::UserRole;

/// Whether a user may cancel the given reservation through the owner
/// path: staff may cancel anything, everyone else only their own.
pub fn can_cancel(user_id: i64, role: UserRole, reservation: &Reservation) -> bool {
    role.is_staff() || reservation.user_id == user_id
}

/// Whether a role may use the privileged administration paths
/// (admin cancel, soft-deleting users).
pub fn can_administer(role: UserRole) -> bool {
    role.is_staff()
}

/// Whether a role may manage seats (block/unblock) and list all users.
pub fn can_manage_seats(role: UserRole) -> bool {
    role.is_admin()
}

/// Whether a role may book seats for itself. Staff do not hold personal
/// bookings.
pub fn can_book(role: UserRole) -> bool {
    !role.is_staff()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use seatwise_entity::reservation::ReservationStatus;

    fn reservation_owned_by(user_id: i64) -> Reservation {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Reservation {
            id: 1,
            user_id,
            seat_id: 5,
            start_time: date.and_hms_opt(10, 0, 0).unwrap(),
            end_time: date.and_hms_opt(12, 0, 0).unwrap(),
            status: ReservationStatus::Active,
            floor: 0,
            date,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_owner_can_cancel_own_reservation() {
        let r = reservation_owned_by(42);
        assert!(can_cancel(42, UserRole::Student, &r));
    }

    #[test]
    fn test_student_cannot_cancel_foreign_reservation() {
        let r = reservation_owned_by(42);
        assert!(!can_cancel(7, UserRole::Student, &r));
    }

    #[test]
    fn test_staff_can_cancel_any_reservation() {
        let r = reservation_owned_by(42);
        assert!(can_cancel(7, UserRole::Librarian, &r));
        assert!(can_cancel(7, UserRole::Admin, &r));
    }

    #[test]
    fn test_administer_and_booking_are_disjoint() {
        assert!(can_administer(UserRole::Librarian));
        assert!(can_administer(UserRole::Admin));
        assert!(!can_administer(UserRole::Student));

        assert!(can_book(UserRole::Student));
        assert!(!can_book(UserRole::Librarian));
        assert!(!can_book(UserRole::Admin));
    }

    #[test]
    fn test_seat_management_is_admin_only() {
        assert!(can_manage_seats(UserRole::Admin));
        assert!(!can_manage_seats(UserRole::Librarian));
        assert!(!can_manage_seats(UserRole::Student));
    }
}
