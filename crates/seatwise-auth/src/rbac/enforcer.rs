//! RBAC enforcement — maps policy denials to `AccessDenied` errors.

use seatwise_core::error::AppError;
use seatwise_entity::reservation::Reservation;
use seatwise_entity::user::UserRole;

use super::policies;

/// Enforces the authorization policy for booking operations.
///
/// Stateless; cheap to clone and share between services.
#[derive(Debug, Clone, Copy, Default)]
pub struct RbacEnforcer;

impl RbacEnforcer {
    /// Creates a new enforcer.
    pub fn new() -> Self {
        Self
    }

    /// Require that the user may cancel the given reservation.
    pub fn require_can_cancel(
        &self,
        user_id: i64,
        role: UserRole,
        reservation: &Reservation,
    ) -> Result<(), AppError> {
        if policies::can_cancel(user_id, role, reservation) {
            Ok(())
        } else {
            Err(AppError::access_denied(
                "You do not have permission to cancel this reservation",
            ))
        }
    }

    /// Require a staff role (librarian or admin).
    pub fn require_staff(&self, role: UserRole) -> Result<(), AppError> {
        if policies::can_administer(role) {
            Ok(())
        } else {
            Err(AppError::access_denied(
                "This operation requires a staff role",
            ))
        }
    }

    /// Require the admin role.
    pub fn require_admin(&self, role: UserRole) -> Result<(), AppError> {
        if policies::can_manage_seats(role) {
            Ok(())
        } else {
            Err(AppError::access_denied("This operation requires admin"))
        }
    }

    /// Require a role that books seats for itself.
    pub fn require_can_book(&self, role: UserRole) -> Result<(), AppError> {
        if policies::can_book(role) {
            Ok(())
        } else {
            Err(AppError::access_denied(
                "Staff accounts cannot book seats for themselves",
            ))
        }
    }
}
