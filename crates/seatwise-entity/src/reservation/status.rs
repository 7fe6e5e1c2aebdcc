//! Reservation status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a reservation.
///
/// `Cancelled` is terminal and one-way. `Expired` is terminal and set by
/// an external time-based sweep, never by the lifecycle manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "reservation_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// A live booking created by the lifecycle manager.
    Active,
    /// A live booking held but not yet started.
    Reserved,
    /// Cancelled by the owner or staff.
    Cancelled,
    /// Lapsed without cancellation (set externally).
    Expired,
}

impl ReservationStatus {
    /// Check if this status counts against seat availability.
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Active | Self::Reserved)
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Reserved => "reserved",
            Self::Cancelled => "cancelled",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = seatwise_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "reserved" => Ok(Self::Reserved),
            "cancelled" => Ok(Self::Cancelled),
            "expired" => Ok(Self::Expired),
            _ => Err(seatwise_core::AppError::invalid_input(format!(
                "Invalid reservation status: '{s}'. Expected one of: active, reserved, cancelled, expired"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_statuses() {
        assert!(ReservationStatus::Active.is_live());
        assert!(ReservationStatus::Reserved.is_live());
        assert!(!ReservationStatus::Cancelled.is_live());
        assert!(!ReservationStatus::Expired.is_live());
    }
}
