//! Seat status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display status of a seat.
///
/// Independent of the administrative `blocked` flag on [`super::Seat`]:
/// a seat can be `Available` yet blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "seat_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    /// Free for booking.
    Available,
    /// Has a reservation for the queried interval.
    Reserved,
    /// Physically occupied right now.
    Occupied,
    /// Taken out of service.
    Blocked,
}

impl SeatStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Occupied => "occupied",
            Self::Blocked => "blocked",
        }
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SeatStatus {
    type Err = seatwise_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(Self::Available),
            "reserved" => Ok(Self::Reserved),
            "occupied" => Ok(Self::Occupied),
            "blocked" => Ok(Self::Blocked),
            _ => Err(seatwise_core::AppError::invalid_input(format!(
                "Invalid seat status: '{s}'. Expected one of: available, reserved, occupied, blocked"
            ))),
        }
    }
}
