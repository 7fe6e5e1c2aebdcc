//! Reservation lifecycle management.

pub mod conflict;
pub mod locks;
pub mod service;
pub mod statistics;

pub use conflict::ConflictChecker;
pub use locks::SeatLocks;
pub use service::{CreateReservation, ReservationService};
pub use statistics::UserStatistics;
