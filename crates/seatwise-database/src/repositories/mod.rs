//! Concrete repository implementations.
//!
//! Each repository is a thin struct over [`sqlx::PgPool`] exposing one
//! method per query. Repositories report infrastructure failures as
//! `ErrorKind::Database`; domain errors belong to the service layer.

pub mod reservation;
pub mod seat;
pub mod user;

pub use reservation::ReservationRepository;
pub use seat::SeatRepository;
pub use user::UserRepository;
