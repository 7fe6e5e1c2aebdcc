//! # seatwise-service
//!
//! Business logic service layer for Seatwise. Each service orchestrates
//! repositories and the authorization policy to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references. Every operation that acts
//! on behalf of a caller takes an explicit [`RequestContext`]; there is
//! no ambient security context.

pub mod availability;
pub mod context;
pub mod reservation;
pub mod seat;
pub mod user;

pub use availability::AvailabilityService;
pub use context::RequestContext;
pub use reservation::{ConflictChecker, ReservationService, SeatLocks};
pub use seat::SeatService;
pub use user::UserService;
