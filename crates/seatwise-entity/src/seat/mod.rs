//! Seat entity and status enumeration.

pub mod model;
pub mod status;

pub use model::Seat;
pub use status::SeatStatus;
