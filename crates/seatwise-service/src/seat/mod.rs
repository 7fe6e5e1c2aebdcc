//! Seat browsing and administration.

pub mod service;

pub use service::SeatService;
