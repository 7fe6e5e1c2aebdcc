//! # seatwise-core
//!
//! Core crate for Seatwise. Contains configuration schemas, telemetry
//! bootstrap, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Seatwise crates.

pub mod config;
pub mod error;
pub mod result;
pub mod telemetry;

pub use error::AppError;
pub use result::AppResult;
