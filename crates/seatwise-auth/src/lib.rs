//! # seatwise-auth
//!
//! Centralized authorization policy for Seatwise. Every role/ownership
//! decision lives here; services never compare roles inline.
//!
//! Authentication itself (JWT decoding, password hashing) is an external
//! collaborator and deliberately absent from this crate.

pub mod rbac;

pub use rbac::RbacEnforcer;
