//! User lookup and administration.

pub mod service;

pub use service::UserService;
