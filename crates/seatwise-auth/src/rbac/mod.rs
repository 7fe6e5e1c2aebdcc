//! Role-based access control for booking operations.

pub mod enforcer;
pub mod policies;

pub use enforcer::RbacEnforcer;
