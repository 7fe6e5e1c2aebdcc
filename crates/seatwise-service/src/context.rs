//! Request context carrying the authenticated caller identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use seatwise_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Resolved by the (out-of-scope) transport layer and passed into
/// service methods so that every operation knows *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: i64,
    /// The user's role at the time the request was authenticated.
    pub role: UserRole,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: i64, role: UserRole) -> Self {
        Self {
            user_id,
            role,
            request_time: Utc::now(),
        }
    }

    /// Returns whether the current user holds a staff role.
    pub fn is_staff(&self) -> bool {
        self.role.is_staff()
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
