//! User lookup and administration service.
//!
//! Password changes are handled by the external auth collaborator and
//! have no counterpart here.

use std::sync::Arc;

use tracing::info;

use seatwise_auth::RbacEnforcer;
use seatwise_core::error::AppError;
use seatwise_core::result::AppResult;
use seatwise_database::repositories::UserRepository;
use seatwise_entity::user::model::UpdateUser;
use seatwise_entity::user::User;

use crate::context::RequestContext;

/// User lookup, profile updates, and admin listing/soft deletion.
#[derive(Debug, Clone)]
pub struct UserService {
    /// User repository.
    users: Arc<UserRepository>,
    /// Authorization policy.
    rbac: RbacEnforcer,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<UserRepository>, rbac: RbacEnforcer) -> Self {
        Self { users, rbac }
    }

    /// Fetches a user by ID.
    pub async fn get(&self, id: i64) -> AppResult<User> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    /// Lists all users (admin only).
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<User>> {
        self.rbac.require_admin(ctx.role)?;
        self.users.find_all().await
    }

    /// Applies a partial profile update.
    pub async fn update(&self, id: i64, update: UpdateUser) -> AppResult<User> {
        self.users
            .update_profile(id, &update)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    /// Soft-deletes a user (staff only). The account is flagged as
    /// deleted; its reservation history is kept.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> AppResult<User> {
        self.rbac.require_staff(ctx.role)?;

        let user = self
            .users
            .mark_deleted(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;

        info!(user_id = id, acting_user = ctx.user_id, "User soft-deleted");
        Ok(user)
    }
}
