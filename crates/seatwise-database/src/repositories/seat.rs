//! Seat repository implementation.

use sqlx::PgPool;

use seatwise_core::error::{AppError, ErrorKind};
use seatwise_core::result::AppResult;
use seatwise_entity::seat::{Seat, SeatStatus};

/// Repository for seat CRUD and query operations.
#[derive(Debug, Clone)]
pub struct SeatRepository {
    pool: PgPool,
}

impl SeatRepository {
    /// Create a new seat repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a seat by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Seat>> {
        sqlx::query_as::<_, Seat>("SELECT * FROM seats WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find seat", e))
    }

    /// List all seats on a floor, ordered by id.
    pub async fn find_all_by_floor(&self, floor: i32) -> AppResult<Vec<Seat>> {
        sqlx::query_as::<_, Seat>("SELECT * FROM seats WHERE floor = $1 ORDER BY id")
            .bind(floor)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list seats by floor", e)
            })
    }

    /// Set or clear the administrative blocked flag.
    pub async fn set_blocked(&self, id: i64, blocked: bool) -> AppResult<Option<Seat>> {
        sqlx::query_as::<_, Seat>(
            "UPDATE seats SET blocked = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(blocked)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update seat blocked flag", e)
        })
    }

    /// Update the display status of a seat.
    pub async fn set_status(&self, id: i64, status: SeatStatus) -> AppResult<Option<Seat>> {
        sqlx::query_as::<_, Seat>(
            "UPDATE seats SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update seat status", e)
        })
    }
}
