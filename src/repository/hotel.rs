//! Hotel repository: CRUD and soft-delete queries.
//!
//! # Responsibilities
//! - Run every query against the `Hotels` table
//! - Normalize persistence failures to `AppError::BadRequest`
//! - Signal absent rows with `AppError::NotFound`, uniformly
//! - Enforce the soft-delete transition preconditions
//!
//! # Design Decisions
//! - The trait is object-safe so handlers can run against a fake in tests
//! - No multi-statement transactions; the database's row semantics are
//!   the only write coordination
//! - No retries; persistence failures are terminal for the request

use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::error::AppError;
use crate::http::correlation::correlation_id;
use crate::models::{CreateHotelDto, Hotel, UpdateHotelDto};

/// Storage operations for hotel records.
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Insert a row, `ratings` defaulted to NULL when absent, and return it.
    async fn create_hotel(&self, dto: CreateHotelDto) -> Result<Hotel, AppError>;

    /// All active rows (`deletedAt` is null).
    async fn get_all_hotels(&self) -> Result<Vec<Hotel>, AppError>;

    /// The row, or `NotFound` if absent.
    async fn get_hotel_by_id(&self, id: i32) -> Result<Hotel, AppError>;

    /// Partial field update; `NotFound` if absent. Returns the updated row.
    async fn update_hotel_by_id(&self, id: i32, dto: UpdateHotelDto) -> Result<Hotel, AppError>;

    /// Hard delete. No-op if the row does not exist.
    async fn delete_hotel_by_id(&self, id: i32) -> Result<(), AppError>;

    /// Active → Deleted transition. `NotFound` if absent, `BadRequest` if
    /// already deleted. Field validation is not re-run.
    async fn soft_delete_hotel_by_id(&self, id: i32) -> Result<(), AppError>;

    /// All soft-deleted rows (`deletedAt` is non-null).
    async fn get_deleted_hotels(&self) -> Result<Vec<Hotel>, AppError>;
}

/// MySQL-backed implementation.
pub struct MySqlHotelRepository {
    pool: MySqlPool,
}

impl MySqlHotelRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn fetch_by_id(&self, id: i32) -> Result<Option<Hotel>, AppError> {
        sqlx::query_as::<_, Hotel>("SELECT * FROM Hotels WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(
                    correlation_id = %correlation_id(),
                    error = %e,
                    "Error while fetching hotel"
                );
                AppError::BadRequest("Error while fetching hotel".to_string())
            })
    }
}

#[async_trait]
impl HotelRepository for MySqlHotelRepository {
    async fn create_hotel(&self, dto: CreateHotelDto) -> Result<Hotel, AppError> {
        let result = sqlx::query("INSERT INTO Hotels (name, location, ratings) VALUES (?, ?, ?)")
            .bind(&dto.name)
            .bind(&dto.location)
            .bind(dto.ratings)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(
                    correlation_id = %correlation_id(),
                    error = %e,
                    "Error while creating hotel"
                );
                AppError::BadRequest("Error while creating hotel".to_string())
            })?;

        let id = result.last_insert_id() as i32;
        self.fetch_by_id(id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Error while creating hotel".to_string()))
    }

    async fn get_all_hotels(&self) -> Result<Vec<Hotel>, AppError> {
        sqlx::query_as::<_, Hotel>("SELECT * FROM Hotels WHERE deletedAt IS NULL")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(
                    correlation_id = %correlation_id(),
                    error = %e,
                    "Error while fetching hotels"
                );
                AppError::BadRequest("Error while fetching hotels".to_string())
            })
    }

    async fn get_hotel_by_id(&self, id: i32) -> Result<Hotel, AppError> {
        self.fetch_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hotel not found".to_string()))
    }

    async fn update_hotel_by_id(&self, id: i32, dto: UpdateHotelDto) -> Result<Hotel, AppError> {
        // Existence check first so an absent row is NotFound, not a
        // zero-row update.
        self.fetch_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hotel not found".to_string()))?;

        sqlx::query(
            "UPDATE Hotels SET name = COALESCE(?, name), \
             location = COALESCE(?, location), \
             ratings = COALESCE(?, ratings) \
             WHERE id = ?",
        )
        .bind(&dto.name)
        .bind(&dto.location)
        .bind(dto.ratings)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(
                correlation_id = %correlation_id(),
                error = %e,
                "Error while updating hotel"
            );
            AppError::BadRequest("Error while updating hotel".to_string())
        })?;

        self.fetch_by_id(id)
            .await?
            .ok_or_else(|| AppError::BadRequest("Error while updating hotel".to_string()))
    }

    async fn delete_hotel_by_id(&self, id: i32) -> Result<(), AppError> {
        sqlx::query("DELETE FROM Hotels WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(
                    correlation_id = %correlation_id(),
                    error = %e,
                    "Error while deleting hotel"
                );
                AppError::BadRequest("Error while deleting hotel".to_string())
            })?;
        Ok(())
    }

    async fn soft_delete_hotel_by_id(&self, id: i32) -> Result<(), AppError> {
        let hotel = self
            .fetch_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Hotel not found".to_string()))?;

        if hotel.is_deleted() {
            return Err(AppError::BadRequest("Hotel already deleted".to_string()));
        }

        sqlx::query("UPDATE Hotels SET deletedAt = CURRENT_TIMESTAMP WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(
                    correlation_id = %correlation_id(),
                    error = %e,
                    "Error while soft deleting hotel"
                );
                AppError::BadRequest("Error while soft deleting hotel".to_string())
            })?;
        Ok(())
    }

    async fn get_deleted_hotels(&self) -> Result<Vec<Hotel>, AppError> {
        sqlx::query_as::<_, Hotel>("SELECT * FROM Hotels WHERE deletedAt IS NOT NULL")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(
                    correlation_id = %correlation_id(),
                    error = %e,
                    "Error while fetching hotels"
                );
                AppError::BadRequest("Error while fetching hotels".to_string())
            })
    }
}
