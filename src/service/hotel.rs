//! Hotel service: pass-through orchestration above the repository.
//!
//! Each operation calls exactly one repository operation with no added
//! business logic. The layer exists as the seam for future business
//! rules; handlers depend on it, not on the repository.

use std::sync::Arc;

use crate::error::AppError;
use crate::models::{CreateHotelDto, Hotel, UpdateHotelDto};
use crate::repository::HotelRepository;

#[derive(Clone)]
pub struct HotelService {
    repository: Arc<dyn HotelRepository>,
}

impl HotelService {
    pub fn new(repository: Arc<dyn HotelRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_hotel(&self, dto: CreateHotelDto) -> Result<Hotel, AppError> {
        self.repository.create_hotel(dto).await
    }

    pub async fn get_all_hotels(&self) -> Result<Vec<Hotel>, AppError> {
        self.repository.get_all_hotels().await
    }

    pub async fn get_hotel_by_id(&self, id: i32) -> Result<Hotel, AppError> {
        self.repository.get_hotel_by_id(id).await
    }

    pub async fn update_hotel_by_id(
        &self,
        id: i32,
        dto: UpdateHotelDto,
    ) -> Result<Hotel, AppError> {
        self.repository.update_hotel_by_id(id, dto).await
    }

    pub async fn delete_hotel_by_id(&self, id: i32) -> Result<(), AppError> {
        self.repository.delete_hotel_by_id(id).await
    }

    pub async fn soft_delete_hotel_by_id(&self, id: i32) -> Result<(), AppError> {
        self.repository.soft_delete_hotel_by_id(id).await
    }

    pub async fn get_deleted_hotels(&self) -> Result<Vec<Hotel>, AppError> {
        self.repository.get_deleted_hotels().await
    }
}
