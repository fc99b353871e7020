//! Shared utilities for integration tests.
//!
//! Tests drive the real router through `tower::ServiceExt::oneshot`
//! against an in-memory repository, so the full pipeline (correlation
//! middleware, validation extractor, handlers, terminal error
//! conversion) is exercised without a database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use chrono::Utc;
use serde_json::Value;
use tower::ServiceExt;

use hotel_service::error::AppError;
use hotel_service::http::{app, AppState};
use hotel_service::models::{CreateHotelDto, Hotel, UpdateHotelDto};
use hotel_service::repository::HotelRepository;
use hotel_service::service::HotelService;

/// In-memory stand-in for the MySQL repository, mirroring its semantics:
/// uniform `NotFound` for absent rows, soft-delete preconditions, and
/// fetch-by-id returning soft-deleted rows too.
#[derive(Default)]
pub struct InMemoryHotelRepository {
    hotels: Mutex<HashMap<i32, Hotel>>,
    next_id: AtomicI32,
}

impl InMemoryHotelRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HotelRepository for InMemoryHotelRepository {
    async fn create_hotel(&self, dto: CreateHotelDto) -> Result<Hotel, AppError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now();
        let hotel = Hotel {
            id,
            name: dto.name,
            location: dto.location,
            ratings: dto.ratings,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };
        self.hotels.lock().unwrap().insert(id, hotel.clone());
        Ok(hotel)
    }

    async fn get_all_hotels(&self) -> Result<Vec<Hotel>, AppError> {
        let hotels = self.hotels.lock().unwrap();
        let mut active: Vec<Hotel> = hotels.values().filter(|h| !h.is_deleted()).cloned().collect();
        active.sort_by_key(|h| h.id);
        Ok(active)
    }

    async fn get_hotel_by_id(&self, id: i32) -> Result<Hotel, AppError> {
        self.hotels
            .lock()
            .unwrap()
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Hotel not found".to_string()))
    }

    async fn update_hotel_by_id(&self, id: i32, dto: UpdateHotelDto) -> Result<Hotel, AppError> {
        let mut hotels = self.hotels.lock().unwrap();
        let hotel = hotels
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Hotel not found".to_string()))?;
        if let Some(name) = dto.name {
            hotel.name = name;
        }
        if let Some(location) = dto.location {
            hotel.location = location;
        }
        if let Some(ratings) = dto.ratings {
            hotel.ratings = Some(ratings);
        }
        hotel.updated_at = Utc::now();
        Ok(hotel.clone())
    }

    async fn delete_hotel_by_id(&self, id: i32) -> Result<(), AppError> {
        self.hotels.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn soft_delete_hotel_by_id(&self, id: i32) -> Result<(), AppError> {
        let mut hotels = self.hotels.lock().unwrap();
        let hotel = hotels
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound("Hotel not found".to_string()))?;
        if hotel.is_deleted() {
            return Err(AppError::BadRequest("Hotel already deleted".to_string()));
        }
        let now = Utc::now();
        hotel.deleted_at = Some(now);
        hotel.updated_at = now;
        Ok(())
    }

    async fn get_deleted_hotels(&self) -> Result<Vec<Hotel>, AppError> {
        let hotels = self.hotels.lock().unwrap();
        let mut deleted: Vec<Hotel> = hotels.values().filter(|h| h.is_deleted()).cloned().collect();
        deleted.sort_by_key(|h| h.id);
        Ok(deleted)
    }
}

/// Build the full application router over an in-memory repository.
pub fn test_app() -> Router {
    let repository = Arc::new(InMemoryHotelRepository::new());
    let service = HotelService::new(repository);
    app(AppState { service })
}

/// Send one request through the router.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let request = match body {
        Some(json) => {
            let payload = json.to_string();
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .header("content-length", payload.len())
                .body(Body::from(payload))
                .unwrap()
        }
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as a string.
#[allow(dead_code)]
pub async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
