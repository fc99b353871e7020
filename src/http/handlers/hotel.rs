//! Hotel CRUD handlers.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::error::AppError;
use crate::http::extract::ValidatedJson;
use crate::http::server::AppState;
use crate::models::{CreateHotelDto, UpdateHotelDto};

pub async fn create_hotel(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateHotelDto>,
) -> Result<impl IntoResponse, AppError> {
    let hotel = state.service.create_hotel(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Hotel created successfully",
            "hotel": hotel,
            "success": true,
        })),
    ))
}

pub async fn get_all_hotels(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let hotels = state.service.get_all_hotels().await?;
    Ok(Json(json!({
        "message": "Hotels retrieved successfully",
        "hotels": hotels,
        "success": true,
    })))
}

pub async fn get_deleted_hotels(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let hotels = state.service.get_deleted_hotels().await?;
    Ok(Json(json!({
        "message": "Deleted hotels retrieved successfully",
        "hotels": hotels,
        "success": true,
    })))
}

pub async fn get_hotel_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let hotel = state.service.get_hotel_by_id(id).await?;
    Ok(Json(json!({
        "message": "Hotel retrieved successfully",
        "hotel": hotel,
        "success": true,
    })))
}

pub async fn update_hotel_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<UpdateHotelDto>,
) -> Result<impl IntoResponse, AppError> {
    let hotel = state.service.update_hotel_by_id(id, dto).await?;
    Ok(Json(json!({
        "message": "hotel updated successfully",
        "hotel": hotel,
        "success": true,
    })))
}

pub async fn delete_hotel_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    state.service.delete_hotel_by_id(id).await?;
    Ok(Json(json!({
        "message": "hotel deleted successfully",
        "success": true,
    })))
}

pub async fn soft_delete_hotel_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    state.service.soft_delete_hotel_by_id(id).await?;
    Ok(Json(json!({
        "message": "hotel soft deleted successfully",
        "success": true,
    })))
}
