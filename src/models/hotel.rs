//! Hotel entity and its input shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row of the `Hotels` table.
///
/// `deleted_at` is null for active rows; once set it is only read, never
/// cleared (there is no undelete operation).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub ratings: Option<f64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Hotel {
    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Validated input for hotel creation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateHotelDto {
    #[validate(length(min = 3, max = 50, message = "name must be between 3 and 50 characters"))]
    pub name: String,

    #[validate(length(
        min = 3,
        max = 50,
        message = "location must be between 3 and 50 characters"
    ))]
    pub location: String,

    #[validate(range(min = 0.0, max = 5.0, message = "ratings must be between 0 and 5"))]
    pub ratings: Option<f64>,
}

/// Partial update input. Any subset of fields may be present; absent
/// fields keep their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateHotelDto {
    pub name: Option<String>,
    pub location: Option<String>,
    pub ratings: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_dto() -> CreateHotelDto {
        CreateHotelDto {
            name: "Grand Plaza".to_string(),
            location: "Lisbon".to_string(),
            ratings: Some(4.5),
        }
    }

    #[test]
    fn accepts_valid_input() {
        assert!(valid_dto().validate().is_ok());
    }

    #[test]
    fn accepts_missing_ratings() {
        let dto = CreateHotelDto {
            ratings: None,
            ..valid_dto()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn rejects_short_name() {
        let dto = CreateHotelDto {
            name: "ab".to_string(),
            ..valid_dto()
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn rejects_name_over_fifty_chars() {
        let dto = CreateHotelDto {
            name: "x".repeat(51),
            ..valid_dto()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn rejects_ratings_above_five() {
        let dto = CreateHotelDto {
            ratings: Some(5.1),
            ..valid_dto()
        };
        let errors = dto.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("ratings"));
    }

    #[test]
    fn rejects_negative_ratings() {
        let dto = CreateHotelDto {
            ratings: Some(-0.1),
            ..valid_dto()
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn hotel_serializes_with_camel_case_fields() {
        let hotel = Hotel {
            id: 1,
            name: "Grand Plaza".to_string(),
            location: "Lisbon".to_string(),
            ratings: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        };
        let value = serde_json::to_value(&hotel).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("deletedAt").is_some());
        assert!(value["ratings"].is_null());
        assert!(!hotel.is_deleted());
    }
}
