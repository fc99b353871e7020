//! Domain models and input DTOs.

pub mod hotel;

pub use hotel::{CreateHotelDto, Hotel, UpdateHotelDto};
