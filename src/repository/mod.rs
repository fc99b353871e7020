//! Persistence layer for the `Hotels` table.

pub mod hotel;

pub use hotel::{HotelRepository, MySqlHotelRepository};
