//! Service layer above the repository.

pub mod hotel;

pub use hotel::HotelService;
