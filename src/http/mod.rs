//! HTTP subsystem.
//!
//! # Data Flow
//! ```text
//! inbound request
//!     → correlation.rs (generate id, bind task-local scope, open span)
//!     → extract.rs     (deserialize + validate body, short-circuit on failure)
//!     → handlers/      (one service call per route, JSON envelope)
//!     → error.rs       (terminal conversion for any escaped AppError)
//! ```

pub mod correlation;
pub mod extract;
pub mod handlers;
pub mod server;

pub use correlation::{correlation_id, correlation_middleware, X_CORRELATION_ID};
pub use server::{app, AppState, HttpServer};
