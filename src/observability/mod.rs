//! Observability subsystem.
//!
//! Structured logging via `tracing`. The correlation middleware opens a
//! per-request span, so every event emitted inside a request carries the
//! correlation id without explicit threading.

pub mod logging;
