//! Hotel Service
//!
//! A small CRUD REST API for managing hotel records, backed by a single
//! relational table.
//!
//! # Architecture Overview
//!
//! ```text
//! Client Request
//!     → http::correlation (bind correlation id, open request span)
//!     → http::extract     (schema validation, short-circuits on failure)
//!     → http::handlers    (one service call per route, JSON envelope)
//!     → service           (pass-through seam above the repository)
//!     → repository        (CRUD + soft-delete queries over MySQL)
//!
//! Errors propagate untouched up this chain and are converted to a
//! response exactly once, in `error::AppError`'s IntoResponse impl.
//!
//! Cross-cutting concerns:
//!     config         — TOML configuration with per-section defaults
//!     observability  — tracing subscriber initialization
//!     db             — connection pool construction
//! ```

// Core subsystems
pub mod config;
pub mod db;
pub mod error;
pub mod http;

// Domain
pub mod models;
pub mod repository;
pub mod service;

// Cross-cutting concerns
pub mod observability;

pub use config::AppConfig;
pub use error::AppError;
pub use http::HttpServer;
