//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers
//! - Wire up middleware (tracing, body limit, correlation id)
//! - Version the API surface under /api/v1 and /api/v2
//! - Serve with graceful shutdown

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::http::correlation::correlation_middleware;
use crate::http::handlers::{hotel, meta};
use crate::service::HotelService;

/// Request and response bodies are capped at 16KB.
const MAX_BODY_BYTES: usize = 16 * 1024;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: HotelService,
}

/// Build the application router with all middleware layers.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", v1_routes())
        .nest("/api/v2", v2_routes())
        .with_state(state)
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(middleware::from_fn(correlation_middleware))
        .layer(TraceLayer::new_for_http())
}

fn v1_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(meta::ping))
        .nest("/hotel", hotel_routes())
}

fn v2_routes() -> Router<AppState> {
    Router::new().route("/health", get(meta::health))
}

fn hotel_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(hotel::create_hotel))
        .route("/all-hotels", get(hotel::get_all_hotels))
        .route("/deleted-hotels", get(hotel::get_deleted_hotels))
        .route("/soft-delete/{id}", delete(hotel::soft_delete_hotel_by_id))
        .route(
            "/{id}",
            get(hotel::get_hotel_by_id)
                .put(hotel::update_hotel_by_id)
                .delete(hotel::delete_hotel_by_id),
        )
}

/// HTTP server for the hotel service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server around the given service.
    pub fn new(service: HotelService) -> Self {
        let state = AppState { service };
        Self { router: app(state) }
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
