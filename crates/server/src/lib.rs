use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod source;
pub mod state;
pub mod store;

pub use auth::{Authenticator, StaticCredentials};
pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};
pub use source::ArticleSource;
pub use state::AppState;
pub use store::{ArticleStore, MemoryStore, PostgresStore};

/// Builds the HTTP router with CORS, compression, request timeout and tracing.
pub fn create_app(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/login", post(handlers::login))
        .route("/search", get(handlers::search))
        .route("/articles/{title}", get(handlers::get_article))
        .route("/analyze", post(handlers::analyze))
        .route("/saved_articles/", get(handlers::list_saved).post(handlers::create_saved))
        .route("/saved_articles/stats", get(handlers::saved_stats))
        .route(
            "/saved_articles/{id}",
            get(handlers::get_saved).put(handlers::update_note).delete(handlers::delete_saved),
        )
        .layer(TimeoutLayer::with_status_code(StatusCode::GATEWAY_TIMEOUT, request_timeout))
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
