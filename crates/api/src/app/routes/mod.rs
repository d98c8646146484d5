use axum::{routing::get, Router};

pub mod items;
pub mod system;

/// Routing table: every (method, path) pair the service exposes, built once
/// at startup.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .nest("/items", items::router())
}
