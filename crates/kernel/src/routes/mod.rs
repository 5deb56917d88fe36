//! HTTP route handlers.

pub mod health;
pub mod nav;

use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Assemble the full application router.
///
/// Used by the `traqops` binary and by integration tests, so tests exercise
/// the real routes and middleware.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(nav::router())
        .layer(axum::middleware::from_fn(
            crate::middleware::resolve_client_scope,
        ))
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}
