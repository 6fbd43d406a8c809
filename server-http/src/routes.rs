use crate::handlers;
use crate::state::AppState;
use axum::{routing::any, Router};
use tower_http::trace::TraceLayer;

/// Build and configure the application router
///
/// Both routes accept any method. Unmatched paths fall through to axum's
/// default 404.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(handlers::root))
        .route("/health", any(handlers::health_check))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
