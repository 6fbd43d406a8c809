use axum::Router;
use server_http::{AppState, ServiceIdentity};

pub const IDENTITY: ServiceIdentity = ServiceIdentity::SERVICE_A;

/// Router for Service A backed by the real hostname and clock.
pub fn router() -> Router {
    server_http::build_router(AppState::new(IDENTITY))
}
