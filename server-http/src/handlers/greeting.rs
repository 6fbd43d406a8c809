use axum::{
    extract::{ConnectInfo, Request, State},
    http::StatusCode,
};
use std::net::SocketAddr;
use tracing::info;

use crate::environment::format_timestamp;
use crate::state::AppState;

/// ANY /
///
/// Hostname and timestamp are resolved per request.
pub async fn root(State(state): State<AppState>, request: Request) -> (StatusCode, String) {
    if let Some(ConnectInfo(remote)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
        info!("{} {} from {}", request.method(), request.uri(), remote);
    }

    let hostname = state.hostname.hostname();
    let timestamp = format_timestamp(state.clock.now());

    (StatusCode::OK, state.identity.greeting(&hostname, &timestamp))
}
