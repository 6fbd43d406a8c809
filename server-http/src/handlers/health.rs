use axum::{extract::State, http::StatusCode};

use crate::state::AppState;

/// ANY /health
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, &'static str) {
    (StatusCode::OK, state.identity.health_message)
}
