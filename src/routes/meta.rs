//! Meta routes - greeting and health check

use axum::extract::State;
use axum::Json;

use crate::models::{DatabaseHealth, HealthResponse};
use crate::state::AppState;

/// GET / - Greeting
pub async fn home() -> Json<&'static str> {
    Json("Hi. Its me Tibra")
}

/// GET /health - Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let connected = sqlx::query("SELECT 1")
        .execute(state.pool())
        .await
        .is_ok();

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: DatabaseHealth { connected },
    })
}
