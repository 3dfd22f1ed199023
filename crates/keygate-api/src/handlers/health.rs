//! Health check handler.

use axum::Json;
use axum::extract::State;

use keygate_core::traits::store::TtlStore;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let store = state.store.health_check().await.unwrap_or(false);

    Json(HealthResponse {
        status: if store { "ok" } else { "degraded" }.to_string(),
        store,
    })
}
